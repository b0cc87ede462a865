use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use trellis_core::AppConfig;
use trellis_tui::{ui, App};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_renders_starter_board() {
    let mut app = App::new(&AppConfig::default());
    let screen = draw(&mut app, 130, 20);

    assert!(screen.contains("My Board"));
    assert!(screen.contains("3 lists · 2 cards"));
    assert!(screen.contains("To Do (2)"));
    assert!(screen.contains("In Progress (0)"));
    assert!(screen.contains("Done (0)"));
    assert!(screen.contains("Project plan"));
    assert!(screen.contains("Kickoff meeting"));
    assert!(screen.contains("+ Add a card"));
    assert!(screen.contains("+ Add another list"));
    assert!(screen.contains("n: add card"));
}

#[test]
fn test_editing_card_shows_input_buffer() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, KeyCode::Char('e'));
    for c in " v2".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = draw(&mut app, 120, 20);

    assert!(screen.contains("›Project plan v2"));
    assert!(screen.contains("Edit Card - Input"));
}

#[test]
fn test_narrow_terminal_scrolls_to_focused_list() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    let screen = draw(&mut app, 40, 12);

    assert!(screen.contains("Done (0)"));
    assert!(!screen.contains("To Do (2)"));
    assert!(screen.contains("◀ 2 more"));
}

#[test]
fn test_activity_shows_in_footer() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, KeyCode::Char('N'));
    let screen = draw(&mut app, 140, 20);
    assert!(screen.contains("Add list"));
    assert!(screen.contains("New list (0)"));
}

#[test]
fn test_help_popup_lists_bindings() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, KeyCode::Char('?'));
    let screen = draw(&mut app, 120, 40);
    assert!(screen.contains("Help - Keybindings"));
    assert!(screen.contains("Redo the last undone change"));
}

#[test]
fn test_moving_card_renders_preview() {
    let mut app = App::new(&AppConfig::default());
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('l'));
    let screen = draw(&mut app, 120, 20);

    assert!(screen.contains("To Do (1)"));
    assert!(screen.contains("In Progress (1)"));
    assert!(screen.contains("Moving Card"));
}
