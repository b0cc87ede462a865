use crossterm::event::KeyCode;
use trellis_core::InputState;

pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

pub fn handle_dialog_input(
    input: &mut InputState,
    key_code: KeyCode,
    allow_empty: bool,
) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => {
            if allow_empty || !input.as_str().trim().is_empty() {
                DialogAction::Confirm
            } else {
                DialogAction::None
            }
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_on_blank_requires_allow_empty() {
        let mut input = InputState::with_text("  ");
        assert!(matches!(
            handle_dialog_input(&mut input, KeyCode::Enter, false),
            DialogAction::None
        ));
        assert!(matches!(
            handle_dialog_input(&mut input, KeyCode::Enter, true),
            DialogAction::Confirm
        ));
    }

    #[test]
    fn test_typing_edits_buffer() {
        let mut input = InputState::new();
        for c in "todo".chars() {
            handle_dialog_input(&mut input, KeyCode::Char(c), false);
        }
        handle_dialog_input(&mut input, KeyCode::Backspace, false);
        assert_eq!(input.as_str(), "tod");
        assert!(matches!(
            handle_dialog_input(&mut input, KeyCode::Esc, false),
            DialogAction::Cancel
        ));
    }
}
