use crate::app::{App, AppMode};
use crate::components::*;
use crate::keybindings::KeybindingRegistry;
use crate::theme::*;
use crate::view_model::{BoardView, CardMode, CardView, ListView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use trellis_core::{InputState, Loggable, Viewport, ViewportWindow};

pub const LIST_WIDTH: u16 = 30;
const LIST_GAP: u16 = 1;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let view = app.view();
    let window = render_board(app, &view, frame, chunks[1]);
    render_header(&view, &window, frame, chunks[0]);
    render_footer(app, frame, chunks[2]);

    match app.mode {
        AppMode::RenameList => render_input_popup(frame, "Rename List", "Title:", &app.input),
        AppMode::Help => render_help_popup(app, frame),
        _ => {}
    }
}

fn render_header(view: &BoardView, window: &ViewportWindow, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(format!(" {} ", view.title), board_title()),
        Span::styled(
            format!(" {} lists · {} cards", view.lists.len(), view.total_cards()),
            label_text(),
        ),
    ];
    if window.hidden_before > 0 {
        spans.push(Span::styled(
            format!("  ◀ {} more", window.hidden_before),
            highlight_text(),
        ));
    }
    if window.hidden_after > 0 {
        spans.push(Span::styled(
            format!("  {} more ▶", window.hidden_after),
            highlight_text(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the visible columns and return which slice of them fit.
fn render_board(app: &mut App, view: &BoardView, frame: &mut Frame, area: Rect) -> ViewportWindow {
    let capacity = ((area.width + LIST_GAP) / (LIST_WIDTH + LIST_GAP)).max(1) as usize;
    // One extra column for the add-list placeholder.
    let columns = view.lists.len() + 1;
    let focused = view.lists.iter().position(|l| l.focused).unwrap_or(0);

    app.list_viewport.set_total_items(columns);
    app.list_viewport.scroll_to_visible(focused, capacity);
    let window = app.list_viewport.window(capacity);

    let mut x = area.x;
    for idx in window.visible.clone() {
        let width = LIST_WIDTH.min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let column = Rect::new(x, area.y, width, area.height);
        match view.lists.get(idx) {
            Some(list) => render_list(app, list, frame, column),
            None => render_add_list_column(frame, column),
        }
        x = x.saturating_add(LIST_WIDTH + LIST_GAP);
    }
    window
}

fn render_list(app: &App, list: &ListView, frame: &mut Frame, area: Rect) {
    let panel = ColumnPanel::new(&list.title)
        .focused(list.focused)
        .dragging(list.dragging)
        .card_count(list.cards.len());
    let block = panel.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Last row is the add-card affordance.
    let card_rows = inner.height.saturating_sub(1) as usize;
    let mut viewport = Viewport::new(list.cards.len());
    if let Some(anchor) = list
        .cards
        .iter()
        .position(|c| c.selected || c.mode == CardMode::Editing)
    {
        viewport.scroll_to_visible(anchor, card_rows);
    }
    let window = viewport.window(card_rows);
    let visible = &list.cards[window.visible.clone()];
    let width = inner.width as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(visible.len() + 1);
    let mut cursor = None;
    for (row, card) in visible.iter().enumerate() {
        if card.mode == CardMode::Editing && app.mode == AppMode::EditingCard {
            let (text, col) = edit_window(&app.input, width);
            lines.push(Line::from(Span::styled(
                fit(&format!("›{}", text), width),
                editing_item(),
            )));
            cursor = Some((inner.x + 1 + col as u16, inner.y + row as u16));
        } else {
            lines.push(card_line(card, width));
        }
    }
    lines.push(add_card_line(&window, list.focused));

    frame.render_widget(Paragraph::new(lines), inner);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn card_line(card: &CardView, width: usize) -> Line<'static> {
    let style = if card.dragging {
        dragged_item()
    } else if card.mode == CardMode::Editing {
        editing_item()
    } else {
        selected_item(card.selected)
    };
    if card.content.is_empty() {
        return Line::from(Span::styled(fit(" (empty)", width), style.patch(label_text())));
    }
    let text = format!(" {}", card.content.replace('\n', " "));
    Line::from(Span::styled(fit(&text, width), style))
}

fn add_card_line(window: &ViewportWindow, focused: bool) -> Line<'static> {
    let style = if focused { highlight_text() } else { label_text() };
    let mut spans = vec![Span::styled("+ Add a card", style)];
    if window.hidden_before > 0 || window.hidden_after > 0 {
        spans.push(Span::styled(
            format!("  ↑{} ↓{}", window.hidden_before, window.hidden_after),
            label_text(),
        ));
    }
    Line::from(spans)
}

fn render_add_list_column(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(label_text());
    let content = Paragraph::new(vec![
        Line::from(Span::styled("+ Add another list", label_text())),
        Line::from(Span::styled("  press N", label_text())),
    ])
    .block(block);
    frame.render_widget(content, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let context = KeybindingRegistry::get_provider(app).get_context();
    let activity = app
        .latest_log()
        .map(|entry| entry.display_line())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(context.hint_line(), label_text())),
        Line::from(Span::styled(activity, normal_text())),
    ];
    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(unfocused_border())
            .title(format!(" {} ", context.name)),
    );
    frame.render_widget(footer, area);
}

fn render_help_popup(app: &App, frame: &mut Frame) {
    let inner = render_popup_with_block(frame, "Help - Keybindings", 70, 80);
    let context = KeybindingRegistry::get_provider(app).get_context();

    let mut lines = vec![
        Line::from(Span::styled(
            context.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for binding in &context.bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", binding.key), highlight_text()),
            Span::styled(binding.description.clone(), normal_text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ESC or ? to close help",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Slice of the input that keeps the cursor on screen, and the cursor's
/// column inside that slice.
fn edit_window(input: &InputState, width: usize) -> (String, usize) {
    let room = width.saturating_sub(2).max(1);
    let cursor = input.cursor_char_index();
    let start = cursor.saturating_sub(room);
    let text = input.as_str().chars().skip(start).take(room + 1).collect();
    (text, cursor - start)
}

/// Truncate with an ellipsis, or pad so row highlights span the column.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    } else {
        format!("{:<width$}", text)
    }
}
