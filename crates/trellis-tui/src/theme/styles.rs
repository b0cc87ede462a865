use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn drag_border() -> Style {
    Style::default()
        .fg(DRAG_BORDER)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

/// A card lifted by a keyboard drag.
pub fn dragged_item() -> Style {
    Style::default()
        .fg(DRAG_BORDER)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn editing_item() -> Style {
    Style::default().fg(NORMAL_TEXT).bg(EDITING_BG)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn board_title() -> Style {
    Style::default()
        .fg(TITLE_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
