use crate::theme::{drag_border, focused_border, unfocused_border};
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

/// Border and title settings for one board column.
pub struct ColumnPanel<'a> {
    pub title: &'a str,
    pub is_focused: bool,
    pub is_dragging: bool,
    pub card_count: usize,
}

impl<'a> ColumnPanel<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            is_focused: false,
            is_dragging: false,
            card_count: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.is_dragging = dragging;
        self
    }

    pub fn card_count(mut self, count: usize) -> Self {
        self.card_count = count;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_dragging {
            drag_border()
        } else if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn title_text(&self) -> String {
        let marker = if self.is_dragging { "≡ " } else { "" };
        format!(" {}{} ({}) ", marker, self.title, self.card_count)
    }

    pub fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title_text())
    }
}
