use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const DRAG_BORDER: Color = Color::Yellow;
pub const SELECTED_BG: Color = Color::Blue;
pub const EDITING_BG: Color = Color::DarkGray;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const TITLE_TEXT: Color = Color::Cyan;

pub const POPUP_BG: Color = Color::Black;
