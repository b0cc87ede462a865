pub mod panel;
pub mod popup;

pub use panel::ColumnPanel;
pub use popup::{centered_rect, render_input_popup, render_popup_with_block};
