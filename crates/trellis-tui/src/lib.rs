pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod handlers;
pub mod keybindings;
pub mod state;
pub mod theme;
pub mod ui;
pub mod view_model;

pub use app::{App, AppMode};
pub use state::{ExecuteOutcome, StateManager};
