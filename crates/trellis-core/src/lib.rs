pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod result;
pub mod selection;
pub mod viewport;

pub use config::{AppConfig, IdStrategy, ListSeed};
pub use error::TrellisError;
pub use input::InputState;
pub use logging::{LogEntry, Loggable};
pub use result::TrellisResult;
pub use selection::SelectionState;
pub use viewport::{Viewport, ViewportWindow};
