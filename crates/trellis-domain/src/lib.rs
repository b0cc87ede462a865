pub mod board;
pub mod card;
pub mod commands;
pub mod drag;
pub mod editing;
pub mod history;
pub mod ids;
pub mod list;
pub mod seed;
pub mod state;

pub use board::Board;
pub use card::{Card, CardId};
pub use drag::{DragKind, DraggableLocation, DropResult, BOARD_DROPPABLE_ID};
pub use editing::EditingPointer;
pub use history::HistoryManager;
pub use ids::{EntityKind, IdGenerator};
pub use list::{List, ListId};
pub use state::BoardState;
