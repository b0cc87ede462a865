use crate::ids::IdGenerator;
use crate::state::BoardState;
use trellis_core::TrellisResult;

pub mod card_commands;
pub mod drag_commands;
pub mod list_commands;

pub use card_commands::*;
pub use drag_commands::*;
pub use list_commands::*;

/// Trait for board commands.
/// A command derives the next snapshot from the current one; it never mutates
/// the snapshot it is given.
pub trait Command: Send + Sync {
    fn execute(&self, state: &BoardState, context: &mut CommandContext) -> BoardState;

    /// Human-readable description of what this command does
    fn description(&self) -> String;

    /// Report ids that do not resolve. Executing an invalid command is still
    /// a no-op rather than a failure; callers use this for diagnostics.
    fn validate(&self, _state: &BoardState) -> TrellisResult<()> {
        Ok(())
    }

    /// Whether the snapshot this command replaces belongs in undo history.
    fn records_history(&self) -> bool {
        true
    }
}

/// Services a command may draw on besides the snapshot.
pub struct CommandContext<'a> {
    pub ids: &'a mut IdGenerator,
    pub card_placeholder: &'a str,
    pub list_placeholder: &'a str,
}
