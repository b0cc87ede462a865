use super::{Command, CommandContext};
use crate::state::BoardState;
use crate::ListId;
use trellis_core::{TrellisError, TrellisResult};

/// Append an empty placeholder list to the board
pub struct AddList;

impl Command for AddList {
    fn execute(&self, state: &BoardState, context: &mut CommandContext) -> BoardState {
        state.add_list(context.ids, context.list_placeholder)
    }

    fn description(&self) -> String {
        "Add list".to_string()
    }
}

/// Delete a list and every card in it
pub struct DeleteList {
    pub list_id: ListId,
}

impl Command for DeleteList {
    fn execute(&self, state: &BoardState, _context: &mut CommandContext) -> BoardState {
        state.delete_list(&self.list_id)
    }

    fn description(&self) -> String {
        format!("Delete list {}", self.list_id)
    }

    fn validate(&self, state: &BoardState) -> TrellisResult<()> {
        if state.board.contains_list(&self.list_id) {
            Ok(())
        } else {
            Err(TrellisError::NotFound(format!("list {}", self.list_id)))
        }
    }
}

pub struct RenameList {
    pub list_id: ListId,
    pub title: String,
}

impl Command for RenameList {
    fn execute(&self, state: &BoardState, _context: &mut CommandContext) -> BoardState {
        state.rename_list(&self.list_id, &self.title)
    }

    fn description(&self) -> String {
        format!("Rename list {} to '{}'", self.list_id, self.title)
    }

    fn validate(&self, state: &BoardState) -> TrellisResult<()> {
        if state.board.contains_list(&self.list_id) {
            Ok(())
        } else {
            Err(TrellisError::NotFound(format!("list {}", self.list_id)))
        }
    }
}
