use super::{Command, CommandContext};
use crate::drag::{DragKind, DropResult};
use crate::state::BoardState;

/// Finish a drag gesture by applying its reorder
pub struct ApplyDrop {
    pub drop: DropResult,
}

impl Command for ApplyDrop {
    fn execute(&self, state: &BoardState, _context: &mut CommandContext) -> BoardState {
        state.apply_drop(&self.drop)
    }

    fn description(&self) -> String {
        let what = match self.drop.kind {
            DragKind::List => "list",
            DragKind::Card => "card",
        };
        match &self.drop.destination {
            Some(to) => format!(
                "Move {} {} to {}[{}]",
                what, self.drop.draggable_id, to.droppable_id, to.index
            ),
            None => format!("Cancel drag of {} {}", what, self.drop.draggable_id),
        }
    }
}
