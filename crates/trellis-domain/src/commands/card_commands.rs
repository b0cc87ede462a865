use super::{Command, CommandContext};
use crate::state::BoardState;
use crate::{CardId, ListId};
use trellis_core::{TrellisError, TrellisResult};

fn require_list(state: &BoardState, list_id: &ListId) -> TrellisResult<()> {
    if state.board.contains_list(list_id) {
        Ok(())
    } else {
        Err(TrellisError::NotFound(format!("list {list_id}")))
    }
}

fn require_card(state: &BoardState, list_id: &ListId, card_id: &CardId) -> TrellisResult<()> {
    require_list(state, list_id)?;
    if state.board.card(list_id, card_id).is_some() {
        Ok(())
    } else {
        Err(TrellisError::NotFound(format!(
            "card {card_id} in list {list_id}"
        )))
    }
}

/// Append a placeholder card to a list
pub struct AddCard {
    pub list_id: ListId,
}

impl Command for AddCard {
    fn execute(&self, state: &BoardState, context: &mut CommandContext) -> BoardState {
        state.add_card(&self.list_id, context.ids, context.card_placeholder)
    }

    fn description(&self) -> String {
        format!("Add card to {}", self.list_id)
    }

    fn validate(&self, state: &BoardState) -> TrellisResult<()> {
        require_list(state, &self.list_id)
    }
}

/// Commit new content for a card and leave edit mode
pub struct EditCard {
    pub list_id: ListId,
    pub card_id: CardId,
    pub content: String,
}

impl Command for EditCard {
    fn execute(&self, state: &BoardState, _context: &mut CommandContext) -> BoardState {
        state.edit_card(&self.list_id, &self.card_id, &self.content)
    }

    fn description(&self) -> String {
        format!("Edit card {}", self.card_id)
    }

    fn validate(&self, state: &BoardState) -> TrellisResult<()> {
        require_card(state, &self.list_id, &self.card_id)
    }
}

pub struct DeleteCard {
    pub list_id: ListId,
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, state: &BoardState, _context: &mut CommandContext) -> BoardState {
        state.delete_card(&self.list_id, &self.card_id)
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }

    fn validate(&self, state: &BoardState) -> TrellisResult<()> {
        require_card(state, &self.list_id, &self.card_id)
    }
}

/// Put a card into inline edit mode
pub struct BeginEditing {
    pub list_id: ListId,
    pub card_id: CardId,
}

impl Command for BeginEditing {
    fn execute(&self, state: &BoardState, _context: &mut CommandContext) -> BoardState {
        state.begin_editing(&self.list_id, &self.card_id)
    }

    fn description(&self) -> String {
        format!("Edit card {} inline", self.card_id)
    }

    fn records_history(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed::starter_board, IdGenerator};
    use trellis_core::IdStrategy;

    fn run(command: &dyn Command, state: &BoardState, ids: &mut IdGenerator) -> BoardState {
        let mut context = CommandContext {
            ids,
            card_placeholder: "New card",
            list_placeholder: "New list",
        };
        command.execute(state, &mut context)
    }

    #[test]
    fn test_add_card_uses_placeholder() {
        let state = BoardState::new(starter_board("test"));
        let mut ids = IdGenerator::seeded_from(IdStrategy::Sequential, &state.board);
        let cmd = AddCard {
            list_id: "list-1".into(),
        };
        let next = run(&cmd, &state, &mut ids);
        let last = next.board.lists[0].cards.last().unwrap();
        assert_eq!(last.content, "New card");
        assert_eq!(last.id.as_str(), "card-3");
    }

    #[test]
    fn test_validate_reports_missing_ids() {
        let state = BoardState::new(starter_board("test"));
        let missing_list = AddCard {
            list_id: "list-9".into(),
        };
        assert!(matches!(
            missing_list.validate(&state),
            Err(TrellisError::NotFound(_))
        ));

        let missing_card = DeleteCard {
            list_id: "list-2".into(),
            card_id: "card-1".into(),
        };
        let err = missing_card.validate(&state).unwrap_err();
        assert!(err.to_string().contains("card card-1 in list list-2"));

        let present = EditCard {
            list_id: "list-1".into(),
            card_id: "card-1".into(),
            content: String::new(),
        };
        assert!(present.validate(&state).is_ok());
    }

    #[test]
    fn test_begin_editing_skips_history() {
        let cmd = BeginEditing {
            list_id: "list-1".into(),
            card_id: "card-1".into(),
        };
        assert!(!cmd.records_history());
        assert!(AddCard {
            list_id: "list-1".into()
        }
        .records_history());
    }
}
