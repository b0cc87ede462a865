use crate::card::CardId;
use crate::list::ListId;
use serde::{Deserialize, Serialize};

/// Identifies the single card in inline edit mode. A lookup key, not an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditingPointer {
    pub list_id: ListId,
    pub card_id: CardId,
}

impl EditingPointer {
    pub fn new(list_id: ListId, card_id: CardId) -> Self {
        Self { list_id, card_id }
    }

    pub fn points_at(&self, list_id: &ListId, card_id: &CardId) -> bool {
        &self.list_id == list_id && &self.card_id == card_id
    }
}
