//! Board snapshots and the operations that derive new ones.
//!
//! Every operation borrows the current snapshot and returns a fresh
//! [`BoardState`]; the receiver is never modified. Unknown list or card ids
//! make an operation a silent no-op, returning a snapshot equal to the input.

use crate::board::Board;
use crate::card::{Card, CardId};
use crate::editing::EditingPointer;
use crate::ids::IdGenerator;
use crate::list::{List, ListId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub board: Board,
    #[serde(default)]
    pub editing: Option<EditingPointer>,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            editing: None,
        }
    }

    pub fn is_editing(&self, list_id: &ListId, card_id: &CardId) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|ptr| ptr.points_at(list_id, card_id))
    }

    /// The card the editing pointer resolves to, if any.
    pub fn editing_card(&self) -> Option<&Card> {
        let ptr = self.editing.as_ref()?;
        self.board.card(&ptr.list_id, &ptr.card_id)
    }

    /// Append a card with a fresh id and `content` to the end of the list.
    /// No id is consumed when the list does not exist.
    pub fn add_card(&self, list_id: &ListId, ids: &mut IdGenerator, content: &str) -> Self {
        let mut next = self.clone();
        if let Some(list) = next.board.list_mut(list_id) {
            list.cards.push(Card::new(ids.next_card_id(), content));
        }
        next
    }

    /// Append an empty list with a fresh id to the end of the board.
    pub fn add_list(&self, ids: &mut IdGenerator, title: &str) -> Self {
        let mut next = self.clone();
        next.board.lists.push(List::new(ids.next_list_id(), title));
        next
    }

    /// Replace the card's content and leave edit mode. The editing pointer is
    /// cleared even when the card cannot be found.
    pub fn edit_card(&self, list_id: &ListId, card_id: &CardId, new_content: &str) -> Self {
        let mut next = self.clone();
        if let Some(card) = next.board.card_mut(list_id, card_id) {
            card.content = new_content.to_string();
        }
        next.editing = None;
        next
    }

    pub fn delete_card(&self, list_id: &ListId, card_id: &CardId) -> Self {
        let mut next = self.clone();
        if let Some(list) = next.board.list_mut(list_id) {
            list.cards.retain(|c| &c.id != card_id);
        }
        if next.is_editing(list_id, card_id) {
            next.editing = None;
        }
        next
    }

    /// Remove the list together with all of its cards.
    pub fn delete_list(&self, list_id: &ListId) -> Self {
        let mut next = self.clone();
        next.board.lists.retain(|l| &l.id != list_id);
        if next
            .editing
            .as_ref()
            .is_some_and(|ptr| &ptr.list_id == list_id)
        {
            next.editing = None;
        }
        next
    }

    pub fn rename_list(&self, list_id: &ListId, title: &str) -> Self {
        let mut next = self.clone();
        if let Some(list) = next.board.list_mut(list_id) {
            list.title = title.to_string();
        }
        next
    }

    /// Point the editing pointer at a card. No existence check is made.
    pub fn begin_editing(&self, list_id: &ListId, card_id: &CardId) -> Self {
        let mut next = self.clone();
        next.editing = Some(EditingPointer::new(list_id.clone(), card_id.clone()));
        next
    }

    pub fn without_editing(&self) -> Self {
        let mut next = self.clone();
        next.editing = None;
        next
    }
}
