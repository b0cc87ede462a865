//! Drag-and-drop gestures and the reorder they produce.
//!
//! A gesture is described the way drag-and-drop libraries report it: the id
//! of the dragged item, where it started (droppable id + index) and where it
//! was released. Lists live in the board-level droppable [`BOARD_DROPPABLE_ID`];
//! cards live in droppables named after their list id.

use crate::card::CardId;
use crate::list::ListId;
use crate::state::BoardState;
use serde::{Deserialize, Serialize};

/// Droppable id of the horizontal strip holding all lists.
pub const BOARD_DROPPABLE_ID: &str = "all-lists";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    List,
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraggableLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }

    pub fn board(index: usize) -> Self {
        Self::new(BOARD_DROPPABLE_ID, index)
    }

    pub fn list(list_id: &ListId, index: usize) -> Self {
        Self::new(list_id.as_str(), index)
    }
}

/// A completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    pub kind: DragKind,
    pub draggable_id: String,
    pub source: DraggableLocation,
    /// `None` when the item was released outside any droppable.
    pub destination: Option<DraggableLocation>,
}

impl DropResult {
    pub fn list(list_id: &ListId, from: usize, to: Option<usize>) -> Self {
        Self {
            kind: DragKind::List,
            draggable_id: list_id.as_str().to_string(),
            source: DraggableLocation::board(from),
            destination: to.map(DraggableLocation::board),
        }
    }

    pub fn card(
        card_id: &CardId,
        source: DraggableLocation,
        destination: Option<DraggableLocation>,
    ) -> Self {
        Self {
            kind: DragKind::Card,
            draggable_id: card_id.as_str().to_string(),
            source,
            destination,
        }
    }

    /// Released exactly where it started.
    pub fn is_in_place(&self) -> bool {
        self.destination.as_ref() == Some(&self.source)
    }
}

impl BoardState {
    /// Apply a finished drag. Gestures that were cancelled, dropped in place,
    /// or no longer match the board leave the snapshot unchanged.
    pub fn apply_drop(&self, drop: &DropResult) -> Self {
        let Some(destination) = drop.destination.as_ref() else {
            return self.clone();
        };
        if drop.is_in_place() {
            return self.clone();
        }

        let moved = match drop.kind {
            DragKind::List => self.move_list(drop, destination),
            DragKind::Card => self.move_card(drop, destination),
        };
        match moved {
            Some(next) => next,
            None => {
                tracing::debug!(
                    draggable = %drop.draggable_id,
                    "stale drop ignored"
                );
                self.clone()
            }
        }
    }

    fn move_list(&self, drop: &DropResult, destination: &DraggableLocation) -> Option<Self> {
        if drop.source.droppable_id != BOARD_DROPPABLE_ID
            || destination.droppable_id != BOARD_DROPPABLE_ID
        {
            return None;
        }
        let dragged = self.board.lists.get(drop.source.index)?;
        if dragged.id.as_str() != drop.draggable_id {
            return None;
        }

        let mut next = self.clone();
        let list = next.board.lists.remove(drop.source.index);
        let to = destination.index.min(next.board.lists.len());
        next.board.lists.insert(to, list);
        Some(next)
    }

    fn move_card(&self, drop: &DropResult, destination: &DraggableLocation) -> Option<Self> {
        let source_list_id = ListId::new(drop.source.droppable_id.as_str());
        let destination_list_id = ListId::new(destination.droppable_id.as_str());

        let source_list = self.board.list(&source_list_id)?;
        let dragged = source_list.cards.get(drop.source.index)?;
        if dragged.id.as_str() != drop.draggable_id {
            return None;
        }
        if !self.board.contains_list(&destination_list_id) {
            return None;
        }

        let mut next = self.clone();
        let card = next
            .board
            .list_mut(&source_list_id)?
            .cards
            .remove(drop.source.index);
        let target = next.board.list_mut(&destination_list_id)?;
        let to = destination.index.min(target.cards.len());
        let card_id = card.id.clone();
        target.cards.insert(to, card);

        if let Some(ptr) = next.editing.as_mut() {
            if ptr.points_at(&source_list_id, &card_id) {
                ptr.list_id = destination_list_id;
            }
        }
        Some(next)
    }
}
