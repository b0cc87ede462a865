use crate::card::{Card, CardId};
use crate::list::{List, ListId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use trellis_core::{TrellisError, TrellisResult};

/// The full ordered collection of lists. List order is horizontal display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lists: Vec::new(),
        }
    }

    pub fn with_lists(mut self, lists: Vec<List>) -> Self {
        self.lists = lists;
        self
    }

    pub fn list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == list_id)
    }

    pub fn list_mut(&mut self, list_id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == list_id)
    }

    pub fn list_index(&self, list_id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == list_id)
    }

    pub fn contains_list(&self, list_id: &ListId) -> bool {
        self.list(list_id).is_some()
    }

    pub fn card(&self, list_id: &ListId, card_id: &CardId) -> Option<&Card> {
        self.list(list_id).and_then(|l| l.card(card_id))
    }

    pub fn card_mut(&mut self, list_id: &ListId, card_id: &CardId) -> Option<&mut Card> {
        self.list_mut(list_id).and_then(|l| l.card_mut(card_id))
    }

    pub fn total_cards(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.lists.iter().flat_map(|l| l.cards.iter().map(|c| &c.id))
    }

    /// List ids and card ids must each be unique across the board.
    pub fn check_invariants(&self) -> TrellisResult<()> {
        let mut list_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                return Err(TrellisError::Validation(format!(
                    "duplicate list id {}",
                    list.id
                )));
            }
        }

        let mut card_ids = HashSet::new();
        for card_id in self.card_ids() {
            if !card_ids.insert(card_id) {
                return Err(TrellisError::Validation(format!(
                    "duplicate card id {card_id}"
                )));
            }
        }
        Ok(())
    }
}
