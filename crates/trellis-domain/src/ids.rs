//! Unique id minting for cards and lists.

use crate::board::Board;
use crate::card::CardId;
use crate::list::ListId;
use trellis_core::IdStrategy;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Card,
    List,
}

impl EntityKind {
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Card => "card-",
            EntityKind::List => "list-",
        }
    }
}

/// Mints ids that are never handed out twice in a session.
///
/// Lives outside board snapshots so restoring an older snapshot (undo) never
/// rewinds the counters.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next_card: u64,
    next_list: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next_card: 1,
            next_list: 1,
        }
    }

    /// Generator whose sequential counters start above every numeric id on `board`.
    pub fn seeded_from(strategy: IdStrategy, board: &Board) -> Self {
        let mut ids = Self::new(strategy);
        for list in &board.lists {
            ids.observe(EntityKind::List, list.id.as_str());
            for card in &list.cards {
                ids.observe(EntityKind::Card, card.id.as_str());
            }
        }
        ids
    }

    /// Record an id minted elsewhere so sequential ids never collide with it.
    pub fn observe(&mut self, kind: EntityKind, id: &str) {
        let Some(n) = id
            .strip_prefix(kind.prefix())
            .and_then(|suffix| suffix.parse::<u64>().ok())
        else {
            return;
        };
        let counter = self.counter_mut(kind);
        *counter = (*counter).max(n.saturating_add(1));
    }

    pub fn next_card_id(&mut self) -> CardId {
        CardId::new(self.next_raw(EntityKind::Card))
    }

    pub fn next_list_id(&mut self) -> ListId {
        ListId::new(self.next_raw(EntityKind::List))
    }

    fn next_raw(&mut self, kind: EntityKind) -> String {
        match self.strategy {
            IdStrategy::Sequential => {
                let counter = self.counter_mut(kind);
                match counter.checked_add(1) {
                    Some(next) => {
                        let n = *counter;
                        *counter = next;
                        format!("{}{}", kind.prefix(), n)
                    }
                    // Counter exhausted; fall back to random ids.
                    None => format!("{}{}", kind.prefix(), Uuid::new_v4().simple()),
                }
            }
            IdStrategy::Uuid => format!("{}{}", kind.prefix(), Uuid::new_v4().simple()),
        }
    }

    fn counter_mut(&mut self, kind: EntityKind) -> &mut u64 {
        match kind {
            EntityKind::Card => &mut self.next_card,
            EntityKind::List => &mut self.next_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, List};
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_per_kind() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        assert_eq!(ids.next_card_id().as_str(), "card-1");
        assert_eq!(ids.next_card_id().as_str(), "card-2");
        assert_eq!(ids.next_list_id().as_str(), "list-1");
    }

    #[test]
    fn test_seeded_generator_skips_existing_ids() {
        let board = Board::new("b").with_lists(vec![List::new("list-3".into(), "x")
            .with_cards(vec![
                Card::new("card-7".into(), "a"),
                Card::new("card-custom".into(), "b"),
            ])]);
        let mut ids = IdGenerator::seeded_from(IdStrategy::Sequential, &board);
        assert_eq!(ids.next_card_id().as_str(), "card-8");
        assert_eq!(ids.next_list_id().as_str(), "list-4");
    }

    #[test]
    fn test_observe_ignores_other_kind_prefix() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        ids.observe(EntityKind::Card, "list-50");
        assert_eq!(ids.next_card_id().as_str(), "card-1");
    }

    #[test]
    fn test_exhausted_counter_falls_back_to_random_ids() {
        let board = Board::new("b").with_lists(vec![List::new("list-1".into(), "x")
            .with_cards(vec![Card::new("card-18446744073709551615".into(), "a")])]);
        let mut ids = IdGenerator::seeded_from(IdStrategy::Sequential, &board);

        let first = ids.next_card_id();
        let second = ids.next_card_id();
        assert!(first.as_str().starts_with("card-"));
        assert_ne!(first.as_str(), "card-18446744073709551615");
        assert_ne!(first, second);
        assert_eq!(ids.next_list_id().as_str(), "list-2");
    }

    #[test]
    fn test_uuid_ids_are_prefixed_and_distinct() {
        let mut ids = IdGenerator::new(IdStrategy::Uuid);
        let minted: HashSet<String> = (0..50)
            .map(|_| ids.next_card_id().as_str().to_string())
            .collect();
        assert_eq!(minted.len(), 50);
        assert!(minted.iter().all(|id| id.starts_with("card-")));
    }
}
