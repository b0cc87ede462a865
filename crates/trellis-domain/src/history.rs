//! Undo/redo history over board snapshots.
//!
//! Snapshots are shared behind `Arc`, so capturing the state before a command
//! costs a pointer copy rather than a deep clone.

use crate::state::BoardState;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug)]
pub struct HistoryManager {
    /// Most recent snapshot at the back.
    undo_stack: VecDeque<Arc<BoardState>>,
    redo_stack: VecDeque<Arc<BoardState>>,
    limit: usize,
}

impl HistoryManager {
    /// History keeping at most `limit` undo steps. A limit of zero disables undo.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit,
        }
    }

    /// Record the snapshot a command is about to replace.
    ///
    /// Any new action invalidates the redo history.
    pub fn capture_before_command(&mut self, snapshot: Arc<BoardState>) {
        self.redo_stack.clear();
        if self.limit == 0 {
            return;
        }
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    /// Step back: returns the snapshot to restore and remembers `current` for redo.
    pub fn undo(&mut self, current: Arc<BoardState>) -> Option<Arc<BoardState>> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(current);
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Arc<BoardState>) -> Option<Arc<BoardState>> {
        let next = self.redo_stack.pop_back()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn snapshot(title: &str) -> Arc<BoardState> {
        Arc::new(BoardState::new(Board::new(title)))
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = HistoryManager::new(10);
        history.capture_before_command(snapshot("v1"));

        let restored = history.undo(snapshot("v2")).unwrap();
        assert_eq!(restored.board.title, "v1");
        assert!(history.can_redo());

        let replayed = history.redo(restored).unwrap();
        assert_eq!(replayed.board.title, "v2");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_command_clears_redo() {
        let mut history = HistoryManager::new(10);
        history.capture_before_command(snapshot("v1"));
        let _ = history.undo(snapshot("v2"));
        assert!(history.can_redo());

        history.capture_before_command(snapshot("v1"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = HistoryManager::new(2);
        for title in ["a", "b", "c"] {
            history.capture_before_command(snapshot(title));
        }
        assert_eq!(history.undo_depth(), 2);
        let restored = history.undo(snapshot("d")).unwrap();
        assert_eq!(restored.board.title, "c");
        let restored = history.undo(restored).unwrap();
        assert_eq!(restored.board.title, "b");
        assert!(history.undo(restored).is_none());
    }

    #[test]
    fn test_empty_history() {
        let mut history = HistoryManager::default();
        assert!(!history.can_undo());
        assert!(history.undo(snapshot("x")).is_none());
        assert!(history.redo(snapshot("x")).is_none());
    }
}
