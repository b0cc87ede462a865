use std::sync::Arc;
use tokio::sync::watch;
use trellis_core::AppConfig;
use trellis_domain::commands::{Command, CommandContext};
use trellis_domain::seed::{board_from_seeds, starter_board};
use trellis_domain::{BoardState, HistoryManager, IdGenerator};

/// What a command did to the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Nothing changed; no snapshot was published.
    Unchanged,
    /// Only the editing pointer moved. Published, but not recorded for undo.
    EditingChanged,
    BoardChanged,
}

/// Owns the current board snapshot and replaces it wholesale on every change.
///
/// Each accepted command produces a new `Arc<BoardState>` that is published on
/// a watch channel; the render loop subscribes and redraws when it changes.
/// The id generator lives here rather than in the snapshots so undo never
/// hands out an id twice.
pub struct StateManager {
    current: Arc<BoardState>,
    ids: IdGenerator,
    history: HistoryManager,
    card_placeholder: String,
    list_placeholder: String,
    snapshot_tx: watch::Sender<Arc<BoardState>>,
}

impl StateManager {
    pub fn new(initial: BoardState, config: &AppConfig) -> Self {
        let ids = IdGenerator::seeded_from(config.id_strategy, &initial.board);
        let current = Arc::new(initial);
        let (snapshot_tx, _) = watch::channel(current.clone());
        Self {
            current,
            ids,
            history: HistoryManager::new(config.effective_history_limit()),
            card_placeholder: config.effective_card_placeholder().to_string(),
            list_placeholder: config.effective_list_placeholder().to_string(),
            snapshot_tx,
        }
    }

    /// Start from the configured lists, or the starter board when none are configured.
    pub fn from_config(config: &AppConfig) -> Self {
        let title = config.effective_board_title();
        let board = match &config.lists {
            Some(seeds) => {
                let mut ids = IdGenerator::new(config.id_strategy);
                board_from_seeds(title, seeds, &mut ids)
            }
            None => starter_board(title),
        };
        tracing::info!(
            lists = board.lists.len(),
            cards = board.total_cards(),
            "Initial board ready"
        );
        Self::new(BoardState::new(board), config)
    }

    pub fn state(&self) -> &BoardState {
        &self.current
    }

    pub fn snapshot(&self) -> Arc<BoardState> {
        self.current.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardState>> {
        self.snapshot_tx.subscribe()
    }

    /// Run a command against the current snapshot.
    ///
    /// Commands whose ids do not resolve are logged and otherwise have no effect.
    pub fn execute(&mut self, command: &dyn Command) -> ExecuteOutcome {
        let description = command.description();
        if let Err(e) = command.validate(&self.current) {
            tracing::debug!("{}: {}", description, e);
        }

        let mut context = CommandContext {
            ids: &mut self.ids,
            card_placeholder: &self.card_placeholder,
            list_placeholder: &self.list_placeholder,
        };
        let next = command.execute(&self.current, &mut context);

        if next == *self.current {
            tracing::debug!("No change: {}", description);
            return ExecuteOutcome::Unchanged;
        }
        if next.board == self.current.board {
            self.publish(Arc::new(next));
            return ExecuteOutcome::EditingChanged;
        }
        if cfg!(debug_assertions) {
            if let Err(e) = next.board.check_invariants() {
                tracing::error!("{} broke board invariants: {}", description, e);
            }
        }

        tracing::debug!("Executed: {}", description);
        if command.records_history() {
            self.history.capture_before_command(self.current.clone());
        }
        self.publish(Arc::new(next));
        ExecuteOutcome::BoardChanged
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.current.clone()) {
            Some(previous) => {
                self.publish(Arc::new(previous.without_editing()));
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.current.clone()) {
            Some(next) => {
                self.publish(Arc::new(next.without_editing()));
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn publish(&mut self, next: Arc<BoardState>) {
        self.current = next;
        self.snapshot_tx.send_replace(self.current.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ListSeed;
    use trellis_domain::commands::{AddCard, AddList, BeginEditing, DeleteCard, EditCard};

    fn manager() -> StateManager {
        StateManager::from_config(&AppConfig::default())
    }

    #[test]
    fn test_from_config_uses_starter_board() {
        let manager = manager();
        assert_eq!(manager.state().board.title, "My Board");
        assert_eq!(manager.state().board.lists.len(), 3);
    }

    #[test]
    fn test_from_config_uses_seeds() {
        let config = AppConfig {
            lists: Some(vec![ListSeed {
                title: "Only".to_string(),
                cards: vec!["x".to_string()],
            }]),
            ..AppConfig::default()
        };
        let mut manager = StateManager::from_config(&config);
        assert_eq!(manager.state().board.lists.len(), 1);

        manager.execute(&AddList);
        assert_eq!(manager.state().board.lists[1].id.as_str(), "list-2");
    }

    #[test]
    fn test_execute_publishes_to_subscribers() {
        let mut manager = manager();
        let mut rx = manager.subscribe();
        assert!(!rx.has_changed().unwrap());

        assert_eq!(manager.execute(&AddList), ExecuteOutcome::BoardChanged);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().board.lists.len(), 4);
    }

    #[test]
    fn test_noop_command_does_not_publish_or_record() {
        let mut manager = manager();
        let rx = manager.subscribe();

        let outcome = manager.execute(&AddCard {
            list_id: "list-404".into(),
        });
        assert_eq!(outcome, ExecuteOutcome::Unchanged);
        assert!(!rx.has_changed().unwrap());
        assert!(!manager.can_undo());
    }

    #[test]
    fn test_prior_snapshot_is_never_mutated() {
        let mut manager = manager();
        let before = manager.snapshot();
        manager.execute(&DeleteCard {
            list_id: "list-1".into(),
            card_id: "card-1".into(),
        });
        assert_eq!(before.board.lists[0].len(), 2);
        assert_eq!(manager.state().board.lists[0].len(), 1);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut manager = manager();
        manager.execute(&AddList);
        assert!(manager.undo());
        assert_eq!(manager.state().board.lists.len(), 3);
        assert!(manager.redo());
        assert_eq!(manager.state().board.lists.len(), 4);
        assert!(!manager.redo());
    }

    #[test]
    fn test_undo_never_reissues_ids() {
        let mut manager = manager();
        manager.execute(&AddCard {
            list_id: "list-2".into(),
        });
        let first = manager.state().board.lists[1].cards[0].id.clone();
        manager.undo();
        manager.execute(&AddCard {
            list_id: "list-2".into(),
        });
        let second = manager.state().board.lists[1].cards[0].id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_begin_editing_is_not_undoable_and_undo_clears_pointer() {
        let mut manager = manager();
        let outcome = manager.execute(&BeginEditing {
            list_id: "list-1".into(),
            card_id: "card-1".into(),
        });
        assert_eq!(outcome, ExecuteOutcome::EditingChanged);
        assert!(!manager.can_undo());

        manager.execute(&EditCard {
            list_id: "list-1".into(),
            card_id: "card-1".into(),
            content: "Plan v2".to_string(),
        });
        assert!(manager.undo());
        assert!(manager.state().editing.is_none());
        assert!(manager.can_redo());
        assert_eq!(
            manager.state().board.lists[0].cards[0].content,
            "Project plan"
        );
    }
}
