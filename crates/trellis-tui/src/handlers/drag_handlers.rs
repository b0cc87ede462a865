//! Keyboard-driven drag and drop.
//!
//! Picking up an item starts a [`DragSession`]; arrow keys move its target and
//! the board renders a live preview. Dropping turns the session into a
//! [`DropResult`] with a destination, cancelling into one without.

use crate::app::{App, AppMode};
use crate::view_model::Focus;
use crossterm::event::KeyCode;
use trellis_domain::commands::ApplyDrop;
use trellis_domain::{BoardState, DragKind, DraggableLocation, DropResult, ListId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub kind: DragKind,
    pub draggable_id: String,
    pub source: DraggableLocation,
    pub target: DraggableLocation,
}

impl DragSession {
    fn new(kind: DragKind, draggable_id: String, source: DraggableLocation) -> Self {
        Self {
            kind,
            draggable_id,
            target: source.clone(),
            source,
        }
    }

    pub fn to_drop(&self, dropped: bool) -> DropResult {
        DropResult {
            kind: self.kind,
            draggable_id: self.draggable_id.clone(),
            source: self.source.clone(),
            destination: dropped.then(|| self.target.clone()),
        }
    }

    /// The board as it would be if the item were released now.
    pub fn preview(&self, state: &BoardState) -> BoardState {
        state.apply_drop(&self.to_drop(true))
    }

    /// Focus on the dragged item inside a preview board.
    pub fn focus_in(&self, preview: &BoardState) -> Focus {
        match self.kind {
            DragKind::List => Focus {
                list: Some(self.target.index),
                card: None,
                dragging: Some(DragKind::List),
            },
            DragKind::Card => {
                let list_id = ListId::new(self.target.droppable_id.as_str());
                Focus {
                    list: preview.board.list_index(&list_id),
                    card: Some(self.target.index),
                    dragging: Some(DragKind::Card),
                }
            }
        }
    }

    /// Move the target by `dx` lists and `dy` positions, staying inside the board.
    fn shift(&mut self, state: &BoardState, dx: isize, dy: isize) {
        let lists = &state.board.lists;
        match self.kind {
            DragKind::List => {
                self.target.index = step(self.target.index, dx, lists.len().saturating_sub(1));
            }
            DragKind::Card => {
                let current = ListId::new(self.target.droppable_id.as_str());
                let Some(list_idx) = state.board.list_index(&current) else {
                    return;
                };
                let list_idx = step(list_idx, dx, lists.len().saturating_sub(1));
                let list = &lists[list_idx];
                let same_list = list.id.as_str() == self.source.droppable_id;
                let max_index = if same_list {
                    list.len().saturating_sub(1)
                } else {
                    list.len()
                };
                self.target = DraggableLocation::list(
                    &list.id,
                    step(self.target.index, dy, max_index),
                );
            }
        }
    }
}

fn step(index: usize, delta: isize, max: usize) -> usize {
    index.saturating_add_signed(delta).min(max)
}

impl App {
    pub fn start_card_drag(&mut self) {
        let Some(list) = self.focused_list() else {
            return;
        };
        let Some(card_idx) = self.card_selection.get() else {
            return;
        };
        let Some(card) = list.cards.get(card_idx) else {
            return;
        };
        let session = DragSession::new(
            DragKind::Card,
            card.id.as_str().to_string(),
            DraggableLocation::list(&list.id, card_idx),
        );
        tracing::debug!("Drag start: card {}", session.draggable_id);
        self.drag = Some(session);
        self.mode = AppMode::Dragging;
    }

    pub fn start_list_drag(&mut self) {
        let Some(list_idx) = self.list_selection.get() else {
            return;
        };
        let Some(list) = self.board().lists.get(list_idx) else {
            return;
        };
        let session = DragSession::new(
            DragKind::List,
            list.id.as_str().to_string(),
            DraggableLocation::board(list_idx),
        );
        tracing::debug!("Drag start: list {}", session.draggable_id);
        self.drag = Some(session);
        self.mode = AppMode::Dragging;
    }

    pub fn move_drag_target(&mut self, dx: isize, dy: isize) {
        let state = self.state_manager.snapshot();
        if let Some(session) = self.drag.as_mut() {
            session.shift(&state, dx, dy);
        }
    }

    /// Release the dragged item at its target and focus it there.
    pub fn drop_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            self.mode = AppMode::Normal;
            return;
        };
        self.mode = AppMode::Normal;
        self.execute(ApplyDrop {
            drop: session.to_drop(true),
        });

        match session.kind {
            DragKind::List => {
                self.list_selection.set(Some(session.target.index));
                self.card_selection.set(Some(0));
                self.sync_selection();
            }
            DragKind::Card => {
                let list_id = ListId::new(session.target.droppable_id.as_str());
                if let Some(list_idx) = self.board().list_index(&list_id) {
                    self.list_selection.set(Some(list_idx));
                    self.card_selection.set(Some(session.target.index));
                    self.sync_selection();
                }
            }
        }
    }

    /// Abort the drag; the board is left as it was.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            self.execute(ApplyDrop {
                drop: session.to_drop(false),
            });
        }
        self.mode = AppMode::Normal;
    }

    pub(crate) fn handle_drag_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Char('h') | KeyCode::Left => self.move_drag_target(-1, 0),
            KeyCode::Char('l') | KeyCode::Right => self.move_drag_target(1, 0),
            KeyCode::Char('k') | KeyCode::Up => self.move_drag_target(0, -1),
            KeyCode::Char('j') | KeyCode::Down => self.move_drag_target(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_drag(),
            KeyCode::Esc => self.cancel_drag(),
            _ => {}
        }
    }
}
