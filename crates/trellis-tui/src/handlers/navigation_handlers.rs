use crate::app::App;
use trellis_domain::{CardId, List, ListId};

impl App {
    pub fn focus_prev_list(&mut self) {
        let count = self.board().lists.len();
        self.list_selection.prev(count);
        self.card_selection.set(Some(0));
        self.sync_selection();
    }

    pub fn focus_next_list(&mut self) {
        let count = self.board().lists.len();
        self.list_selection.next(count);
        self.card_selection.set(Some(0));
        self.sync_selection();
    }

    pub fn focus_prev_card(&mut self) {
        let count = self.focused_list().map_or(0, List::len);
        self.card_selection.prev(count);
    }

    pub fn focus_next_card(&mut self) {
        let count = self.focused_list().map_or(0, List::len);
        self.card_selection.next(count);
    }

    /// Move focus to a list, and to a card within it when given.
    pub fn focus_on(&mut self, list_id: &ListId, card_id: Option<&CardId>) {
        let board = self.board();
        let Some(list_idx) = board.list_index(list_id) else {
            return;
        };
        let card_idx = card_id.and_then(|id| board.lists[list_idx].card_index(id));
        self.list_selection.set(Some(list_idx));
        self.card_selection.set(card_idx);
        self.sync_selection();
    }
}
