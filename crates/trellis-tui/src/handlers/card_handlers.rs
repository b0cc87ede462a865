use crate::app::{App, AppMode};
use crate::state::ExecuteOutcome;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use trellis_domain::commands::{AddCard, BeginEditing, DeleteCard, EditCard};

impl App {
    pub fn handle_add_card(&mut self) {
        let Some(list_id) = self.focused_list().map(|l| l.id.clone()) else {
            return;
        };
        if self.execute(AddCard {
            list_id: list_id.clone(),
        }) == ExecuteOutcome::BoardChanged
        {
            let new_card = self
                .board()
                .list(&list_id)
                .and_then(|l| l.cards.last())
                .map(|c| c.id.clone());
            self.focus_on(&list_id, new_card.as_ref());
        }
    }

    pub fn handle_delete_card(&mut self) {
        let Some(list_id) = self.focused_list().map(|l| l.id.clone()) else {
            return;
        };
        let Some(card_id) = self.focused_card().map(|c| c.id.clone()) else {
            return;
        };
        self.execute(DeleteCard { list_id, card_id });
    }

    /// Display -> Editing for the focused card; the input starts with its content.
    pub fn handle_begin_editing(&mut self) {
        let Some(list_id) = self.focused_list().map(|l| l.id.clone()) else {
            return;
        };
        let Some(card) = self.focused_card().cloned() else {
            return;
        };
        self.execute(BeginEditing {
            list_id,
            card_id: card.id,
        });
        self.input.set(card.content);
        self.mode = AppMode::EditingCard;
    }

    /// Editing -> Display. Confirmation and loss of focus both commit.
    pub fn commit_editing(&mut self) {
        let content = self.input.take();
        self.mode = AppMode::Normal;
        let Some(pointer) = self.state_manager.state().editing.clone() else {
            return;
        };
        self.execute(EditCard {
            list_id: pointer.list_id,
            card_id: pointer.card_id,
            content,
        });
    }

    pub(crate) fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                self.commit_editing()
            }
            KeyCode::Up => {
                self.commit_editing();
                self.focus_prev_card();
            }
            KeyCode::Down => {
                self.commit_editing();
                self.focus_next_card();
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => self.input.insert_char(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }
}
