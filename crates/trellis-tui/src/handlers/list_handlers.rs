use crate::app::{App, AppMode};
use crate::dialog::{handle_dialog_input, DialogAction};
use crate::state::ExecuteOutcome;
use crossterm::event::KeyCode;
use trellis_domain::commands::{AddList, DeleteList, RenameList};

impl App {
    pub fn handle_add_list(&mut self) {
        if self.execute(AddList) == ExecuteOutcome::BoardChanged {
            let last = self.board().lists.len();
            self.list_selection.jump_to_last(last);
            self.card_selection.clear();
            self.sync_selection();
        }
    }

    pub fn handle_delete_list(&mut self) {
        let Some(list_id) = self.focused_list().map(|l| l.id.clone()) else {
            return;
        };
        self.execute(DeleteList { list_id });
    }

    pub(crate) fn handle_rename_list_key_start(&mut self) {
        let Some(title) = self.focused_list().map(|l| l.title.clone()) else {
            return;
        };
        self.input.set(title);
        self.mode = AppMode::RenameList;
    }

    pub(crate) fn handle_rename_list_key(&mut self, key_code: KeyCode) {
        match handle_dialog_input(&mut self.input, key_code, false) {
            DialogAction::Confirm => {
                let title = self.input.take().trim().to_string();
                self.mode = AppMode::Normal;
                if let Some(list_id) = self.focused_list().map(|l| l.id.clone()) {
                    self.execute(RenameList { list_id, title });
                }
            }
            DialogAction::Cancel => {
                self.input.clear();
                self.mode = AppMode::Normal;
            }
            DialogAction::None => {}
        }
    }
}
