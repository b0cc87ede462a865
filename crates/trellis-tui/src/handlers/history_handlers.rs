use crate::app::App;
use trellis_core::Loggable;

impl App {
    pub fn handle_undo(&mut self) {
        if self.state_manager.undo() {
            self.add_log("Undo".to_string());
        } else {
            self.add_log("Nothing to undo".to_string());
        }
        self.sync_selection();
    }

    pub fn handle_redo(&mut self) {
        if self.state_manager.redo() {
            self.add_log("Redo".to_string());
        } else {
            self.add_log("Nothing to redo".to_string());
        }
        self.sync_selection();
    }
}
