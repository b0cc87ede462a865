pub mod card_handlers;
pub mod drag_handlers;
pub mod history_handlers;
pub mod list_handlers;
pub mod navigation_handlers;

pub use drag_handlers::DragSession;

use crate::app::{App, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub(crate) fn handle_normal_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('r') {
                self.handle_redo();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.mode = AppMode::Help,
            KeyCode::Char('h') | KeyCode::Left => self.focus_prev_list(),
            KeyCode::Char('l') | KeyCode::Right => self.focus_next_list(),
            KeyCode::Char('k') | KeyCode::Up => self.focus_prev_card(),
            KeyCode::Char('j') | KeyCode::Down => self.focus_next_card(),
            KeyCode::Char('n') => self.handle_add_card(),
            KeyCode::Char('N') => self.handle_add_list(),
            KeyCode::Enter | KeyCode::Char('e') => self.handle_begin_editing(),
            KeyCode::Char('r') => self.handle_rename_list_key_start(),
            KeyCode::Char('d') => self.handle_delete_card(),
            KeyCode::Char('D') => self.handle_delete_list(),
            KeyCode::Char('m') => self.start_card_drag(),
            KeyCode::Char('M') => self.start_list_drag(),
            KeyCode::Char('u') => self.handle_undo(),
            _ => {}
        }
    }
}
