use super::{
    dialog_modes::DialogInputProvider, drag_mode::DragModeProvider, normal_mode::BoardProvider,
    KeybindingProvider,
};
use crate::app::{App, AppMode};
use trellis_domain::DragKind;

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        let drag_kind = app.drag.as_ref().map(|session| session.kind);
        Self::get_provider_for_mode(app.mode, drag_kind)
    }

    fn get_provider_for_mode(
        mode: AppMode,
        drag_kind: Option<DragKind>,
    ) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Normal | AppMode::Help => Box::new(BoardProvider),
            AppMode::EditingCard => Box::new(DialogInputProvider::inline_edit()),
            AppMode::RenameList => Box::new(DialogInputProvider::new("Rename List")),
            AppMode::Dragging => {
                Box::new(DragModeProvider::new(drag_kind.unwrap_or(DragKind::Card)))
            }
        }
    }
}
