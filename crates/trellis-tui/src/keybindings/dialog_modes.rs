use super::{Keybinding, KeybindingContext, KeybindingProvider};

/// Text entry shared by card editing and list renaming.
pub struct DialogInputProvider {
    dialog_name: String,
    cancel_key: &'static str,
    cancel_description: &'static str,
}

impl DialogInputProvider {
    pub fn new(dialog_name: impl Into<String>) -> Self {
        Self {
            dialog_name: dialog_name.into(),
            cancel_key: "ESC",
            cancel_description: "Cancel",
        }
    }

    /// Card edits have no cancel; leaving the field keeps the text.
    pub fn inline_edit() -> Self {
        Self {
            dialog_name: "Edit Card".into(),
            cancel_key: "ESC/Tab/↑↓",
            cancel_description: "Save and leave the field",
        }
    }
}

impl KeybindingProvider for DialogInputProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            format!("{} - Input", self.dialog_name),
            vec![
                Keybinding::new("Enter", "save", "Confirm"),
                Keybinding::new(self.cancel_key, "leave", self.cancel_description),
                Keybinding::new("←/→", "cursor", "Move cursor"),
                Keybinding::new("Home/End", "jump", "Jump to start/end"),
                Keybinding::new("Backspace", "erase", "Delete character"),
            ],
        )
    }
}
