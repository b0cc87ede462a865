use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct BoardProvider;

impl KeybindingProvider for BoardProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Board",
            vec![
                Keybinding::new("h/l", "list", "Focus previous/next list"),
                Keybinding::new("j/k", "card", "Focus next/previous card"),
                Keybinding::new("n", "add card", "Add a card to the focused list"),
                Keybinding::new("N", "add list", "Add a list to the end of the board"),
                Keybinding::new("e/Enter", "edit", "Edit the focused card"),
                Keybinding::new("r", "rename", "Rename the focused list"),
                Keybinding::new("d", "delete", "Delete the focused card"),
                Keybinding::new("D", "delete list", "Delete the focused list and its cards"),
                Keybinding::new("m", "move", "Pick up the focused card"),
                Keybinding::new("M", "move list", "Pick up the focused list"),
                Keybinding::new("u", "undo", "Undo the last change"),
                Keybinding::new("Ctrl-r", "redo", "Redo the last undone change"),
                Keybinding::new("?", "help", "Show help"),
                Keybinding::new("q", "quit", "Quit application"),
            ],
        )
    }
}
