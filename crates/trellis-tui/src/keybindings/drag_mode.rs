use super::{Keybinding, KeybindingContext, KeybindingProvider};
use trellis_domain::DragKind;

pub struct DragModeProvider {
    kind: DragKind,
}

impl DragModeProvider {
    pub fn new(kind: DragKind) -> Self {
        Self { kind }
    }
}

impl KeybindingProvider for DragModeProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![Keybinding::new(
            "h/l",
            "shift",
            "Move the target one list left/right",
        )];
        let name = match self.kind {
            DragKind::Card => {
                bindings.push(Keybinding::new(
                    "j/k",
                    "position",
                    "Move the target down/up within the list",
                ));
                "Moving Card"
            }
            DragKind::List => "Moving List",
        };
        bindings.push(Keybinding::new("Enter/Space", "drop", "Drop at the target"));
        bindings.push(Keybinding::new("ESC", "cancel", "Put it back where it was"));
        KeybindingContext::new(name, bindings)
    }
}
