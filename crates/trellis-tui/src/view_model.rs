//! Render tree: a pure projection of a board snapshot plus UI focus into the
//! nested list -> card structure the terminal draws.

use trellis_domain::{BoardState, CardId, DragKind, ListId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Display,
    Editing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Focus {
    pub list: Option<usize>,
    pub card: Option<usize>,
    pub dragging: Option<DragKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub content: String,
    pub mode: CardMode,
    pub selected: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<CardView>,
    pub focused: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub title: String,
    pub lists: Vec<ListView>,
}

impl BoardView {
    pub fn editing_cards(&self) -> impl Iterator<Item = &CardView> {
        self.lists
            .iter()
            .flat_map(|l| l.cards.iter())
            .filter(|c| c.mode == CardMode::Editing)
    }

    pub fn total_cards(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }
}

pub fn build(state: &BoardState, focus: &Focus) -> BoardView {
    let lists = state
        .board
        .lists
        .iter()
        .enumerate()
        .map(|(list_idx, list)| {
            let focused = focus.list == Some(list_idx);
            let cards = list
                .cards
                .iter()
                .enumerate()
                .map(|(card_idx, card)| {
                    let selected = focused && focus.card == Some(card_idx);
                    CardView {
                        id: card.id.clone(),
                        content: card.content.clone(),
                        mode: if state.is_editing(&list.id, &card.id) {
                            CardMode::Editing
                        } else {
                            CardMode::Display
                        },
                        selected,
                        dragging: selected && focus.dragging == Some(DragKind::Card),
                    }
                })
                .collect();
            ListView {
                id: list.id.clone(),
                title: list.title.clone(),
                cards,
                focused,
                dragging: focused && focus.dragging == Some(DragKind::List),
            }
        })
        .collect();

    BoardView {
        title: state.board.title.clone(),
        lists,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_domain::seed::starter_board;

    #[test]
    fn test_build_mirrors_board_order() {
        let state = BoardState::new(starter_board("test"));
        let view = build(&state, &Focus::default());
        let titles: Vec<_> = view.lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        assert_eq!(view.total_cards(), 2);
        assert_eq!(view.editing_cards().count(), 0);
    }

    #[test]
    fn test_only_pointed_card_is_editing() {
        let state = BoardState::new(starter_board("test"))
            .begin_editing(&"list-1".into(), &"card-2".into());
        let view = build(&state, &Focus::default());
        let editing: Vec<_> = view.editing_cards().map(|c| c.id.as_str()).collect();
        assert_eq!(editing, vec!["card-2"]);
    }

    #[test]
    fn test_dangling_pointer_marks_nothing() {
        let state = BoardState::new(starter_board("test"))
            .begin_editing(&"list-2".into(), &"card-1".into());
        let view = build(&state, &Focus::default());
        assert_eq!(view.editing_cards().count(), 0);
    }

    #[test]
    fn test_focus_and_drag_flags() {
        let state = BoardState::new(starter_board("test"));
        let view = build(
            &state,
            &Focus {
                list: Some(0),
                card: Some(1),
                dragging: Some(DragKind::Card),
            },
        );
        assert!(view.lists[0].focused);
        assert!(!view.lists[0].dragging);
        assert!(view.lists[0].cards[1].selected);
        assert!(view.lists[0].cards[1].dragging);
        assert!(!view.lists[0].cards[0].selected);
        assert!(!view.lists[1].focused);
    }
}
