//! Initial boards.

use crate::board::Board;
use crate::card::Card;
use crate::ids::IdGenerator;
use crate::list::List;
use trellis_core::ListSeed;

/// The starter board: a "To Do" list with two cards plus empty
/// "In Progress" and "Done" lists, using fixed ids `list-1..3`, `card-1..2`.
pub fn starter_board(title: &str) -> Board {
    Board::new(title).with_lists(vec![
        List::new("list-1".into(), "To Do").with_cards(vec![
            Card::new("card-1".into(), "Project plan"),
            Card::new("card-2".into(), "Kickoff meeting"),
        ]),
        List::new("list-2".into(), "In Progress"),
        List::new("list-3".into(), "Done"),
    ])
}

/// Build a board from configured list seeds, minting ids from `ids`.
pub fn board_from_seeds(title: &str, seeds: &[ListSeed], ids: &mut IdGenerator) -> Board {
    let lists = seeds
        .iter()
        .map(|seed| {
            let list_id = ids.next_list_id();
            let cards = seed
                .cards
                .iter()
                .map(|content| Card::new(ids.next_card_id(), content.as_str()))
                .collect();
            List::new(list_id, seed.title.as_str()).with_cards(cards)
        })
        .collect();
    Board::new(title).with_lists(lists)
}
