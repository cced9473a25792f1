//! Module that provides everything needed to play a single hand of blackjack
//! against the house: the card and shoe model, hands, the two participants and
//! the table that drives a round from bet to settlement.

pub mod card;
pub mod hand;
pub mod player;
pub mod table;

pub mod prelude {
    pub use crate::game::card::{standard_deck, Card, Rank, Shoe, Suit};
    pub use crate::game::hand::Hand;
    pub use crate::game::player::{Dealer, Player};
    pub use crate::game::table::{BlackjackTable, GameState, HandScore};
}

pub use prelude::*;
