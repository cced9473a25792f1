pub mod game;

pub use game::prelude::*;

use thiserror::Error;

pub mod prelude {
    pub use super::game::prelude::*;
    pub use super::{GameConfig, GameConfigBuilder, GameError};
}

/// The conditions that end a session abnormally. Invalid user input is never
/// one of them, it is always recovered by re-prompting at the point of entry.
#[derive(Debug, Error)]
pub enum GameError {
    /// The shoe and the discard pile are both empty, so no card can be drawn.
    /// Unreachable in normal play with a multi-deck shoe and the low-water
    /// replenishment check, but drawing must never read past the pool.
    #[error("the shoe is exhausted and the discard pile is empty")]
    ShoeExhausted,
    /// The input provider reached end-of-stream while a prompt was pending.
    #[error("input stream closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Table rules and session parameters for a game of blackjack.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub num_decks: usize,
    pub starting_bankroll: u32,
    pub min_bet: u32,
    pub max_bet: u32,
}

impl GameConfig {
    /// Associated method for returning a new `GameConfigBuilder` object.
    pub fn new() -> GameConfigBuilder {
        GameConfigBuilder {
            num_decks: None,
            starting_bankroll: None,
            min_bet: None,
            max_bet: None,
        }
    }
}

impl Default for GameConfig {
    /// Returns the standard table: a four deck shoe, a bankroll of 100 and
    /// bets between 10 and 100.
    fn default() -> Self {
        GameConfig::new().build()
    }
}

/// Struct to implement the builder pattern for `GameConfig`.
#[derive(Debug, Clone, Copy)]
pub struct GameConfigBuilder {
    num_decks: Option<usize>,
    starting_bankroll: Option<u32>,
    min_bet: Option<u32>,
    max_bet: Option<u32>,
}

impl GameConfigBuilder {
    /// Method for choosing the number of decks the shoe is built from.
    pub fn num_decks(&mut self, decks: usize) -> &mut Self {
        self.num_decks = Some(decks);
        self
    }

    /// Method for setting the bankroll the player sits down with.
    pub fn starting_bankroll(&mut self, bankroll: u32) -> &mut Self {
        self.starting_bankroll = Some(bankroll);
        self
    }

    /// Method for setting the table minimum bet.
    pub fn min_bet(&mut self, bet: u32) -> &mut Self {
        self.min_bet = Some(bet);
        self
    }

    /// Method for setting the table maximum bet.
    pub fn max_bet(&mut self, bet: u32) -> &mut Self {
        self.max_bet = Some(bet);
        self
    }

    /// Method for building a `GameConfig` object from the given `GameConfigBuilder` object.
    pub fn build(&mut self) -> GameConfig {
        GameConfig {
            num_decks: self.num_decks.unwrap_or(4),
            starting_bankroll: self.starting_bankroll.unwrap_or(100),
            min_bet: self.min_bet.unwrap_or(10),
            max_bet: self.max_bet.unwrap_or(100),
        }
    }
}
