use std::io::{BufRead, Write};

use log::{debug, info};

use crate::game::card::Card;
use crate::game::hand::Hand;
use crate::game::player::{Dealer, Player};
use crate::{GameConfig, GameError};

/// The phases of a betting round. `Quit` is terminal; `ReplayPrompt` loops
/// back to `PreGame` when the player stays at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    PreGame,
    PlayerTurn,
    DealerTurn,
    Evaluation,
    ReplayPrompt,
    Quit,
}

/// Final classification of a hand at settlement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandScore {
    Bust,
    Blackjack,
    Total(u32),
}

impl HandScore {
    pub fn of(hand: &Hand) -> HandScore {
        if hand.is_bust() {
            HandScore::Bust
        } else if hand.is_blackjack() {
            HandScore::Blackjack
        } else {
            HandScore::Total(hand.total())
        }
    }
}

impl std::fmt::Display for HandScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandScore::Bust => write!(f, "Bust"),
            HandScore::Blackjack => write!(f, "Blackjack"),
            HandScore::Total(total) => write!(f, "{}", total),
        }
    }
}

/// Who a card is dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Player,
    Dealer,
}

/// A blackjack table for one player against the house, played over an
/// abstract input provider and output sink. `run` drives the round state
/// machine until the player quits or runs out of money.
///
/// Rules: S17, double-down allowed on any first two cards, no split, no
/// surrender, no insurance. Blackjack pays 3:2 rounded down.
pub struct BlackjackTable<R, W> {
    config: GameConfig,
    player: Player,
    dealer: Dealer,
    discard: Vec<Card>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> BlackjackTable<R, W> {
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        BlackjackTable {
            player: Player::new("Player", config.starting_bankroll),
            dealer: Dealer::new(config.num_decks),
            discard: Vec::new(),
            config,
            input,
            output,
        }
    }

    /// A table with a pre-built dealer, used by tests to script rounds
    /// through a stacked shoe.
    #[doc(hidden)]
    pub fn with_dealer(config: GameConfig, dealer: Dealer, input: R, output: W) -> Self {
        BlackjackTable {
            player: Player::new("Player", config.starting_bankroll),
            dealer,
            discard: Vec::new(),
            config,
            input,
            output,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Plays a full session: asks the player's name, then steps the state
    /// machine round after round until `Quit`.
    pub fn run(&mut self) -> Result<(), GameError> {
        let name = self.prompt_line("Name? ")?;
        if !name.is_empty() {
            self.player.name = name;
        }
        writeln!(self.output, "Money: {}", self.player.bankroll())?;

        let mut state = GameState::PreGame;
        while state != GameState::Quit {
            writeln!(self.output)?;
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Advances the state machine by one transition.
    pub fn step(&mut self, state: GameState) -> Result<GameState, GameError> {
        debug!("entering state {:?}", state);
        match state {
            GameState::PreGame => self.pre_game(),
            GameState::PlayerTurn => self.player_turn(),
            GameState::DealerTurn => self.dealer_turn(),
            GameState::Evaluation => self.evaluate(),
            GameState::ReplayPrompt => self.replay_prompt(),
            GameState::Quit => Ok(GameState::Quit),
        }
    }

    /// Collects a valid bet and deals the opening hands, player first, one
    /// card at a time. The dealer's second card stays concealed until the
    /// dealer's turn.
    fn pre_game(&mut self) -> Result<GameState, GameError> {
        if self.player.bankroll() < self.config.min_bet {
            writeln!(
                self.output,
                "{} is out of money. Thanks for playing!",
                self.player.name
            )?;
            return Ok(GameState::Quit);
        }

        let bet = self.prompt_bet()?;
        self.player.place_bet(bet);
        info!("{} bet {}", self.player.name, bet);

        writeln!(self.output, "Dealer is shuffling, please wait warmly...")?;
        for _ in 0..2 {
            self.deal_card(Seat::Player, false)?;
            self.deal_card(Seat::Dealer, false)?;
        }
        Ok(GameState::PlayerTurn)
    }

    /// Shows the dealer's upcard and lets the player hit, stand or double
    /// down until they stand, bust, or run the double-down card. An opening
    /// 21 skips the decisions entirely.
    fn player_turn(&mut self) -> Result<GameState, GameError> {
        if let Some(upcard) = self.dealer.upcard() {
            writeln!(self.output, "Dealer's upcard: {}", upcard)?;
        }
        self.show_hand(Seat::Player)?;

        if self.player.hand.total() == 21 {
            writeln!(self.output, "{} has blackjack!", self.player.name)?;
            return Ok(GameState::DealerTurn);
        }

        while self.player.hand.total() <= 21 {
            let prompt = format!("{}'s move (h, s, dd): ", self.player.name);
            let choice = self.prompt_line(&prompt)?.to_lowercase();
            match choice.as_str() {
                "h" | "hit" => self.deal_card(Seat::Player, true)?,
                "s" | "stand" => break,
                "dd" | "double-down" => {
                    if self.player.hand.len() != 2 {
                        writeln!(
                            self.output,
                            "You can only double down if you have 2 cards."
                        )?;
                    } else if self.player.bet() > self.player.bankroll() {
                        writeln!(self.output, "Not enough money to double down.")?;
                    } else {
                        let bet = self.player.bet();
                        self.player.place_bet(bet);
                        self.deal_card(Seat::Player, true)?;
                        break;
                    }
                }
                _ => writeln!(self.output, "Invalid input")?,
            }
        }
        Ok(GameState::DealerTurn)
    }

    /// Reveals the dealer's hand and draws to 17. The dealer stands on every
    /// 17, soft or hard, and an opening 21 is a blackjack that draws nothing.
    fn dealer_turn(&mut self) -> Result<GameState, GameError> {
        self.show_hand(Seat::Dealer)?;
        if self.dealer.hand.total() == 21 {
            writeln!(self.output, "Dealer has blackjack!")?;
        } else {
            while self.dealer.hand.total() < 17 {
                self.deal_card(Seat::Dealer, true)?;
            }
        }
        Ok(GameState::Evaluation)
    }

    /// Scores both hands and settles the bet. First matching rule wins:
    /// player bust loses, double blackjack pushes, lone blackjack pays 3:2,
    /// dealer bust pays even money, then totals are compared.
    fn evaluate(&mut self) -> Result<GameState, GameError> {
        let player_score = HandScore::of(&self.player.hand);
        let dealer_score = HandScore::of(&self.dealer.hand);
        writeln!(self.output, "{}: {}", self.player.name, player_score)?;
        writeln!(self.output, "Dealer: {}", dealer_score)?;
        writeln!(self.output)?;

        let bet = self.player.bet();
        let player_total = self.player.hand.total();
        let dealer_total = self.dealer.hand.total();
        let player_blackjack = self.player.hand.is_blackjack();
        let dealer_blackjack = self.dealer.hand.is_blackjack();

        // The losing branches pay nothing: the bet already left the bankroll
        // when it was placed.
        let message = if player_total > 21 {
            format!("{} busts. Dealer wins.", self.player.name)
        } else if player_blackjack && dealer_blackjack {
            self.player.collect(bet);
            "Push. It's a tie.".to_string()
        } else if player_blackjack {
            self.player.collect(bet * 5 / 2);
            format!("{} has Blackjack! {} wins.", self.player.name, self.player.name)
        } else if dealer_blackjack {
            "Dealer has Blackjack! Dealer wins.".to_string()
        } else if dealer_total > 21 {
            self.player.collect(bet * 2);
            format!("Dealer busts. {} wins.", self.player.name)
        } else if player_total == dealer_total {
            self.player.collect(bet);
            "Push. It's a tie.".to_string()
        } else if player_total > dealer_total {
            self.player.collect(bet * 2);
            format!("{} wins.", self.player.name)
        } else {
            "Dealer wins.".to_string()
        };
        self.player.clear_bet();

        info!(
            "settled {} vs {}, bankroll now {}",
            player_score,
            dealer_score,
            self.player.bankroll()
        );
        writeln!(self.output, "{}", message)?;
        writeln!(self.output, "Money: {}", self.player.bankroll())?;
        Ok(GameState::ReplayPrompt)
    }

    /// Asks whether to play another round, re-prompting until the answer is
    /// a clear yes or no.
    fn replay_prompt(&mut self) -> Result<GameState, GameError> {
        loop {
            let answer = self
                .prompt_line("Do you want to try again? (y/n) ")?
                .to_lowercase();
            match answer.as_str() {
                "n" | "no" => {
                    writeln!(self.output, "See you next time!")?;
                    return Ok(GameState::Quit);
                }
                "y" | "yes" => {
                    self.reset_round()?;
                    return Ok(GameState::PreGame);
                }
                _ => writeln!(self.output, "Invalid input. Enter 'y' or 'n'.")?,
            }
        }
    }

    /// Moves both hands to the discard pile and rebuilds the shoe once it
    /// falls below the low-water mark.
    fn reset_round(&mut self) -> Result<(), GameError> {
        self.player.hand.discard_into(&mut self.discard);
        self.dealer.hand.discard_into(&mut self.discard);
        self.player.reset();

        if self.dealer.needs_replenish() {
            self.dealer.replenish(&mut self.discard);
            info!(
                "shoe below low-water mark, replenished to {} cards",
                self.dealer.shoe_len()
            );
            writeln!(self.output, "Shoe reshuffled.")?;
        }
        Ok(())
    }

    /// Draws one card, forcing a replenish from the discard pile if the shoe
    /// has run dry mid-round. Fails only when both pools are empty.
    fn draw_card(&mut self) -> Result<Card, GameError> {
        if self.dealer.shoe_is_empty() && !self.discard.is_empty() {
            info!("shoe empty mid-round, forcing replenishment");
            self.dealer.replenish(&mut self.discard);
            writeln!(self.output, "Shoe reshuffled.")?;
        }
        self.dealer.draw().ok_or(GameError::ShoeExhausted)
    }

    /// Deals one card to `seat`. When `reveal` is set the receiver's new
    /// hand and total are shown, and a bust is called out.
    fn deal_card(&mut self, seat: Seat, reveal: bool) -> Result<(), GameError> {
        let card = self.draw_card()?;
        match seat {
            Seat::Player => self.player.hand.push(card),
            Seat::Dealer => self.dealer.hand.push(card),
        }
        if reveal {
            self.show_hand(seat)?;
            let (name, bust) = {
                let (name, hand) = self.seat(seat);
                (name.to_owned(), hand.is_bust())
            };
            if bust {
                writeln!(self.output, "{} bust!", name)?;
            }
        }
        Ok(())
    }

    fn seat(&self, seat: Seat) -> (&str, &Hand) {
        match seat {
            Seat::Player => (self.player.name.as_str(), &self.player.hand),
            Seat::Dealer => ("Dealer", &self.dealer.hand),
        }
    }

    fn show_hand(&mut self, seat: Seat) -> Result<(), GameError> {
        let line = {
            let (name, hand) = self.seat(seat);
            format!("{}'s hand: {} ({})", name, hand, hand.total())
        };
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `prompt` and reads one trimmed line. End of input while a
    /// prompt is pending ends the session with `InputClosed` instead of
    /// re-prompting forever.
    fn prompt_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompts until the bet is numeric, within the table limits, and
    /// covered by the bankroll. Nothing changes state until it is valid.
    fn prompt_bet(&mut self) -> Result<u32, GameError> {
        let prompt = format!(
            "How much do you want to bet? (Min: {}, Max: {}): ",
            self.config.min_bet, self.config.max_bet
        );
        loop {
            let line = self.prompt_line(&prompt)?;
            let bet = match line.parse::<u32>() {
                Ok(bet) => bet,
                Err(_) => {
                    writeln!(self.output, "Please enter a valid number.")?;
                    continue;
                }
            };
            if bet > self.config.max_bet {
                writeln!(self.output, "Table maximum is {}.", self.config.max_bet)?;
            } else if bet < self.config.min_bet {
                writeln!(self.output, "Table minimum is {}.", self.config.min_bet)?;
            } else if bet > self.player.bankroll() {
                writeln!(
                    self.output,
                    "You only have {}.",
                    self.player.bankroll()
                )?;
            } else {
                return Ok(bet);
            }
        }
    }
}
