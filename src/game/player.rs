use crate::game::card::{Card, Shoe};
use crate::game::hand::Hand;

/// The human participant: a name, a hand, and the money on and off the table.
/// Money is whole currency units, and the bankroll can never go negative
/// because the table validates every bet before placing it.
#[derive(Debug)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
    bankroll: u32,
    bet: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, bankroll: u32) -> Self {
        Player {
            name: name.into(),
            hand: Hand::new(),
            bankroll,
            bet: 0,
        }
    }

    pub fn bankroll(&self) -> u32 {
        self.bankroll
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    /// Moves `amount` from the bankroll onto the table. Performs no bounds
    /// validation of its own, the caller checks the table limits and the
    /// bankroll at input time.
    pub fn place_bet(&mut self, amount: u32) {
        debug_assert!(amount <= self.bankroll);
        self.bet += amount;
        self.bankroll -= amount;
    }

    /// Credits winnings (or a returned bet) to the bankroll.
    pub fn collect(&mut self, amount: u32) {
        self.bankroll += amount;
    }

    pub fn clear_bet(&mut self) {
        self.bet = 0;
    }

    /// Round-end reset: no active bet, no cards. The bankroll carries over.
    pub fn reset(&mut self) {
        self.bet = 0;
        self.hand.clear();
    }
}

/// The house. Owns the shoe and a hand of its own; has no bankroll, the
/// money it pays out is not modelled.
#[derive(Debug)]
pub struct Dealer {
    pub hand: Hand,
    shoe: Shoe,
}

impl Dealer {
    pub fn new(num_decks: usize) -> Self {
        Dealer {
            hand: Hand::new(),
            shoe: Shoe::new(num_decks),
        }
    }

    /// A dealer over a pre-built (typically stacked) shoe.
    #[doc(hidden)]
    pub fn with_shoe(shoe: Shoe) -> Self {
        Dealer {
            hand: Hand::new(),
            shoe,
        }
    }

    /// Removes the next card from the shoe, or `None` when the shoe is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.shoe.draw()
    }

    /// The dealer's face-up card, visible to the player from the initial deal.
    pub fn upcard(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    pub fn shoe_len(&self) -> usize {
        self.shoe.len()
    }

    pub fn shoe_is_empty(&self) -> bool {
        self.shoe.is_empty()
    }

    pub fn needs_replenish(&self) -> bool {
        self.shoe.needs_replenish()
    }

    /// Rebuilds the shoe from the discard pile, reshuffling the combined pool.
    pub fn replenish(&mut self, discard: &mut Vec<Card>) {
        self.shoe.replenish(discard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::{Rank, Suit};

    #[test]
    fn placing_a_bet_moves_money_from_the_bankroll() {
        let mut player = Player::new("Ada", 100);
        player.place_bet(50);
        assert_eq!(player.bet(), 50);
        assert_eq!(player.bankroll(), 50);

        // Doubling down places a second bet on top of the first.
        player.place_bet(50);
        assert_eq!(player.bet(), 100);
        assert_eq!(player.bankroll(), 0);
    }

    #[test]
    fn collect_credits_the_bankroll() {
        let mut player = Player::new("Ada", 100);
        player.place_bet(20);
        player.collect(50);
        assert_eq!(player.bankroll(), 130);
    }

    #[test]
    fn reset_clears_bet_and_hand_but_not_bankroll() {
        let mut player = Player::new("Ada", 100);
        player.place_bet(10);
        player.hand.push(Card::new(Rank::Five, Suit::Hearts));
        player.reset();
        assert_eq!(player.bet(), 0);
        assert!(player.hand.is_empty());
        assert_eq!(player.bankroll(), 90);
    }

    #[test]
    fn upcard_is_the_dealers_first_card() {
        let mut dealer = Dealer::new(1);
        assert!(dealer.upcard().is_none());
        dealer.hand.push(Card::new(Rank::Six, Suit::Spades));
        dealer.hand.push(Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(dealer.upcard().unwrap().rank, Rank::Six);
    }
}
