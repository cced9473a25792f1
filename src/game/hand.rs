use crate::game::card::{Card, Rank};
use std::fmt;

/// An ordered sequence of cards owned by one participant. Scoring is a pure
/// function of the card sequence; the hand holds no running total.
#[derive(Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The best total of the hand. Every ace starts at 11 and is downgraded
    /// to 1 (subtracting 10) one at a time while the total is over 21, so a
    /// hand never counts more aces as 11 than it can afford.
    pub fn total(&self) -> u32 {
        let mut total = 0;
        let mut soft_aces = 0;
        for card in &self.cards {
            if card.rank == Rank::Ace {
                soft_aces += 1;
            }
            total += card.value();
        }
        while total > 21 && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        total
    }

    /// A natural: exactly two cards totalling 21. A three card 21 is not a
    /// blackjack.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Moves every card of the hand onto `pile`, leaving the hand empty.
    pub fn discard_into(&mut self, pile: &mut Vec<Card>) {
        pile.append(&mut self.cards);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
