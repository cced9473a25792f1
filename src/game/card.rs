use rand::seq::SliceRandom;
use rand::thread_rng;
use std::fmt;

/// The four french suits. Suits never affect scoring, they only exist so the
/// table can name the cards it deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Diamonds,
    Clubs,
    Spades,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Spades, Suit::Hearts];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The blackjack value of the rank. Aces count as 11 here; downgrading
    /// them to 1 is the hand's job, since it depends on the other cards.
    pub fn value(&self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        };
        write!(f, "{}", name)
    }
}

/// A playing card. Cards have no identity beyond their value, a multi-deck
/// shoe holds duplicates of every logical card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn value(&self) -> u32 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Returns the 52 distinct cards of a standard deck in a fixed order.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// The live pool of cards available to be dealt. Built from several shuffled
/// standard decks; only ever shrinks through `draw` and grows through
/// `replenish`.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    num_decks: usize,
}

impl Shoe {
    /// Builds a shoe of `num_decks` standard decks, shuffled uniformly.
    pub fn new(num_decks: usize) -> Self {
        let mut cards = Vec::with_capacity(52 * num_decks);
        for _ in 0..num_decks {
            cards.extend(standard_deck());
        }
        cards.shuffle(&mut thread_rng());
        Shoe { cards, num_decks }
    }

    /// Builds an unshuffled shoe that deals `cards` front to back. Used by
    /// tests to script exact rounds.
    #[doc(hidden)]
    pub fn stacked(num_decks: usize, mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Shoe { cards, num_decks }
    }

    /// Removes and returns the next card, or `None` when the shoe is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The size below which the shoe should be rebuilt from the discard pile,
    /// half of the full shoe.
    pub fn low_water_mark(&self) -> usize {
        52 * self.num_decks / 2
    }

    pub fn needs_replenish(&self) -> bool {
        self.cards.len() < self.low_water_mark()
    }

    /// Moves every card of `discard` back into the shoe and reshuffles the
    /// combined pool. The discard pile ends empty.
    pub fn replenish(&mut self, discard: &mut Vec<Card>) {
        self.cards.append(discard);
        self.cards.shuffle(&mut thread_rng());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        let distinct: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn face_cards_are_worth_ten_and_aces_eleven() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Rank::Ace.value(), 11);
    }

    #[test]
    fn shoe_holds_52_cards_per_deck() {
        let shoe = Shoe::new(4);
        assert_eq!(shoe.len(), 208);
        assert_eq!(shoe.low_water_mark(), 104);
    }

    #[test]
    fn drawing_shrinks_the_shoe_until_empty() {
        let mut shoe = Shoe::new(1);
        for remaining in (0..52).rev() {
            assert!(shoe.draw().is_some());
            assert_eq!(shoe.len(), remaining);
        }
        assert!(shoe.draw().is_none());
    }

    #[test]
    fn replenish_empties_the_discard_pile_into_the_shoe() {
        let mut shoe = Shoe::new(1);
        let mut discard = Vec::new();
        for _ in 0..30 {
            discard.push(shoe.draw().unwrap());
        }
        assert_eq!(shoe.len(), 22);

        shoe.replenish(&mut discard);
        assert_eq!(shoe.len(), 52);
        assert!(discard.is_empty());
    }

    #[test]
    fn replenish_threshold_is_strictly_below_half_the_shoe() {
        let mut shoe = Shoe::new(4);
        while shoe.len() > 104 {
            let _ = shoe.draw();
        }
        assert!(!shoe.needs_replenish());
        let _ = shoe.draw();
        assert!(shoe.needs_replenish());
    }

    #[test]
    fn stacked_shoe_deals_front_to_back() {
        let cards = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let mut shoe = Shoe::stacked(1, cards);
        assert_eq!(shoe.draw().unwrap().rank, Rank::Ace);
        assert_eq!(shoe.draw().unwrap().rank, Rank::King);
    }
}
