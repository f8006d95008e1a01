//! Card and deck model.
//!
//! A card is an immutable `(rank, suit)` value. Ranks run from 1 (ace) to 13
//! (king); there is exactly one card per pair, so the full deck has 52 cards
//! and every card is unique across the whole game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Lowest card rank.
pub const MIN_RANK: u8 = 1;

/// Highest card rank.
pub const MAX_RANK: u8 = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        };
        f.write_str(symbol)
    }
}

/// A playing card.
///
/// Ordered by rank, then suit. The ordering only exists so hands iterate in a
/// stable order; the game itself never compares cards by size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRepr", into = "CardRepr")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Create a card.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `1..=13`. Use [`Card::try_new`] for
    /// untrusted input.
    ///
    /// ```
    /// use cheat_engine::core::{Card, Suit};
    ///
    /// let card = Card::new(7, Suit::Clubs);
    /// assert_eq!(card.rank(), 7);
    /// assert_eq!(card.to_string(), "(7 ♣)");
    /// ```
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!(
            (MIN_RANK..=MAX_RANK).contains(&rank),
            "Rank must be 1-13, got {rank}"
        );
        Self { rank, suit }
    }

    /// Create a card, returning `None` for an out-of-range rank.
    #[must_use]
    pub fn try_new(rank: u8, suit: Suit) -> Option<Self> {
        (MIN_RANK..=MAX_RANK)
            .contains(&rank)
            .then_some(Self { rank, suit })
    }

    /// Card rank (1-13).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Card suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.rank, self.suit)
    }
}

#[derive(Serialize, Deserialize)]
struct CardRepr {
    rank: u8,
    suit: Suit,
}

impl TryFrom<CardRepr> for Card {
    type Error = String;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        Card::try_new(repr.rank, repr.suit)
            .ok_or_else(|| format!("rank {} out of range 1-13", repr.rank))
    }
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
        }
    }
}

/// The full 52-card deck in a fixed order (rank-major).
#[must_use]
pub fn full_deck() -> Vec<Card> {
    (MIN_RANK..=MAX_RANK)
        .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card { rank, suit }))
        .collect()
}
