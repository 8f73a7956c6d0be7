//! Card types and face-state handling.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        };
        write!(f, "{glyph}")
    }
}

/// A playing card.
///
/// Identity is the (rank, suit) pair; the 52 cards of the deck are all
/// distinct. The face state starts hidden and is flipped by the engine as
/// the card is dealt face up or revealed later; hidden cards contribute
/// nothing to a hand's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    revealed: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when scoring a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            revealed: false,
        }
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Turns the card face up. Idempotent.
    pub const fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turns the card face down; used when the shoe recycles dealt cards
    /// between rounds, never mid-round.
    pub const fn hide(&mut self) {
        self.revealed = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            _ => write!(f, "{}{}", self.rank, self.suit),
        }
    }
}

/// Number of cards in the single deck.
pub const DECK_SIZE: usize = 52;
