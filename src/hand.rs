//! Hands, participants, and the ace-aware scorer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

// Scoring is order-dependent: non-aces are summed first, then each face-up
// ace in deal order takes 11 only while the running total stays at or under
// 21. An ace that took 11 is never demoted within a pass, so king + ace +
// ace is 22, not 12. Face-down cards count nothing.
fn score_cards(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    for card in cards {
        if card.is_revealed() && card.rank != 1 {
            total = total.saturating_add(card_value(card.rank));
        }
    }

    let mut took_eleven = false;
    for card in cards {
        if card.is_revealed() && card.rank == 1 {
            if total.saturating_add(11) <= 21 {
                total += 11;
                took_eleven = true;
            } else {
                total = total.saturating_add(1);
            }
        }
    }

    let is_soft = took_eleven && total <= 21;
    (total, is_soft)
}

/// An ordered hand of cards plus its standing flag.
///
/// The score is never stored; it is derived from the cards on every query,
/// so it cannot go stale as cards are added or revealed.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Whether the hand has stood.
    standing: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            standing: false,
        }
    }

    /// Appends a card, preserving deal order.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the visible score of the hand.
    ///
    /// Only face-up cards count. Each ace is worth 11 when that keeps the
    /// running total at 21 or below, otherwise 1, applied in deal order.
    #[must_use]
    pub fn score(&self) -> u8 {
        score_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace is currently counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score_cards(&self.cards).1
    }

    /// Returns whether the visible score exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand has stood.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    pub(crate) const fn stand(&mut self) {
        self.standing = true;
    }

    /// Turns every face-down card face up, returning the cards that were
    /// flipped. Idempotent.
    pub(crate) fn reveal_hidden(&mut self) -> Vec<Card> {
        let mut flipped = Vec::new();
        for card in &mut self.cards {
            if !card.is_revealed() {
                card.reveal();
                flipped.push(*card);
            }
        }
        flipped
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// A named seat at the table and the hand it holds.
#[derive(Debug, Clone)]
pub struct Participant {
    /// Display name.
    name: String,
    /// The participant's hand.
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            hand: Hand::new(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// The participant's current visible score.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Returns whether the participant has stood.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.hand.is_standing()
    }

    /// Returns whether the participant's visible score exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }
}
