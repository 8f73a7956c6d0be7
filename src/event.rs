//! Events reported back from engine commands.

use crate::card::Card;
use crate::game::state::{Outcome, Seat};

/// Something observable that happened while a command ran.
///
/// Engine commands return the events they produced, in order, so a caller
/// can drive a display or a log without polling the table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// A card left the shoe and joined a hand. The card carries its face
    /// state; a face-down card should be rendered as a card back.
    CardDealt {
        /// The seat that received the card.
        seat: Seat,
        /// The dealt card.
        card: Card,
    },
    /// A previously hidden card was turned face up.
    CardRevealed {
        /// The seat whose card was revealed.
        seat: Seat,
        /// The revealed card.
        card: Card,
    },
    /// A hand's visible score changed.
    ScoreUpdated {
        /// The seat whose score changed.
        seat: Seat,
        /// The new visible score.
        score: u8,
    },
    /// The round finished. Emitted exactly once per round.
    RoundResolved {
        /// Who won the round, or a push.
        outcome: Outcome,
        /// The player's final score.
        player_score: u8,
        /// The dealer's final score.
        dealer_score: u8,
    },
}
