//! Round state types.

/// Phase of the current round.
///
/// Phases advance in one direction within a round: dealing, then the
/// player's turn, then the dealer's turn, then resolved. Resetting the
/// table is the only way back to [`Dealing`](Self::Dealing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// The initial cards have not been dealt yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// The round has ended and the outcome is known.
    Resolved,
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player seat.
    Player,
    /// The dealer seat.
    Dealer,
}

/// How a resolved round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player won the round.
    PlayerWins,
    /// The dealer won the round.
    DealerWins,
    /// Both final scores were equal.
    Push,
}
