//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while running a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The action is not allowed in the current round phase, e.g. hitting
    /// after standing or starting a round that is already under way.
    #[error("action is not valid in the current round phase")]
    InvalidAction,
    /// The draw pile has no cards left.
    #[error("no cards left in the draw pile")]
    EmptyShoe,
}
