use alloc::vec::Vec;

use crate::error::GameError;
use crate::event::RoundEvent;

use super::{Game, RoundPhase, Seat};

impl Game {
    /// Player action: Hit (draw one face-up card).
    ///
    /// If the new total reaches 21 or more the player stands automatically
    /// and the dealer's turn runs to resolution before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the draw pile is
    /// empty.
    pub fn hit(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(GameError::InvalidAction);
        }

        let mut events = Vec::new();
        self.deal_card(Seat::Player, true, &mut events)?;

        // At 21 there is nothing left to decide; a bust ends the turn too.
        if self.player.score() >= 21 {
            self.player.hand_mut().stand();
            self.run_dealer(&mut events)?;
        }

        Ok(events)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// The dealer's turn runs to resolution before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the dealer runs
    /// the draw pile dry.
    pub fn stand(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(GameError::InvalidAction);
        }

        let mut events = Vec::new();
        self.player.hand_mut().stand();
        self.run_dealer(&mut events)?;

        Ok(events)
    }
}
