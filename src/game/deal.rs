use alloc::vec::Vec;

use crate::error::GameError;
use crate::event::RoundEvent;
use crate::hand::Participant;

use super::{Game, RoundPhase, Seat};

impl Game {
    /// Deals the opening hands and starts the round.
    ///
    /// Two face-up cards go to the player, then one face-up and one
    /// face-down card to the dealer. Play then passes to the player. If the
    /// opening cards already score 21 the player stands at once and the
    /// dealer's turn runs to resolution before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already under way or the draw pile
    /// runs out mid-deal.
    pub fn start_round(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        if self.phase != RoundPhase::Dealing {
            return Err(GameError::InvalidAction);
        }

        let mut events = Vec::new();
        self.deal_card(Seat::Player, true, &mut events)?;
        self.deal_card(Seat::Player, true, &mut events)?;
        self.deal_card(Seat::Dealer, true, &mut events)?;
        self.deal_card(Seat::Dealer, false, &mut events)?;

        if self.player.score() >= 21 {
            // Dealt 21; the player never gets a turn.
            self.player.hand_mut().stand();
            self.run_dealer(&mut events)?;
        } else {
            self.phase = RoundPhase::PlayerTurn;
        }

        Ok(events)
    }

    /// Clears the table and deals a fresh round.
    ///
    /// Allowed in any phase, even mid-round. Every dealt card goes back
    /// into the shoe face down, the full deck is reshuffled, both hands
    /// start empty, and the opening deal runs again.
    ///
    /// # Errors
    ///
    /// Returns an error if the restored draw pile cannot cover the opening
    /// deal, which can only happen when the piles were preset with fewer
    /// than four cards in total.
    pub fn reset_round(&mut self) -> Result<Vec<RoundEvent>, GameError> {
        self.shoe.reset();
        self.shoe.shuffle();

        self.player = Participant::new(&self.options.player_name);
        self.dealer = Participant::new(&self.options.dealer_name);
        self.phase = RoundPhase::Dealing;
        self.outcome = None;

        self.start_round()
    }
}
