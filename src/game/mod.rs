//! Game engine and round flow.

use alloc::vec::Vec;

use crate::error::GameError;
use crate::event::RoundEvent;
use crate::hand::Participant;
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{Outcome, RoundPhase, Seat};

/// A single-deck blackjack round engine for one player and the dealer.
///
/// The game owns the shoe, both participants, and the round phase. Commands
/// take `&mut self`, run the whole cascade they trigger (including the
/// dealer's turn when the player's turn ends), and return the
/// [`RoundEvent`]s they produced, in order.
pub struct Game {
    /// The shoe cards are drawn from.
    pub shoe: Shoe,
    /// Table options.
    pub options: GameOptions,
    /// The player seat.
    player: Participant,
    /// The dealer seat.
    dealer: Participant,
    /// Current phase of the round.
    phase: RoundPhase,
    /// Outcome of the round, set exactly once when the round resolves.
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a new table with the given seed.
    ///
    /// The shoe is shuffled deterministically from the seed and the table
    /// waits in [`RoundPhase::Dealing`] for [`start_round`](Self::start_round).
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions, RoundPhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), RoundPhase::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let player = Participant::new(&options.player_name);
        let dealer = Participant::new(&options.dealer_name);

        Self {
            shoe: Shoe::new(seed),
            options,
            player,
            dealer,
            phase: RoundPhase::Dealing,
            outcome: None,
        }
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player seat.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer seat.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the participant at the given seat.
    #[must_use]
    pub const fn participant(&self, seat: Seat) -> &Participant {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    const fn participant_mut(&mut self, seat: Seat) -> &mut Participant {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }

    /// Returns the outcome of the round, or `None` while it is still being
    /// played.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the number of cards remaining in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.cards_remaining()
    }

    /// Draws a card from the shoe into the given seat's hand.
    fn deal_card(
        &mut self,
        seat: Seat,
        face_up: bool,
        events: &mut Vec<RoundEvent>,
    ) -> Result<(), GameError> {
        let mut card = self.shoe.draw().ok_or(GameError::EmptyShoe)?;
        if face_up {
            card.reveal();
        }

        let hand = self.participant_mut(seat).hand_mut();
        hand.add_card(card);
        let score = hand.score();

        events.push(RoundEvent::CardDealt { seat, card });
        events.push(RoundEvent::ScoreUpdated { seat, score });
        Ok(())
    }
}
