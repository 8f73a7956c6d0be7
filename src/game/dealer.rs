use alloc::vec::Vec;

use crate::error::GameError;
use crate::event::RoundEvent;

use super::{Game, Outcome, RoundPhase, Seat};

impl Game {
    /// Plays out the dealer's turn and resolves the round.
    ///
    /// Runs as the tail of whichever command ended the player's turn; the
    /// dealer never waits for an external trigger.
    pub(super) fn run_dealer(&mut self, events: &mut Vec<RoundEvent>) -> Result<(), GameError> {
        self.phase = RoundPhase::DealerTurn;

        // The hole card comes up as soon as the dealer's turn starts.
        if self.dealer.hand().len() == 2 {
            self.reveal_dealer_hand(events);
        }

        if self.player.is_bust() {
            // The round is already decided; the dealer draws nothing.
            self.dealer.hand_mut().stand();
        } else {
            loop {
                let dealer_score = self.dealer.score();
                if dealer_score >= 17 || dealer_score > self.player.score() {
                    break;
                }
                self.deal_card(Seat::Dealer, true, events)?;
            }
            self.dealer.hand_mut().stand();
        }

        self.resolve(events);
        Ok(())
    }

    /// Turns the dealer's face-down cards face up, reporting each flip and
    /// the corrected score.
    fn reveal_dealer_hand(&mut self, events: &mut Vec<RoundEvent>) {
        let flipped = self.dealer.hand_mut().reveal_hidden();
        if flipped.is_empty() {
            return;
        }

        for card in flipped {
            events.push(RoundEvent::CardRevealed {
                seat: Seat::Dealer,
                card,
            });
        }
        events.push(RoundEvent::ScoreUpdated {
            seat: Seat::Dealer,
            score: self.dealer.score(),
        });
    }

    /// Compares the final scores and records the outcome, exactly once per
    /// round.
    fn resolve(&mut self, events: &mut Vec<RoundEvent>) {
        self.phase = RoundPhase::Resolved;
        if self.outcome.is_some() {
            return;
        }

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        let outcome = if player_score > 21 {
            Outcome::DealerWins
        } else if dealer_score > 21 {
            Outcome::PlayerWins
        } else if player_score > dealer_score {
            Outcome::PlayerWins
        } else if dealer_score > player_score {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };

        self.outcome = Some(outcome);
        events.push(RoundEvent::RoundResolved {
            outcome,
            player_score,
            dealer_score,
        });
    }
}
