//! Single-deck shoe with a draw pile and a discard pile.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A single 52-card deck split into a draw pile and a discard pile.
///
/// Cards are drawn from the back of the draw pile, and every drawn card is
/// recorded in the discard pile so the shoe can be rebuilt between rounds
/// without losing cards. Both piles are public so callers can inspect the
/// shoe or preset the deck order, e.g. to replay a known deal in tests.
#[derive(Debug)]
pub struct Shoe {
    /// Cards still available to draw; the next card is the last element.
    pub draw_pile: Vec<Card>,
    /// Cards handed out since the last reset, in draw order.
    pub discard_pile: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled single-deck shoe from the given seed.
    ///
    /// The same seed always produces the same card order.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut draw_pile = Vec::with_capacity(DECK_SIZE);
        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13 {
                draw_pile.push(Card::new(suit, rank));
            }
        }
        let mut shoe = Self {
            draw_pile,
            discard_pile: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.shuffle();
        shoe
    }

    /// Shuffles the draw pile in place. The discard pile is not touched.
    pub fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// Draws the next card, or `None` when the draw pile is empty.
    ///
    /// The drawn card is tracked in the discard pile so a later
    /// [`reset`](Self::reset) can recover it.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.draw_pile.pop()?;
        self.discard_pile.push(card);
        Some(card)
    }

    /// Returns every dealt card to the draw pile and turns the whole deck
    /// face down, restoring the full 52 cards.
    ///
    /// The restored deck is not shuffled; call [`shuffle`](Self::shuffle)
    /// afterwards to randomize it.
    pub fn reset(&mut self) {
        self.draw_pile.append(&mut self.discard_pile);
        for card in &mut self.draw_pile {
            card.hide();
        }
    }

    /// Number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Number of cards dealt since the last reset.
    #[must_use]
    pub fn cards_dealt(&self) -> usize {
        self.discard_pile.len()
    }
}
