//! A single-deck blackjack (21) round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! the opening deal, the player's hit-or-stand turn, the dealer's drawing
//! rules, and resolution. Every command reports what happened through
//! [`RoundEvent`]s, so a frontend never has to poll the table.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, RoundPhase};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let events = game.start_round()?;
//! assert!(!events.is_empty());
//!
//! if game.phase() == RoundPhase::PlayerTurn {
//!     let _ = game.stand()?;
//! }
//! assert!(game.outcome().is_some());
//! # Ok::<(), twentyone::GameError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::GameError;
pub use event::RoundEvent;
pub use game::{Game, Outcome, RoundPhase, Seat};
pub use hand::{Hand, Participant};
pub use options::GameOptions;
pub use shoe::Shoe;
