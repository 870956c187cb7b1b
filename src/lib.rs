//! A Go Fish and Old Maid game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs either rule set between a
//! human player and a computer opponent: dealing, asking and fishing (Go
//! Fish), blind picks from the opponent's hand (Old Maid), pair collection,
//! and the end-of-game check.
//!
//! Rendering is left to the caller. The game reports what happened as
//! [`GameEvent`]s and waits for the caller to move its clock forward, so a
//! front end can animate every card before the next move is accepted.
//!
//! # Example
//!
//! ```
//! use pairgames::{Game, GameOptions, Prompt, Timing, Variant};
//!
//! let options = GameOptions::default().with_timing(Timing::instant());
//! let game = Game::new(Variant::OldMaid, options, 7);
//!
//! if let Some(Prompt::PickOpponentCard { count }) = game.pending_prompt() {
//!     assert!(count > 0);
//!     game.request_pick(0).unwrap();
//!     game.run_until_idle();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod pairs;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, OLD_MAID_RANK, Suit, rank_label};
pub use deck::Deck;
pub use error::RequestError;
pub use event::{GameEvent, Snapshot};
pub use game::{Game, GameState, Prompt, Scheduler, Seat, Seats, Variant};
pub use hand::Hand;
pub use options::{GameOptions, Timing};
pub use pairs::{PairRecord, find_pairs, remove_all_pairs, remove_pairs};
pub use result::{Actor, GameResult, Winner};
