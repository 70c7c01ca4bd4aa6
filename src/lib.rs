//! A heads-up blackjack rules core with optional `no_std` support.
//!
//! The crate models a 52-card deck, shuffles it with Fisher-Yates over an
//! injected random source, deals one player and one dealer, scores hands,
//! plays the dealer by a fixed policy and resolves the winner. A [`Game`]
//! owns the random generator and hands out [`Round`]s that track whose turn
//! it is.
//!
//! # Example
//!
//! ```
//! use bjcore::{ActionError, Game, GameOptions, RoundState};
//!
//! # fn main() -> Result<(), ActionError> {
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut round = game.start_round()?;
//!
//! if round.state() == RoundState::PlayerTurn {
//!     round.stand()?;
//! }
//! round.dealer_play()?;
//!
//! let result = round.showdown()?;
//! assert_eq!(result.player_value, round.player_hand().value());
//! # Ok(())
//! # }
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
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, EmptyDeckError};
pub use game::{
    DealerDecision, Game, Round, RoundState, deal_initial_hands, dealer_decision, player_hit,
    resolve_outcome, resolve_values, run_dealer_policy,
};
pub use hand::{BLACKJACK, Hand, evaluate, hand_value};
pub use options::{AceRule, GameOptions};
pub use result::{Outcome, RoundResult};
pub use shuffle::{RandomSource, shuffle};
