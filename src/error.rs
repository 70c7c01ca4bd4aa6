//! Error types for deck and round operations.

use thiserror::Error;

/// A card was requested from a deck with no cards left.
///
/// Not recoverable within a round: the caller should abandon the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    NoCards(#[from] EmptyDeckError),
}
