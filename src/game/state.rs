//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be read.
    RoundOver,
}

/// What the dealer policy requires for the current dealer hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerDecision {
    /// Below the stand threshold: the dealer draws.
    MustHit,
    /// At or above the stand threshold: the dealer stops.
    MustStand,
}
