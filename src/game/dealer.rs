use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, EmptyDeckError};
use crate::hand::{BLACKJACK, Hand};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

use super::{DealerDecision, Round, RoundState};

/// Decides whether the dealer draws on `hand`.
///
/// The dealer hits below [`GameOptions::dealer_stands_at`] and stands
/// otherwise. Soft and hard totals are treated alike.
#[must_use]
pub fn dealer_decision(hand: &Hand, options: &GameOptions) -> DealerDecision {
    if options.hand_value(hand) < options.dealer_stands_at {
        DealerDecision::MustHit
    } else {
        DealerDecision::MustStand
    }
}

/// Draws into the dealer's hand until the policy says stand.
///
/// Returns the cards drawn, in order. The decision is re-evaluated after
/// every card.
///
/// # Errors
///
/// Returns [`EmptyDeckError`] if the deck runs out while the dealer must
/// still draw. The round cannot be settled after that.
pub fn run_dealer_policy(
    deck: &mut Deck,
    hand: &mut Hand,
    options: &GameOptions,
) -> Result<Vec<Card>, EmptyDeckError> {
    let mut drawn_cards = Vec::new();

    while dealer_decision(hand, options) == DealerDecision::MustHit {
        let card = deck.deal_card()?;
        hand.add_card(card);
        debug!(card = %card, dealer_value = options.hand_value(hand), "dealer draws");
        drawn_cards.push(card);
    }

    Ok(drawn_cards)
}

/// Compares two final hand values.
///
/// Checked in order: a player bust loses even when the dealer also busts,
/// then a dealer bust wins for the player, then the higher total wins and
/// equal totals tie.
#[must_use]
pub const fn resolve_values(player_value: u16, dealer_value: u16) -> Outcome {
    if player_value > BLACKJACK {
        Outcome::DealerWins
    } else if dealer_value > BLACKJACK || player_value > dealer_value {
        Outcome::PlayerWins
    } else if dealer_value > player_value {
        Outcome::DealerWins
    } else {
        Outcome::Tie
    }
}

/// Scores both hands under `options` and decides the winner.
#[must_use]
pub fn resolve_outcome(player: &Hand, dealer: &Hand, options: &GameOptions) -> Outcome {
    resolve_values(options.hand_value(player), options.hand_value(dealer))
}

impl Round {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until the policy says
    /// stand. If the player has busted the outcome is already decided and
    /// the dealer draws nothing.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw. After a deck error the round
    /// stays in dealer turn and should be abandoned.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.hole_revealed = true;

        if self.player_is_bust() {
            self.state = RoundState::RoundOver;
            return Ok(Vec::new());
        }

        let drawn_cards = run_dealer_policy(&mut self.deck, &mut self.dealer, &self.options)?;
        self.state = RoundState::RoundOver;

        Ok(drawn_cards)
    }

    /// Resolves the finished round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, ActionError> {
        if self.state != RoundState::RoundOver {
            return Err(ActionError::InvalidState);
        }

        let player_value = self.player_value();
        let dealer_value = self.options.hand_value(&self.dealer);
        let outcome = resolve_values(player_value, dealer_value);
        debug!(player_value, dealer_value, %outcome, "round resolved");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_bust: player_value > BLACKJACK,
            dealer_bust: dealer_value > BLACKJACK,
        })
    }
}
