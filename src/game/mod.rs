//! Game engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::{Hand, evaluate};
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod state;

pub use dealer::{dealer_decision, resolve_outcome, resolve_values, run_dealer_policy};
pub use state::{DealerDecision, RoundState};

/// A blackjack game that owns the random generator and starts rounds.
///
/// The generator is seeded once and shared by every round this game
/// starts, so a seed reproduces the whole session.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds a fresh 52-card deck shuffled with the game's generator.
    pub fn build_shuffled_deck(&mut self) -> Deck {
        Deck::shuffled(&mut self.rng)
    }

    /// Shuffles a fresh deck and deals a new round.
    ///
    /// # Errors
    ///
    /// Never fails with a full deck; the error is kept for parity with
    /// [`Round::from_deck`].
    pub fn start_round(&mut self) -> Result<Round, EmptyDeckError> {
        let deck = self.build_shuffled_deck();
        Round::from_deck(deck, self.options)
    }
}

/// Deals the player's hand, then the dealer's, two cards each.
///
/// # Errors
///
/// Returns [`EmptyDeckError`] if the deck runs out before four cards are
/// dealt.
pub fn deal_initial_hands(deck: &mut Deck) -> Result<(Hand, Hand), EmptyDeckError> {
    let player = deck.deal_hand()?;
    let dealer = deck.deal_hand()?;
    Ok((player, dealer))
}

/// Draws one card into `hand` and returns it.
///
/// # Errors
///
/// Returns [`EmptyDeckError`] if the deck is empty; `hand` is left as it was.
pub fn player_hit(deck: &mut Deck, hand: &mut Hand) -> Result<Card, EmptyDeckError> {
    let card = deck.deal_card()?;
    hand.add_card(card);
    Ok(card)
}

/// A single heads-up round: one deck, the player's hand and the dealer's.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to deal.
    deck: Deck,
    /// Options the round was dealt with.
    options: GameOptions,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Whether the dealer's second card is face up.
    hole_revealed: bool,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Deals a round from `deck`, which is used as is (no shuffle).
    ///
    /// A player dealt 21 has nothing to decide, so the round opens on the
    /// dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck holds fewer than four cards.
    pub fn from_deck(mut deck: Deck, options: GameOptions) -> Result<Self, EmptyDeckError> {
        let (player, dealer) = deal_initial_hands(&mut deck)?;

        let mut round = Self {
            deck,
            options,
            player,
            dealer,
            hole_revealed: false,
            state: RoundState::PlayerTurn,
        };

        debug!(
            player_value = round.player_value(),
            dealer_up = round.dealer_visible_value(),
            "round dealt"
        );
        round.end_player_turn_if_done();

        Ok(round)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the options the round was dealt with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.first()
    }

    /// Returns whether the dealer's hole card has been turned over.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the player's hand value under the round's ace rule.
    #[must_use]
    pub fn player_value(&self) -> u16 {
        self.options.hand_value(&self.player)
    }

    /// Returns whether the player is over 21 under the round's ace rule.
    #[must_use]
    pub fn player_is_bust(&self) -> bool {
        self.player.is_bust(self.options.ace_rule)
    }

    /// Returns whether the player holds exactly 21 under the round's ace rule.
    #[must_use]
    pub fn player_has_twenty_one(&self) -> bool {
        self.player.is_twenty_one(self.options.ace_rule)
    }

    /// Returns whether the player was dealt a natural under the round's ace rule.
    #[must_use]
    pub fn player_has_natural(&self) -> bool {
        self.player.is_natural(self.options.ace_rule)
    }

    /// Returns the dealer value the player is allowed to see.
    ///
    /// Only the up card counts until the hole card is revealed.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u16 {
        if self.hole_revealed {
            self.options.hand_value(&self.dealer)
        } else {
            self.dealer_up_card()
                .map_or(0, |card| evaluate(core::slice::from_ref(card), self.options.ace_rule))
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
