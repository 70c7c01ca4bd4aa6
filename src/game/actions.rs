use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{Round, RoundState, player_hit};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Hands the turn to the dealer once the player busts or reaches 21.
    pub(super) fn end_player_turn_if_done(&mut self) {
        if self.state == RoundState::PlayerTurn && self.player_value() >= BLACKJACK {
            debug!(player_value = self.player_value(), "player turn over");
            self.state = RoundState::DealerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting or reaching 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = player_hit(&mut self.deck, &mut self.player)?;
        debug!(card = %card, player_value = self.player_value(), "player hits");

        self.end_player_turn_if_done();
        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(player_value = self.player_value(), "player stands");
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
