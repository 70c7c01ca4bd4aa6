//! Game configuration options.

use crate::hand::{Hand, evaluate};

/// How aces are valued when a hand holds more than one way to count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AceRule {
    /// Each ace counts 11 when the cards dealt after it total 10 or less,
    /// otherwise 1. Cards dealt before an ace never change its value, so
    /// `9 A 5` scores 25 and `A 5 A 5` scores 22.
    #[default]
    TrailingCards,
    /// The highest total that does not bust, if any: every ace starts at 11
    /// and is dropped to 1 while the hand is over 21.
    BestTotal,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::{AceRule, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(18)
///     .with_ace_rule(AceRule::BestTotal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Lowest dealer total at which the dealer stops drawing.
    pub dealer_stands_at: u16,
    /// Ace valuation used for every hand in the round.
    pub ace_rule: AceRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            ace_rule: AceRule::TrailingCards,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u16) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets the ace valuation rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{AceRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_ace_rule(AceRule::BestTotal);
    /// assert_eq!(options.ace_rule, AceRule::BestTotal);
    /// ```
    #[must_use]
    pub const fn with_ace_rule(mut self, rule: AceRule) -> Self {
        self.ace_rule = rule;
        self
    }

    /// Scores `hand` under the configured ace rule.
    #[must_use]
    pub fn hand_value(&self, hand: &Hand) -> u16 {
        evaluate(hand.cards(), self.ace_rule)
    }
}
