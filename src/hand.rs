//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::options::AceRule;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u16 = 21;

const FACE_POINTS: u16 = 10;
const SOFT_ACE: u16 = 11;
const HARD_ACE: u16 = 1;

/// Calculates the value of a hand.
///
/// Cards are scored back to front. Numbers add their value and faces add 10.
/// An ace adds 11 if the cards after it plus 11 stay at or under 21, and 1
/// otherwise. Each ace is therefore decided against the cards that follow
/// it only, which is not always the best total for hands holding several
/// aces (see [`AceRule`]). An empty hand is worth 0.
///
/// ```
/// use bjcore::{Card, Rank, Suit, hand_value};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Number(4)),
///     Card::new(Suit::Diamonds, Rank::Number(9)),
/// ];
/// assert_eq!(hand_value(&hand), 14);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    cards.iter().rev().fold(0, |rest, card| match card.rank {
        Rank::Number(pips) => rest.saturating_add(u16::from(pips)),
        Rank::Face(_) => rest.saturating_add(FACE_POINTS),
        Rank::Ace => {
            let soft = rest.saturating_add(SOFT_ACE);
            if soft <= BLACKJACK {
                soft
            } else {
                rest.saturating_add(HARD_ACE)
            }
        }
    })
}

fn best_total(cards: &[Card]) -> u16 {
    let mut value: u16 = 0;
    let mut soft_aces: usize = 0;

    for card in cards {
        let points = match card.rank {
            Rank::Number(pips) => u16::from(pips),
            Rank::Face(_) => FACE_POINTS,
            Rank::Ace => {
                soft_aces += 1;
                SOFT_ACE
            }
        };
        value = value.saturating_add(points);
    }

    while value > BLACKJACK && soft_aces > 0 {
        value -= SOFT_ACE - HARD_ACE;
        soft_aces -= 1;
    }

    value
}

/// Calculates the value of a hand under the given ace rule.
#[must_use]
pub fn evaluate(cards: &[Card], rule: AceRule) -> u16 {
    match rule {
        AceRule::TrailingCards => hand_value(cards),
        AceRule::BestTotal => best_total(cards),
    }
}

/// A hand held by the player or the dealer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand with [`hand_value`].
    #[must_use]
    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Calculates the value of the hand under `rule`.
    #[must_use]
    pub fn value_with(&self, rule: AceRule) -> u16 {
        evaluate(&self.cards, rule)
    }

    /// Returns whether the hand is over 21 under `rule`.
    ///
    /// ```
    /// use bjcore::{AceRule, Card, Hand, Rank, Suit};
    ///
    /// let hand = Hand::from_cards(vec![
    ///     Card::new(Suit::Hearts, Rank::Number(9)),
    ///     Card::new(Suit::Spades, Rank::Ace),
    ///     Card::new(Suit::Clubs, Rank::Number(5)),
    /// ]);
    /// assert!(hand.is_bust(AceRule::TrailingCards));
    /// assert!(!hand.is_bust(AceRule::BestTotal));
    /// ```
    #[must_use]
    pub fn is_bust(&self, rule: AceRule) -> bool {
        self.value_with(rule) > BLACKJACK
    }

    /// Returns whether the hand is worth exactly 21 under `rule`.
    #[must_use]
    pub fn is_twenty_one(&self, rule: AceRule) -> bool {
        self.value_with(rule) == BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards worth 21.
    #[must_use]
    pub fn is_natural(&self, rule: AceRule) -> bool {
        self.cards.len() == 2 && self.is_twenty_one(rule)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
