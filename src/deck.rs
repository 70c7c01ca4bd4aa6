//! Deck construction and dealing.

use alloc::vec::Vec;

use tracing::trace;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::shuffle::{RandomSource, shuffle};

/// A stack of cards. The last card is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck.
    ///
    /// Pip cards come first, 2 through 10 for each suit in [`Suit::ALL`]
    /// order, then J, Q, K and A for each suit in the same order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for ranks in [&Rank::NUMBERS[..], &Rank::HIGH[..]] {
            for suit in Suit::ALL {
                for &rank in ranks {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Creates a fresh deck and shuffles it with `source`.
    ///
    /// ```
    /// use bjcore::{DECK_SIZE, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(source);
        deck
    }

    /// Creates a deck from `cards`; the last card is dealt first.
    ///
    /// No uniqueness check is made, which lets callers script any deal.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, source: &mut R) {
        shuffle(&mut self.cards, source);
        trace!(cards = self.cards.len(), "deck shuffled");
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck has no cards left.
    pub fn deal_card(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Deals a two-card hand, preserving draw order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck runs out during the deal. A
    /// card drawn before the failure stays out of the deck.
    pub fn deal_hand(&mut self) -> Result<Hand, EmptyDeckError> {
        let first = self.deal_card()?;
        let second = self.deal_card()?;
        Ok(Hand::from_cards(alloc::vec![first, second]))
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
