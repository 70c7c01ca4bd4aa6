//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the glyph printed for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// Court card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

/// Card rank.
///
/// Each variant is scored differently by the hand evaluator: numbers score
/// their value, faces score 10 and an ace scores 11 or 1 depending on the
/// cards dealt after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Pip card, 2 through 10.
    Number(u8),
    /// Jack, queen or king.
    Face(Face),
    /// Ace.
    Ace,
}

impl Rank {
    /// Pip ranks in ascending order.
    pub const NUMBERS: [Self; 9] = [
        Self::Number(2),
        Self::Number(3),
        Self::Number(4),
        Self::Number(5),
        Self::Number(6),
        Self::Number(7),
        Self::Number(8),
        Self::Number(9),
        Self::Number(10),
    ];

    /// Court ranks followed by the ace.
    pub const HIGH: [Self; 4] = [
        Self::Face(Face::Jack),
        Self::Face(Face::Queen),
        Self::Face(Face::King),
        Self::Ace,
    ];

    /// All thirteen ranks, numbers first.
    pub const ALL: [Self; 13] = [
        Self::Number(2),
        Self::Number(3),
        Self::Number(4),
        Self::Number(5),
        Self::Number(6),
        Self::Number(7),
        Self::Number(8),
        Self::Number(9),
        Self::Number(10),
        Self::Face(Face::Jack),
        Self::Face(Face::Queen),
        Self::Face(Face::King),
        Self::Ace,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Face(Face::Jack) => f.write_str("J"),
            Self::Face(Face::Queen) => f.write_str("Q"),
            Self::Face(Face::King) => f.write_str("K"),
            Self::Ace => f.write_str("A"),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate [`Rank::Number`] values. Numbers
    /// outside 2..=10 are accepted and score their stored value.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Prints the suit glyph, a space, then the rank (`♠ A`, `♥ 10`).
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit.symbol(), self.rank)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
