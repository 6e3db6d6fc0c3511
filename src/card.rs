//! Card types and deck enumeration.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

use crate::error::CardError;

/// Card rank, from Ace (low) to King.
///
/// The discriminants are the raw values accepted by [`Rank::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the English name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Zero-based position in [`Rank::ALL`].
    const fn ordinal(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(s))
            .ok_or(CardError::UnknownRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs.
    Clubs = 1,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    const fn ordinal(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=4 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(CardError::UnknownSuit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of distinct valid cards, derived from the rank and suit sets.
pub const DECK_SIZE: usize = possible_different_count();

/// An ordered sequence of cards.
///
/// Nothing prevents duplicates or partial decks; only [`all_cards`] promises
/// one of each.
pub type Deck = Vec<Card>;

/// A French-suited playing card. Jokers are not supported.
///
/// Cards are plain values: two cards with the same rank and suit are
/// indistinguishable. `Card` has no `Ord` impl; pick an
/// ordering from [`crate::order`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Ace, Suit::Spades);
    /// assert_eq!(card.to_string(), "Ace of Spades");
    /// ```
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from raw rank (1..=13) and suit (1..=4) values.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] when a
    /// value is zero or out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, CardError, Rank, Suit};
    ///
    /// assert_eq!(Card::from_raw(13, 3), Ok(Card::new(Rank::King, Suit::Hearts)));
    /// assert_eq!(Card::from_raw(0, 3), Err(CardError::InvalidRank(0)));
    /// ```
    pub fn from_raw(rank: u8, suit: u8) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Position of this card in the canonical [`all_cards`] order.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.suit.ordinal() * Rank::ALL.len() + self.rank.ordinal()
    }

    /// Inverse of [`Card::index`]. Returns `None` for `index >= DECK_SIZE`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        Some(Self::new(
            Rank::ALL[index % Rank::ALL.len()],
            Suit::ALL[index / Rank::ALL.len()],
        ))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the `"<Rank> of <Suit>"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.trim().split_once(" of ").ok_or(CardError::Malformed)?;
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

/// Iterator over every valid card in canonical order.
///
/// Suit-major (Clubs, Diamonds, Hearts, Spades), Ace to King within a suit.
#[derive(Debug, Clone)]
pub struct Cards {
    next: usize,
}

impl Iterator for Cards {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let card = Card::from_index(self.next)?;
        self.next += 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = DECK_SIZE.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cards {}

impl FusedIterator for Cards {}

/// Enumerates every valid rank in canonical order.
pub fn valid_ranks() -> impl ExactSizeIterator<Item = Rank> + Clone {
    Rank::ALL.into_iter()
}

/// Enumerates every valid suit in canonical order.
pub fn valid_suits() -> impl ExactSizeIterator<Item = Suit> + Clone {
    Suit::ALL.into_iter()
}

/// Enumerates all valid cards, each exactly once.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, all_cards};
///
/// let deck: Vec<Card> = all_cards().collect();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Clubs));
/// ```
#[must_use]
pub const fn all_cards() -> Cards {
    Cards { next: 0 }
}

/// How many unique, valid cards exist (52).
#[must_use]
pub const fn possible_different_count() -> usize {
    Rank::ALL.len() * Suit::ALL.len()
}
