//! Error types for deck operations.
//!
//! Every variant signals an invalid argument: a contract violation by the
//! caller, not a condition to retry.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while constructing or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Raw rank value outside 1..=13.
    #[error("invalid rank {0}: should be Ace (1), Two (2), ... King (13)")]
    InvalidRank(u8),
    /// Raw suit value outside 1..=4.
    #[error("invalid suit {0}: should be Clubs (1), Diamonds (2), Hearts (3) or Spades (4)")]
    InvalidSuit(u8),
    /// Rank name not recognized.
    #[error("unrecognized rank name")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unrecognized suit name")]
    UnknownSuit,
    /// Text is not of the form `<Rank> of <Suit>`.
    #[error("card should be written as `<Rank> of <Suit>`")]
    Malformed,
}

/// Errors that can occur during shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// No random source was supplied.
    #[error("a random source is required to shuffle")]
    MissingRandomSource,
}

/// Errors that can occur during sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// No comparison function was supplied.
    #[error("a comparison function is required to sort")]
    MissingComparison,
}

/// Errors that can occur while checking a deck source for uniformity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UniformityError {
    /// Expected count per cell is zero.
    #[error("expected count per cell must be positive")]
    ZeroExpectation,
    /// A sampled deck has more cards than there are tracked positions.
    #[error("sampled deck has {len} cards but only {positions} positions are tracked")]
    DeckTooLong {
        /// Length of the offending deck.
        len: usize,
        /// Number of tracked positions.
        positions: usize,
    },
    /// Some cards never appeared in any sampled deck.
    #[error("expected {expected} card distributions, found {found}")]
    MissingDistributions {
        /// Number of distinct valid cards.
        expected: usize,
        /// Number of distinct cards observed.
        found: usize,
    },
    /// A card's position counts do not add up to the number of trials.
    #[error("position counts for {card} sum to {total}, expected {expected}")]
    InconsistentTotal {
        /// The card whose distribution is off.
        card: Card,
        /// Sum of its position counts.
        total: u64,
        /// Number of trials.
        expected: u64,
    },
}
