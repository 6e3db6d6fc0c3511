//! Card orderings.
//!
//! The ranking of cards varies by game and geography, so the crate never
//! picks one for you. Each function here is a total order usable as a
//! [`Comparison`](crate::sort::Comparison).

use core::cmp::Ordering;

use crate::card::{Card, Rank};

/// Compares ranks only, with King the highest rank and Ace the lowest.
#[must_use]
pub fn compare_rank_kings_high(a: &Card, b: &Card) -> Ordering {
    a.rank().cmp(&b.rank())
}

/// Compares ranks only, with Ace above King.
///
/// All relations between non-Ace ranks match [`compare_rank_kings_high`].
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use deckrs::{Card, Rank, Suit, order};
///
/// let ace = Card::new(Rank::Ace, Suit::Clubs);
/// let king = Card::new(Rank::King, Suit::Clubs);
/// assert_eq!(order::compare_rank_aces_high(&ace, &king), Ordering::Greater);
/// assert_eq!(order::compare_rank_kings_high(&ace, &king), Ordering::Less);
/// ```
#[must_use]
pub fn compare_rank_aces_high(a: &Card, b: &Card) -> Ordering {
    match (a.rank(), b.rank()) {
        (Rank::Ace, Rank::Ace) => Ordering::Equal,
        (Rank::Ace, _) => Ordering::Greater,
        (_, Rank::Ace) => Ordering::Less,
        (x, y) => x.cmp(&y),
    }
}

fn compare_suit_names(a: &Card, b: &Card) -> Ordering {
    a.suit().name().cmp(b.suit().name())
}

/// Orders by rank (Aces low), breaking ties by suit name alphabetically.
///
/// Strict over a full deck: only equal cards compare equal.
#[must_use]
pub fn compare_alphabetic_suit_aces_low(a: &Card, b: &Card) -> Ordering {
    compare_rank_kings_high(a, b).then_with(|| compare_suit_names(a, b))
}

/// Orders by rank (Aces high), breaking ties by suit name alphabetically.
#[must_use]
pub fn compare_alphabetic_suit_aces_high(a: &Card, b: &Card) -> Ordering {
    compare_rank_aces_high(a, b).then_with(|| compare_suit_names(a, b))
}
