//! Deck sorting with a caller-supplied ordering.

use core::cmp::Ordering;

use crate::card::Card;
use crate::error::SortError;

/// A total order over cards, ascending.
///
/// Non-capturing closures and the functions in [`crate::order`] coerce to
/// this type.
pub type Comparison = fn(&Card, &Card) -> Ordering;

/// Sorts a deck (of 52 or any number of cards) in ascending order.
///
/// An absent deck is left alone. The sort is stable, so cards that compare
/// equal keep their relative order.
///
/// # Errors
///
/// Returns [`SortError::MissingComparison`] if `comparison` is `None`, whether
/// or not a deck was supplied.
///
/// # Example
///
/// ```
/// use deckrs::{Card, all_cards, order, sort};
///
/// let mut deck: Vec<Card> = all_cards().collect();
/// sort(Some(&mut deck), Some(order::compare_alphabetic_suit_aces_high)).unwrap();
/// assert_eq!(deck.last().unwrap().to_string(), "Ace of Spades");
/// ```
pub fn sort(deck: Option<&mut [Card]>, comparison: Option<Comparison>) -> Result<(), SortError> {
    let comparison = comparison.ok_or(SortError::MissingComparison)?;
    if let Some(deck) = deck {
        deck.sort_by(comparison);
    }
    Ok(())
}
