//! Fisher–Yates shuffling over a caller-supplied random source.

use rand::{Rng, RngCore};

use crate::card::{Deck, all_cards};
use crate::error::ShuffleError;

/// A source of uniformly distributed indices.
///
/// Every [`RngCore`] is a source, so any seedable `rand` generator can be
/// passed straight to [`shuffle`]. The crate never creates or seeds one of
/// its own.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn next_index(&mut self, low: usize, high: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_index(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

/// Shuffles a slice in place.
///
/// For each position `i` except the last, a position `j` is drawn from
/// `i..len` and the two are swapped. Given a uniform source, each of the
/// `len!` permutations is equally likely.
pub fn shuffle_in_place<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let j = rng.next_index(i, len - 1);
        if i != j {
            items.swap(i, j);
        }
    }
}

/// Randomly shuffles a standard deck of 52 playing cards.
///
/// # Errors
///
/// Returns [`ShuffleError::MissingRandomSource`] if `rng` is `None`.
///
/// # Example
///
/// ```
/// use deckrs::{DECK_SIZE, shuffle};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let deck = shuffle(Some(&mut rng)).unwrap();
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
pub fn shuffle<R: RandomSource + ?Sized>(rng: Option<&mut R>) -> Result<Deck, ShuffleError> {
    shuffle_deck(rng, all_cards().collect())
}

/// Shuffles the given deck, returning it in its new order.
///
/// # Errors
///
/// Returns [`ShuffleError::MissingRandomSource`] if `rng` is `None`.
pub fn shuffle_deck<R: RandomSource + ?Sized>(
    rng: Option<&mut R>,
    mut deck: Deck,
) -> Result<Deck, ShuffleError> {
    let rng = rng.ok_or(ShuffleError::MissingRandomSource)?;
    shuffle_in_place(rng, &mut deck);
    Ok(deck)
}
