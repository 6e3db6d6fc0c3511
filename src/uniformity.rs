//! Statistical check that a deck source places every card uniformly.
//!
//! Testing whether a shuffle is random is much the same as testing a random
//! number generator, restricted to a finite set of cards. Rather than test
//! the generator, this module tests the positions it produces: for every
//! card it counts how often the card lands in each position over many
//! sampled decks, then runs a Pearson chi-squared goodness-of-fit test of
//! those counts against a uniform distribution.
//!
//! The verdict is statistical. At the default 95% level roughly one card in
//! twenty exceeds the critical value by chance, so a source is accepted
//! while fewer than `tolerance * DECK_SIZE` cards do.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Deck, all_cards, possible_different_count};
use crate::error::UniformityError;
use crate::options::UniformityOptions;
use crate::result::{CardStatistic, UniformityReport};
use crate::shuffle::shuffle_in_place;

/// Per-card, per-position occurrence counts.
#[derive(Debug, Clone)]
pub struct PositionFrequencies {
    /// Number of tracked positions.
    positions: usize,
    /// Number of decks recorded.
    decks: u64,
    /// Card -> count of occurrences at each position.
    counts: HashMap<Card, Vec<u64>>,
}

impl PositionFrequencies {
    /// Creates empty counters for decks of up to `positions` cards.
    #[must_use]
    pub fn new(positions: usize) -> Self {
        Self {
            positions,
            decks: 0,
            counts: HashMap::with_capacity(possible_different_count()),
        }
    }

    /// Counts every card of `deck` at its position.
    ///
    /// # Errors
    ///
    /// Returns [`UniformityError::DeckTooLong`] if the deck has more cards
    /// than there are tracked positions. Nothing is recorded in that case.
    pub fn record(&mut self, deck: &[Card]) -> Result<(), UniformityError> {
        if deck.len() > self.positions {
            return Err(UniformityError::DeckTooLong {
                len: deck.len(),
                positions: self.positions,
            });
        }

        let positions = self.positions;
        for (position, card) in deck.iter().enumerate() {
            let dist = self
                .counts
                .entry(*card)
                .or_insert_with(|| vec![0; positions]);
            dist[position] += 1;
        }
        self.decks += 1;

        Ok(())
    }

    /// Returns the position counts for `card`, if it has been seen.
    #[must_use]
    pub fn counts(&self, card: &Card) -> Option<&[u64]> {
        self.counts.get(card).map(Vec::as_slice)
    }

    /// Number of distinct cards seen.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of decks recorded.
    #[must_use]
    pub const fn decks(&self) -> u64 {
        self.decks
    }

    /// Number of tracked positions.
    #[must_use]
    pub const fn positions(&self) -> usize {
        self.positions
    }
}

/// Pearson's chi-squared statistic of `observed` against a constant
/// `expected` count per cell.
///
/// # Example
///
/// ```
/// use deckrs::uniformity::chi_squared;
///
/// assert_eq!(chi_squared(&[60, 60, 60], 60.0), 0.0);
/// assert_eq!(chi_squared(&[50, 70], 60.0), 200.0 / 60.0);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "occurrence counts are far below f64 precision limits"
)]
pub fn chi_squared(observed: &[u64], expected: f64) -> f64 {
    observed
        .iter()
        .map(|&count| {
            // Float arithmetic keeps the squares from overflowing.
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Samples decks from `deal` and tests each card's position distribution.
///
/// `deal` is called `options.trials()` times with one [`ChaCha8Rng`] seeded
/// from `options.seed`, so a given seed always yields the same verdict.
/// Every deck must hold each of the `DECK_SIZE` valid cards exactly once;
/// partial decks fail the sanity checks.
///
/// # Errors
///
/// Returns an error if `expected_per_cell` is zero, if `deal` returns a deck
/// longer than [`DECK_SIZE`], or if the recorded counts fail the sanity
/// checks (some card never dealt, or a card dealt more or less than once per
/// deck).
///
/// # Example
///
/// ```
/// use deckrs::{UniformityOptions, all_cards};
/// use deckrs::uniformity::verify_uniformity;
///
/// // An unshuffled deck puts every card in the same place every time.
/// let report = verify_uniformity(&UniformityOptions::default(), |_| all_cards().collect())
///     .unwrap();
/// assert!(!report.is_uniform());
/// ```
pub fn verify_uniformity<F>(
    options: &UniformityOptions,
    mut deal: F,
) -> Result<UniformityReport, UniformityError>
where
    F: FnMut(&mut ChaCha8Rng) -> Deck,
{
    if options.expected_per_cell == 0 {
        return Err(UniformityError::ZeroExpectation);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut frequencies = PositionFrequencies::new(DECK_SIZE);
    let trials = options.trials();
    for _ in 0..trials {
        let deck = deal(&mut rng);
        frequencies.record(&deck)?;
    }

    let expected_cards = possible_different_count();
    if frequencies.card_count() != expected_cards {
        return Err(UniformityError::MissingDistributions {
            expected: expected_cards,
            found: frequencies.card_count(),
        });
    }

    let expected = f64::from(options.expected_per_cell);
    let mut statistics = Vec::with_capacity(expected_cards);
    for card in all_cards() {
        let counts = frequencies
            .counts(&card)
            .ok_or(UniformityError::MissingDistributions {
                expected: expected_cards,
                found: frequencies.card_count(),
            })?;

        let total: u64 = counts.iter().sum();
        if total != trials {
            return Err(UniformityError::InconsistentTotal {
                card,
                total,
                expected: trials,
            });
        }

        let statistic = chi_squared(counts, expected);
        log::debug!("{card}\t{statistic:.4}");
        statistics.push(CardStatistic {
            card,
            chi_squared: statistic,
        });
    }

    let high_count = statistics
        .iter()
        .filter(|stat| stat.chi_squared > options.critical_value)
        .count();
    log::info!(
        "{high_count} cards' distributions have chi-squared greater than {}",
        options.critical_value
    );

    Ok(UniformityReport {
        statistics,
        critical_value: options.critical_value,
        high_count,
        max_high_count: options.max_high_count(),
    })
}

/// Runs [`verify_uniformity`] against the Fisher–Yates shuffle of a full deck.
///
/// # Errors
///
/// See [`verify_uniformity`].
pub fn verify_shuffle(options: &UniformityOptions) -> Result<UniformityReport, UniformityError> {
    verify_uniformity(options, |rng| {
        let mut deck: Deck = all_cards().collect();
        shuffle_in_place(rng, &mut deck);
        deck
    })
}
