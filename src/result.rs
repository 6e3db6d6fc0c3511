//! Uniformity check results.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Chi-squared statistic for one card's position distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStatistic {
    /// The card.
    pub card: Card,
    /// `Σ (observed − expected)² / expected` over every position.
    pub chi_squared: f64,
}

/// Result of a uniformity check.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformityReport {
    /// One statistic per card, in canonical card order.
    pub statistics: Vec<CardStatistic>,
    /// Critical value the statistics were compared against.
    pub critical_value: f64,
    /// Number of cards whose statistic exceeds the critical value.
    pub high_count: usize,
    /// Exclusive upper bound on `high_count` for a uniform verdict.
    pub max_high_count: f64,
}

impl UniformityReport {
    /// Returns whether the sampled decks look position-uniform.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "card counts are far below f64 precision limits"
    )]
    pub fn is_uniform(&self) -> bool {
        (self.high_count as f64) < self.max_high_count
    }

    /// Cards whose statistic exceeds the critical value.
    pub fn high_cards(&self) -> impl Iterator<Item = &CardStatistic> {
        self.statistics
            .iter()
            .filter(|stat| stat.chi_squared > self.critical_value)
    }

    /// Largest statistic observed, or `None` for an empty report.
    #[must_use]
    pub fn max_chi_squared(&self) -> Option<f64> {
        self.statistics
            .iter()
            .map(|stat| stat.chi_squared)
            .reduce(f64::max)
    }
}
