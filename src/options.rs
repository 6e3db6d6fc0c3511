//! Uniformity check configuration.

use crate::card::DECK_SIZE;

/// Critical chi-squared value for 51 degrees of freedom at the 95% level.
///
/// A probability Q = 0.05 of non-chance occurrence for d = 51.
pub const CHI2_CRITICAL_51_DF_95: f64 = 68.6692;

/// Configuration options for a uniformity check.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::UniformityOptions;
///
/// let options = UniformityOptions::default()
///     .with_seed(7)
///     .with_expected_per_cell(100);
/// assert_eq!(options.trials(), 100 * 52);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UniformityOptions {
    /// Seed of the generator handed to the deck source.
    pub seed: u64,
    /// Expected count in each (card, position) cell under uniformity.
    ///
    /// The chi-squared approximation needs this to be at least 5.
    pub expected_per_cell: u32,
    /// Statistic above which a card's distribution counts as non-uniform.
    pub critical_value: f64,
    /// Fraction of cards allowed to exceed the critical value by chance.
    pub tolerance: f64,
}

impl Default for UniformityOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            expected_per_cell: 60,
            critical_value: CHI2_CRITICAL_51_DF_95,
            tolerance: 0.05,
        }
    }
}

impl UniformityOptions {
    /// Sets the generator seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::UniformityOptions;
    ///
    /// let options = UniformityOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the expected count per cell.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::UniformityOptions;
    ///
    /// let options = UniformityOptions::default().with_expected_per_cell(5);
    /// assert_eq!(options.expected_per_cell, 5);
    /// ```
    #[must_use]
    pub const fn with_expected_per_cell(mut self, expected: u32) -> Self {
        self.expected_per_cell = expected;
        self
    }

    /// Sets the critical chi-squared value.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::UniformityOptions;
    ///
    /// let options = UniformityOptions::default().with_critical_value(77.3860);
    /// assert_eq!(options.critical_value, 77.3860);
    /// ```
    #[must_use]
    pub const fn with_critical_value(mut self, critical_value: f64) -> Self {
        self.critical_value = critical_value;
        self
    }

    /// Sets the fraction of cards allowed above the critical value.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::UniformityOptions;
    ///
    /// let options = UniformityOptions::default().with_tolerance(0.01);
    /// assert_eq!(options.tolerance, 0.01);
    /// ```
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Number of decks sampled: `expected_per_cell * DECK_SIZE`.
    #[must_use]
    pub fn trials(&self) -> u64 {
        u64::from(self.expected_per_cell) * DECK_SIZE as u64
    }

    /// Exclusive bound on how many of the `DECK_SIZE` cards may exceed the
    /// critical value (2.6 for the defaults).
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "card counts are far below f64 precision limits"
    )]
    pub fn max_high_count(&self) -> f64 {
        self.tolerance * DECK_SIZE as f64
    }
}
