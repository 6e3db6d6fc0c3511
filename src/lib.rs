//! A standard 52-card French-suited deck with an unbiased shuffle and a
//! configurable sort, plus a chi-squared check that the shuffle really is
//! unbiased.
//!
//! The crate never seeds a generator inside the shuffle path: pass any
//! [`rand::RngCore`] (for example a seeded `ChaCha8Rng`) to get a
//! reproducible permutation.
//!
//! # Example
//!
//! ```
//! use deckrs::{order, shuffle, sort};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = shuffle(Some(&mut rng)).unwrap();
//! sort(Some(&mut deck), Some(order::compare_alphabetic_suit_aces_low)).unwrap();
//! assert_eq!(deck[0].to_string(), "Ace of Clubs");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod options;
pub mod order;
pub mod result;
pub mod shuffle;
pub mod sort;
pub mod uniformity;

// Re-export main types
pub use card::{
    Card, Cards, DECK_SIZE, Deck, Rank, Suit, all_cards, possible_different_count, valid_ranks,
    valid_suits,
};
pub use error::{CardError, ShuffleError, SortError, UniformityError};
pub use options::{CHI2_CRITICAL_51_DF_95, UniformityOptions};
pub use order::{
    compare_alphabetic_suit_aces_high, compare_alphabetic_suit_aces_low, compare_rank_aces_high,
    compare_rank_kings_high,
};
pub use result::{CardStatistic, UniformityReport};
pub use shuffle::{RandomSource, shuffle, shuffle_deck, shuffle_in_place};
pub use sort::{Comparison, sort};
pub use uniformity::{PositionFrequencies, verify_shuffle, verify_uniformity};
