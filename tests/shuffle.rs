//! Shuffle integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, DECK_SIZE, Deck, RandomSource, ShuffleError, all_cards, shuffle, shuffle_deck,
    shuffle_in_place,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Always picks the lowest index, so no swap ever happens.
struct AlwaysLow;

impl RandomSource for AlwaysLow {
    fn next_index(&mut self, low: usize, _high: usize) -> usize {
        low
    }
}

/// Always picks the highest index.
struct AlwaysHigh;

impl RandomSource for AlwaysHigh {
    fn next_index(&mut self, _low: usize, high: usize) -> usize {
        high
    }
}

/// Records every requested range and picks the lowest index.
#[derive(Default)]
struct Recording {
    ranges: Vec<(usize, usize)>,
}

impl RandomSource for Recording {
    fn next_index(&mut self, low: usize, high: usize) -> usize {
        self.ranges.push((low, high));
        low
    }
}

fn canonical() -> Deck {
    all_cards().collect()
}

#[test]
fn missing_random_source_is_rejected() {
    assert_eq!(
        shuffle::<ChaCha8Rng>(None).unwrap_err(),
        ShuffleError::MissingRandomSource
    );
    assert_eq!(
        shuffle_deck::<ChaCha8Rng>(None, canonical()).unwrap_err(),
        ShuffleError::MissingRandomSource
    );
}

#[test]
fn has_one_of_each_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let deck = shuffle(Some(&mut rng)).unwrap();

    assert_eq!(deck.len(), DECK_SIZE);
    for card in all_cards() {
        assert_eq!(deck.iter().filter(|&&c| c == card).count(), 1, "card={card}");
    }

    let expected: HashSet<Card> = all_cards().collect();
    let actual: HashSet<Card> = deck.into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut r1 = ChaCha8Rng::seed_from_u64(12345);
    let mut r2 = ChaCha8Rng::seed_from_u64(12345);

    for _ in 0..10 {
        assert_eq!(shuffle(Some(&mut r1)).unwrap(), shuffle(Some(&mut r2)).unwrap());
    }
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut r1 = ChaCha8Rng::seed_from_u64(1);
    let mut r2 = ChaCha8Rng::seed_from_u64(2);

    assert_ne!(shuffle(Some(&mut r1)).unwrap(), shuffle(Some(&mut r2)).unwrap());
}

#[test]
fn shuffle_changes_the_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    assert_ne!(shuffle(Some(&mut rng)).unwrap(), canonical());
}

#[test]
fn draws_one_index_per_position_from_the_unshuffled_tail() {
    let mut source = Recording::default();
    let deck = shuffle(Some(&mut source)).unwrap();

    let expected: Vec<(usize, usize)> = (0..DECK_SIZE - 1).map(|i| (i, DECK_SIZE - 1)).collect();
    assert_eq!(source.ranges, expected);
    assert_eq!(deck, canonical());
}

#[test]
fn lowest_draws_leave_the_deck_in_order() {
    let deck = shuffle(Some(&mut AlwaysLow)).unwrap();
    assert_eq!(deck, canonical());
}

#[test]
fn highest_draws_rotate_the_deck() {
    let deck = shuffle(Some(&mut AlwaysHigh)).unwrap();
    let original = canonical();

    assert_eq!(deck[0], original[DECK_SIZE - 1]);
    assert_eq!(&deck[1..], &original[..DECK_SIZE - 1]);
}

#[test]
fn shuffle_deck_keeps_partial_decks_and_duplicates() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let ace = Card::from_raw(1, 4).unwrap();
    let partial = vec![ace, ace, Card::from_raw(13, 1).unwrap()];

    let mut shuffled = shuffle_deck(Some(&mut rng), partial.clone()).unwrap();
    assert_eq!(shuffled.len(), 3);
    assert_eq!(shuffled.iter().filter(|&&c| c == ace).count(), 2);

    shuffled.sort_by_key(Card::index);
    let mut sorted = partial;
    sorted.sort_by_key(Card::index);
    assert_eq!(shuffled, sorted);
}

#[test]
fn shuffle_in_place_handles_tiny_slices() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let mut empty: Vec<u8> = Vec::new();
    shuffle_in_place(&mut rng, &mut empty);
    assert!(empty.is_empty());

    let mut single = [7_u8];
    shuffle_in_place(&mut rng, &mut single);
    assert_eq!(single, [7]);
}

#[test]
fn shuffle_in_place_matches_shuffle() {
    let mut r1 = ChaCha8Rng::seed_from_u64(77);
    let mut r2 = ChaCha8Rng::seed_from_u64(77);

    let mut deck = canonical();
    shuffle_in_place(&mut r1, &mut deck);
    assert_eq!(deck, shuffle(Some(&mut r2)).unwrap());
}
