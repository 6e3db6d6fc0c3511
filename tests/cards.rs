//! Card model integration tests.

use std::cmp::Ordering;
use std::collections::HashSet;

use deckrs::{
    Card, CardError, DECK_SIZE, Rank, Suit, all_cards, compare_rank_aces_high,
    compare_rank_kings_high, possible_different_count, valid_ranks, valid_suits,
};

const ARBITRARY_SUIT: Suit = Suit::Clubs;

#[test]
fn fifty_two_standard_cards() {
    assert_eq!(possible_different_count(), 52);
    assert_eq!(DECK_SIZE, possible_different_count());
    assert_eq!(
        possible_different_count(),
        valid_ranks().count() * valid_suits().count()
    );
}

#[test]
fn zero_rank_is_rejected() {
    assert_eq!(Card::from_raw(0, 1), Err(CardError::InvalidRank(0)));
}

#[test]
fn out_of_range_rank_is_rejected() {
    assert_eq!(Card::from_raw(14, 1), Err(CardError::InvalidRank(14)));
    assert_eq!(Rank::try_from(u8::MAX), Err(CardError::InvalidRank(u8::MAX)));
}

#[test]
fn zero_suit_is_rejected() {
    assert_eq!(Card::from_raw(1, 0), Err(CardError::InvalidSuit(0)));
}

#[test]
fn out_of_range_suit_is_rejected() {
    assert_eq!(Card::from_raw(1, 5), Err(CardError::InvalidSuit(5)));
}

#[test]
fn all_valid_inputs_are_allowed() {
    for (rank_value, rank) in (1..=13).zip(valid_ranks()) {
        for (suit_value, suit) in (1..=4).zip(valid_suits()) {
            let card = Card::from_raw(rank_value, suit_value).unwrap();
            assert_eq!(card, Card::new(rank, suit));
            assert_eq!(card.rank(), rank);
            assert_eq!(card.suit(), suit);
        }
    }
}

#[test]
fn all_cards_yields_each_card_once() {
    let deck: Vec<Card> = all_cards().collect();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(all_cards().len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck[12], Card::new(Rank::King, Suit::Clubs));
    assert_eq!(deck[13], Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(deck[DECK_SIZE - 1], Card::new(Rank::King, Suit::Spades));
}

#[test]
fn enumeration_is_restartable_and_stable() {
    let first: Vec<Card> = all_cards().collect();
    let second: Vec<Card> = all_cards().collect();
    assert_eq!(first, second);

    let mut cards = all_cards();
    cards.nth(10);
    let resumed: Vec<Card> = cards.clone().collect();
    assert_eq!(resumed, first[11..].to_vec());
    assert_eq!(cards.len(), DECK_SIZE - 11);

    let ranks = valid_ranks();
    assert_eq!(ranks.clone().count(), 13);
    assert_eq!(ranks.collect::<Vec<_>>(), Rank::ALL.to_vec());
}

#[test]
fn index_matches_enumeration_order() {
    for (i, card) in all_cards().enumerate() {
        assert_eq!(card.index(), i);
        assert_eq!(Card::from_index(i), Some(card));
    }
    assert_eq!(Card::from_index(DECK_SIZE), None);
}

#[test]
fn equal_cards_are_interchangeable() {
    let a = Card::new(Rank::Queen, Suit::Hearts);
    let b = Card::from_raw(12, 3).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, Card::new(Rank::Queen, Suit::Spades));

    let mut set = HashSet::new();
    assert!(set.insert(a));
    assert!(!set.insert(b));
}

#[test]
fn display_renders_rank_of_suit() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
    assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "Ten of Diamonds");
}

#[test]
fn display_round_trips_through_parse() {
    for card in all_cards() {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
    assert_eq!(
        "  queen of hearts ".parse::<Card>(),
        Ok(Card::new(Rank::Queen, Suit::Hearts))
    );
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!("Joker".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("Eleven of Clubs".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!("Ace of Stars".parse::<Card>(), Err(CardError::UnknownSuit));
    assert_eq!("None".parse::<Suit>(), Err(CardError::UnknownSuit));
}

#[test]
fn kings_high_follows_ordinal_rank() {
    for x_rank in valid_ranks() {
        let x = Card::new(x_rank, ARBITRARY_SUIT);
        for y_rank in valid_ranks() {
            let y = Card::new(y_rank, Suit::Spades);
            assert_eq!(compare_rank_kings_high(&x, &y), (x_rank as u8).cmp(&(y_rank as u8)));
        }
    }
}

#[test]
fn aces_high_beats_all_ranks() {
    for x_rank in valid_ranks() {
        let x = Card::new(x_rank, ARBITRARY_SUIT);
        for y_rank in valid_ranks() {
            let y = Card::new(y_rank, ARBITRARY_SUIT);
            let result = compare_rank_aces_high(&x, &y);
            if x_rank == y_rank {
                assert_eq!(result, Ordering::Equal);
            } else if x_rank == Rank::Ace {
                assert_eq!(result, Ordering::Greater, "x={x}, y={y}");
            } else if y_rank == Rank::Ace {
                assert_eq!(result, Ordering::Less, "x={x}, y={y}");
            } else {
                assert_eq!(result, compare_rank_kings_high(&x, &y), "x={x}, y={y}");
                assert_ne!(result, Ordering::Equal, "x={x}, y={y}");
            }
        }
    }
}

#[test]
fn rank_comparisons_ignore_suit() {
    let a = Card::new(Rank::Seven, Suit::Clubs);
    let b = Card::new(Rank::Seven, Suit::Spades);
    assert_eq!(compare_rank_kings_high(&a, &b), Ordering::Equal);
    assert_eq!(compare_rank_aces_high(&a, &b), Ordering::Equal);
}
