//! Shuffles a deck, sorts it back, and checks the shuffle for bias.
//!
//! Usage: `cargo run --example shuffle_and_sort -- [seed] [aces-low|aces-high]`

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{
    Card, Comparison, Rank, Suit, UniformityOptions, compare_alphabetic_suit_aces_high,
    compare_alphabetic_suit_aces_low, shuffle, sort, verify_shuffle,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let (order_name, comparison): (&str, Comparison) = match args.next().as_deref() {
        Some("aces-high") => ("aces high", compare_alphabetic_suit_aces_high as Comparison),
        _ => ("aces low", compare_alphabetic_suit_aces_low as Comparison),
    };

    println!("Seed {seed}");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = match shuffle(Some(&mut rng)) {
        Ok(deck) => deck,
        Err(err) => {
            println!("Shuffle error: {err}");
            return;
        }
    };
    println!("Shuffled:\n{}", format_deck(&deck));

    if let Err(err) = sort(Some(&mut deck), Some(comparison)) {
        println!("Sort error: {err}");
        return;
    }
    println!("Sorted ({order_name}):\n{}", format_deck(&deck));

    let options = UniformityOptions::default().with_seed(seed);
    match verify_shuffle(&options) {
        Ok(report) => {
            println!(
                "{} of {} cards have chi-squared above {:.4} (limit {:.1}): {}",
                report.high_count,
                report.statistics.len(),
                report.critical_value,
                report.max_high_count,
                if report.is_uniform() {
                    "uniform"
                } else {
                    "NOT uniform"
                }
            );
            for stat in report.high_cards() {
                println!("  {}: {:.4}", stat.card, stat.chi_squared);
            }
        }
        Err(err) => println!("Uniformity error: {err}"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_deck(deck: &[Card]) -> String {
    deck.chunks(13)
        .map(|row| row.iter().map(format_card).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank() {
        Rank::Ace => "A".to_string(),
        Rank::Ten => "T".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => (other as u8).to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
