//! Pair detection and collection.
//!
//! Pairs are two cards of equal rank. The Old Maid card never pairs, not even
//! with another Old Maid, so it is always the last card left over.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// A collected pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairRecord {
    /// The shared rank.
    pub rank: u8,
    /// The two cards, in the order they were held.
    pub cards: [Card; 2],
}

impl PairRecord {
    /// Builds a record from two cards of the same rank.
    #[must_use]
    pub const fn new(first: Card, second: Card) -> Self {
        Self {
            rank: first.rank,
            cards: [first, second],
        }
    }
}

/// Finds all disjoint pairs in `cards` without removing anything.
///
/// Ranks are visited in first-appearance order. A rank held `n` times yields
/// `n / 2` pairs, built from its cards in hand order.
///
/// # Example
///
/// ```
/// use pairgames::{Card, Suit, find_pairs};
///
/// let cards = [
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Clubs, 13),
/// ];
/// let pairs = find_pairs(&cards);
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].rank, 1);
/// ```
#[must_use]
pub fn find_pairs(cards: &[Card]) -> Vec<PairRecord> {
    let mut seen: Vec<u8> = Vec::new();
    let mut pairs = Vec::new();

    for card in cards.iter().filter(|card| !card.is_old_maid()) {
        if seen.contains(&card.rank) {
            continue;
        }
        seen.push(card.rank);

        let same_rank: Vec<Card> = cards
            .iter()
            .filter(|other| !other.is_old_maid() && other.rank == card.rank)
            .copied()
            .collect();

        pairs.extend(
            same_rank
                .chunks_exact(2)
                .map(|chunk| PairRecord::new(chunk[0], chunk[1])),
        );
    }

    pairs
}

/// Removes every pair [`find_pairs`] reports from `hand` and returns them.
pub fn remove_pairs(hand: &mut Hand) -> Vec<PairRecord> {
    let pairs = find_pairs(hand.cards());

    for pair in &pairs {
        for card in pair.cards {
            hand.remove_card(card);
        }
    }

    pairs
}

/// Applies [`remove_pairs`] until the hand holds no pair.
pub fn remove_all_pairs(hand: &mut Hand) -> Vec<PairRecord> {
    let mut collected = Vec::new();

    loop {
        let pairs = remove_pairs(hand);
        if pairs.is_empty() {
            return collected;
        }
        collected.extend(pairs);
    }
}
