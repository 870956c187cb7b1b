//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// The cards held by one actor.
///
/// Order carries no game meaning, but it is kept stable so pair detection is
/// deterministic for a given sequence of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand, keeping their order.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Removes and returns every card of the given rank.
    pub fn take_rank(&mut self, rank: u8) -> Vec<Card> {
        let mut taken = Vec::new();
        self.cards.retain(|card| {
            if card.rank == rank {
                taken.push(*card);
                false
            } else {
                true
            }
        });
        taken
    }

    /// Removes and returns the card at `index`.
    pub fn take_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Removes one instance of `card`. Returns whether it was present.
    pub fn remove_card(&mut self, card: Card) -> bool {
        self.cards
            .iter()
            .position(|held| *held == card)
            .map(|index| self.cards.remove(index))
            .is_some()
    }

    /// Returns whether the hand holds at least one card of `rank`.
    #[must_use]
    pub fn has_rank(&self, rank: u8) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    /// Returns how many cards of `rank` the hand holds.
    #[must_use]
    pub fn count_rank(&self, rank: u8) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns the distinct ranks held, in first-appearance order.
    #[must_use]
    pub fn ranks(&self) -> Vec<u8> {
        let mut ranks = Vec::new();
        for card in &self.cards {
            if !ranks.contains(&card.rank) {
                ranks.push(card.rank);
            }
        }
        ranks
    }

    /// Reorders the hand uniformly at random.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
