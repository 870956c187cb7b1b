//! The draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered pile of cards. The top of the pile is the end of the vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an unshuffled standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::create(false)
    }

    /// Creates an unshuffled deck, optionally with the Old Maid card on top.
    ///
    /// # Example
    ///
    /// ```
    /// use pairgames::Deck;
    ///
    /// assert_eq!(Deck::create(false).len(), 52);
    /// assert_eq!(Deck::create(true).len(), 53);
    /// ```
    #[must_use]
    pub fn create(with_old_maid: bool) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE + 1);

        for suit in Suit::STANDARD {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        if with_old_maid {
            cards.push(Card::OLD_MAID);
        }

        Self { cards }
    }

    /// Builds a deck that deals `draws` in order: the first card of the slice
    /// is the first one returned by [`Deck::draw`].
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
