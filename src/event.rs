//! Notifications for the presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameState, Prompt, Variant};
use crate::pairs::PairRecord;
use crate::result::{Actor, GameResult};

/// Everything a front end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The rule set in play.
    pub variant: Variant,
    /// Current game state.
    pub state: GameState,
    /// Whose turn it is.
    pub turn: Actor,
    /// Pending player input, if any.
    pub prompt: Option<Prompt>,
    /// Whether a scheduled transition is still running.
    pub busy: bool,
    /// Cards left in the deck.
    pub deck_remaining: usize,
    /// The player's hand.
    pub player_hand: Vec<Card>,
    /// The computer's hand. Front ends show it face down.
    pub computer_hand: Vec<Card>,
    /// Pairs collected by the player.
    pub player_pairs: Vec<PairRecord>,
    /// Pairs collected by the computer.
    pub computer_pairs: Vec<PairRecord>,
}

/// Something that happened in the game, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game state changed; redraw from the snapshot.
    StateChanged(Snapshot),
    /// The player must provide input.
    Prompt(Prompt),
    /// The game ended.
    GameOver(GameResult),
    /// An opening card was dealt.
    CardDealt {
        /// The receiving actor.
        to: Actor,
        /// The card.
        card: Card,
    },
    /// An actor drew from the deck.
    CardDrawn {
        /// The drawing actor.
        actor: Actor,
        /// The card.
        card: Card,
    },
    /// Cards moved from one hand to the other.
    CardsTransferred {
        /// The giving actor.
        from: Actor,
        /// The receiving actor.
        to: Actor,
        /// The cards moved.
        cards: Vec<Card>,
    },
    /// Pairs were laid down.
    PairsCollected {
        /// The collecting actor.
        actor: Actor,
        /// The pairs.
        pairs: Vec<PairRecord>,
    },
    /// The computer asked the player for a rank.
    ComputerAsked {
        /// The rank.
        rank: u8,
    },
}
