//! Game state types.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::Hand;
use crate::pairs::PairRecord;
use crate::result::Actor;

/// The rule set a [`Game`](super::Game) plays by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Ask the opponent for a rank; go fish from the deck when they lack it.
    GoFish,
    /// Draw blind from the opponent's hand; avoid the Old Maid.
    OldMaid,
}

impl Variant {
    /// Returns whether the deck carries the Old Maid card.
    #[must_use]
    pub const fn uses_old_maid(self) -> bool {
        matches!(self, Self::OldMaid)
    }

    /// Returns the display name of the variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GoFish => "Go Fish",
            Self::OldMaid => "Old Maid",
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Opening cards are being dealt.
    Dealing,
    /// Waiting for the player to act.
    PlayerTurn,
    /// Go Fish: the player's ask missed and they must draw from the deck.
    AwaitingDraw,
    /// Go Fish: the computer asked for a rank and the player must answer.
    AwaitingResponse,
    /// The computer is acting.
    ComputerTurn,
    /// The game has ended.
    GameOver,
}

/// Input the presentation layer should collect from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Go Fish: pick a rank from your hand to ask for.
    ChooseRank,
    /// Go Fish: the computer has no card of `rank`; draw from the deck.
    GoFish {
        /// The rank that was asked for.
        rank: u8,
    },
    /// Go Fish: the computer asks whether you hold `rank`.
    RespondToAsk {
        /// The rank the computer asked for.
        rank: u8,
    },
    /// Old Maid: pick one of the computer's face-down cards.
    PickOpponentCard {
        /// Number of cards to pick from.
        count: usize,
    },
}

/// One seat at the table: the hand and the pairs laid down from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    /// Cards held.
    pub hand: Hand,
    /// Pairs collected, oldest first.
    pub pairs: Vec<PairRecord>,
}

/// Both seats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seats {
    /// The human player.
    pub player: Seat,
    /// The computer.
    pub computer: Seat,
}

impl Seats {
    /// Returns the seat of `actor`.
    #[must_use]
    pub const fn get(&self, actor: Actor) -> &Seat {
        match actor {
            Actor::Player => &self.player,
            Actor::Computer => &self.computer,
        }
    }

    /// Returns the seat of `actor` mutably.
    pub const fn get_mut(&mut self, actor: Actor) -> &mut Seat {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Computer => &mut self.computer,
        }
    }

    /// Total cards held by both actors.
    #[must_use]
    pub fn cards_held(&self) -> usize {
        self.player.hand.len() + self.computer.hand.len()
    }
}
