//! End-of-game result types.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Actor {
    /// Returns the other actor.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

/// Who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player won.
    Player,
    /// The computer won.
    Computer,
    /// Neither side won.
    Tie,
}

impl From<Actor> for Winner {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Player => Self::Player,
            Actor::Computer => Self::Computer,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The winner.
    pub winner: Winner,
    /// Pairs collected by the player.
    pub player_pairs: usize,
    /// Pairs collected by the computer.
    pub computer_pairs: usize,
    /// Who is stuck with the Old Maid (Old Maid games only).
    pub old_maid_holder: Option<Actor>,
}
