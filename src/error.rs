//! Error types for game requests.
//!
//! A rejected request never changes the game. Presentation layers are free
//! to ignore these values; they exist so a misbehaving caller can tell why
//! nothing happened.

use thiserror::Error;

/// Reasons a player request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request is not valid in the current game state.
    #[error("invalid game state for this request")]
    InvalidState,
    /// The request does not exist in this game variant.
    #[error("request is not part of this game variant")]
    WrongVariant,
    /// A scheduled transition has not finished yet.
    #[error("a transition is still in flight")]
    TransitionInFlight,
    /// The game is already over.
    #[error("the game is over")]
    GameOver,
    /// The player asked for a rank they do not hold.
    #[error("cannot ask for a rank you do not hold")]
    RankNotHeld,
    /// The player said "go fish" while holding the requested rank.
    #[error("you hold the requested rank")]
    FalseDenial,
    /// The player claimed a rank they do not hold.
    #[error("you do not hold the requested rank")]
    FalseClaim,
    /// The chosen card position does not exist in the opponent's hand.
    #[error("no card at that position")]
    NoSuchCard,
}
