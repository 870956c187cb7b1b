//! Game configuration options.

/// Delays, in milliseconds, between a transition starting and its scheduled
/// continuation running.
///
/// The defaults match the length of the card animations a browser front end
/// plays, so the engine never moves on while a card is still on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timing {
    /// Between two cards of the opening Go Fish deal.
    pub deal: u64,
    /// Per collected pair after the opening Go Fish deal.
    pub pair_collect: u64,
    /// A card travelling from the deck to a hand.
    pub draw: u64,
    /// Cards travelling from one hand to the other.
    pub transfer: u64,
    /// Pause before the computer acts.
    pub computer_think: u64,
    /// Pause before checking for the end of an Old Maid game.
    pub game_over_check: u64,
    /// Pause before drawing for a player whose turn starts with no cards.
    pub auto_draw: u64,
}

impl Timing {
    /// All delays zero; every continuation runs on the next
    /// [`Game::advance`](crate::Game::advance).
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            deal: 0,
            pair_collect: 0,
            draw: 0,
            transfer: 0,
            computer_think: 0,
            game_over_check: 0,
            auto_draw: 0,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            deal: 650,
            pair_collect: 800,
            draw: 1200,
            transfer: 1250,
            computer_think: 1500,
            game_over_check: 500,
            auto_draw: 500,
        }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pairgames::{GameOptions, Timing};
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_timing(Timing::instant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each actor at the start of Go Fish.
    /// Old Maid always deals the whole deck.
    pub hand_size: usize,
    /// Presentation delays.
    pub timing: Timing,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            timing: Timing::default(),
        }
    }
}

impl GameOptions {
    /// Sets the Go Fish opening hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use pairgames::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets every presentation delay.
    ///
    /// # Example
    ///
    /// ```
    /// use pairgames::{GameOptions, Timing};
    ///
    /// let options = GameOptions::default().with_timing(Timing::instant());
    /// assert_eq!(options.timing.draw, 0);
    /// ```
    #[must_use]
    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Sets the pause before the computer acts.
    ///
    /// # Example
    ///
    /// ```
    /// use pairgames::GameOptions;
    ///
    /// let options = GameOptions::default().with_computer_think(200);
    /// assert_eq!(options.timing.computer_think, 200);
    /// ```
    #[must_use]
    pub const fn with_computer_think(mut self, millis: u64) -> Self {
        self.timing.computer_think = millis;
        self
    }
}
