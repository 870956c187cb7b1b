//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Marker suit carried only by the Old Maid card.
    OldMaid,
}

impl Suit {
    /// The four standard suits, in deck creation order.
    pub const STANDARD: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the symbol printed on the card face.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
            Self::OldMaid => "👵",
        }
    }

    /// Returns the colour of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades | Self::OldMaid => Color::Black,
        }
    }
}

/// Card colour, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs, spades and the Old Maid.
    Black,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King,
    /// [`OLD_MAID_RANK`] for the Old Maid).
    pub rank: u8,
}

/// Rank carried by the Old Maid card.
pub const OLD_MAID_RANK: u8 = 0;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

impl Card {
    /// The single unpaired card added to an Old Maid deck.
    pub const OLD_MAID: Self = Self {
        suit: Suit::OldMaid,
        rank: OLD_MAID_RANK,
    };

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but will not appear in a generated deck.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this is the Old Maid card.
    #[must_use]
    pub const fn is_old_maid(&self) -> bool {
        matches!(self.suit, Suit::OldMaid)
    }

    /// Returns the colour of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns the label printed on the card face.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        rank_label(self.rank)
    }
}

/// Returns the display label for a rank.
#[must_use]
pub const fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        OLD_MAID_RANK => "OLD MAID",
        _ => "?",
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_old_maid() {
            f.write_str(self.rank_label())
        } else {
            write!(f, "{}{}", self.rank_label(), self.suit.symbol())
        }
    }
}
