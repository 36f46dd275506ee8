//! Seats at the table.

use core::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// First player.
    P1,
    /// Second player.
    P2,
}

impl Player {
    /// Both players in seat order.
    pub const BOTH: [Self; 2] = [Self::P1, Self::P2];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }

    /// Returns the seat index (0 for `P1`, 1 for `P2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P1 => f.write_str("Player 1"),
            Self::P2 => f.write_str("Player 2"),
        }
    }
}
