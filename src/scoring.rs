//! The con scoring table.
//!
//! Points are awarded per con from the number of tricks a player took. The
//! table is not monotonic: taking very few tricks pays as well as winning
//! comfortably, and taking ten or more pays nothing.
//!
//! | Tricks | Points | Title    |
//! |--------|--------|----------|
//! | 0-3    | 6      | Modest   |
//! | 4      | 1      | Defeated |
//! | 5      | 2      | Defeated |
//! | 6      | 3      | Defeated |
//! | 7-9    | 6      | Winner   |
//! | 10-13  | 0      | Greedy   |

use core::fmt;

/// Returns the points earned for taking `tricks` tricks in a con.
///
/// ```
/// use foxglade::points_for_tricks;
///
/// assert_eq!(points_for_tricks(3), 6);
/// assert_eq!(points_for_tricks(4), 1);
/// assert_eq!(points_for_tricks(10), 0);
/// ```
#[must_use]
pub const fn points_for_tricks(tricks: u8) -> u32 {
    match tricks {
        0..=3 => 6,
        4 => 1,
        5 => 2,
        6 => 3,
        7..=9 => 6,
        _ => 0,
    }
}

/// Name given to a player's showing in a con.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Title {
    /// 0 to 3 tricks.
    Modest,
    /// 4 to 6 tricks.
    Defeated,
    /// 7 to 9 tricks.
    Winner,
    /// 10 or more tricks.
    Greedy,
}

impl Title {
    /// Returns the title for `tricks` tricks taken.
    #[must_use]
    pub const fn for_tricks(tricks: u8) -> Self {
        match tricks {
            0..=3 => Self::Modest,
            4..=6 => Self::Defeated,
            7..=9 => Self::Winner,
            _ => Self::Greedy,
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Modest => "Modest",
            Self::Defeated => "Defeated",
            Self::Winner => "Winner",
            Self::Greedy => "Greedy",
        };
        f.write_str(name)
    }
}
