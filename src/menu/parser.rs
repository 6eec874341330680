//! Menu input parser.
//!
//! Turns raw lines typed at the prompt into structured choices the game
//! loop can dispatch on.

/// A parsed main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: start the attack phase.
    Attack,

    /// `2`: check whether the mission is complete.
    CheckMission,

    /// `0`: leave the game.
    Exit,

    /// Anything else, including non-numeric input.
    Invalid,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> MenuChoice {
        match n {
            1 => MenuChoice::Attack,
            2 => MenuChoice::CheckMission,
            0 => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Parses the first whitespace-separated token of a line as an integer.
///
/// Returns `None` for blank lines and for tokens that are not integers.
pub fn parse_number(line: &str) -> Option<i64> {
    line.split_whitespace().next()?.parse().ok()
}

/// Parses a main-menu line.
pub fn parse_choice(line: &str) -> MenuChoice {
    parse_number(line).map_or(MenuChoice::Invalid, MenuChoice::from_number)
}
