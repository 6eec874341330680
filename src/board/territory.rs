//! Factions and territory records.
//!
//! A territory is a named board slot controlled by one faction and
//! garrisoned by a non-negative number of troops.

use std::fmt;

/// One of the armies that can control a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Green,
    Blue,
    Red,
    Yellow,
}

impl Faction {
    /// Returns the display name of this faction.
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Green => "Green",
            Faction::Blue => "Blue",
            Faction::Red => "Red",
            Faction::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board slot: a fixed name, its current owner, and its garrison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    name: &'static str,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    pub const fn new(name: &'static str, owner: Faction, troops: u32) -> Self {
        Territory {
            name,
            owner,
            troops,
        }
    }

    /// The territory's label. Never changes after the board is built.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn has_troops(&self) -> bool {
        self.troops > 0
    }
}
