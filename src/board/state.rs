//! Board state.
//!
//! The board is a fixed-length array of territories indexed 0..5. It is
//! created once per game, mutated only by combat resolution, and read by
//! rendering and mission checks.

use super::territory::{Faction, Territory};

/// Number of territories on the board.
pub const TERRITORY_COUNT: usize = 5;

/// Complete board state at a point in time.
///
/// Uses a fixed-size array so the slot count cannot change during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    territories: [Territory; TERRITORY_COUNT],
}

impl Board {
    /// Creates the standard starting board.
    pub fn initial() -> Self {
        Board {
            territories: [
                Territory::new("North America", Faction::Green, 3),
                Territory::new("Europe", Faction::Blue, 2),
                Territory::new("Asia", Faction::Red, 4),
                Territory::new("Africa", Faction::Green, 2),
                Territory::new("Oceania", Faction::Yellow, 1),
            ],
        }
    }

    /// Builds a board from explicit territories.
    pub fn from_territories(territories: [Territory; TERRITORY_COUNT]) -> Self {
        Board { territories }
    }

    pub fn territories(&self) -> &[Territory; TERRITORY_COUNT] {
        &self.territories
    }

    /// Returns the territory at a 0-based index, if in range.
    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// Panics if `index` is out of range.
    pub(crate) fn territory_mut(&mut self, index: usize) -> &mut Territory {
        &mut self.territories[index]
    }

    /// Sets the owner of the territory at `index`. Out-of-range indices are ignored.
    pub fn set_owner(&mut self, index: usize, owner: Faction) {
        if let Some(t) = self.territories.get_mut(index) {
            t.owner = owner;
        }
    }

    /// Sets the troop count of the territory at `index`. Out-of-range indices are ignored.
    pub fn set_troops(&mut self, index: usize, troops: u32) {
        if let Some(t) = self.territories.get_mut(index) {
            t.troops = troops;
        }
    }

    /// Number of territories held by `faction`.
    pub fn territories_owned(&self, faction: Faction) -> usize {
        self.territories
            .iter()
            .filter(|t| t.owner == faction)
            .count()
    }

    /// Total troops across all territories held by `faction`.
    pub fn troops_of(&self, faction: Faction) -> u32 {
        self.territories
            .iter()
            .filter(|t| t.owner == faction)
            .map(|t| t.troops)
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
