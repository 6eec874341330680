//! Board representation and game-state types.
//!
//! Contains the factions, the territory record, and the fixed five-slot
//! board that the game loop owns for the whole session.

pub mod state;
pub mod territory;

pub use state::{Board, TERRITORY_COUNT};
pub use territory::{Faction, Territory};
