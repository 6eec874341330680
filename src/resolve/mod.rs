//! Attack resolution.
//!
//! Validates an attack request and resolves it with a single dice round.

pub mod attack;
pub mod combat;

pub use attack::{attack, territory_index, validate_attack, AttackError};
pub use combat::{
    apply_rolls, resolve_attack, roll_dice, roll_die, BattleOutcome, BattleReport, DiceRolls,
    DIE_FACES,
};
