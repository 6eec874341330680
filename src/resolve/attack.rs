//! Pre-combat checks for an attack.
//!
//! Territory numbers arrive 1-based from the player. An attack is only
//! resolved when both numbers are on the board, they differ, and both
//! territories still hold troops. A rejected attack draws no dice and
//! leaves the board untouched.

use rand::Rng;
use tracing::warn;

use crate::board::{Board, TERRITORY_COUNT};

use super::combat::{resolve_attack, BattleReport};

/// Reasons an attack is refused before any dice are rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("Invalid territory! Choose a number between 1 and {}.", TERRITORY_COUNT)]
    OutOfRange,

    #[error("A territory cannot attack itself!")]
    SelfAttack,

    #[error("The attacking territory has no troops!")]
    AttackerHasNoTroops,

    #[error("The defending territory has no troops!")]
    DefenderHasNoTroops,
}

/// Converts a 1-based territory number to a 0-based index.
pub fn territory_index(number: i64) -> Result<usize, AttackError> {
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=TERRITORY_COUNT).contains(n))
        .map(|n| n - 1)
        .ok_or(AttackError::OutOfRange)
}

/// Checks an attack between two 1-based territory numbers.
///
/// Returns the 0-based (attacker, defender) indices on success. Checks run
/// in order: range, self-attack, attacker troops, defender troops.
pub fn validate_attack(
    board: &Board,
    attacker: i64,
    defender: i64,
) -> Result<(usize, usize), AttackError> {
    let (a, d) = match (territory_index(attacker), territory_index(defender)) {
        (Ok(a), Ok(d)) => (a, d),
        _ => return Err(AttackError::OutOfRange),
    };
    if a == d {
        return Err(AttackError::SelfAttack);
    }
    let territories = board.territories();
    if !territories[a].has_troops() {
        return Err(AttackError::AttackerHasNoTroops);
    }
    if !territories[d].has_troops() {
        return Err(AttackError::DefenderHasNoTroops);
    }
    Ok((a, d))
}

/// Validates and, if allowed, resolves one attack round.
pub fn attack<R: Rng>(
    board: &mut Board,
    attacker: i64,
    defender: i64,
    rng: &mut R,
) -> Result<BattleReport, AttackError> {
    let (a, d) = validate_attack(board, attacker, defender).inspect_err(|e| {
        warn!(attacker, defender, error = %e, "attack rejected");
    })?;
    Ok(resolve_attack(board, a, d, rng))
}
