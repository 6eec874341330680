//! Dice combat between two territories.
//!
//! One call resolves exactly one attack round: each side rolls a six-sided
//! die, ties go to the attacker, and a winning attacker removes one
//! defending troop. A defender reduced to zero troops is captured: it takes
//! the attacker's faction and one troop moved out of the attacking territory.
//! A losing attacker loses nothing.

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Faction};

/// Number of faces on a combat die.
pub const DIE_FACES: u8 = 6;

/// The pair of rolls for one attack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRolls {
    pub attacker: u8,
    pub defender: u8,
}

impl DiceRolls {
    pub const fn new(attacker: u8, defender: u8) -> Self {
        DiceRolls { attacker, defender }
    }

    /// Ties favor the attacker.
    pub const fn attacker_wins(self) -> bool {
        self.attacker >= self.defender
    }
}

/// What happened to the board in one attack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The defender rolled higher; nothing changed.
    DefenderHeld,
    /// The defender lost one troop and keeps the territory.
    DefenderLostTroop { remaining: u32 },
    /// The defender was wiped out and the territory changed hands.
    Captured,
}

/// Everything needed to report an attack round after the fact.
///
/// Factions are recorded as they were before the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleReport {
    pub attacker: usize,
    pub defender: usize,
    pub attacker_name: &'static str,
    pub defender_name: &'static str,
    pub attacker_faction: Faction,
    pub defender_faction: Faction,
    pub rolls: DiceRolls,
    pub outcome: BattleOutcome,
}

/// Rolls one die, uniform in `1..=6`.
pub fn roll_die<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=DIE_FACES)
}

/// Rolls the attacker's die, then the defender's.
pub fn roll_dice<R: Rng>(rng: &mut R) -> DiceRolls {
    let attacker = roll_die(rng);
    let defender = roll_die(rng);
    DiceRolls { attacker, defender }
}

/// Rolls dice and resolves one attack round.
///
/// Indices are 0-based and must already have passed
/// [`validate_attack`](super::attack::validate_attack).
pub fn resolve_attack<R: Rng>(
    board: &mut Board,
    attacker: usize,
    defender: usize,
    rng: &mut R,
) -> BattleReport {
    let rolls = roll_dice(rng);
    apply_rolls(board, attacker, defender, rolls)
}

/// Applies a known pair of rolls to the board.
///
/// The attacker's troop count is not re-checked after a capture, so an
/// attacker that started with one troop ends the round with zero.
///
/// Panics if either index is out of range.
pub fn apply_rolls(
    board: &mut Board,
    attacker: usize,
    defender: usize,
    rolls: DiceRolls,
) -> BattleReport {
    let (attacker_name, attacker_faction) = {
        let t = &board.territories()[attacker];
        (t.name(), t.owner)
    };
    let (defender_name, defender_faction) = {
        let t = &board.territories()[defender];
        (t.name(), t.owner)
    };
    debug!(
        attacker = attacker_name,
        defender = defender_name,
        attacker_roll = rolls.attacker,
        defender_roll = rolls.defender,
        "dice rolled"
    );

    let outcome = if rolls.attacker_wins() {
        let target = board.territory_mut(defender);
        target.troops = target.troops.saturating_sub(1);
        if target.troops == 0 {
            target.owner = attacker_faction;
            target.troops = 1;
            let source = board.territory_mut(attacker);
            source.troops = source.troops.saturating_sub(1);
            info!(
                territory = defender_name,
                from = %defender_faction,
                to = %attacker_faction,
                "territory captured"
            );
            BattleOutcome::Captured
        } else {
            BattleOutcome::DefenderLostTroop {
                remaining: target.troops,
            }
        }
    } else {
        BattleOutcome::DefenderHeld
    };

    BattleReport {
        attacker,
        defender,
        attacker_name,
        defender_name,
        attacker_faction,
        defender_faction,
        rolls,
        outcome,
    }
}
