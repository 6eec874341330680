//! Console rendering.
//!
//! Every function writes to a caller-supplied sink so the game can be
//! driven against stdout or an in-memory buffer.

use std::io::{self, Write};

use crate::board::{Board, Faction};
use crate::mission::{Mission, CONQUEST_TARGET};
use crate::resolve::{AttackError, BattleOutcome, BattleReport};

const RULE: &str = "════════════════════════════════════════════════════════════";

/// Writes a boxed, centered title.
fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╔{RULE}╗")?;
    writeln!(out, "║{:^60}║", title)?;
    writeln!(out, "╚{RULE}╝")
}

/// Writes the board as a table of territory, faction, and troops.
pub fn render_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    banner(out, "WORLD MAP")?;
    writeln!(out)?;
    writeln!(out, "┌─────┬─────────────────────────────┬──────────────────┬──────────┐")?;
    writeln!(out, "│ #   │ Territory                   │ Army             │ Troops   │")?;
    writeln!(out, "├─────┼─────────────────────────────┼──────────────────┼──────────┤")?;
    for (i, t) in board.territories().iter().enumerate() {
        writeln!(
            out,
            "│ {:<3} │ {:<27} │ {:<16} │ {:<8} │",
            i + 1,
            t.name(),
            t.owner,
            t.troops
        )?;
    }
    writeln!(out, "└─────┴─────────────────────────────┴──────────────────┴──────────┘")
}

/// Writes the description of a mission id.
pub fn render_mission<W: Write>(out: &mut W, mission_id: u32, player: Faction) -> io::Result<()> {
    banner(out, "YOUR MISSION")?;
    writeln!(out)?;
    match Mission::from_id(mission_id) {
        Some(Mission::EliminateGreen) => {
            writeln!(out, "MISSION: Destroy the {} army completely!", Faction::Green)?;
            writeln!(out, "   Eliminate every troop in the territories")?;
            writeln!(out, "   held by the {} army.", Faction::Green)
        }
        Some(Mission::ConquerThree) => {
            writeln!(out, "MISSION: Conquer {CONQUEST_TARGET} territories!")?;
            writeln!(out, "   Hold at least {CONQUEST_TARGET} territories")?;
            writeln!(out, "   with your {player} army.")
        }
        None => writeln!(out, "MISSION: Unknown"),
    }
}

pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╔{RULE}╗")?;
    writeln!(out, "║{:^60}║", "MAIN MENU")?;
    writeln!(out, "╠{RULE}╣")?;
    writeln!(out, "║  {:<58}║", "1 - Attack")?;
    writeln!(out, "║  {:<58}║", "2 - Check mission")?;
    writeln!(out, "║  {:<58}║", "0 - Exit")?;
    writeln!(out, "╚{RULE}╝")?;
    writeln!(out)?;
    write!(out, "Choose an option: ")?;
    out.flush()
}

pub fn render_attack_header<W: Write>(out: &mut W) -> io::Result<()> {
    banner(out, "ATTACK PHASE")
}

/// Writes a prompt without a trailing newline and flushes.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

/// Writes the rolls and outcome of one attack round.
pub fn render_battle<W: Write>(out: &mut W, report: &BattleReport) -> io::Result<()> {
    banner(out, "BATTLE RESULT")?;
    writeln!(out)?;
    writeln!(
        out,
        "{} ({}) attacks {} ({})",
        report.attacker_name, report.attacker_faction, report.defender_name, report.defender_faction
    )?;
    writeln!(out, "Attacker rolled: {}", report.rolls.attacker)?;
    writeln!(out, "Defender rolled: {}", report.rolls.defender)?;
    writeln!(out)?;
    match report.outcome {
        BattleOutcome::DefenderHeld => {
            writeln!(out, "The defender won!")?;
            writeln!(out, "   The attacker did no damage.")
        }
        BattleOutcome::DefenderLostTroop { remaining } => {
            writeln!(out, "The attacker won!")?;
            writeln!(out, "   The defender lost 1 troop. {remaining} troops remain.")
        }
        BattleOutcome::Captured => {
            writeln!(out, "The attacker won!")?;
            writeln!(out)?;
            writeln!(out, "{} has been CONQUERED!", report.defender_name)?;
            writeln!(
                out,
                "   One troop moved from {} to {}.",
                report.attacker_name, report.defender_name
            )
        }
    }
}

pub fn render_attack_error<W: Write>(out: &mut W, err: &AttackError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{err}")
}

pub fn render_victory<W: Write>(out: &mut W) -> io::Result<()> {
    banner(out, "CONGRATULATIONS! MISSION ACCOMPLISHED!")
}

pub fn render_mission_pending<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Mission not accomplished yet. Keep fighting!")
}

pub fn render_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Thanks for playing! See you soon!")
}

pub fn render_invalid_option<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Invalid option! Try again.")
}

pub fn render_continue<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    prompt(out, "Press ENTER to continue...")
}
