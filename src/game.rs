//! The game loop.
//!
//! Holds the board, the secret mission, and the random stream for one
//! session, and runs the menu loop until the player exits or the mission
//! is accomplished. Input and output are generic so the whole loop can be
//! driven from tests.

use std::io::{BufRead, Write};

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::board::{Board, Faction};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::menu::render;
use crate::menu::{parse_choice, parse_number, MenuChoice};
use crate::mission::{choose_mission, mission_complete};
use crate::resolve::{attack, AttackError};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Exited,
}

impl GameState {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// One game session.
#[derive(Debug)]
pub struct Game<R: Rng = SmallRng> {
    board: Board,
    mission_id: u32,
    player: Faction,
    state: GameState,
    rng: R,
}

impl Game<SmallRng> {
    /// Starts a game on the standard board and draws the mission.
    pub fn new(config: &GameConfig) -> Self {
        Game::with_rng(config.player, config.rng())
    }
}

impl<R: Rng> Game<R> {
    /// Starts a game with the given random stream, drawing the mission from it.
    pub fn with_rng(player: Faction, mut rng: R) -> Self {
        let mission_id = choose_mission(&mut rng);
        Game::with_mission(mission_id, player, rng)
    }

    /// Starts a game with a fixed mission.
    pub fn with_mission(mission_id: u32, player: Faction, rng: R) -> Self {
        debug!(mission_id, player = %player, "game started");
        Game {
            board: Board::initial(),
            mission_id,
            player,
            state: GameState::Playing,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns true if the mission is accomplished on the current board.
    pub fn check_mission(&self) -> bool {
        mission_complete(&self.board, self.mission_id, self.player)
    }

    /// Runs menu iterations until the game reaches a terminal state.
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<GameState, GameError> {
        while !self.state.is_terminal() {
            self.step(input, out)?;
        }
        out.flush()?;
        Ok(self.state)
    }

    /// Runs one menu iteration: draw, read a choice, act on it.
    ///
    /// End of input is treated as choosing to exit.
    pub fn step<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<GameState, GameError> {
        render::render_board(out, &self.board)?;
        render::render_mission(out, self.mission_id, self.player)?;
        render::render_menu(out)?;

        let choice = match read_line(input)? {
            Some(line) => parse_choice(&line),
            None => {
                debug!("input closed");
                MenuChoice::Exit
            }
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Attack => self.attack_phase(input, out)?,
            MenuChoice::CheckMission => {
                if self.check_mission() {
                    info!(mission_id = self.mission_id, "mission accomplished");
                    self.state = GameState::Won;
                    render::render_victory(out)?;
                } else {
                    render::render_mission_pending(out)?;
                }
            }
            MenuChoice::Exit => {
                self.state = GameState::Exited;
                render::render_farewell(out)?;
            }
            MenuChoice::Invalid => {
                warn!("invalid menu option");
                render::render_invalid_option(out)?;
            }
        }

        if !self.state.is_terminal() {
            render::render_continue(out)?;
            read_line(input)?;
        }
        Ok(self.state)
    }

    /// Prompts for attacker and defender, then resolves the attack if allowed.
    fn attack_phase<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<(), GameError> {
        let count = self.board.territories().len();
        render::render_attack_header(out)?;
        writeln!(out)?;
        render::prompt(out, &format!("Choose the ATTACKING territory (1 to {count}): "))?;
        let attacker = read_line(input)?.as_deref().and_then(parse_number);
        render::prompt(out, &format!("Choose the DEFENDING territory (1 to {count}): "))?;
        let defender = read_line(input)?.as_deref().and_then(parse_number);

        let result = match (attacker, defender) {
            (Some(a), Some(d)) => attack(&mut self.board, a, d, &mut self.rng),
            _ => {
                warn!("non-numeric territory selection");
                Err(AttackError::OutOfRange)
            }
        };

        match result {
            Ok(report) => render::render_battle(out, &report)?,
            Err(e) => render::render_attack_error(out, &e)?,
        }
        Ok(())
    }
}

/// Reads one line, returning `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so they
/// parse as an unrecognized choice.
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>, GameError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
