//! Conquest -- a single-player territory conquest game.
//!
//! This binary reads menu choices from stdin and writes the board and
//! battle results to stdout. Diagnostics go to stderr through `tracing`,
//! filtered by `RUST_LOG` (default `warn`).

use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use conquest::config::{parse_args, CliAction, USAGE};
use conquest::{Game, GameError};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parses arguments and plays one game to completion.
fn run() -> Result<(), GameError> {
    let config = match parse_args(env::args().skip(1))? {
        CliAction::Play(config) => config,
        CliAction::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(stdout.lock());

    let mut game = Game::new(&config);
    game.run(&mut input, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
