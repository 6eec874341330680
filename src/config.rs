//! Game configuration.
//!
//! The game normally takes no arguments. `--seed` exists to make dice and
//! the mission draw reproducible when debugging.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Faction;
use crate::error::GameError;

pub const USAGE: &str = "\
Usage: conquest [OPTIONS]

Options:
  --seed N    Seed the dice and mission draw (default: entropy)
  -h, --help  Print this help";

/// Settings fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The faction the player commands.
    pub player: Faction,
    /// Random seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: Faction::Blue,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Builds the single random stream used for the whole game.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    Play(GameConfig),
    Help,
}

/// Parses command-line arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<CliAction, GameError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = GameConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| GameError::InvalidArgument("--seed needs a value".to_string()))?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| GameError::InvalidArgument(format!("invalid --seed value: '{value}'")))?;
                config.seed = Some(seed);
            }
            "--help" | "-h" => return Ok(CliAction::Help),
            other => {
                return Err(GameError::InvalidArgument(format!(
                    "unknown argument: '{other}'"
                )))
            }
        }
    }

    Ok(CliAction::Play(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_is_default_game() {
        assert_eq!(
            parse_args(args(&[])).unwrap(),
            CliAction::Play(GameConfig::default())
        );
        assert_eq!(GameConfig::default().player, Faction::Blue);
    }

    #[test]
    fn seed_is_parsed() {
        let action = parse_args(args(&["--seed", "42"])).unwrap();
        assert_eq!(
            action,
            CliAction::Play(GameConfig {
                player: Faction::Blue,
                seed: Some(42),
            })
        );
    }

    #[test]
    fn help_short_and_long() {
        assert_eq!(parse_args(args(&["-h"])).unwrap(), CliAction::Help);
        assert_eq!(parse_args(args(&["--help"])).unwrap(), CliAction::Help);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(matches!(
            parse_args(args(&["--seed"])),
            Err(GameError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_args(args(&["--seed", "abc"])),
            Err(GameError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_args(args(&["--fast"])),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
