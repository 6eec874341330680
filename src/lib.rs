//! Conquest game library.
//!
//! Exposes the board, mission, attack resolution, menu, and game-loop
//! modules for use by integration tests and the binary entry point.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod menu;
pub mod mission;
pub mod resolve;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, GameState};
