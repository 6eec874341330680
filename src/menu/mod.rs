//! Console menu handling.
//!
//! Parsing of the player's typed input and rendering of the board,
//! mission, menu, and battle results to any `Write` sink.

pub mod parser;
pub mod render;

pub use parser::{parse_choice, parse_number, MenuChoice};
