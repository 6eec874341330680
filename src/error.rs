//! Fatal game errors.
//!
//! Anything here ends the process with a non-zero status. Bad player input
//! during play is not an error at this level; see
//! [`AttackError`](crate::resolve::AttackError).

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
