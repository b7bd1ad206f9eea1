//! Error types
//!
//! Every failure the engine can report while consuming input. All of them
//! abort the `feed` call that produced them.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing or executing a control sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input starts with ESC but does not form a complete sequence
    #[error("malformed control sequence {fragment:?}: {reason}")]
    Parse {
        /// The characters consumed before the grammar failed
        fragment: String,
        reason: &'static str,
    },

    /// A well-formed sequence whose command (or mode parameter) is not supported
    #[error("unknown escape code: ESC[{}{command}", join_params(.params))]
    UnknownCommand { command: char, params: Vec<u32> },

    /// An SGR parameter outside 0, 1, 7, 30-37 and 40-47
    #[error("unknown SGR parameter {0}")]
    UnknownSgrParameter(u32),

    /// A command received fewer parameters than it requires
    #[error("command {command:?} expects {expected} parameter(s), got {actual}")]
    InvalidParameterCount {
        command: char,
        expected: usize,
        actual: usize,
    },
}

fn join_params(params: &[u32]) -> String {
    params
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
