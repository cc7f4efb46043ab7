//! Driver errors.

use chessgame_core::{FenError, MoveError, PositionError};

/// Errors that can occur while reading or executing driver commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command needs an argument that was not given.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// Description of the missing argument.
        what: &'static str,
    },

    /// A square or move in coordinate notation could not be parsed.
    #[error("{source}")]
    BadCoordinate {
        /// The underlying parse error.
        #[from]
        source: PositionError,
    },

    /// A FEN record could not be parsed.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        /// The underlying FEN error.
        #[from]
        source: FenError,
    },

    /// The engine rejected a submitted move.
    #[error("{source}")]
    Rejected {
        /// Why the move was rejected.
        #[from]
        source: MoveError,
    },

    /// A command-line option was not recognized or lacked its value.
    #[error("invalid argument: {arg}")]
    InvalidArgument {
        /// The offending argument.
        arg: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
