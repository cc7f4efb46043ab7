//! Session configuration from process arguments.

use chessgame_core::Game;

use crate::error::CliError;

/// Settings for a driver session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Position the session's first game starts from.
    pub start: Game,
    /// Print the board after every accepted move.
    pub echo_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start: Game::new(),
            echo_board: true,
        }
    }
}

impl SessionConfig {
    /// Build a config from arguments (program name excluded).
    ///
    /// Supports `--fen <FEN>` (the record may span several arguments, up to
    /// the next `--` option) and `--quiet`.
    pub fn from_args<I, S>(args: I) -> Result<SessionConfig, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let mut config = SessionConfig::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--quiet" => {
                    config.echo_board = false;
                    i += 1;
                }
                "--fen" => {
                    let fields: Vec<&str> = args[i + 1..]
                        .iter()
                        .take_while(|a| !a.starts_with("--"))
                        .map(String::as_str)
                        .collect();
                    if fields.is_empty() {
                        return Err(CliError::MissingArgument {
                            command: "--fen",
                            what: "FEN record",
                        });
                    }
                    i += 1 + fields.len();
                    config.start = fields.join(" ").parse()?;
                }
                other => {
                    return Err(CliError::InvalidArgument {
                        arg: other.to_string(),
                    });
                }
            }
        }
        Ok(config)
    }
}
