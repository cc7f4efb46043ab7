//! Driver command parsing.

use chessgame_core::{Game, Move, Position};

use crate::error::CliError;

/// A parsed driver command.
#[derive(Debug)]
pub enum Command {
    /// `new [fen <FEN>]` -- start a fresh game.
    NewGame(Box<Game>),
    /// `moves <square>` -- list legal moves of the piece on a square.
    Moves(Position),
    /// `move <move>` -- submit a move in coordinate notation.
    Move(Move),
    /// `board` -- print the board.
    Board,
    /// `fen` -- print the game as a FEN record.
    Fen,
    /// `status` -- print whose turn it is and check/mate/stalemate state.
    Status,
    /// `help` -- list commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => parse_new(&tokens[1..]),
        "moves" => {
            let square = tokens.get(1).ok_or(CliError::MissingArgument {
                command: "moves",
                what: "square",
            })?;
            Ok(Command::Moves(square.parse()?))
        }
        "move" => {
            let mv = tokens.get(1).ok_or(CliError::MissingArgument {
                command: "move",
                what: "move",
            })?;
            Ok(Command::Move(mv.parse()?))
        }
        "board" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "status" => Ok(Command::Status),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `new` command arguments: nothing, or `fen <FEN>`.
fn parse_new(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens.first() {
        None => Ok(Command::NewGame(Box::new(Game::new()))),
        Some(&"fen") => {
            if tokens.len() < 2 {
                return Err(CliError::MissingArgument {
                    command: "new fen",
                    what: "FEN record",
                });
            }
            let game: Game = tokens[1..].join(" ").parse()?;
            Ok(Command::NewGame(Box::new(game)))
        }
        Some(other) => Err(CliError::InvalidArgument {
            arg: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_command};
    use crate::error::CliError;
    use chessgame_core::{Color, Game};

    #[test]
    fn simple_commands() {
        assert!(matches!(parse_command("board"), Ok(Command::Board)));
        assert!(matches!(parse_command("  fen  "), Ok(Command::Fen)));
        assert!(matches!(parse_command("status"), Ok(Command::Status)));
        assert!(matches!(parse_command("quit"), Ok(Command::Quit)));
        assert!(matches!(parse_command("exit"), Ok(Command::Quit)));
        assert!(matches!(parse_command(""), Ok(Command::Unknown(s)) if s.is_empty()));
        assert!(matches!(parse_command("castle"), Ok(Command::Unknown(s)) if s == "castle"));
    }

    #[test]
    fn moves_and_move() {
        match parse_command("moves e2") {
            Ok(Command::Moves(pos)) => assert_eq!(pos.to_string(), "e2"),
            other => panic!("expected Moves, got {other:?}"),
        }
        match parse_command("move e7e8q") {
            Ok(Command::Move(mv)) => assert_eq!(mv.to_string(), "e7e8q"),
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn missing_and_bad_arguments() {
        assert!(matches!(
            parse_command("moves"),
            Err(CliError::MissingArgument { command: "moves", .. })
        ));
        assert!(matches!(
            parse_command("move"),
            Err(CliError::MissingArgument { command: "move", .. })
        ));
        assert!(matches!(
            parse_command("moves z9"),
            Err(CliError::BadCoordinate { .. })
        ));
        assert!(matches!(
            parse_command("move e2"),
            Err(CliError::BadCoordinate { .. })
        ));
    }

    #[test]
    fn new_game_variants() {
        match parse_command("new") {
            Ok(Command::NewGame(game)) => assert_eq!(*game, Game::new()),
            other => panic!("expected NewGame, got {other:?}"),
        }
        match parse_command("new fen 4k3/8/8/8/8/8/8/4K3 b - - 0 1") {
            Ok(Command::NewGame(game)) => assert_eq!(game.side_to_move(), Color::Black),
            other => panic!("expected NewGame, got {other:?}"),
        }
        assert!(matches!(
            parse_command("new fen"),
            Err(CliError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_command("new fen 8/8 w - -"),
            Err(CliError::InvalidFen { .. })
        ));
        assert!(matches!(
            parse_command("new game"),
            Err(CliError::InvalidArgument { .. })
        ));
    }
}
