//! A single-game session reading commands and writing responses.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use chessgame_core::{Game, GameStatus, Move, Position};

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::CliError;

const HELP: &str = "\
commands:
  new [fen <FEN>]   start a new game
  moves <square>    list legal moves from a square, e.g. moves e2
  move <move>       play a move, e.g. move e2e4 or move e7e8q
  board             show the board
  fen               show the game as FEN
  status            show side to move and check state
  quit              leave";

/// Owns the live game. One session serves one input stream, so the game is
/// never accessed concurrently.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session whose first game starts from `config.start`.
    pub fn new(config: SessionConfig) -> Session {
        let game = config.start.clone();
        Session { game, config }
    }

    /// Return the live game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command errors are reported on `output` and the loop continues; only
    /// I/O errors end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd, output));
            match result {
                Ok(true) => {}
                Ok(false) => break,
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
        info!("session ended");
        Ok(())
    }

    /// Execute one command. Returns `false` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<bool, CliError> {
        match cmd {
            Command::NewGame(game) => {
                self.game = *game;
                writeln!(output, "new game, {} to move", self.game.side_to_move())?;
            }
            Command::Moves(pos) => self.handle_moves(pos, output)?,
            Command::Move(mv) => self.handle_move(mv, output)?,
            Command::Board => writeln!(output, "{}", self.game.board().pretty())?,
            Command::Fen => writeln!(output, "{}", self.game.to_fen())?,
            Command::Status => self.write_status(output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(false),
            Command::Unknown(name) => writeln!(output, "unknown command: {name} (try help)")?,
        }
        Ok(true)
    }

    fn handle_moves<W: Write>(&self, pos: Position, output: &mut W) -> Result<(), CliError> {
        match self.game.valid_moves(pos) {
            None => writeln!(output, "no piece at {pos}")?,
            Some(moves) if moves.is_empty() => writeln!(output, "no legal moves from {pos}")?,
            Some(moves) => {
                let mut listed: Vec<String> = moves.iter().map(Move::to_string).collect();
                listed.sort();
                writeln!(output, "{}", listed.join(" "))?;
            }
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, mv: Move, output: &mut W) -> Result<(), CliError> {
        self.game.make_move(mv)?;
        writeln!(output, "ok {mv}")?;
        if self.config.echo_board {
            writeln!(output, "{}", self.game.board().pretty())?;
        }
        self.write_status(output)
    }

    fn write_status<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        let us = self.game.side_to_move();
        match self.game.status() {
            GameStatus::Active => writeln!(output, "{us} to move")?,
            GameStatus::Check => writeln!(output, "{us} to move, in check")?,
            GameStatus::Checkmate => writeln!(output, "checkmate, {} wins", us.flip())?,
            GameStatus::Stalemate => writeln!(output, "stalemate")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::command::Command;
    use crate::config::SessionConfig;
    use chessgame_core::Color;

    fn quiet() -> SessionConfig {
        SessionConfig {
            echo_board: false,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn execute_status_and_quit() {
        let mut session = Session::new(quiet());
        let mut out = Vec::new();
        assert!(session.execute(Command::Status, &mut out).unwrap());
        assert!(!session.execute(Command::Quit, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "white to move\n");
    }

    #[test]
    fn starts_from_configured_position() {
        let config =
            SessionConfig::from_args(["--quiet", "--fen", "4k3/8/8/8/8/8/8/4K3 b - -"]).unwrap();
        let session = Session::new(config);
        assert_eq!(session.game().side_to_move(), Color::Black);
        assert_eq!(session.game().to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn execute_move_flips_turn() {
        let mut session = Session::new(quiet());
        let mut out = Vec::new();
        session
            .execute(Command::Move("e2e4".parse().unwrap()), &mut out)
            .unwrap();
        assert_eq!(session.game().side_to_move(), Color::Black);
        assert_eq!(String::from_utf8(out).unwrap(), "ok e2e4\nblack to move\n");
    }
}
