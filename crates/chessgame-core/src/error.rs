//! Error types for coordinates, move submission, and FEN parsing.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

/// Errors from constructing a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A coordinate lies outside 1..=8.
    #[error("position ({file}, {rank}) is off the board")]
    OutOfBounds {
        /// The requested file.
        file: i16,
        /// The requested rank.
        rank: i16,
    },
    /// A string is not a square in algebraic notation.
    #[error("invalid square: \"{found}\"")]
    InvalidAlgebraic {
        /// The string that failed to parse.
        found: String,
    },
}

/// Reasons a submitted move is rejected. The game is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The start square of the move is empty.
    #[error("no piece at {square}")]
    NoPieceAtSource {
        /// The empty start square.
        square: Position,
    },
    /// The move is not among the legal moves of the piece on its start square.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
    /// The piece on the start square belongs to the side not on move.
    #[error("piece at {square} is {color}, but it is not {color}'s turn")]
    OutOfTurn {
        /// The start square.
        square: Position,
        /// Color of the piece that was asked to move.
        color: Color,
    },
}

/// Errors that occur when parsing a FEN record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The record has fewer than 4 or more than 6 space-separated fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Board rank (8 for the first FEN rank, 1 for the last).
        rank: u8,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a square on rank 3 or 6.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveError, PositionError};
    use crate::color::Color;
    use crate::position::Position;

    #[test]
    fn position_error_display() {
        let err = PositionError::OutOfBounds { file: 9, rank: 1 };
        assert_eq!(format!("{err}"), "position (9, 1) is off the board");
    }

    #[test]
    fn move_error_display() {
        let e2 = Position::new(5, 2).unwrap();
        assert_eq!(
            format!("{}", MoveError::NoPieceAtSource { square: e2 }),
            "no piece at e2"
        );
        assert_eq!(
            format!(
                "{}",
                MoveError::OutOfTurn {
                    square: e2,
                    color: Color::Black
                }
            ),
            "piece at e2 is black, but it is not black's turn"
        );
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert_eq!(format!("{err}"), "expected 4 to 6 FEN fields, found 2");
    }
}
