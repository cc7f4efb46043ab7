//! Move values: start, end, optional promotion, and the special-move tag.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::PositionError;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The category of a move.
///
/// Promotion is not a separate kind: any pawn move onto the last rank
/// carries a promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn capture of a pawn that just double-advanced beside it.
    EnPassant,
    /// King's two-square move; the rook's relocation follows from the end file.
    Castling,
}

/// A move from `start` to `end`.
///
/// Equality and hashing use only `(start, end, promotion)`, so a caller's
/// plain move matches the engine's tagged en passant or castling move for
/// the same squares.
#[derive(Clone, Copy)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceKind>,
    kind: MoveKind,
    aux: Option<Position>,
}

impl Move {
    /// Create a normal (quiet or capturing) move.
    pub const fn new(start: Position, end: Position) -> Move {
        Move {
            start,
            end,
            promotion: None,
            kind: MoveKind::Normal,
            aux: None,
        }
    }

    /// Create a pawn move that promotes on arrival.
    pub const fn new_promotion(start: Position, end: Position, promotion: PieceKind) -> Move {
        Move {
            start,
            end,
            promotion: Some(promotion),
            kind: MoveKind::Normal,
            aux: None,
        }
    }

    /// Create an en passant capture; `captured` is the square of the taken pawn.
    pub const fn new_en_passant(start: Position, end: Position, captured: Position) -> Move {
        Move {
            start,
            end,
            promotion: None,
            kind: MoveKind::EnPassant,
            aux: Some(captured),
        }
    }

    /// Create a castling move from the king's start and destination squares.
    pub const fn new_castle(king_start: Position, king_end: Position) -> Move {
        Move {
            start: king_start,
            end: king_end,
            promotion: None,
            kind: MoveKind::Castling,
            aux: None,
        }
    }

    #[inline]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Piece kind a pawn becomes, if this move promotes.
    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Auxiliary square: the captured pawn's square for en passant.
    #[inline]
    pub const fn aux(&self) -> Option<Position> {
        self.aux
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.kind == MoveKind::Castling
    }

    /// Parse coordinate notation: `"e2e4"`, or `"e7e8q"` for a promotion.
    ///
    /// The result is always tagged [`MoveKind::Normal`]; it still compares
    /// equal to the engine's special move on the same squares.
    pub fn from_coordinate(s: &str) -> Result<Move, PositionError> {
        let invalid = || PositionError::InvalidAlgebraic {
            found: s.to_string(),
        };
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }
        let start = Position::from_algebraic(&s[0..2])?;
        let end = Position::from_algebraic(&s[2..4])?;
        match s[4..].chars().next() {
            None => Ok(Move::new(start, end)),
            Some(c) => {
                let kind = PieceKind::from_fen_char(c)
                    .filter(|k| k.is_promotion_target())
                    .ok_or_else(invalid)?;
                Ok(Move::new_promotion(start, end, kind))
            }
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.start == other.start && self.end == other.end && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.promotion.hash(state);
    }
}

impl FromStr for Move {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Move, PositionError> {
        Move::from_coordinate(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind)
    }
}
