//! FEN (Forsyth–Edwards Notation) parsing and serialization.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::game::Game;
use crate::piece::Piece;
use crate::position::Position;

/// The FEN record for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse the piece placement field of a FEN record.
    pub fn from_placement(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        // FEN lists rank 8 first.
        for (rank, rank_str) in (1u8..=8).rev().zip(ranks) {
            let mut file: usize = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += digit as usize;
                    if file > 8 {
                        return Err(FenError::BadRankLength { rank, length: file });
                    }
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                    file += 1;
                    let pos = Position::new(file as i16, rank as i16)
                        .map_err(|_| FenError::BadRankLength { rank, length: file })?;
                    board.set_piece(pos, Some(piece));
                }
            }

            if file != 8 {
                return Err(FenError::BadRankLength { rank, length: file });
            }
        }
        Ok(board)
    }

    /// Serialize the piece placement as a FEN placement field.
    pub fn placement_fen(&self) -> String {
        let rows = self.snapshot();
        let mut fen = String::with_capacity(64);
        for (i, row) in rows.iter().rev().enumerate() {
            if i > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(fen, "{empty}");
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{empty}");
            }
        }
        fen
    }
}

impl FromStr for Game {
    type Err = FenError;

    /// Parse a FEN record. The move counters are optional and ignored.
    fn from_str(fen: &str) -> Result<Game, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = Board::from_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        // FEN names the skipped square; the game tracks the pawn that skipped it.
        let en_passant = match fields[3] {
            "-" => None,
            field => {
                let invalid = || FenError::InvalidEnPassant {
                    found: field.to_string(),
                };
                let skipped = Position::from_algebraic(field).map_err(|_| invalid())?;
                let pawn = match skipped.rank() {
                    3 => skipped.offset(0, 1),
                    6 => skipped.offset(0, -1),
                    _ => None,
                };
                Some(pawn.ok_or_else(invalid)?)
            }
        };

        Ok(Game::from_parts(board, side_to_move, castling, en_passant))
    }
}

impl Game {
    /// Serialize the game as a FEN record. Move counters are written as `0 1`.
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let en_passant = self
            .en_passant_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} 0 1",
            self.board().placement_fen(),
            side,
            self.castling().to_fen(),
            en_passant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::FenError;
    use crate::game::Game;
    use crate::piece::Piece;
    use crate::position::Position;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn starting_fen_matches_new_game() {
        let game: Game = STARTING_FEN.parse().unwrap();
        assert_eq!(game, Game::new());
        assert_eq!(Game::new().to_fen(), STARTING_FEN);
    }

    #[test]
    fn placement_roundtrip() {
        let placement = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.placement_fen(), placement);
        assert_eq!(board.get_piece(sq("e2")), Some(Piece::WHITE_BISHOP));
        assert_eq!(board.get_piece(sq("h3")), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn en_passant_field_names_skipped_square() {
        let game: Game = "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 3"
            .parse()
            .unwrap();
        assert_eq!(game.en_passant_target(), Some(sq("e4")));
        assert_eq!(game.en_passant_square(), Some(sq("e3")));
        assert!(game.to_fen().contains(" e3 "));
    }

    #[test]
    fn counters_are_optional() {
        let game: Game = "4k3/8/8/8/8/8/8/4K3 b - -".parse().unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.castling(), CastleRights::NONE);
    }

    #[test]
    fn rejects_malformed_records() {
        assert_eq!(
            "8/8/8/8 w - -".parse::<Game>(),
            Err(FenError::WrongRankCount { found: 4 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8".parse::<Game>(),
            Err(FenError::WrongFieldCount { found: 1 })
        );
        assert!(matches!(
            "9/8/8/8/8/8/8/8 w - -".parse::<Game>(),
            Err(FenError::InvalidPieceChar { character: '9' })
        ));
        assert!(matches!(
            "ppppppppp/8/8/8/8/8/8/8 w - -".parse::<Game>(),
            Err(FenError::BadRankLength { rank: 8, .. })
        ));
        assert!(matches!(
            format!("{}/8/8/8/8/8/8/8 w - -", "8".repeat(32)).parse::<Game>(),
            Err(FenError::BadRankLength { rank: 8, length: 16 })
        ));
        assert!(matches!(
            "44p/8/8/8/8/8/8/8 w - -".parse::<Game>(),
            Err(FenError::BadRankLength { rank: 8, length: 9 })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/7 w - -".parse::<Game>(),
            Err(FenError::BadRankLength { rank: 1, length: 7 })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 x - -".parse::<Game>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert!(matches!(
            "8/8/8/8/8/8/8/8 w - e4".parse::<Game>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }
}
