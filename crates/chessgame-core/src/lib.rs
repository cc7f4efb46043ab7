//! Chess rules engine: board representation, move generation, legality
//! filtering, and check/checkmate/stalemate detection.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{FenError, MoveError, PositionError};
pub use fen::STARTING_FEN;
pub use game::{Game, GameStatus};
pub use movegen::MoveList;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
