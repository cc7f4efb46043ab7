//! Board coordinates as a (file, rank) pair, both 1-based.

use std::fmt;
use std::str::FromStr;

use crate::error::PositionError;

/// A square on the board: `file` 1..=8 (a..h) and `rank` 1..=8.
///
/// Ordered by file, then rank. Constructed only through [`Position::new`]
/// or [`Position::offset`], so both coordinates are always in range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Create a position, failing with [`PositionError::OutOfBounds`] if
    /// either coordinate is outside 1..=8.
    pub fn new(file: i16, rank: i16) -> Result<Position, PositionError> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Ok(Position {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(PositionError::OutOfBounds { file, rank })
        }
    }

    /// Return the file (1 = a, 8 = h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Return the rank (1..=8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return the position shifted by `(df, dr)`, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Position> {
        let file = self.file as i16 + df as i16;
        let rank = self.rank as i16 + dr as i16;
        Position::new(file, rank).ok()
    }

    /// Return the position on the same rank with the given file.
    #[inline]
    pub fn with_file(self, file: u8) -> Option<Position> {
        Position::new(file as i16, self.rank as i16).ok()
    }

    /// Zero-based index into an 8x8 grid, rank-major from a1.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Iterate over all 64 positions, a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (1u8..=8).flat_map(|rank| (1u8..=8).map(move |file| Position { file, rank }))
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Result<Position, PositionError> {
        let invalid = || PositionError::InvalidAlgebraic {
            found: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file_byte, rank_byte) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return Err(invalid());
        }
        Position::new((file_byte - b'a' + 1) as i16, (rank_byte - b'0') as i16)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Position, PositionError> {
        Position::from_algebraic(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file - 1) as char;
        write!(f, "{file}{}", self.rank)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::error::PositionError;

    #[test]
    fn new_in_range() {
        let pos = Position::new(5, 2).unwrap();
        assert_eq!(pos.file(), 5);
        assert_eq!(pos.rank(), 2);
    }

    #[test]
    fn new_out_of_range() {
        for (file, rank) in [(0, 1), (1, 0), (9, 4), (4, 9), (-1, -1)] {
            assert_eq!(
                Position::new(file, rank),
                Err(PositionError::OutOfBounds { file, rank })
            );
        }
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Position::new(1, 1).unwrap();
        assert_eq!(a1.offset(1, 2), Position::new(2, 3).ok());
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, 8), None);
    }

    #[test]
    fn ordering_is_file_then_rank() {
        let a8 = Position::new(1, 8).unwrap();
        let b1 = Position::new(2, 1).unwrap();
        assert!(a8 < b1);
    }

    #[test]
    fn algebraic_roundtrip() {
        for pos in Position::all() {
            let text = pos.to_string();
            assert_eq!(text.parse::<Position>(), Ok(pos));
        }
        assert_eq!(Position::from_algebraic("e4").unwrap().to_string(), "e4");
    }

    #[test]
    fn algebraic_invalid() {
        for bad in ["i1", "a9", "", "a", "a1b", "E4"] {
            assert!(Position::from_algebraic(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn all_covers_board() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        for (i, pos) in all.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }
}
