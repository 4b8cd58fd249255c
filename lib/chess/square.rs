use super::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use shakmaty as sm;
use std::{fmt, str::FromStr};

/// A square on the chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

#[rustfmt::skip]
const SQUARES: [Square; 64] = {
    use Square::*;
    [
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    ]
};

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    pub fn new(f: File, r: Rank) -> Self {
        SQUARES[(r.index() * 8 + f.index()) as usize]
    }

    /// Constructs [`Square`] from grid coordinates.
    ///
    /// Row 0 is the eighth rank, the one black starts on, and row 7 is the first rank.
    /// Column 0 is the a-file.
    pub fn from_coords(row: u8, col: u8) -> Result<Self, InvalidSquare> {
        if row < 8 && col < 8 {
            Ok(SQUARES[((7 - row) * 8 + col) as usize])
        } else {
            Err(InvalidSquare(row, col))
        }
    }

    /// This square's [`File`].
    pub fn file(&self) -> File {
        File::ALL[self.index() % 8]
    }

    /// This square's [`Rank`].
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.index() / 8]
    }

    /// This square's index in the range (0..=63), from a1 to h8 rank by rank.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The grid row, where 0 is the eighth rank.
    pub fn row(&self) -> u8 {
        7 - self.rank().index()
    }

    /// The grid column, where 0 is the a-file.
    pub fn col(&self) -> u8 {
        self.file().index()
    }

    /// The square `df` files and `dr` ranks away, if still on the board.
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let f = self.file().index() as i8 + df;
        let r = self.rank().index() as i8 + dr;

        if (0..8).contains(&f) && (0..8).contains(&r) {
            Some(SQUARES[(r * 8 + f) as usize])
        } else {
            None
        }
    }

    /// Returns an iterator over all [`Square`]s ordered by [index][`Square::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        SQUARES.into_iter()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Grid coordinates that fall outside of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "({}, {}) is not a square, expected coordinates in the range `(0..=7)`", _0, _1)]
pub struct InvalidSquare(#[error(not(source))] pub u8, #[error(not(source))] pub u8);

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse square; {}")]
pub enum ParseSquareError {
    #[display(fmt = "invalid file")]
    InvalidFile(ParseFileError),
    #[display(fmt = "invalid rank")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}

#[doc(hidden)]
impl From<sm::Square> for Square {
    fn from(s: sm::Square) -> Self {
        Square::new(s.file().into(), s.rank().into())
    }
}

#[doc(hidden)]
impl From<Square> for sm::Square {
    fn from(s: Square) -> Self {
        sm::Square::from_coords(s.file().into(), s.rank().into())
    }
}
