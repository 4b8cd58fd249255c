use super::{Color, File, Piece, Rank, Role, Square};
use std::ops::{Index, IndexMut};

/// The arrangement of [`Piece`]s on the chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([Option<Piece>; 64]);

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        Board([None; 64])
    }

    /// An iterator over the occupied [`Square`]s and the [`Piece`]s on them.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| Some((sq, self[sq]?)))
    }

    /// [`Square`]s occupied by pieces of a [`Color`].
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |(_, p)| p.color() == c)
            .map(|(sq, _)| sq)
    }

    /// [`Square`]s occupied by a [`Piece`].
    pub fn by_piece(&self, p: Piece) -> impl Iterator<Item = Square> + '_ {
        self.iter().filter(move |(_, q)| *q == p).map(|(sq, _)| sq)
    }

    /// The [`Square`] of the king of a [`Color`], if any.
    pub fn king(&self, c: Color) -> Option<Square> {
        self.by_piece(Piece(c, Role::King)).next()
    }
}

/// The standard initial arrangement.
impl Default for Board {
    fn default() -> Self {
        use Role::*;

        let mut board = Board::empty();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (f, role) in File::iter().zip(back) {
            board[Square::new(f, Rank::First)] = Some(Piece(Color::White, role));
            board[Square::new(f, Rank::Second)] = Some(Piece(Color::White, Pawn));
            board[Square::new(f, Rank::Seventh)] = Some(Piece(Color::Black, Pawn));
            board[Square::new(f, Rank::Eighth)] = Some(Piece(Color::Black, role));
        }

        board
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.index()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[sq.index()]
    }
}
