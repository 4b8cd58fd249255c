use super::{Board, Color, Piece, Role, Square};
use std::iter::successors;

/// A step on the board, in files and ranks.
pub(crate) type Direction = (i8, i8);

pub(crate) const KNIGHT: [Direction; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING: [Direction; 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const DIAGONALS: [Direction; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(crate) const ORTHOGONALS: [Direction; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The direction pawns of a [`Color`] advance along, in ranks.
pub(crate) fn forward(c: Color) -> i8 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

impl Board {
    /// The [`Square`]s along a ray, up to and including the first occupied one.
    pub fn ray(&self, whence: Square, (df, dr): Direction) -> impl Iterator<Item = Square> + '_ {
        let mut blocked = false;
        successors(whence.offset(df, dr), move |sq| sq.offset(df, dr)).take_while(move |&sq| {
            let open = !blocked;
            blocked = self[sq].is_some();
            open
        })
    }

    /// From where pieces of this [`Color`] attack this [`Square`].
    pub fn attackers(&self, sq: Square, by: Color) -> impl Iterator<Item = Square> + '_ {
        let pawns = [-1, 1]
            .into_iter()
            .filter_map(move |df| sq.offset(df, -forward(by)))
            .filter(move |&s| self[s] == Some(Piece(by, Role::Pawn)));

        let knights = KNIGHT
            .into_iter()
            .filter_map(move |(df, dr)| sq.offset(df, dr))
            .filter(move |&s| self[s] == Some(Piece(by, Role::Knight)));

        let diagonals = DIAGONALS
            .into_iter()
            .filter_map(move |d| self.ray(sq, d).last())
            .filter(move |&s| matches!(self[s], Some(Piece(c, r)) if c == by && r.is_diagonal_slider()));

        let orthogonals = ORTHOGONALS
            .into_iter()
            .filter_map(move |d| self.ray(sq, d).last())
            .filter(move |&s| matches!(self[s], Some(Piece(c, r)) if c == by && r.is_orthogonal_slider()));

        let kings = KING
            .into_iter()
            .filter_map(move |(df, dr)| sq.offset(df, dr))
            .filter(move |&s| self[s] == Some(Piece(by, Role::King)));

        pawns
            .chain(knights)
            .chain(diagonals)
            .chain(orthogonals)
            .chain(kings)
    }

    /// Whether any piece of this [`Color`] attacks this [`Square`].
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.attackers(sq, by).next().is_some()
    }
}
