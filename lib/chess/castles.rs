use super::{Color, Square};
use bitflags::bitflags;
use std::fmt::{self, Write};

bitflags! {
    /// The castling rights in a chess [`Position`][`crate::chess::Position`].
    ///
    /// Each right is cleared for good once the king or the matching rook moves,
    /// or once that rook is captured on its original square.
    pub struct Castles: u8 {
        const WHITE_SHORT = 0b0001;
        const WHITE_LONG =  0b0010;
        const BLACK_SHORT = 0b0100;
        const BLACK_LONG =  0b1000;
    }
}

impl Castles {
    /// The kingside right of a side.
    pub fn short(side: Color) -> Self {
        match side {
            Color::White => Castles::WHITE_SHORT,
            Color::Black => Castles::BLACK_SHORT,
        }
    }

    /// The queenside right of a side.
    pub fn long(side: Color) -> Self {
        match side {
            Color::White => Castles::WHITE_LONG,
            Color::Black => Castles::BLACK_LONG,
        }
    }

    /// Both rights of a side.
    pub fn side(side: Color) -> Self {
        Castles::short(side) | Castles::long(side)
    }

    /// Whether the given side has kingside castling rights.
    pub fn has_short(&self, side: Color) -> bool {
        self.contains(Castles::short(side))
    }

    /// Whether the given side has queenside castling rights.
    pub fn has_long(&self, side: Color) -> bool {
        self.contains(Castles::long(side))
    }
}

impl Default for Castles {
    fn default() -> Self {
        Castles::all()
    }
}

/// The rights lost when a piece leaves or lands on this [`Square`].
impl From<Square> for Castles {
    fn from(sq: Square) -> Self {
        match sq {
            Square::A1 => Castles::WHITE_LONG,
            Square::H1 => Castles::WHITE_SHORT,
            Square::E1 => Castles::side(Color::White),
            Square::A8 => Castles::BLACK_LONG,
            Square::H8 => Castles::BLACK_SHORT,
            Square::E8 => Castles::side(Color::Black),
            _ => Castles::empty(),
        }
    }
}

impl fmt::Display for Castles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_char('-');
        }

        for (right, c) in [
            (Castles::WHITE_SHORT, 'K'),
            (Castles::WHITE_LONG, 'Q'),
            (Castles::BLACK_SHORT, 'k'),
            (Castles::BLACK_LONG, 'q'),
        ] {
            if self.contains(right) {
                f.write_char(c)?;
            }
        }

        Ok(())
    }
}
