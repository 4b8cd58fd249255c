use super::{Color, Piece, Rank, Role, Square};
use derive_more::{Constructor, Display};

/// Characteristics of a [`Move`] that need special handling when it is played.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum MoveKind {
    #[display(fmt = "normal")]
    Normal,
    #[display(fmt = "en passant")]
    EnPassant,
    #[display(fmt = "kingside castle")]
    KingsideCastle,
    #[display(fmt = "queenside castle")]
    QueensideCastle,
}

/// A chess move.
///
/// Castling is represented by the king's move only, the rook follows implicitly.
/// The piece a pawn promotes to is not part of the move, see [`Move::is_promotion`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", whence, whither)]
pub struct Move {
    whence: Square,
    whither: Square,
    piece: Piece,
    capture: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The moving [`Piece`].
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The captured [`Piece`], if any.
    ///
    /// For en passant this is the pawn beside the source square, not the one on the destination.
    pub fn capture(&self) -> Option<Piece> {
        self.capture
    }

    /// This move's [`MoveKind`].
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Whether this move captures a piece.
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether this move is a castle.
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::KingsideCastle | MoveKind::QueensideCastle)
    }

    /// Whether this move is an en passant capture.
    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    /// Whether this move advances a pawn by two ranks.
    pub fn is_double_push(&self) -> bool {
        self.piece.role() == Role::Pawn && (self.whither.rank() - self.whence.rank()).abs() == 2
    }

    /// Whether this move takes a pawn to the last rank.
    ///
    /// A promotion piece must be chosen before such a move can be committed.
    pub fn is_promotion(&self) -> bool {
        let last = match self.piece.color() {
            Color::White => Rank::Eighth,
            Color::Black => Rank::First,
        };

        self.piece.role() == Role::Pawn && self.whither.rank() == last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_serializes_to_pure_coordinate_notation(m: Move) {
        assert_eq!(m.to_string(), format!("{}{}", m.whence(), m.whither()));
    }

    #[proptest]
    fn castles_are_not_en_passant(
        #[filter(#m.is_castle())] m: Move,
    ) {
        assert!(!m.is_en_passant());
    }

    #[proptest]
    fn capture_is_whether_a_piece_is_taken(m: Move) {
        assert_eq!(m.is_capture(), m.capture().is_some());
    }

    #[proptest]
    fn only_pawns_promote(#[filter(#m.piece().role() != Role::Pawn)] m: Move) {
        assert!(!m.is_promotion());
        assert!(!m.is_double_push());
    }

    #[proptest]
    fn white_pawns_promote_on_the_eighth_rank(
        #[filter(#whence.rank() == Rank::Seventh)] whence: Square,
        #[filter(#whither.rank() == Rank::Eighth)] whither: Square,
    ) {
        let m = Move::new(
            whence,
            whither,
            Piece(Color::White, Role::Pawn),
            None,
            MoveKind::Normal,
        );

        assert!(m.is_promotion());
    }

    #[proptest]
    fn black_pawns_promote_on_the_first_rank(
        #[filter(#whence.rank() == Rank::Second)] whence: Square,
        #[filter(#whither.rank() == Rank::First)] whither: Square,
    ) {
        let m = Move::new(
            whence,
            whither,
            Piece(Color::Black, Role::Pawn),
            None,
            MoveKind::Normal,
        );

        assert!(m.is_promotion());
    }

    #[proptest]
    fn pawn_advancing_two_ranks_is_a_double_push(c: Color) {
        let (whence, whither) = match c {
            Color::White => (Square::E2, Square::E4),
            Color::Black => (Square::E7, Square::E5),
        };

        let m = Move::new(whence, whither, Piece(c, Role::Pawn), None, MoveKind::Normal);
        assert!(m.is_double_push());
        assert!(!m.is_promotion());
    }
}
