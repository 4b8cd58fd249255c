use super::{Board, Castles, Color, Position, Square};
use derive_more::{Display, Error, From};
use shakmaty as sm;
use std::str::FromStr;

/// A representation of the [Forsyth–Edwards Notation].
///
/// [Forsyth–Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Debug, Display, Default, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}", _0)]
pub struct Fen(sm::fen::Fen);

/// The reason why the string is not valid FEN.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseFenError {
    #[display(fmt = "syntax error at the piece placement field")]
    InvalidPlacement,
    #[display(fmt = "syntax error at the side to move field")]
    InvalidTurn,
    #[display(fmt = "syntax error at the castling rights field")]
    InvalidCastlingRights,
    #[display(fmt = "syntax error at the en passant square field")]
    InvalidEnPassantSquare,
    #[display(fmt = "syntax error at the halfmove clock field")]
    InvalidHalfmoveClock,
    #[display(fmt = "syntax error at the fullmove counter field")]
    InvalidFullmoves,
    #[display(fmt = "unspecified syntax error")]
    InvalidSyntax,
}

#[doc(hidden)]
impl From<sm::fen::ParseFenError> for ParseFenError {
    fn from(e: sm::fen::ParseFenError) -> Self {
        use ParseFenError::*;
        match e {
            sm::fen::ParseFenError::InvalidBoard => InvalidPlacement,
            sm::fen::ParseFenError::InvalidTurn => InvalidTurn,
            sm::fen::ParseFenError::InvalidCastling => InvalidCastlingRights,
            sm::fen::ParseFenError::InvalidEpSquare => InvalidEnPassantSquare,
            sm::fen::ParseFenError::InvalidHalfmoveClock => InvalidHalfmoveClock,
            sm::fen::ParseFenError::InvalidFullmoves => InvalidFullmoves,
            _ => InvalidSyntax,
        }
    }
}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Fen(s.parse()?))
    }
}

/// The reason why a [`Fen`] does not describe a legal [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalPosition {
    #[display(fmt = "at least one side has no king")]
    MissingKing,
    #[display(fmt = "at least one side has multiple kings")]
    TooManyKings,
    #[display(fmt = "there are pawns on the back-rank")]
    PawnsOnBackRank,
    #[display(fmt = "the player in check is not to move")]
    OppositeCheck,
    #[display(fmt = "invalid en passant square; wrong rank, occupied, or missing pushed pawn")]
    InvalidEnPassantSquare,
    #[display(fmt = "invalid castling rights")]
    InvalidCastlingRights,
    #[display(fmt = "no sequence of legal moves can reach this position")]
    Other,
}

#[doc(hidden)]
impl From<sm::PositionError<sm::Chess>> for IllegalPosition {
    fn from(e: sm::PositionError<sm::Chess>) -> Self {
        let kinds = e.kinds();

        if kinds.contains(sm::PositionErrorKinds::MISSING_KING) {
            IllegalPosition::MissingKing
        } else if kinds.contains(sm::PositionErrorKinds::TOO_MANY_KINGS) {
            IllegalPosition::TooManyKings
        } else if kinds.contains(sm::PositionErrorKinds::PAWNS_ON_BACKRANK) {
            IllegalPosition::PawnsOnBackRank
        } else if kinds.contains(sm::PositionErrorKinds::OPPOSITE_CHECK) {
            IllegalPosition::OppositeCheck
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_EP_SQUARE) {
            IllegalPosition::InvalidEnPassantSquare
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_CASTLING_RIGHTS) {
            IllegalPosition::InvalidCastlingRights
        } else {
            IllegalPosition::Other
        }
    }
}

/// The reason why parsing a [`Position`] from a FEN string failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse FEN; {}", _0)]
    InvalidFen(ParseFenError),
    #[display(fmt = "illegal position; {}", _0)]
    IllegalPosition(IllegalPosition),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Position::try_from(s.parse::<Fen>()?)?)
    }
}

/// The rook corners that back each castling right.
const CORNERS: [(Castles, sm::Square); 4] = [
    (Castles::WHITE_SHORT, sm::Square::H1),
    (Castles::WHITE_LONG, sm::Square::A1),
    (Castles::BLACK_SHORT, sm::Square::H8),
    (Castles::BLACK_LONG, sm::Square::A8),
];

impl From<&Position> for Fen {
    fn from(pos: &Position) -> Self {
        let castling_rights = CORNERS
            .into_iter()
            .filter(|&(c, _)| pos.castles().contains(c))
            .fold(sm::Bitboard(0), |bb, (_, sq)| bb | sm::Bitboard::from(sq));

        Fen(sm::fen::Fen(sm::Setup {
            board: pos
                .board()
                .iter()
                .map(|(s, p)| (sm::Square::from(s), sm::Piece::from(p)))
                .collect(),
            turn: pos.turn().into(),
            castling_rights,
            ep_square: pos.en_passant().map(sm::Square::from),
            halfmoves: pos.halfmoves(),
            fullmoves: pos.fullmoves(),
            ..Default::default()
        }))
    }
}

impl From<Position> for Fen {
    fn from(pos: Position) -> Self {
        Fen::from(&pos)
    }
}

impl TryFrom<Fen> for Position {
    type Error = IllegalPosition;

    fn try_from(fen: Fen) -> Result<Self, Self::Error> {
        let chess: sm::Chess = sm::Setup::from(fen.0).position(sm::CastlingMode::Standard)?;
        Ok(chess.into())
    }
}

#[doc(hidden)]
impl From<sm::Chess> for Position {
    fn from(chess: sm::Chess) -> Self {
        let setup = sm::Position::into_setup(chess, sm::EnPassantMode::Always);

        let mut board = Board::empty();
        for sq in Square::iter() {
            board[sq] = setup.board.piece_at(sq.into()).map(Into::into);
        }

        let castles = CORNERS
            .into_iter()
            .filter(|&(_, sq)| setup.castling_rights.contains(sq))
            .fold(Castles::empty(), |acc, (c, _)| acc | c);

        Position::from_parts(
            board,
            Color::from(setup.turn),
            castles,
            setup.ep_square.map(Into::into),
            setup.halfmoves,
            setup.fullmoves,
        )
    }
}

#[doc(hidden)]
impl TryFrom<Position> for sm::Chess {
    type Error = IllegalPosition;

    fn try_from(pos: Position) -> Result<Self, Self::Error> {
        let fen = Fen::from(pos).0;
        Ok(sm::Setup::from(fen).position(sm::CastlingMode::Standard)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Piece, Role};
    use test_strategy::proptest;

    #[proptest]
    fn initial_position_is_printed_in_standard_notation() {
        assert_eq!(
            Position::default().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[proptest]
    fn parsing_printed_position_is_an_identity(pos: Position) {
        assert_eq!(pos.to_string().parse(), Ok(pos));
    }

    #[proptest]
    fn parsing_printed_fen_is_an_identity(pos: Position) {
        let fen = Fen::from(&pos);
        assert_eq!(fen.to_string().parse(), Ok(fen));
    }

    #[proptest]
    fn parsing_fen_reads_every_field() {
        let pos: Position = "4k2r/8/8/3pP3/8/8/8/4K3 w k d6 3 42".parse()?;
        assert_eq!(pos.turn(), Color::White);
        assert_eq!(pos.castles(), Castles::BLACK_SHORT);
        assert_eq!(pos.en_passant(), Some(Square::D6));
        assert_eq!(pos.halfmoves(), 3);
        assert_eq!(pos.fullmoves().get(), 42);
        assert_eq!(pos.board()[Square::H8], Some(Piece(Color::Black, Role::Rook)));
        assert_eq!(pos.board().iter().count(), 5);
    }

    #[proptest]
    fn parsing_invalid_fen_fails(
        #[strategy("[^[:ascii:]]+")] r: String,
        #[strategy(..=56usize)] n: usize,
    ) {
        let fen = Position::default().to_string();
        assert!([&fen[..n], &r].concat().parse::<Fen>().is_err());
    }

    #[proptest]
    fn parsing_illegal_position_fails() {
        assert_eq!(
            "8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Position>(),
            Err(ParsePositionError::IllegalPosition(IllegalPosition::MissingKing))
        );

        assert_eq!(
            "P3k3/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Position>(),
            Err(ParsePositionError::IllegalPosition(IllegalPosition::PawnsOnBackRank))
        );
    }
}
