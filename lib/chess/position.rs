use super::{attacks::forward, movegen::home};
use super::{Board, Castles, Color, Fen, File, Move, MoveKind, Moves, Outcome, Piece};
use super::{Promotion, Role, Square, Status};
use derive_more::Display;
use std::num::NonZeroU32;

#[cfg(test)]
use proptest::{prelude::*, sample::Selector};

/// The current position on the chess board.
///
/// Positions are values, playing a [`Move`] produces a new one and leaves the original untouched.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}", "Fen::from(self)")]
pub struct Position {
    board: Board,
    turn: Color,
    castles: Castles,
    en_passant: Option<Square>,
    halfmoves: u32,
    fullmoves: NonZeroU32,
}

/// The standard initial position.
impl Default for Position {
    fn default() -> Self {
        Position {
            board: Board::default(),
            turn: Color::White,
            castles: Castles::all(),
            en_passant: None,
            halfmoves: 0,
            fullmoves: NonZeroU32::MIN,
        }
    }
}

impl Position {
    /// Assembles a [`Position`] from its parts without validating it.
    pub(crate) fn from_parts(
        board: Board,
        turn: Color,
        castles: Castles,
        en_passant: Option<Square>,
        halfmoves: u32,
        fullmoves: NonZeroU32,
    ) -> Self {
        Position {
            board,
            turn,
            castles,
            en_passant,
            halfmoves,
            fullmoves,
        }
    }

    /// The arrangement of pieces on the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The castling rights.
    pub fn castles(&self) -> Castles {
        self.castles
    }

    /// The en passant target square, if any.
    ///
    /// The existence of an en passant square does not imply that the pushed pawn can be captured,
    /// but simply that a pawn has been pushed two squares forward on the previous move.
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// The number of halfmoves since the last capture or pawn advance.
    ///
    /// It resets to 0 whenever a piece is captured or a pawn is moved.
    pub fn halfmoves(&self) -> u32 {
        self.halfmoves
    }

    /// The current move number since the start of the game.
    ///
    /// It starts at 1, and is incremented after every move by black.
    pub fn fullmoves(&self) -> NonZeroU32 {
        self.fullmoves
    }

    /// The [`Square`]s occupied by [`Piece`]s giving check.
    pub fn checkers(&self) -> impl Iterator<Item = Square> + '_ {
        self.board
            .king(self.turn)
            .into_iter()
            .flat_map(move |k| self.board.attackers(k, !self.turn))
    }

    /// Whether the side to move is in [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    pub fn is_check(&self) -> bool {
        self.checkers().next().is_some()
    }

    /// The legal [`Move`]s of the piece on this [`Square`], if any.
    ///
    /// Pieces of either color may be queried, regardless of whose turn it is.
    pub fn moves_from(&self, whence: Square) -> Moves {
        let mut moves = self.pseudo_moves(whence);
        moves.retain(|m| self.is_safe(m));
        moves
    }

    /// The legal [`Move`]s of every piece of a [`Color`].
    pub fn moves_for(&self, side: Color) -> Vec<Move> {
        self.board
            .by_color(side)
            .flat_map(|sq| self.moves_from(sq))
            .collect()
    }

    /// The legal [`Move`]s of the side to move.
    pub fn moves(&self) -> Vec<Move> {
        self.moves_for(self.turn)
    }

    /// Looks up the legal [`Move`] between two squares, if there is one.
    pub fn find(&self, whence: Square, whither: Square) -> Option<Move> {
        self.moves_from(whence)
            .into_iter()
            .find(|m| m.whither() == whither)
    }

    /// Whether the mover's king is out of reach after the move is played.
    fn is_safe(&self, m: &Move) -> bool {
        let side = m.piece().color();
        let next = self.play(m, None);

        match next.board.king(side) {
            Some(k) => !next.board.is_attacked(k, !side),
            None => false,
        }
    }

    /// Classifies this position from the point of view of the side to move.
    pub fn status(&self) -> Status {
        let stuck = self
            .board
            .by_color(self.turn)
            .all(|sq| self.moves_from(sq).is_empty());

        match (stuck, self.is_check()) {
            (true, true) => Status::Checkmate,
            (true, false) => Status::Stalemate,
            (false, true) => Status::Check,
            (false, false) => Status::Normal,
        }
    }

    /// The [`Outcome`] of the game, if it has ended in this position.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            Status::Checkmate => Some(Outcome::Checkmate(!self.turn)),
            Status::Stalemate => Some(Outcome::Stalemate),
            Status::Check | Status::Normal => None,
        }
    }

    /// Plays a [`Move`], producing the successor position.
    ///
    /// The move is assumed to be [pseudo-legal](`Position::pseudo_moves`) in this position.
    /// A pawn reaching the last rank becomes the piece given by `promotion`, or a queen if none is.
    pub fn play(&self, m: &Move, promotion: Option<Promotion>) -> Position {
        let mut next = self.clone();
        let Piece(side, role) = m.piece();
        let (whence, whither) = (m.whence(), m.whither());

        next.board[whence] = None;

        let mut capture = self.board[whither].is_some();
        if m.is_en_passant() {
            next.board[Square::new(whither.file(), whence.rank())] = None;
            capture = true;
        }

        next.halfmoves = if role == Role::Pawn || capture {
            0
        } else {
            self.halfmoves.saturating_add(1)
        };

        next.board[whither] = if m.is_promotion() {
            let role = promotion.unwrap_or(Promotion::Queen).role();
            Some(Piece(side, role))
        } else {
            Some(m.piece())
        };

        let rank = home(side);
        match m.kind() {
            MoveKind::KingsideCastle => {
                next.board[Square::new(File::H, rank)] = None;
                next.board[Square::new(File::F, rank)] = Some(Piece(side, Role::Rook));
                next.castles.remove(Castles::side(side));
            }

            MoveKind::QueensideCastle => {
                next.board[Square::new(File::A, rank)] = None;
                next.board[Square::new(File::D, rank)] = Some(Piece(side, Role::Rook));
                next.castles.remove(Castles::side(side));
            }

            MoveKind::Normal | MoveKind::EnPassant => {}
        }

        next.castles.remove(Castles::from(whence) | Castles::from(whither));

        next.en_passant = if m.is_double_push() {
            whence.offset(0, forward(side))
        } else {
            None
        };

        next.turn = !self.turn;
        if next.turn == Color::White {
            next.fullmoves = self.fullmoves.saturating_add(1);
        }

        next
    }
}

#[cfg(test)]
impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    /// Positions reachable from the initial position by a random sequence of legal moves.
    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..64usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut pos = Position::default();
                for _ in 0..plies {
                    match selector.try_select(pos.moves()) {
                        None => break,
                        Some(m) => {
                            let promotion = selector.select([
                                Promotion::Queen,
                                Promotion::Rook,
                                Promotion::Bishop,
                                Promotion::Knight,
                            ]);

                            pos = pos.play(&m, Some(promotion));
                        }
                    }
                }

                pos
            })
            .no_shrink()
            .boxed()
    }
}
