use super::attacks::{forward, Direction, DIAGONALS, KING, KNIGHT, ORTHOGONALS};
use super::{Castles, Color, File, Move, MoveKind, Piece, Position, Rank, Role, Square};
use arrayvec::ArrayVec;

/// The moves of a single piece.
///
/// No piece has more than 27 moves available, a queen in the middle of an empty board.
pub type Moves = ArrayVec<Move, 32>;

/// The rank pieces of a [`Color`] start on.
pub(crate) fn home(c: Color) -> Rank {
    match c {
        Color::White => Rank::First,
        Color::Black => Rank::Eighth,
    }
}

/// The rank pawns of a [`Color`] start on.
fn pawn_start(c: Color) -> Rank {
    match c {
        Color::White => Rank::Second,
        Color::Black => Rank::Seventh,
    }
}

impl Position {
    /// The [pseudo-legal] moves of the piece on this [`Square`], if any.
    ///
    /// Pseudo-legal moves follow the movement rules of each piece, but may leave the king in check.
    ///
    /// [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move
    pub fn pseudo_moves(&self, whence: Square) -> Moves {
        let mut moves = Moves::new();

        if let Some(piece) = self.board()[whence] {
            match piece.role() {
                Role::Pawn => self.pawn_moves(whence, piece, &mut moves),
                Role::Knight => self.leaper_moves(whence, piece, &KNIGHT, &mut moves),
                Role::Bishop => self.slider_moves(whence, piece, &DIAGONALS, &mut moves),
                Role::Rook => self.slider_moves(whence, piece, &ORTHOGONALS, &mut moves),
                Role::Queen => {
                    self.slider_moves(whence, piece, &DIAGONALS, &mut moves);
                    self.slider_moves(whence, piece, &ORTHOGONALS, &mut moves);
                }
                Role::King => {
                    self.leaper_moves(whence, piece, &KING, &mut moves);
                    self.castling_moves(whence, piece, &mut moves);
                }
            }
        }

        moves
    }

    fn pawn_moves(&self, whence: Square, piece: Piece, moves: &mut Moves) {
        let board = self.board();
        let c = piece.color();
        let fwd = forward(c);

        if let Some(one) = whence.offset(0, fwd).filter(|&sq| board[sq].is_none()) {
            moves.push(Move::new(whence, one, piece, None, MoveKind::Normal));

            let start = whence.rank() == pawn_start(c);
            if let Some(two) = one.offset(0, fwd).filter(|&sq| start && board[sq].is_none()) {
                moves.push(Move::new(whence, two, piece, None, MoveKind::Normal));
            }
        }

        for df in [-1, 1] {
            let whither = match whence.offset(df, fwd) {
                Some(sq) => sq,
                None => continue,
            };

            match board[whither] {
                Some(p) if p.color() != c => {
                    moves.push(Move::new(whence, whither, piece, Some(p), MoveKind::Normal));
                }

                None if self.en_passant() == Some(whither) => {
                    let victim = Square::new(whither.file(), whence.rank());
                    if let Some(p @ Piece(v, Role::Pawn)) = board[victim] {
                        if v != c {
                            let kind = MoveKind::EnPassant;
                            moves.push(Move::new(whence, whither, piece, Some(p), kind));
                        }
                    }
                }

                _ => {}
            }
        }
    }

    fn leaper_moves(&self, whence: Square, piece: Piece, offsets: &[Direction], moves: &mut Moves) {
        for &(df, dr) in offsets {
            if let Some(whither) = whence.offset(df, dr) {
                match self.board()[whither] {
                    Some(p) if p.color() == piece.color() => {}
                    capture => moves.push(Move::new(whence, whither, piece, capture, MoveKind::Normal)),
                }
            }
        }
    }

    fn slider_moves(&self, whence: Square, piece: Piece, rays: &[Direction], moves: &mut Moves) {
        for &d in rays {
            for whither in self.board().ray(whence, d) {
                match self.board()[whither] {
                    Some(p) if p.color() == piece.color() => {}
                    capture => moves.push(Move::new(whence, whither, piece, capture, MoveKind::Normal)),
                }
            }
        }
    }

    fn castling_moves(&self, whence: Square, piece: Piece, moves: &mut Moves) {
        let board = self.board();
        let c = piece.color();
        let rank = home(c);

        if whence != Square::new(File::E, rank) || board.is_attacked(whence, !c) {
            return;
        }

        let wings = [
            (
                Castles::short(c),
                File::H,
                &[File::F, File::G][..],
                &[File::F, File::G][..],
                MoveKind::KingsideCastle,
            ),
            (
                Castles::long(c),
                File::A,
                &[File::B, File::C, File::D][..],
                &[File::D, File::C][..],
                MoveKind::QueensideCastle,
            ),
        ];

        for (right, corner, between, passage, kind) in wings {
            if !self.castles().contains(right)
                || board[Square::new(corner, rank)] != Some(Piece(c, Role::Rook))
                || between.iter().any(|&f| board[Square::new(f, rank)].is_some())
                || passage.iter().any(|&f| board.is_attacked(Square::new(f, rank), !c))
            {
                continue;
            }

            let whither = Square::new(passage[passage.len() - 1], rank);
            moves.push(Move::new(whence, whither, piece, None, kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Fen;
    use test_strategy::proptest;

    fn position(fen: &str) -> Position {
        fen.parse::<Fen>().unwrap().try_into().unwrap()
    }

    fn targets(pos: &Position, sq: Square) -> Vec<Square> {
        let mut sqs: Vec<_> = pos.pseudo_moves(sq).iter().map(Move::whither).collect();
        sqs.sort();
        sqs
    }

    #[proptest]
    fn empty_square_has_no_moves(
        #[by_ref] pos: Position,
        #[filter(#pos.board()[#sq].is_none())] sq: Square,
    ) {
        assert!(pos.pseudo_moves(sq).is_empty());
    }

    #[proptest]
    fn moves_start_from_the_square_of_the_piece(pos: Position, sq: Square) {
        for m in pos.pseudo_moves(sq) {
            assert_eq!(m.whence(), sq);
            assert_eq!(Some(m.piece()), pos.board()[sq]);
        }
    }

    #[proptest]
    fn moves_never_land_on_friendly_pieces(pos: Position, sq: Square) {
        for m in pos.pseudo_moves(sq) {
            assert_ne!(
                pos.board()[m.whither()].map(|p| p.color()),
                Some(m.piece().color())
            );
        }
    }

    #[proptest]
    fn capture_is_the_piece_on_the_destination_unless_en_passant(pos: Position, sq: Square) {
        for m in pos.pseudo_moves(sq) {
            if m.is_en_passant() {
                assert_eq!(pos.board()[m.whither()], None);
                assert_eq!(m.capture().map(|p| p.role()), Some(Role::Pawn));
            } else {
                assert_eq!(m.capture(), pos.board()[m.whither()]);
            }
        }
    }

    #[proptest]
    fn pawns_push_one_or_two_squares_from_their_starting_rank() {
        let pos = Position::default();
        assert_eq!(targets(&pos, Square::E2), vec![Square::E3, Square::E4]);

        let pos = position("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
        assert_eq!(targets(&pos, Square::E3), vec![Square::E4]);
    }

    #[proptest]
    fn pawns_cannot_push_through_pieces() {
        let pos = position("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(targets(&pos, Square::E2).is_empty());

        let pos = position("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(targets(&pos, Square::E2), vec![Square::E3]);
    }

    #[proptest]
    fn pawns_capture_diagonally_onto_enemy_pieces_only() {
        let pos = position("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1");
        assert_eq!(
            targets(&pos, Square::E2),
            vec![Square::D3, Square::E3, Square::E4]
        );
    }

    #[proptest]
    fn en_passant_captures_the_pawn_beside_the_source() {
        let pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let m = pos
            .pseudo_moves(Square::E5)
            .into_iter()
            .find(Move::is_en_passant)
            .unwrap();

        assert_eq!(m.whither(), Square::D6);
        assert_eq!(m.capture(), Some(Piece(Color::Black, Role::Pawn)));
    }

    #[proptest]
    fn en_passant_requires_an_adjacent_file() {
        let pos = position("4k3/8/8/3p3P/8/8/8/4K3 w - d6 0 1");
        assert!(!pos.pseudo_moves(Square::H5).iter().any(Move::is_en_passant));
    }

    #[proptest]
    fn moves_onto_the_last_rank_are_promotions() {
        let pos = position("3nk3/4P3/8/8/8/8/8/4K3 w - - 0 1");
        let moves = pos.pseudo_moves(Square::E7);
        assert_eq!(moves.len(), 1);
        assert!(moves.iter().all(Move::is_promotion));

        let pos = position("4k3/8/8/8/8/8/1p6/R3K3 b - - 0 1");
        let moves = pos.pseudo_moves(Square::B2);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(Move::is_promotion));
    }

    #[proptest]
    fn knights_jump_over_pieces() {
        let pos = Position::default();
        assert_eq!(targets(&pos, Square::G1), vec![Square::F3, Square::H3]);
    }

    #[proptest]
    fn sliders_stop_at_the_first_piece_capturing_enemies() {
        let pos = position("4k3/8/8/8/1p6/8/8/R3K3 w - - 0 1");
        assert_eq!(
            targets(&pos, Square::A1),
            vec![
                Square::B1,
                Square::C1,
                Square::D1,
                Square::A2,
                Square::A3,
                Square::A4,
                Square::A5,
                Square::A6,
                Square::A7,
                Square::A8
            ]
        );

        let pos = position("4k3/8/8/8/8/2p5/1P6/B3K3 w - - 0 1");
        assert!(targets(&pos, Square::A1).is_empty());
    }

    #[proptest]
    fn queen_in_the_middle_of_an_empty_board_has_27_moves() {
        let pos = position("k7/8/8/8/3Q4/8/8/7K w - - 0 1");
        assert_eq!(pos.pseudo_moves(Square::D4).len(), 27);
    }

    #[proptest]
    fn king_castles_on_both_wings_when_allowed() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles: Vec<_> = pos
            .pseudo_moves(Square::E1)
            .into_iter()
            .filter(Move::is_castle)
            .map(|m| (m.whither(), m.kind()))
            .collect();

        assert_eq!(
            castles,
            vec![
                (Square::G1, MoveKind::KingsideCastle),
                (Square::C1, MoveKind::QueensideCastle)
            ]
        );
    }

    #[proptest]
    fn castling_requires_the_right() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
        let castles: Vec<_> = pos
            .pseudo_moves(Square::E1)
            .into_iter()
            .filter(Move::is_castle)
            .map(|m| m.whither())
            .collect();

        assert_eq!(castles, vec![Square::C1]);
    }

    #[proptest]
    fn castling_requires_an_empty_path() {
        let pos = position("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
        assert!(!pos.pseudo_moves(Square::E1).iter().any(Move::is_castle));
    }

    #[proptest]
    fn castling_is_not_allowed_out_of_check() {
        let pos = position("r3k2r/8/8/8/8/8/4q3/R3K2R w KQkq - 0 1");
        assert!(!pos.pseudo_moves(Square::E1).iter().any(Move::is_castle));
    }

    #[proptest]
    fn castling_is_not_allowed_through_or_into_check() {
        let pos = position("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
        let castles: Vec<_> = pos
            .pseudo_moves(Square::E1)
            .into_iter()
            .filter(Move::is_castle)
            .collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].kind(), MoveKind::QueensideCastle);

        let pos = position("4k3/8/8/8/8/8/2r5/R3K2R w KQ - 0 1");
        let castles: Vec<_> = pos
            .pseudo_moves(Square::E1)
            .into_iter()
            .filter(Move::is_castle)
            .collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].kind(), MoveKind::KingsideCastle);
    }

    #[proptest]
    fn castling_ignores_attacks_on_the_rook_and_its_neighbour() {
        let pos = position("1r2k2r/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<_> = pos
            .pseudo_moves(Square::E1)
            .into_iter()
            .filter(Move::is_castle)
            .map(|m| m.kind())
            .collect();

        assert_eq!(
            castles,
            vec![MoveKind::KingsideCastle, MoveKind::QueensideCastle]
        );
    }
}
