use super::{Board, CastlingRights};
use crate::chessmove::Move;
use crate::piece::{Colour, PieceType};
use crate::util::Square;
use crate::zobrist;

impl Board {
    /// Play a move. Pushes a copy of the current ply state and applies the
    /// move to it; `undo` reverses the pair exactly.
    pub fn play(&mut self, m: Move) {
        let mut st = *self.st();
        st.last_move = Some(m);
        st.captured = None;
        st.rule50 += 1;
        self.states.push(st);

        let us = self.turn;
        let them = !us;
        let from = m.from();
        let to = m.to();
        let piece = self.piece_on[from.index()].expect("no piece on the from-square");
        let captured = if m.is_en_passant() {
            None
        } else {
            self.piece_on[to.index()]
        };

        if let Some(victim) = captured {
            self.st_mut().rule50 = 0;
            self.clear_square(them, victim, to, true);
        }

        self.clear_square(us, piece, from, true);
        self.set_square(us, m.promotion().unwrap_or(piece), to, true);

        self.st_mut().ep_square = None;

        if piece == PieceType::Pawn {
            self.st_mut().rule50 = 0;
            if from.inner().abs_diff(to.inner()) == 16 {
                self.st_mut().ep_square = Some(from.pawn_push(us));
            }
            if m.is_en_passant() {
                self.clear_square(them, PieceType::Pawn, to.pawn_push(them), true);
            }
        } else if piece == PieceType::Rook {
            if from == rook_home(us, true) {
                self.st_mut().castling.revoke(CastlingRights::kingside(us));
            } else if from == rook_home(us, false) {
                self.st_mut().castling.revoke(CastlingRights::queenside(us));
            }
        } else if piece == PieceType::King {
            self.st_mut().castling.revoke(CastlingRights::both(us));
            if m.is_castling() {
                let kingside = to > from;
                self.clear_square(us, PieceType::Rook, rook_home(us, kingside), true);
                self.set_square(us, PieceType::Rook, rook_castled(us, kingside), true);
            }
        }

        if captured == Some(PieceType::Rook) {
            if to == rook_home(them, true) {
                self.st_mut().castling.revoke(CastlingRights::kingside(them));
            } else if to == rook_home(them, false) {
                self.st_mut().castling.revoke(CastlingRights::queenside(them));
            }
        }

        self.turn = them;
        if self.turn == Colour::White {
            self.fullmove += 1;
        }
        let st = self.st_mut();
        st.key ^= zobrist::side();
        st.pawn_king_key ^= zobrist::side();
        st.captured = captured;

        self.refresh_derived();

        #[cfg(debug_assertions)]
        self.assert_ok();
    }

    /// Pass the turn. Only sound when not in check; the pair
    /// `play_null`/`undo` round-trips exactly like a real move.
    pub fn play_null(&mut self) {
        debug_assert!(!self.is_check());
        let mut st = *self.st();
        st.last_move = None;
        st.captured = None;
        st.ep_square = None;
        st.rule50 += 1;
        st.key ^= zobrist::side();
        st.pawn_king_key ^= zobrist::side();
        self.states.push(st);

        self.turn = !self.turn;
        if self.turn == Colour::White {
            self.fullmove += 1;
        }

        self.refresh_derived();

        #[cfg(debug_assertions)]
        self.assert_ok();
    }

    /// Take back the most recent `play` or `play_null`.
    pub fn undo(&mut self) {
        debug_assert!(self.states.len() > 1, "undo with nothing played");
        let st = self.states.pop().expect("state stack is never empty");

        let them = self.turn;
        let us = !them;
        self.turn = us;
        if them == Colour::White {
            self.fullmove -= 1;
        }

        if let Some(m) = st.last_move {
            let from = m.from();
            let to = m.to();
            let landed = self.piece_on[to.index()].expect("no piece on the to-square");
            let piece = if m.is_promotion() {
                PieceType::Pawn
            } else {
                landed
            };

            self.clear_square(us, landed, to, false);
            self.set_square(us, piece, from, false);

            if let Some(victim) = st.captured {
                self.set_square(them, victim, to, false);
            }

            if m.is_castling() {
                let kingside = to > from;
                self.clear_square(us, PieceType::Rook, rook_castled(us, kingside), false);
                self.set_square(us, PieceType::Rook, rook_home(us, kingside), false);
            } else if m.is_en_passant() {
                self.set_square(them, PieceType::Pawn, to.pawn_push(them), false);
            }
        }

        #[cfg(debug_assertions)]
        self.assert_ok();
    }
}

/// The original square of a rook, by wing.
pub const fn rook_home(colour: Colour, kingside: bool) -> Square {
    match (colour, kingside) {
        (Colour::White, true) => Square::H1,
        (Colour::White, false) => Square::A1,
        (Colour::Black, true) => Square::H8,
        (Colour::Black, false) => Square::A8,
    }
}

/// Where the rook lands after castling, by wing.
pub const fn rook_castled(colour: Colour, kingside: bool) -> Square {
    match (colour, kingside) {
        (Colour::White, true) => Square::F1,
        (Colour::White, false) => Square::D1,
        (Colour::Black, true) => Square::F8,
        (Colour::Black, false) => Square::D8,
    }
}

mod tests {
    #![allow(unused_imports)]
    use super::*;
    use crate::board::{Board, STARTPOS_FEN};

    fn fingerprint(board: &Board) -> (String, u64, u64) {
        (board.fen(), board.st().key, board.st().pawn_king_key)
    }

    #[test]
    fn play_undo_roundtrip() {
        let mut board = Board::startpos();
        let before = fingerprint(&board);
        let m = Move::new(Square::from_name("e2").unwrap(), Square::from_name("e4").unwrap());
        board.play(m);
        assert_eq!(board.st().ep_square, Square::from_name("e3"));
        board.undo();
        assert_eq!(fingerprint(&board), before);
    }

    #[test]
    fn null_move_roundtrip() {
        let mut board = Board::startpos();
        let before = fingerprint(&board);
        board.play_null();
        assert_eq!(board.turn(), Colour::Black);
        assert_eq!(board.st().ep_square, None);
        board.undo();
        assert_eq!(fingerprint(&board), before);
        assert_eq!(board.turn(), Colour::White);
    }

    #[test]
    fn castling_moves_the_rook() {
        let mut board = Board::new();
        board
            .set_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .unwrap();
        let before = fingerprint(&board);
        board.play(Move::new_castling(Square::E1, Square::G1));
        assert_eq!(board.piece_at(Square::F1), Some(PieceType::Rook));
        assert_eq!(board.piece_at(Square::G1), Some(PieceType::King));
        assert!(!board.st().castling.allows(CastlingRights::WK));
        assert!(!board.st().castling.allows(CastlingRights::WQ));
        assert!(board.st().castling.allows(CastlingRights::BK));
        board.undo();
        assert_eq!(fingerprint(&board), before);
    }

    #[test]
    fn en_passant_removes_the_bypassing_pawn() {
        let mut board = Board::new();
        board
            .set_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .unwrap();
        let before = fingerprint(&board);
        board.play(Move::new_en_passant(
            Square::from_name("e5").unwrap(),
            Square::from_name("d6").unwrap(),
        ));
        assert_eq!(board.piece_at(Square::from_name("d5").unwrap()), None);
        assert_eq!(
            board.piece_at(Square::from_name("d6").unwrap()),
            Some(PieceType::Pawn)
        );
        board.undo();
        assert_eq!(fingerprint(&board), before);
    }

    #[test]
    fn promotion_swaps_the_pawn() {
        let mut board = Board::new();
        board.set_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let before = fingerprint(&board);
        board.play(Move::new_promotion(
            Square::A7,
            Square::A8,
            PieceType::Queen,
        ));
        assert_eq!(board.piece_at(Square::A8), Some(PieceType::Queen));
        assert_eq!(board.pieces(Colour::White, PieceType::Pawn).count(), 0);
        board.undo();
        assert_eq!(fingerprint(&board), before);
    }

    #[test]
    fn rook_capture_revokes_castling() {
        let mut board = Board::new();
        board
            .set_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .unwrap();
        board.play(Move::new(Square::A1, Square::A8));
        assert!(!board.st().castling.allows(CastlingRights::BQ));
        assert!(!board.st().castling.allows(CastlingRights::WQ));
        assert!(board.st().castling.allows(CastlingRights::BK));
    }
}
