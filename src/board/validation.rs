//! Debug-build coherence checks, asserted after `set_fen`, `play` and
//! `undo`. Everything incremental must agree with a from-scratch recompute.

#![cfg_attr(not(debug_assertions), allow(dead_code))]

use super::Board;
use crate::evaluation::Score;
use crate::piece::{Colour, PieceType};
use crate::piecesquaretable::psq;
use crate::squareset::SquareSet;
use crate::util::Square;
use crate::zobrist;

impl Board {
    #[cfg(debug_assertions)]
    pub fn assert_ok(&self) {
        self.verify_piece_placement();
        self.verify_keys();
        self.verify_psq();
        self.verify_check_state();
    }

    fn verify_piece_placement(&self) {
        let mut occupied = SquareSet::EMPTY;
        for colour in Colour::both() {
            let mut union = SquareSet::EMPTY;
            for piece in PieceType::all() {
                union |= self.pieces(colour, piece);
            }
            assert_eq!(union, self.colour_pieces(colour), "colour union mismatch");
            occupied |= union;
        }
        assert_eq!(occupied, self.st().occupied, "occupancy mismatch");
        assert!(
            (self.colour_pieces(Colour::White) & self.colour_pieces(Colour::Black)).is_empty(),
            "square owned by both colours"
        );

        for sq in Square::all() {
            match self.piece_at(sq) {
                Some(piece) => {
                    let colour = self.colour_at(sq).expect("piece without a colour");
                    assert!(
                        self.pieces(colour, piece).contains(sq),
                        "mailbox disagrees with bitboards at {sq}"
                    );
                }
                None => assert!(!occupied.contains(sq), "ghost piece at {sq}"),
            }
        }

        for colour in Colour::both() {
            let kings = self.pieces(colour, PieceType::King);
            assert_eq!(kings.count(), 1, "{colour} must have one king");
            assert_eq!(kings.first(), self.king_sq(colour), "stale king square");
        }
        let pawns = self.pieces(Colour::White, PieceType::Pawn)
            | self.pieces(Colour::Black, PieceType::Pawn);
        assert!(
            !(pawns & (SquareSet::RANK_1 | SquareSet::RANK_8)).non_empty(),
            "pawn on a back rank"
        );
    }

    fn verify_keys(&self) {
        let base = if self.turn() == Colour::Black {
            zobrist::side()
        } else {
            0
        };
        let mut key = base;
        let mut pawn_king_key = base;
        for colour in Colour::both() {
            for piece in PieceType::all() {
                for sq in self.pieces(colour, piece) {
                    key ^= zobrist::piece(colour, piece, sq);
                    if matches!(piece, PieceType::Pawn | PieceType::King) {
                        pawn_king_key ^= zobrist::piece(colour, piece, sq);
                    }
                }
            }
        }
        assert_eq!(key, self.st().key, "incremental key drifted");
        assert_eq!(
            pawn_king_key,
            self.st().pawn_king_key,
            "incremental pawn-king key drifted"
        );
    }

    fn verify_psq(&self) {
        for colour in Colour::both() {
            let mut total = Score::ZERO;
            let mut piece_material = 0;
            for piece in PieceType::all() {
                for sq in self.pieces(colour, piece) {
                    let value = psq(colour, piece, sq);
                    total += value;
                    if matches!(
                        piece,
                        PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
                    ) {
                        piece_material += value.mg;
                    }
                }
            }
            assert_eq!(total, self.st().psq[colour.index()], "psq drifted");
            assert_eq!(
                piece_material,
                self.st().piece_material[colour.index()],
                "piece material drifted"
            );
        }
    }

    fn verify_check_state(&self) {
        let us = self.turn();
        let them = !us;
        let ksq = self.king_sq(us);
        let attacked = self.st().attacks[them.index()].all;
        assert_eq!(
            self.st().checkers.non_empty(),
            attacked.contains(ksq),
            "checkers disagree with the attack map"
        );
        // the side that just moved must not have left its king en prise
        assert!(
            !self.st().attacks[us.index()]
                .all
                .contains(self.king_sq(them)),
            "side not to move is in check"
        );
    }
}
