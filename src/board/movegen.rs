use arrayvec::ArrayVec;

use super::makemove::rook_home;
use super::{Board, CastlingRights};
use crate::chessmove::Move;
use crate::errors::MoveParseError;
use crate::lookups::{between, king_attacks, knight_attacks, line, pawn_attacks};
use crate::magic::{bishop_attacks, queen_attacks, rook_attacks};
use crate::piece::{Colour, PieceType};
use crate::squareset::SquareSet;
use crate::util::Square;

pub const MAX_MOVES: usize = 128;

pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// What to generate when the side to move is not in check. In check, every
/// mode degrades to the full set of evasions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenMode {
    /// Every legal move.
    All,
    /// Captures, promotions, and quiet moves that give check.
    CapturesAndChecks,
    /// Captures and promotions only.
    Captures,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CheckKind {
    Direct,
    Discovered,
}

impl Board {
    /// Generate fully legal moves into `list`.
    pub fn generate(&self, mode: GenMode, list: &mut MoveList) {
        let us = self.turn();
        let them = !us;

        if self.is_check() {
            self.generate_evasions(list);
            return;
        }

        let ours = self.colour_pieces(us);
        let enemies = self.colour_pieces(them);
        let promo_rank = match us {
            Colour::White => SquareSet::RANK_8,
            Colour::Black => SquareSet::RANK_1,
        };

        match mode {
            GenMode::All => {
                self.gen_pawn_moves(!ours, list);
                self.gen_piece_moves(!ours, list);
                self.gen_king_moves(!ours, list);
                self.gen_castling(list);
            }
            GenMode::Captures => {
                let ep = self.st().ep_square.map_or(SquareSet::EMPTY, SquareSet::from_square);
                self.gen_pawn_moves(enemies | ep | promo_rank, list);
                self.gen_piece_moves(enemies, list);
                self.gen_king_moves(enemies, list);
            }
            GenMode::CapturesAndChecks => {
                self.generate(GenMode::Captures, list);
                self.gen_quiet_checks(list);
            }
        }
    }

    /// A pseudo-legal move is legal iff it does not leave our own king
    /// attacked: pinned pieces must stay on the pin ray, king steps must
    /// avoid attacked squares (through-the-king slider attacks included),
    /// and en passant needs its own scan because two pawns leave the rank
    /// at once.
    pub fn is_legal(&self, m: Move) -> bool {
        let us = self.turn();
        let them = !us;
        let ksq = self.king_sq(us);
        let occupied = self.occupied();

        if m.is_en_passant() {
            let captured = m.to().pawn_push(them);
            let after = occupied
                .without(m.from())
                .without(captured)
                .with(m.to());
            let pawns = self.pieces(them, PieceType::Pawn).without(captured);
            return (rook_attacks(ksq, after) & self.lateral_sliders(them)).is_empty()
                && (bishop_attacks(ksq, after) & self.diagonal_sliders(them)).is_empty()
                && (knight_attacks(ksq) & self.pieces(them, PieceType::Knight)).is_empty()
                && (pawn_attacks(us, ksq) & pawns).is_empty();
        }

        if m.from() == ksq {
            if m.is_castling() {
                // the path was vetted at generation time
                return true;
            }
            return !self.square_attacked(m.to(), them, occupied.without(ksq));
        }

        if self.is_check() {
            let checkers = self.st().checkers;
            if checkers.several() {
                return false;
            }
            let checker = checkers.first();
            if !between(ksq, checker).with(checker).contains(m.to()) {
                return false;
            }
        }

        if self.st().pinned.contains(m.from()) {
            return line(ksq, m.from()).contains(m.to());
        }

        true
    }

    fn try_push(&self, m: Move, list: &mut MoveList) {
        if self.is_legal(m) {
            // in constructed positions with absurd material the list can
            // fill up; dropping the tail is sound, crashing is not
            let _ = list.try_push(m);
        }
    }

    fn push_pawn_move(&self, from: Square, to: Square, list: &mut MoveList) {
        if to.relative_rank(self.turn()) == 7 {
            for promo in [
                PieceType::Queen,
                PieceType::Rook,
                PieceType::Bishop,
                PieceType::Knight,
            ] {
                self.try_push(Move::new_promotion(from, to, promo), list);
            }
        } else {
            self.try_push(Move::new(from, to), list);
        }
    }

    /// Pawn pushes, captures, promotions and en passant, restricted to the
    /// target mask. Pushes intersect the mask against empty squares and
    /// captures against enemies, so one mask serves every generation mode.
    fn gen_pawn_moves(&self, targets: SquareSet, list: &mut MoveList) {
        let us = self.turn();
        let them = !us;
        let occupied = self.occupied();
        let empty = !occupied;
        let pawns = self.pieces(us, PieceType::Pawn);
        let enemies = self.colour_pieces(them);

        let (single, double) = match us {
            Colour::White => {
                let single = pawns.north_one() & empty;
                let double = (single & SquareSet::RANK_3).north_one() & empty;
                (single, double)
            }
            Colour::Black => {
                let single = pawns.south_one() & empty;
                let double = (single & SquareSet::RANK_6).south_one() & empty;
                (single, double)
            }
        };

        for to in single & targets {
            self.push_pawn_move(to.pawn_push(them), to, list);
        }
        for to in double & targets {
            let from = to.pawn_push(them).pawn_push(them);
            self.try_push(Move::new(from, to), list);
        }

        for from in pawns {
            for to in pawn_attacks(us, from) & enemies & targets {
                self.push_pawn_move(from, to, list);
            }
        }

        if let Some(ep) = self.st().ep_square {
            if targets.contains(ep) {
                for from in pawn_attacks(them, ep) & pawns {
                    self.try_push(Move::new_en_passant(from, ep), list);
                }
            }
        }
    }

    /// Knight, bishop, rook and queen moves to the target mask.
    fn gen_piece_moves(&self, targets: SquareSet, list: &mut MoveList) {
        let us = self.turn();
        let occupied = self.occupied();

        for from in self.pieces(us, PieceType::Knight) {
            for to in knight_attacks(from) & targets {
                self.try_push(Move::new(from, to), list);
            }
        }
        for from in self.pieces(us, PieceType::Bishop) {
            for to in bishop_attacks(from, occupied) & targets {
                self.try_push(Move::new(from, to), list);
            }
        }
        for from in self.pieces(us, PieceType::Rook) {
            for to in rook_attacks(from, occupied) & targets {
                self.try_push(Move::new(from, to), list);
            }
        }
        for from in self.pieces(us, PieceType::Queen) {
            for to in queen_attacks(from, occupied) & targets {
                self.try_push(Move::new(from, to), list);
            }
        }
    }

    fn gen_king_moves(&self, targets: SquareSet, list: &mut MoveList) {
        let ksq = self.king_sq(self.turn());
        for to in king_attacks(ksq) & targets {
            self.try_push(Move::new(ksq, to), list);
        }
    }

    fn gen_castling(&self, list: &mut MoveList) {
        debug_assert!(!self.is_check());
        let us = self.turn();
        let them = !us;
        let ksq = self.king_sq(us);
        let occupied = self.occupied();
        let attacked = self.st().attacks[them.index()].all;

        for kingside in [true, false] {
            let rights = if kingside {
                CastlingRights::kingside(us)
            } else {
                CastlingRights::queenside(us)
            };
            if !self.st().castling.allows(rights) {
                continue;
            }
            let rook = rook_home(us, kingside);
            // hand-written FENs can carry rights with the pieces displaced
            if self.piece_at(rook) != Some(PieceType::Rook)
                || !self.colour_pieces(us).contains(rook)
                || ksq != Square::from_rank_file(rook.rank(), crate::util::File::E)
            {
                continue;
            }
            if (between(ksq, rook) & occupied).non_empty() {
                continue;
            }
            let kto = if kingside {
                Square::from_rank_file(ksq.rank(), crate::util::File::G)
            } else {
                Square::from_rank_file(ksq.rank(), crate::util::File::C)
            };
            // every square the king crosses must be safe
            if (between(ksq, kto).with(kto) & attacked).non_empty() {
                continue;
            }
            let _ = list.try_push(Move::new_castling(ksq, kto));
        }
    }

    /// All legal replies to a check: king steps, then, against a lone
    /// checker, captures of it and interpositions.
    fn generate_evasions(&self, list: &mut MoveList) {
        let us = self.turn();
        let ours = self.colour_pieces(us);
        let ksq = self.king_sq(us);
        let checkers = self.st().checkers;

        self.gen_king_moves(!ours, list);

        if checkers.several() {
            return;
        }
        let checker = checkers.first();
        let mask = between(ksq, checker).with(checker);

        let mut pawn_targets = mask;
        if let Some(ep) = self.st().ep_square {
            // an en passant capture of the checking pawn is also an evasion
            if self.piece_at(checker) == Some(PieceType::Pawn)
                && checker.pawn_push(us) == ep
            {
                pawn_targets = pawn_targets.with(ep);
            }
        }
        self.gen_pawn_moves(pawn_targets, list);
        self.gen_piece_moves(mask, list);
    }

    /// Non-capturing moves that give check: direct checks per piece type,
    /// plus moves of discovered-check candidates off the king ray.
    fn gen_quiet_checks(&self, list: &mut MoveList) {
        let us = self.turn();
        let them = !us;
        let ksq = self.king_sq(them);
        let occupied = self.occupied();
        let empty = !occupied;

        let promo_rank = match us {
            Colour::White => SquareSet::RANK_8,
            Colour::Black => SquareSet::RANK_1,
        };
        let knight_hooks = knight_attacks(ksq) & empty;
        let bishop_hooks = bishop_attacks(ksq, occupied) & empty;
        let rook_hooks = rook_attacks(ksq, occupied) & empty;
        let pawn_hooks = pawn_attacks(them, ksq) & empty & !promo_rank;

        let pawns = self.pieces(us, PieceType::Pawn);
        let (single, double) = match us {
            Colour::White => {
                let single = pawns.north_one() & empty;
                let double = (single & SquareSet::RANK_3).north_one() & empty;
                (single, double)
            }
            Colour::Black => {
                let single = pawns.south_one() & empty;
                let double = (single & SquareSet::RANK_6).south_one() & empty;
                (single, double)
            }
        };
        for to in single & pawn_hooks {
            self.try_push(Move::new(to.pawn_push(them), to), list);
        }
        for to in double & pawn_hooks {
            let from = to.pawn_push(them).pawn_push(them);
            self.try_push(Move::new(from, to), list);
        }

        for from in self.pieces(us, PieceType::Knight) {
            for to in knight_attacks(from) & knight_hooks {
                self.try_push(Move::new(from, to), list);
            }
        }
        for from in self.pieces(us, PieceType::Bishop) {
            for to in bishop_attacks(from, occupied) & bishop_hooks {
                self.try_push(Move::new(from, to), list);
            }
        }
        for from in self.pieces(us, PieceType::Rook) {
            for to in rook_attacks(from, occupied) & rook_hooks {
                self.try_push(Move::new(from, to), list);
            }
        }
        for from in self.pieces(us, PieceType::Queen) {
            for to in queen_attacks(from, occupied) & (bishop_hooks | rook_hooks) {
                self.try_push(Move::new(from, to), list);
            }
        }

        // discovered checks: any quiet move of a blocker off the king ray,
        // minus the direct checks generated above
        for from in self.st().discovery_checkers {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            let off_ray = empty - line(ksq, from);
            let targets = match piece {
                PieceType::Pawn => {
                    let step = SquareSet::from_square(from.pawn_push(us)) & empty;
                    let start_rank = match us {
                        Colour::White => SquareSet::RANK_2,
                        Colour::Black => SquareSet::RANK_7,
                    };
                    let double = if start_rank.contains(from) && step.non_empty() {
                        SquareSet::from_square(from.pawn_push(us).pawn_push(us)) & empty
                    } else {
                        SquareSet::EMPTY
                    };
                    (step | double) & off_ray & !pawn_hooks & !promo_rank
                }
                PieceType::Knight => knight_attacks(from) & off_ray & !knight_hooks,
                PieceType::Bishop => bishop_attacks(from, occupied) & off_ray & !bishop_hooks,
                PieceType::Rook => rook_attacks(from, occupied) & off_ray & !rook_hooks,
                PieceType::Queen => {
                    queen_attacks(from, occupied) & off_ray & !(bishop_hooks | rook_hooks)
                }
                PieceType::King => king_attacks(from) & off_ray,
            };
            for to in targets {
                self.try_push(Move::new(from, to), list);
            }
        }
    }

    /// Does `m` give check, and if so, directly or by discovery? Discovered
    /// checks matter separately because their exchange value is irrelevant.
    pub fn gives_check(&self, m: Move) -> Option<CheckKind> {
        let us = self.turn();
        let them = !us;
        let ksq = self.king_sq(them);
        let occupied = self.occupied();
        let from = m.from();
        let to = m.to();
        let piece = self.piece_at(from)?;

        if self.st().discovery_checkers.contains(from) && !line(ksq, from).contains(to) {
            return Some(CheckKind::Discovered);
        }

        let after = occupied.without(from).with(to);
        let final_piece = m.promotion().unwrap_or(piece);
        let reaches = match final_piece {
            PieceType::Pawn => pawn_attacks(us, to),
            PieceType::Knight => knight_attacks(to),
            PieceType::Bishop => bishop_attacks(to, after),
            PieceType::Rook => rook_attacks(to, after),
            PieceType::Queen => queen_attacks(to, after),
            PieceType::King => SquareSet::EMPTY,
        };
        if reaches.contains(ksq) {
            return Some(CheckKind::Direct);
        }

        if m.is_castling() {
            let kingside = to > from;
            let rook_to = super::makemove::rook_castled(us, kingside);
            let after = occupied
                .without(from)
                .without(rook_home(us, kingside))
                .with(to)
                .with(rook_to);
            if rook_attacks(rook_to, after).contains(ksq) {
                return Some(CheckKind::Direct);
            }
        }

        if m.is_en_passant() {
            let captured = to.pawn_push(them);
            let after = occupied.without(from).without(captured).with(to);
            if (rook_attacks(ksq, after) & self.lateral_sliders(us)).non_empty()
                || (bishop_attacks(ksq, after) & self.diagonal_sliders(us)).non_empty()
            {
                return Some(CheckKind::Discovered);
            }
        }

        None
    }

    /// A quiet pawn advance that attacks an enemy piece worth more than a
    /// pawn.
    pub fn is_pawn_threat(&self, m: Move) -> bool {
        let us = self.turn();
        let them = !us;
        if self.piece_at(m.from()) != Some(PieceType::Pawn)
            || self.is_capture(m)
            || m.is_promotion()
        {
            return false;
        }
        let prey = self.colour_pieces(them) - self.pieces(them, PieceType::Pawn);
        (pawn_attacks(us, m.to()) & prey).non_empty()
    }

    /// Parse a long-algebraic move string against the current position.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength(text.to_string()));
        }
        let from = text
            .get(0..2)
            .and_then(Square::from_name)
            .ok_or_else(|| MoveParseError::InvalidSquare(text.to_string()))?;
        let to = text
            .get(2..4)
            .and_then(Square::from_name)
            .ok_or_else(|| MoveParseError::InvalidSquare(text.to_string()))?;
        let promo = match text.len() {
            5 => {
                let c = text.chars().nth(4).unwrap_or('?');
                Some(match c {
                    'n' => PieceType::Knight,
                    'b' => PieceType::Bishop,
                    'r' => PieceType::Rook,
                    'q' => PieceType::Queen,
                    _ => return Err(MoveParseError::InvalidPromotionPiece(c)),
                })
            }
            _ => None,
        };

        let mut list = MoveList::new();
        self.generate(GenMode::All, &mut list);
        list.iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promo)
            .ok_or_else(|| MoveParseError::IllegalMove(text.to_string()))
    }
}

mod tests {
    #![allow(unused_imports)]
    use super::*;
    use crate::board::Board;

    fn legal_moves(fen: &str) -> MoveList {
        let mut board = Board::new();
        board.set_fen(fen).unwrap();
        let mut list = MoveList::new();
        board.generate(GenMode::All, &mut list);
        list
    }

    #[test]
    fn twenty_moves_at_start() {
        let moves = legal_moves(crate::board::STARTPOS_FEN);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn stalemate_has_no_moves() {
        let moves = legal_moves("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn double_check_allows_only_king_moves() {
        // rook on e8 and bishop on b4 both hit the e1 king
        let moves = legal_moves("4r2k/8/8/8/1b6/8/8/R3K3 w - - 0 1");
        assert!(moves.iter().all(|m| m.from() == Square::E1));
    }

    #[test]
    fn pinned_piece_stays_on_the_ray() {
        let moves = legal_moves("4k3/8/8/8/8/4r3/4R3/4K3 w - - 0 1");
        let rook_moves: Vec<_> = moves
            .iter()
            .filter(|m| m.from() == Square::from_name("e2").unwrap())
            .collect();
        assert!(rook_moves.iter().all(|m| m.to().file() == 4));
        assert!(!rook_moves.is_empty());
    }

    #[test]
    fn en_passant_discovered_check_is_illegal() {
        // capturing en passant would expose the king on the fifth rank
        let moves = legal_moves("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 2");
        assert!(moves.iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn castling_through_attack_is_excluded() {
        // black rook on f8 covers f1
        let moves = legal_moves("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(moves.iter().all(|m| !m.is_castling()));
    }

    #[test]
    fn capture_generation_is_a_subset() {
        let mut board = Board::new();
        board
            .set_fen("r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3")
            .unwrap();
        let mut all = MoveList::new();
        board.generate(GenMode::All, &mut all);
        let mut captures = MoveList::new();
        board.generate(GenMode::Captures, &mut captures);
        for m in &captures {
            assert!(all.contains(m));
        }
        let mut checks = MoveList::new();
        board.generate(GenMode::CapturesAndChecks, &mut checks);
        for m in &checks {
            assert!(all.contains(m));
            assert!(board.is_tactical(*m) || board.gives_check(*m).is_some());
        }
    }

    #[test]
    fn quiet_checks_found() {
        let mut board = Board::new();
        board
            .set_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")
            .unwrap();
        let mut checks = MoveList::new();
        board.generate(GenMode::CapturesAndChecks, &mut checks);
        // Ra8 checks along the back rank
        assert!(checks
            .iter()
            .any(|m| board.gives_check(*m) == Some(CheckKind::Direct)));
    }

    #[test]
    fn parse_move_rejects_illegal() {
        let board = Board::startpos();
        assert!(board.parse_move("e2e4").is_ok());
        assert!(board.parse_move("e2e5").is_err());
        assert!(board.parse_move("xyzw").is_err());
    }
}
