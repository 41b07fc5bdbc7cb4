//! Static evaluation: phase-interpolated material and piece placement,
//! mobility, king safety, pawn structure (cached by the pawn-king key),
//! passed pawns, and a handful of piece patterns. The result is symmetric
//! and expressed from the side to move; the tempo term is added by the
//! search on top of the cached value so the null-move cache shortcut stays
//! valid.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::board::Board;
use crate::lookups::{
    adjacent_files, distance_to_safety, front_span, king_attacks, knight_attacks, passer_span,
    pawn_attacks,
};
use crate::magic::{bishop_attacks, rook_attacks};
use crate::piece::{Colour, PieceType};
use crate::squareset::SquareSet;
use crate::util::{Square, MAX_PLY};
use crate::zobrist;

pub const MATE: i32 = 32000;
pub const INFINITE: i32 = 32767;

pub const fn mate_in(ply: i32) -> i32 {
    MATE - ply
}

pub const fn mated_in(ply: i32) -> i32 {
    ply - MATE
}

pub const fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE - MAX_PLY as i32
}

/// Flat bonus for having the move, kept outside the cached symmetric
/// score.
pub const TEMPO_BONUS: i32 = 10;

/// An (opening, endgame) score pair, interpolated by game phase at the end
/// of evaluation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Score {
    pub mg: i32,
    pub eg: i32,
}

impl Score {
    pub const ZERO: Self = Self { mg: 0, eg: 0 };

    pub const fn new(mg: i32, eg: i32) -> Self {
        Self { mg, eg }
    }

    pub const fn add(self, other: Self) -> Self {
        Self {
            mg: self.mg + other.mg,
            eg: self.eg + other.eg,
        }
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl Sub for Score {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Self) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.mg, -self.eg)
    }
}

/// Sum of the opening values of all non-pawn, non-king material at the
/// start position; the phase runs from 0 (bare endgame) to 1024 here.
const TOTAL_PHASE_MATERIAL: i32 = 4 * (325 + 325 + 550) + 2 * 1000;

const PAWN_CACHE_SIZE: usize = 1 << 16;
const EVAL_CACHE_SIZE: usize = 1 << 17;

#[derive(Clone, Copy, Default)]
struct PawnEntry {
    key: u64,
    /// White-relative score delta contributed by the pawn structure.
    score: Score,
    passers: SquareSet,
}

/// Direct-mapped cache of pawn-structure evaluations, keyed by the
/// pawn-king zobrist key.
pub struct PawnCache {
    entries: Box<[PawnEntry]>,
}

impl PawnCache {
    fn new() -> Self {
        Self {
            entries: vec![PawnEntry::default(); PAWN_CACHE_SIZE].into_boxed_slice(),
        }
    }

    fn slot(&mut self, key: u64) -> &mut PawnEntry {
        let index = (key & (PAWN_CACHE_SIZE as u64 - 1)) as usize;
        &mut self.entries[index]
    }
}

#[derive(Clone, Copy, Default)]
struct EvalEntry {
    key: u64,
    score: i16,
}

/// Direct-mapped cache of full evaluations, keyed by the base position
/// key. Castling rights and the en passant square do not influence this
/// evaluator, so the unrefined key buys extra hits.
pub struct EvalCache {
    entries: Box<[EvalEntry]>,
}

impl EvalCache {
    fn new() -> Self {
        Self {
            entries: vec![EvalEntry::default(); EVAL_CACHE_SIZE].into_boxed_slice(),
        }
    }

    fn probe(&self, key: u64) -> Option<i32> {
        let entry = self.entries[(key & (EVAL_CACHE_SIZE as u64 - 1)) as usize];
        (entry.key == key).then_some(i32::from(entry.score))
    }

    fn store(&mut self, key: u64, score: i32) {
        #[allow(clippy::cast_possible_truncation)]
        let entry = EvalEntry {
            key,
            score: score as i16,
        };
        self.entries[(key & (EVAL_CACHE_SIZE as u64 - 1)) as usize] = entry;
    }
}

pub struct EvalCaches {
    pub pawn: PawnCache,
    pub eval: EvalCache,
}

impl EvalCaches {
    pub fn new() -> Self {
        Self {
            pawn: PawnCache::new(),
            eval: EvalCache::new(),
        }
    }
}

/// Symmetric static evaluation in centipawns from the side to move.
pub fn evaluate(board: &Board, caches: &mut EvalCaches) -> i32 {
    debug_assert!(!board.is_check());

    let key = board.st().key;
    if let Some(score) = caches.eval.probe(key) {
        return score;
    }
    if board.st().last_move.is_none() {
        // after a null move the reversed-turn twin may be cached, and the
        // evaluation is symmetric
        if let Some(score) = caches.eval.probe(key ^ zobrist::side()) {
            return -score;
        }
    }

    let mut ev = Evaluator::new(board);
    ev.material();
    ev.mobility();
    ev.pawns(&mut caches.pawn);
    ev.king_safety();
    ev.pieces();
    // keep static scores clear of the mate band
    let score = ev
        .interpolate()
        .clamp(mated_in(MAX_PLY as i32) + 1, mate_in(MAX_PLY as i32) - 1);

    caches.eval.store(key, score);
    score
}

struct Evaluator<'a> {
    board: &'a Board,
    scores: [Score; 2],
}

impl<'a> Evaluator<'a> {
    fn new(board: &'a Board) -> Self {
        Self {
            board,
            scores: [Score::ZERO; 2],
        }
    }

    fn add(&mut self, colour: Colour, value: Score) {
        self.scores[colour.index()] += value;
    }

    fn white_relative(&self) -> Score {
        self.scores[0] - self.scores[1]
    }

    fn material(&mut self) {
        for colour in Colour::both() {
            self.scores[colour.index()] += self.board.st().psq[colour.index()];
            if self.board.pieces(colour, PieceType::Bishop).several() {
                self.add(colour, Score::new(40, 50));
            }
        }

        // halve the endgame edge when the stronger side cannot win with
        // pawns it does not have
        let strong = if self.scores[1].eg > self.scores[0].eg {
            Colour::Black
        } else {
            Colour::White
        };
        if self.board.pieces(strong, PieceType::Pawn).is_empty() {
            let diff = (self.scores[0].eg - self.scores[1].eg).abs();
            self.scores[strong.index()].eg -= diff / 2;
        }
    }

    fn mobility(&mut self) {
        const KNIGHT_MOB: [i32; 15] = [-3, -2, -1, 0, 1, 2, 3, 4, 4, 4, 4, 4, 4, 4, 4];
        const BISHOP_MOB: [i32; 15] = [-4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 5, 6, 6, 7, 7];
        const ROOK_MOB: [i32; 15] = [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 6, 7, 7];
        const UNIT_MG: [i32; 6] = [0, 4, 5, 2, 1, 0];
        const UNIT_EG: [i32; 6] = [0, 4, 5, 4, 2, 0];

        let board = self.board;
        for us in Colour::both() {
            let them = !us;
            let targets = !(board.pieces(us, PieceType::Pawn)
                | board.pieces(us, PieceType::King)
                | board.st().attacks[them.index()].pawn);

            let mut tally = |this: &mut Self, shape: &[i32; 15], piece: PieceType, reach: SquareSet| {
                let count = shape[(reach & targets).count().min(14) as usize];
                this.add(
                    us,
                    Score::new(
                        count * UNIT_MG[piece.index()],
                        count * UNIT_EG[piece.index()],
                    ),
                );
            };

            for sq in board.pieces(us, PieceType::Knight) {
                tally(self, &KNIGHT_MOB, PieceType::Knight, knight_attacks(sq));
            }

            // sliders see through their own kind, so batteries count in full
            let occ = board.occupied() - board.pieces(us, PieceType::Rook);
            for sq in board.lateral_sliders(us) {
                let piece = board.piece_at(sq).unwrap_or(PieceType::Rook);
                tally(self, &ROOK_MOB, piece, rook_attacks(sq, occ));
            }

            let occ = board.occupied() - board.pieces(us, PieceType::Bishop);
            for sq in board.diagonal_sliders(us) {
                let piece = board.piece_at(sq).unwrap_or(PieceType::Bishop);
                tally(self, &BISHOP_MOB, piece, bishop_attacks(sq, occ));
            }
        }
    }

    fn king_safety(&mut self) {
        const ATTACK_WEIGHT: [i32; 6] = [0, 3, 3, 4, 0, 0];

        let board = self.board;
        for us in Colour::both() {
            let them = !us;
            let ksq = board.king_sq(us);
            let their_pawns = board.pieces(them, PieceType::Pawn);
            let our_attacks = &board.st().attacks[us.index()];
            let their_attacks = &board.st().attacks[them.index()];

            // squares our pawns defend or their pawns occupy carry no
            // piece-attack pressure
            let solid = our_attacks.pawn | their_pawns;
            let defended = our_attacks.knight | our_attacks.diagonal | our_attacks.lateral;

            let mut total_weight = 0;
            let mut total_count = 0;
            let mut tally = |sq: Square, attackers: SquareSet, piece: PieceType| {
                if attackers.non_empty() {
                    let count = attackers.count() as i32;
                    total_weight += ATTACK_WEIGHT[piece.index()] * count;
                    total_count += if defended.contains(sq) { count - 1 } else { count };
                }
            };

            let knight_zone =
                their_attacks.knight & (king_attacks(ksq) | knight_attacks(ksq)) & !solid;
            for sq in knight_zone {
                tally(
                    sq,
                    knight_attacks(sq) & board.pieces(them, PieceType::Knight),
                    PieceType::Knight,
                );
            }

            let lateral_zone = their_attacks.lateral & king_attacks(ksq) & !solid;
            let sliders = board.lateral_sliders(them);
            let occ = board.occupied() - sliders;
            for sq in lateral_zone {
                tally(sq, sliders & rook_attacks(sq, occ), PieceType::Rook);
            }

            let diagonal_zone = their_attacks.diagonal & king_attacks(ksq) & !solid;
            let sliders = board.diagonal_sliders(them);
            let occ = board.occupied() - sliders;
            for sq in diagonal_zone {
                tally(sq, sliders & bishop_attacks(sq, occ), PieceType::Bishop);
            }

            total_count += distance_to_safety(us, ksq);

            if total_count != 0 {
                self.scores[us.index()].mg -= total_weight * total_count;
            }
        }
    }

    fn pawns(&mut self, cache: &mut PawnCache) {
        let key = self.board.st().pawn_king_key;
        let entry = cache.slot(key);

        let passers = if entry.key == key {
            self.scores[0] += entry.score;
            entry.passers
        } else {
            let before = self.white_relative();
            let passers = self.pawn_structure();
            *entry = PawnEntry {
                key,
                score: self.white_relative() - before,
                passers,
            };
            passers
        };

        // passed pawns depend on the pieces, so they are re-scored on
        // every call from the cached passer set
        for sq in passers {
            self.passed_pawn(sq);
        }
    }

    fn pawn_structure(&mut self) -> SquareSet {
        const CHAINED: i32 = 5;
        const ISOLATED: i32 = 20;
        const HOLE: Score = Score::new(16, 10);
        const SHELTER: [i32; 8] = [55, 0, 15, 40, 50, 55, 55, 0];
        const STORM: [i32; 8] = [10, 0, 50, 20, 10, 0, 0, 0];

        let board = self.board;
        let mut passers = SquareSet::EMPTY;

        for us in Colour::both() {
            let them = !us;
            let our_ksq = board.king_sq(us);
            let their_ksq = board.king_sq(them);
            let our_pawns = board.pieces(us, PieceType::Pawn);
            let their_pawns = board.pieces(them, PieceType::Pawn);

            let king_file = i32::from(our_ksq.file());
            for file in king_file - 1..=king_file + 1 {
                if !(0..8).contains(&file) {
                    continue;
                }
                let file_mask = SquareSet::file(file as u8);
                let half = file != king_file;

                // shelter: our rearmost pawn on the file
                let own = our_pawns & file_mask;
                let rank = if own.is_empty() {
                    0
                } else {
                    let pawn = match us {
                        Colour::White => own.first(),
                        Colour::Black => own.last(),
                    };
                    pawn.relative_rank(us) as usize
                };
                self.scores[us.index()].mg -= SHELTER[rank] >> i32::from(half);

                // storm: their most advanced pawn on the file; a bare file
                // is punished as semi-open instead
                let theirs = their_pawns & file_mask;
                let (rank, braced) = if theirs.is_empty() {
                    (0, false)
                } else {
                    let pawn = match us {
                        Colour::White => theirs.first(),
                        Colour::Black => theirs.last(),
                    };
                    (
                        pawn.relative_rank(us) as usize,
                        our_pawns.contains(pawn.pawn_push(them)),
                    )
                };
                self.scores[us.index()].mg -= STORM[rank] >> i32::from(braced);
            }

            for sq in our_pawns {
                let next_sq = sq.pawn_push(us);
                let rank = sq.rank();
                let besides = our_pawns & adjacent_files(sq.file());

                let support_ranks = SquareSet::rank(rank)
                    | match us {
                        Colour::White => SquareSet::rank(rank - 1),
                        Colour::Black => SquareSet::rank(rank + 1),
                    };
                let chained = (besides & support_ranks).non_empty();
                let hole = !chained
                    && (passer_span(them, next_sq) & our_pawns).is_empty()
                    && board.st().attacks[them.index()].pawn.contains(next_sq);
                let isolated = besides.is_empty();

                let open = (front_span(us, sq) & (our_pawns | their_pawns)).is_empty();
                let passed = open && (passer_span(us, sq) & their_pawns).is_empty();
                let candidate = chained
                    && open
                    && !passed
                    && !(passer_span(us, sq) & their_pawns).several();

                if chained {
                    self.scores[us.index()].mg += CHAINED;
                } else if hole {
                    self.scores[us.index()].mg -= if open { HOLE.mg } else { HOLE.mg / 2 };
                    self.scores[us.index()].eg -= HOLE.eg;
                } else if isolated {
                    self.scores[us.index()].mg -= if open { ISOLATED } else { ISOLATED / 2 };
                    self.scores[us.index()].eg -= ISOLATED;
                }

                if candidate {
                    let mut n = i32::from(sq.relative_rank(us));
                    let own_dist = i32::from(Square::distance(sq, our_ksq));
                    let their_dist = i32::from(Square::distance(sq, their_ksq));
                    if own_dist > their_dist {
                        n -= own_dist - their_dist;
                    }
                    if n > 0 {
                        self.scores[us.index()].eg += n * n;
                    }
                } else if passed {
                    passers = passers.with(sq);

                    let linear = i32::from(sq.relative_rank(us)) - 1;
                    let quad = linear * (linear - 1);

                    self.scores[us.index()].mg += 8 * quad;
                    self.scores[us.index()].eg += 4 * (quad + linear + 1);

                    if quad != 0 {
                        self.scores[us.index()].eg +=
                            i32::from(Square::distance(next_sq, their_ksq)) * 2 * quad;
                        self.scores[us.index()].eg -=
                            i32::from(Square::distance(next_sq, our_ksq)) * quad;
                        if next_sq.relative_rank(us) != 7 {
                            self.scores[us.index()].eg -=
                                i32::from(Square::distance(next_sq.pawn_push(us), our_ksq)) * quad
                                    / 2;
                        }
                    }

                    // a friendly pawn alongside or behind shepherds the
                    // passer home
                    if (besides & passer_span(them, next_sq)).non_empty() {
                        if (pawn_attacks(them, next_sq) & our_pawns).non_empty() {
                            self.scores[us.index()].eg += 8 * linear;
                        } else if (pawn_attacks(them, sq) & our_pawns).non_empty() {
                            self.scores[us.index()].eg += 5 * linear;
                        } else if (their_pawns & passer_span(them, sq)).is_empty() {
                            self.scores[us.index()].eg += 2 * linear;
                        }
                    }
                }
            }
        }

        passers
    }

    fn passed_pawn(&mut self, sq: Square) {
        let board = self.board;
        let us = board.colour_at(sq).expect("passer square is occupied");
        let them = !us;

        if board.st().piece_material[them.index()] == 0 {
            // king of the square: with no enemy pieces, an uncatchable
            // passer promotes whatever else happens
            let promo_sq = Square::from_rank_file(
                match us {
                    Colour::White => 7,
                    Colour::Black => 0,
                },
                sq.file(),
            );
            let pawn_dist = i32::from(Square::distance(sq, promo_sq));
            let king_dist = i32::from(Square::distance(board.king_sq(them), promo_sq))
                - i32::from(them == board.turn());
            if king_dist > pawn_dist {
                self.scores[us.index()].eg += 550;
                return;
            }
        }

        let linear = i32::from(sq.relative_rank(us)) - 1;
        let quad = linear * (linear - 1);
        if quad == 0 || board.occupied().contains(sq.pawn_push(us)) {
            return;
        }

        let path = front_span(us, sq);
        let file_ray = SquareSet::file(sq.file()) & rook_attacks(sq, board.occupied());

        let our_attacks = board.st().attacks[us.index()].all;
        let their_attacks = board.st().attacks[them.index()].all;

        let (defended, attacked);
        if (board.lateral_sliders(them) & file_ray).non_empty() {
            // an enemy rook or queen stares up the file
            defended = path & our_attacks;
            attacked = path;
        } else {
            defended = if (board.lateral_sliders(us) & file_ray).non_empty() {
                path
            } else {
                path & our_attacks
            };
            attacked = path & (their_attacks | board.colour_pieces(them));
        }

        let bonus = if attacked.is_empty() {
            quad * if path == defended { 7 } else { 6 }
        } else {
            quad * if (attacked & defended) == attacked { 5 } else { 3 }
        };
        self.scores[us.index()].eg += bonus;
    }

    fn pieces(&mut self) {
        const ROOK_SEVENTH: i32 = 8;

        let board = self.board;
        for us in Colour::both() {
            let them = !us;
            let (seventh, promo_rank) = match us {
                Colour::White => (SquareSet::RANK_7, SquareSet::RANK_8),
                Colour::Black => (SquareSet::RANK_2, SquareSet::RANK_1),
            };

            // heavy pieces on the seventh tie the enemy king to the back
            // rank or feast on its pawns
            if (board.lateral_sliders(us) & seventh).non_empty()
                && ((promo_rank & board.pieces(them, PieceType::King)).non_empty()
                    || (seventh & board.pieces(them, PieceType::Pawn)).non_empty())
            {
                let rooks = (board.pieces(us, PieceType::Rook) & seventh).count() as i32;
                if rooks > 0 {
                    self.add(us, Score::new(rooks * ROOK_SEVENTH / 2, rooks * ROOK_SEVENTH));
                }
                let queens = (board.pieces(us, PieceType::Queen) & seventh).count() as i32;
                if queens > 0 {
                    self.add(
                        us,
                        Score::new(queens * ROOK_SEVENTH / 4, queens * ROOK_SEVENTH / 2),
                    );
                }
            }

            let their_attacks = &board.st().attacks[them.index()];
            let our_pawn_cover = board.st().attacks[us.index()].pawn;

            let knight_corner = match us {
                Colour::White => {
                    SquareSet::from_square(Square::A8)
                        | SquareSet::from_square(Square::H8)
                        | SquareSet::from_square(Square::A7)
                        | SquareSet::from_square(Square::H7)
                }
                Colour::Black => {
                    SquareSet::from_square(Square::A1)
                        | SquareSet::from_square(Square::H1)
                        | SquareSet::from_square(Square::A2)
                        | SquareSet::from_square(Square::H2)
                }
            };
            for sq in board.pieces(us, PieceType::Knight) & knight_corner {
                let escapes = knight_attacks(sq) & !their_attacks.pawn;
                if (escapes - (their_attacks.all - our_pawn_cover)).is_empty() {
                    self.scores[us.index()].mg -= 85;
                }
                if (escapes - (their_attacks.king - our_pawn_cover)).is_empty() {
                    self.scores[us.index()].eg -= 100;
                }
            }

            let bishop_corner = match us {
                Colour::White => {
                    SquareSet::from_square(Square::A7) | SquareSet::from_square(Square::H7)
                }
                Colour::Black => {
                    SquareSet::from_square(Square::A2) | SquareSet::from_square(Square::H2)
                }
            };
            for sq in board.pieces(us, PieceType::Bishop) & bishop_corner {
                let blockade =
                    board.pieces(them, PieceType::Pawn) & their_attacks.all & pawn_attacks(them, sq);
                if blockade.non_empty() {
                    self.scores[us.index()].mg -= 85;
                    if (pawn_attacks(us, sq) & their_attacks.king).non_empty() {
                        self.scores[us.index()].eg -= 100;
                    }
                }
            }
        }
    }

    fn interpolate(&self) -> i32 {
        let st = self.board.st();
        let phase = ((st.piece_material[0] + st.piece_material[1]) * 1024 / TOTAL_PHASE_MATERIAL)
            .clamp(0, 1024);

        let us = self.board.turn().index();
        let them = 1 - us;
        let mg = self.scores[us].mg - self.scores[them].mg;
        let eg = self.scores[us].eg - self.scores[them].eg;
        (phase * mg + (1024 - phase) * eg) / 1024
    }
}

mod tests {
    #![allow(unused_imports)]
    use super::*;
    use crate::board::Board;

    /// Mirror a FEN vertically and swap the colours, producing the
    /// colour-reversed twin of a position.
    fn mirror_fen(fen: &str) -> String {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let board: Vec<String> = fields[0]
            .split('/')
            .rev()
            .map(|rank| {
                rank.chars()
                    .map(|c| {
                        if c.is_ascii_alphabetic() {
                            if c.is_ascii_uppercase() {
                                c.to_ascii_lowercase()
                            } else {
                                c.to_ascii_uppercase()
                            }
                        } else {
                            c
                        }
                    })
                    .collect()
            })
            .collect();
        let side = if fields[1] == "w" { "b" } else { "w" };
        let castling: String = if fields[2] == "-" {
            "-".into()
        } else {
            let mut swapped: Vec<char> = fields[2]
                .chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect();
            swapped.sort_by_key(|c| "KQkq".find(*c).unwrap_or(4));
            swapped.into_iter().collect()
        };
        let ep = if fields[3] == "-" {
            "-".to_string()
        } else {
            let mut chars = fields[3].chars();
            let file = chars.next().unwrap();
            let rank = chars.next().unwrap().to_digit(10).unwrap();
            format!("{file}{}", 9 - rank)
        };
        format!("{} {side} {castling} {ep} 0 1", board.join("/"))
    }

    fn eval_of(fen: &str) -> i32 {
        let mut board = Board::new();
        board.set_fen(fen).unwrap();
        let mut caches = EvalCaches::new();
        evaluate(&board, &mut caches)
    }

    #[test]
    fn symmetric_under_colour_mirror() {
        let fens = [
            crate::board::STARTPOS_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1",
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
        ];
        for fen in fens {
            assert_eq!(
                eval_of(fen),
                eval_of(&mirror_fen(fen)),
                "asymmetric evaluation for {fen}"
            );
        }
    }

    #[test]
    fn startpos_is_balanced() {
        let score = eval_of(crate::board::STARTPOS_FEN);
        assert!(score.abs() <= 50, "startpos evaluated at {score}");
    }

    #[test]
    fn extra_queen_dominates() {
        let score = eval_of("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
        assert!(score > 500, "queen-up position evaluated at {score}");
    }

    #[test]
    fn perspective_flips_with_the_turn() {
        let white_view = eval_of("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
        let black_view = eval_of("4k3/8/8/8/8/8/8/Q3K3 b - - 0 1");
        assert_eq!(white_view, -black_view);
    }

    #[test]
    fn passed_pawn_is_rewarded() {
        let with_passer = eval_of("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1");
        assert!(with_passer > 0);
    }

    #[test]
    fn mate_helpers() {
        assert_eq!(mate_in(0), MATE);
        assert_eq!(mated_in(0), -MATE);
        assert!(is_mate_score(mate_in(10)));
        assert!(is_mate_score(mated_in(10)));
        assert!(!is_mate_score(250));
    }
}
