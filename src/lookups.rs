//! Precomputed geometry: leaper attacks, rays, between/line tables, pawn
//! spans, and the king-distance tables used by the evaluator. Everything
//! here is generated at compile time.

use crate::macros::cfor;
use crate::piece::Colour;
use crate::squareset::SquareSet;
use crate::util::Square;

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const fn bit(rank: i32, file: i32) -> u64 {
    1 << (rank * 8 + file)
}

const fn leaper_attacks(sq: usize, deltas: &[(i32, i32); 8]) -> u64 {
    let (r, f) = ((sq / 8) as i32, (sq % 8) as i32);
    let mut attacks = 0;
    cfor!(let mut i = 0; i < 8; i += 1; {
        let (dr, df) = deltas[i];
        let (nr, nf) = (r + dr, f + df);
        if nr >= 0 && nr < 8 && nf >= 0 && nf < 8 {
            attacks |= bit(nr, nf);
        }
    });
    attacks
}

/// Ray-walk sliding attacks, stopping at (and including) blockers.
/// With an empty occupancy this yields the pseudo-attack set.
pub const fn sliding_attacks(sq: usize, occupied: u64, dirs: &[(i32, i32); 4]) -> u64 {
    let (r, f) = ((sq / 8) as i32, (sq % 8) as i32);
    let mut attacks = 0;
    cfor!(let mut i = 0; i < 4; i += 1; {
        let (dr, df) = dirs[i];
        let (mut nr, mut nf) = (r + dr, f + df);
        while nr >= 0 && nr < 8 && nf >= 0 && nf < 8 {
            attacks |= bit(nr, nf);
            if occupied & bit(nr, nf) != 0 {
                break;
            }
            nr += dr;
            nf += df;
        }
    });
    attacks
}

pub const fn bishop_rays(sq: usize, occupied: u64) -> u64 {
    sliding_attacks(sq, occupied, &BISHOP_DIRS)
}

pub const fn rook_rays(sq: usize, occupied: u64) -> u64 {
    sliding_attacks(sq, occupied, &ROOK_DIRS)
}

const fn generate_leapers(deltas: &[(i32, i32); 8]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    cfor!(let mut sq = 0; sq < 64; sq += 1; {
        table[sq] = SquareSet::from_inner(leaper_attacks(sq, deltas));
    });
    table
}

const fn generate_pawn_attacks() -> [[SquareSet; 64]; 2] {
    let mut table = [[SquareSet::EMPTY; 64]; 2];
    cfor!(let mut sq = 0; sq < 64; sq += 1; {
        let (r, f) = ((sq / 8) as i32, (sq % 8) as i32);
        let mut white = 0;
        let mut black = 0;
        if f > 0 {
            if r < 7 { white |= bit(r + 1, f - 1); }
            if r > 0 { black |= bit(r - 1, f - 1); }
        }
        if f < 7 {
            if r < 7 { white |= bit(r + 1, f + 1); }
            if r > 0 { black |= bit(r - 1, f + 1); }
        }
        table[0][sq] = SquareSet::from_inner(white);
        table[1][sq] = SquareSet::from_inner(black);
    });
    table
}

const fn generate_pseudo(dirs: &[(i32, i32); 4]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    cfor!(let mut sq = 0; sq < 64; sq += 1; {
        table[sq] = SquareSet::from_inner(sliding_attacks(sq, 0, dirs));
    });
    table
}

const fn direction(from: usize, to: usize) -> Option<(i32, i32)> {
    let (fr, ff) = ((from / 8) as i32, (from % 8) as i32);
    let (tr, tf) = ((to / 8) as i32, (to % 8) as i32);
    let (dr, df) = (tr - fr, tf - ff);
    if from == to {
        None
    } else if dr == 0 {
        Some((0, df.signum()))
    } else if df == 0 {
        Some((dr.signum(), 0))
    } else if dr.abs() == df.abs() {
        Some((dr.signum(), df.signum()))
    } else {
        None
    }
}

/// `BETWEEN[a][b]`: squares strictly between two aligned squares.
const fn generate_between() -> [[SquareSet; 64]; 64] {
    let mut table = [[SquareSet::EMPTY; 64]; 64];
    cfor!(let mut from = 0; from < 64; from += 1; {
        cfor!(let mut to = 0; to < 64; to += 1; {
            if let Some((dr, df)) = direction(from, to) {
                let mut acc = 0;
                let (mut r, mut f) = ((from / 8) as i32 + dr, (from % 8) as i32 + df);
                while (r * 8 + f) as usize != to {
                    acc |= bit(r, f);
                    r += dr;
                    f += df;
                }
                table[from][to] = SquareSet::from_inner(acc);
            }
        });
    });
    table
}

/// `LINE[a][b]`: the full line through two aligned squares, endpoints
/// included; empty when the squares do not share a rank, file or diagonal.
const fn generate_line() -> [[SquareSet; 64]; 64] {
    let mut table = [[SquareSet::EMPTY; 64]; 64];
    cfor!(let mut from = 0; from < 64; from += 1; {
        cfor!(let mut to = 0; to < 64; to += 1; {
            if let Some((dr, df)) = direction(from, to) {
                let mut acc = 0;
                let (mut r, mut f) = ((from / 8) as i32, (from % 8) as i32);
                while r >= 0 && r < 8 && f >= 0 && f < 8 {
                    acc |= bit(r, f);
                    r -= dr;
                    f -= df;
                }
                let (mut r, mut f) = ((from / 8) as i32 + dr, (from % 8) as i32 + df);
                while r >= 0 && r < 8 && f >= 0 && f < 8 {
                    acc |= bit(r, f);
                    r += dr;
                    f += df;
                }
                table[from][to] = SquareSet::from_inner(acc);
            }
        });
    });
    table
}

const fn generate_adjacent_files() -> [SquareSet; 8] {
    let mut table = [SquareSet::EMPTY; 8];
    const FILE_A: u64 = 0x0101_0101_0101_0101;
    cfor!(let mut f = 0; f < 8; f += 1; {
        let mut acc = 0;
        if f > 0 { acc |= FILE_A << (f - 1); }
        if f < 7 { acc |= FILE_A << (f + 1); }
        table[f] = SquareSet::from_inner(acc);
    });
    table
}

/// `FRONT_SPAN[c][sq]`: squares strictly ahead of `sq` on its own file,
/// from `c`'s point of view.
const fn generate_front_spans() -> [[SquareSet; 64]; 2] {
    let mut table = [[SquareSet::EMPTY; 64]; 2];
    const FILE_A: u64 = 0x0101_0101_0101_0101;
    cfor!(let mut sq = 0; sq < 64; sq += 1; {
        let file_mask = FILE_A << (sq % 8);
        let above = if sq >= 56 { 0 } else { !0u64 << (sq + 8) };
        let below = if sq < 8 { 0 } else { !0u64 >> (64 - sq) };
        table[0][sq] = SquareSet::from_inner(file_mask & above);
        table[1][sq] = SquareSet::from_inner(file_mask & below);
    });
    table
}

/// `PASSER_SPAN[c][sq]`: squares strictly ahead of `sq` on the adjacent
/// files. An enemy pawn in this span stops `sq` from being passed.
const fn generate_passer_spans() -> [[SquareSet; 64]; 2] {
    let mut table = [[SquareSet::EMPTY; 64]; 2];
    const FILE_A: u64 = 0x0101_0101_0101_0101;
    cfor!(let mut sq = 0; sq < 64; sq += 1; {
        let f = sq % 8;
        let mut files = 0;
        if f > 0 { files |= FILE_A << (f - 1); }
        if f < 7 { files |= FILE_A << (f + 1); }
        let above = if sq >= 56 { 0 } else { !0u64 << (sq + 8) };
        let below = if sq < 8 { 0 } else { !0u64 >> (64 - sq) };
        table[0][sq] = SquareSet::from_inner(files & above);
        table[1][sq] = SquareSet::from_inner(files & below);
    });
    table
}

/// Distance from a square to the nearest habitual king shelter (the castled
/// corners approximated by e1/b1 for White, e8/b8 for Black).
const fn generate_safety_distance() -> [[i32; 64]; 2] {
    let mut table = [[0; 64]; 2];
    const fn dist(a: usize, b: usize) -> i32 {
        let df = ((a % 8) as i32 - (b % 8) as i32).abs();
        let dr = ((a / 8) as i32 - (b / 8) as i32).abs();
        if df > dr { df } else { dr }
    }
    cfor!(let mut sq = 0; sq < 64; sq += 1; {
        let (e1, b1) = (4, 1);
        let (e8, b8) = (60, 57);
        let w = if dist(sq, e1) < dist(sq, b1) { dist(sq, e1) } else { dist(sq, b1) };
        let b = if dist(sq, e8) < dist(sq, b8) { dist(sq, e8) } else { dist(sq, b8) };
        table[0][sq] = w;
        table[1][sq] = b;
    });
    table
}

static KNIGHT_ATTACKS: [SquareSet; 64] = generate_leapers(&KNIGHT_DELTAS);
static KING_ATTACKS: [SquareSet; 64] = generate_leapers(&KING_DELTAS);
static PAWN_ATTACKS: [[SquareSet; 64]; 2] = generate_pawn_attacks();
static BISHOP_PSEUDO: [SquareSet; 64] = generate_pseudo(&BISHOP_DIRS);
static ROOK_PSEUDO: [SquareSet; 64] = generate_pseudo(&ROOK_DIRS);
static BETWEEN: [[SquareSet; 64]; 64] = generate_between();
static LINE: [[SquareSet; 64]; 64] = generate_line();
static ADJACENT_FILES: [SquareSet; 8] = generate_adjacent_files();
static FRONT_SPAN: [[SquareSet; 64]; 2] = generate_front_spans();
static PASSER_SPAN: [[SquareSet; 64]; 2] = generate_passer_spans();
static SAFETY_DISTANCE: [[i32; 64]; 2] = generate_safety_distance();

pub fn knight_attacks(sq: Square) -> SquareSet {
    KNIGHT_ATTACKS[sq.index()]
}

pub fn king_attacks(sq: Square) -> SquareSet {
    KING_ATTACKS[sq.index()]
}

/// Squares attacked by a pawn of `colour` standing on `sq`.
pub fn pawn_attacks(colour: Colour, sq: Square) -> SquareSet {
    PAWN_ATTACKS[colour.index()][sq.index()]
}

/// Bishop attacks on an empty board.
pub fn bishop_pseudo_attacks(sq: Square) -> SquareSet {
    BISHOP_PSEUDO[sq.index()]
}

/// Rook attacks on an empty board.
pub fn rook_pseudo_attacks(sq: Square) -> SquareSet {
    ROOK_PSEUDO[sq.index()]
}

pub fn between(a: Square, b: Square) -> SquareSet {
    BETWEEN[a.index()][b.index()]
}

pub fn line(a: Square, b: Square) -> SquareSet {
    LINE[a.index()][b.index()]
}

pub fn adjacent_files(file: u8) -> SquareSet {
    ADJACENT_FILES[usize::from(file)]
}

pub fn front_span(colour: Colour, sq: Square) -> SquareSet {
    FRONT_SPAN[colour.index()][sq.index()]
}

pub fn passer_span(colour: Colour, sq: Square) -> SquareSet {
    PASSER_SPAN[colour.index()][sq.index()]
}

pub fn distance_to_safety(colour: Colour, sq: Square) -> i32 {
    SAFETY_DISTANCE[colour.index()][sq.index()]
}

mod tests {
    #![allow(unused_imports)]
    use super::*;

    #[test]
    fn knight_on_the_rim() {
        assert_eq!(knight_attacks(Square::A1).count(), 2);
        assert_eq!(knight_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn between_is_exclusive() {
        let b = between(Square::A1, Square::A8);
        assert_eq!(b.count(), 6);
        assert!(!b.contains(Square::A1));
        assert!(!b.contains(Square::A8));
        assert!(between(Square::A1, Square::from_name("b3").unwrap()).is_empty());
    }

    #[test]
    fn line_contains_endpoints() {
        let l = line(Square::A1, Square::H8);
        assert_eq!(l.count(), 8);
        assert!(l.contains(Square::A1));
        assert!(l.contains(Square::H8));
    }

    #[test]
    fn spans() {
        use crate::piece::Colour;
        let e4 = Square::E4;
        assert_eq!(front_span(Colour::White, e4).count(), 4);
        assert_eq!(front_span(Colour::Black, e4).count(), 3);
        assert_eq!(passer_span(Colour::White, e4).count(), 8);
    }
}
