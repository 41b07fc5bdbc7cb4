//! Perft: count the leaves of the full legal move tree. This is the unit
//! test that validates any change to the board or move generator.

use std::time::Instant;

use anyhow::ensure;

use crate::board::movegen::{GenMode, MoveList};
use crate::board::Board;

pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut list = MoveList::new();
    board.generate(GenMode::All, &mut list);

    if depth == 1 {
        return list.len() as u64;
    }

    let mut count = 0;
    for m in list {
        board.play(m);
        count += perft(board, depth - 1);
        board.undo();
    }
    count
}

/// The reference positions every board change must keep passing.
pub const PERFT_SUITE: [(&str, usize, u64); 4] = [
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        5,
        4_865_609,
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        4,
        4_085_603,
    ),
    ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 5, 674_624),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2pP/R2Q1RK1 w kq - 0 1",
        5,
        15_833_292,
    ),
];

/// Run the whole suite, timing each position; exits non-zero on the first
/// mismatch.
pub fn gamut() -> anyhow::Result<()> {
    for (fen, depth, expected) in PERFT_SUITE {
        let mut board = Board::new();
        board.set_fen(fen)?;
        let start = Instant::now();
        let nodes = perft(&mut board, depth);
        let elapsed = start.elapsed();
        println!("perft({depth}) = {nodes:>12}  ({elapsed:.2?})  {fen}");
        ensure!(
            nodes == expected,
            "perft mismatch on {fen}: got {nodes}, expected {expected}"
        );
    }
    println!("perft suite passed");
    Ok(())
}

mod tests {
    #![allow(unused_imports)]
    use super::*;

    fn perft_of(fen: &str, depth: usize) -> u64 {
        let mut board = Board::new();
        board.set_fen(fen).unwrap();
        perft(&mut board, depth)
    }

    #[test]
    fn startpos_shallow() {
        let fen = PERFT_SUITE[0].0;
        assert_eq!(perft_of(fen, 1), 20);
        assert_eq!(perft_of(fen, 2), 400);
        assert_eq!(perft_of(fen, 3), 8_902);
        assert_eq!(perft_of(fen, 4), 197_281);
    }

    #[test]
    fn kiwipete_shallow() {
        let fen = PERFT_SUITE[1].0;
        assert_eq!(perft_of(fen, 1), 48);
        assert_eq!(perft_of(fen, 2), 2_039);
        assert_eq!(perft_of(fen, 3), 97_862);
    }

    #[test]
    fn endgame_shallow() {
        let fen = PERFT_SUITE[2].0;
        assert_eq!(perft_of(fen, 1), 14);
        assert_eq!(perft_of(fen, 2), 191);
        assert_eq!(perft_of(fen, 3), 2_812);
        assert_eq!(perft_of(fen, 4), 43_238);
    }

    #[test]
    fn promotion_heavy_shallow() {
        let fen = PERFT_SUITE[3].0;
        assert_eq!(perft_of(fen, 1), 6);
        assert_eq!(perft_of(fen, 2), 264);
        assert_eq!(perft_of(fen, 3), 9_467);
        assert_eq!(perft_of(fen, 4), 422_333);
    }

    #[test]
    fn full_suite() {
        for (fen, depth, expected) in PERFT_SUITE {
            assert_eq!(perft_of(fen, depth), expected, "perft mismatch on {fen}");
        }
    }
}
