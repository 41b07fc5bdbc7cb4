//! Fixed-depth benchmark over a small suite of positions, reporting total
//! nodes and speed. Useful for spotting regressions in the search.

use std::time::Instant;

use crate::board::Board;
use crate::search::{bestmove, SearchContext};
use crate::searchinfo::SearchInfo;
use crate::timemgmt::SearchLimits;

const BENCH_POSITIONS: [&str; 8] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r1bq1rk1/pp2bppp/2n2n2/2pp4/8/1P2PN2/PBPPBPPP/RN1Q1RK1 w - - 0 8",
    "2rq1rk1/pb2bppp/1pn1pn2/2p5/2PP4/1PN1PN2/PB2BPPP/R2Q1RK1 w - - 0 11",
    "8/k7/3p4/p2P1p2/P2P1P2/8/8/K7 w - - 0 1",
    "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
    "8/8/1p1k4/p2p1p2/P2P1P2/1P2K3/8/8 b - - 0 1",
];

pub fn bench(depth: i32) -> anyhow::Result<()> {
    let mut ctx = SearchContext::new(16);
    let mut total_nodes = 0;
    let start = Instant::now();

    for fen in BENCH_POSITIONS {
        let mut board = Board::new();
        board.set_fen(fen)?;

        let limits = SearchLimits {
            depth,
            ..SearchLimits::default()
        };
        let mut info = SearchInfo::new(&limits);
        let best = bestmove(&mut board, &mut ctx, &mut info, &limits);

        let best = best.map_or_else(|| "0000".to_string(), |m| m.to_string());
        println!("{fen}: best {best}, {} nodes", info.nodes);
        total_nodes += info.nodes;
    }

    let elapsed = start.elapsed();
    #[allow(clippy::cast_precision_loss)]
    let nps = total_nodes as f64 / elapsed.as_secs_f64();
    println!("{total_nodes} nodes {nps:.0} nps");
    Ok(())
}
