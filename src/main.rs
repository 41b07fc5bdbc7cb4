#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

//! Oxybelis, a UCI chess engine written in Rust.

mod macros;

mod bench;
mod board;
mod chessmove;
mod cli;
mod errors;
mod evaluation;
mod historytable;
mod lookups;
mod magic;
mod movepicker;
mod perft;
mod piece;
mod piecesquaretable;
mod rng;
mod search;
mod searchinfo;
mod see;
mod squareset;
mod timemgmt;
mod transpositiontable;
mod uci;
mod util;
mod zobrist;

/// The name of the engine.
pub static NAME: &str = "Oxybelis";
/// The version of the engine.
pub static VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    if std::env::args_os().len() == 1 {
        // fast path to UCI
        return uci::main_loop();
    }

    let cli = <cli::Cli as clap::Parser>::parse();
    match cli.subcommand {
        Some(cli::Subcommands::Perft) => perft::gamut(),
        Some(cli::Subcommands::Bench { depth }) => bench::bench(depth),
        None => uci::main_loop(),
    }
}
