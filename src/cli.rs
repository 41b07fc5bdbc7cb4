use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "a UCI chess engine")]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Option<Subcommands>,
}

#[derive(Subcommand)]
pub enum Subcommands {
    /// Validate the move generator against the reference node counts.
    Perft,
    /// Search a fixed suite of positions and report nodes and speed.
    Bench {
        #[arg(long, default_value_t = 11)]
        depth: i32,
    },
}
