//! The UCI command loop. A dedicated thread feeds stdin lines into a
//! channel; the search polls the same channel so `stop` and `quit` land
//! mid-search. Malformed input is reported on stderr and otherwise
//! ignored, as the protocol demands.

use std::io::Write as _;
use std::sync::mpsc;

use anyhow::Context as _;

use crate::board::{Board, STARTPOS_FEN};
use crate::evaluation::evaluate;
use crate::piece::Colour;
use crate::search::{bestmove, SearchContext};
use crate::searchinfo::SearchInfo;
use crate::timemgmt::SearchLimits;
use crate::{NAME, VERSION};

const DEFAULT_HASH_MB: usize = 16;
const DEFAULT_CONTEMPT: i32 = 25;

fn stdin_reader() -> mpsc::Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            let mut line = String::with_capacity(128);
            loop {
                line.clear();
                match std::io::stdin().read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => (),
                }
                let cmd = line.trim();
                if cmd.is_empty() {
                    continue;
                }
                let quitting = cmd == "quit";
                if sender.send(cmd.to_owned()).is_err() || quitting {
                    break;
                }
            }
        })
        .expect("spawning the stdin reader thread");
    receiver
}

fn print_uci_response() {
    println!("id name {NAME} {VERSION}");
    println!("id author the {NAME} authors");
    println!("option name Hash type spin default {DEFAULT_HASH_MB} min 1 max 8192");
    println!("option name Clear Hash type button");
    println!("option name Contempt type spin default {DEFAULT_CONTEMPT} min 0 max 100");
    println!("uciok");
}

/// `position startpos|fen <FEN> [moves m1 m2 ...]`. An illegal or
/// unparsable move terminates the list; the legal prefix stands.
fn parse_position(board: &mut Board, input: &str) {
    let mut parts = input.split_whitespace().skip(1);

    match parts.next() {
        Some("startpos") => {
            board
                .set_fen(STARTPOS_FEN)
                .expect("the starting position parses");
            match parts.next() {
                Some("moves") | None => (),
                Some(other) => {
                    eprintln!("unexpected token after startpos: {other}");
                    return;
                }
            }
        }
        Some("fen") => {
            let mut fen = String::new();
            for part in parts.by_ref() {
                if part == "moves" {
                    break;
                }
                fen.push_str(part);
                fen.push(' ');
            }
            if let Err(err) = board.set_fen(&fen) {
                eprintln!("bad fen: {err}");
                return;
            }
        }
        _ => {
            eprintln!("position needs startpos or fen");
            return;
        }
    }

    for token in parts {
        match board.parse_move(token) {
            Ok(m) => board.play(m),
            Err(err) => {
                eprintln!("stopping at {token}: {err}");
                break;
            }
        }
    }
}

fn parse_go(board: &Board, input: &str) -> SearchLimits {
    let mut limits = SearchLimits::default();
    let us = board.turn();

    fn numeric<T: std::str::FromStr>(token: Option<&str>) -> Option<T> {
        token.and_then(|v| v.parse().ok())
    }

    let mut parts = input.split_whitespace().skip(1);
    while let Some(token) = parts.next() {
        match token {
            "wtime" if us == Colour::White => {
                limits.time = numeric(parts.next()).unwrap_or(limits.time);
            }
            "btime" if us == Colour::Black => {
                limits.time = numeric(parts.next()).unwrap_or(limits.time);
            }
            "winc" if us == Colour::White => {
                limits.increment = numeric(parts.next()).unwrap_or(limits.increment);
            }
            "binc" if us == Colour::Black => {
                limits.increment = numeric(parts.next()).unwrap_or(limits.increment);
            }
            "movestogo" => limits.movestogo = numeric(parts.next()).unwrap_or(limits.movestogo),
            "movetime" => limits.movetime = numeric(parts.next()).unwrap_or(limits.movetime),
            "depth" => limits.depth = numeric(parts.next()).unwrap_or(limits.depth),
            "nodes" => limits.nodes = numeric(parts.next()).unwrap_or(limits.nodes),
            "infinite" => (),
            // unknown or irrelevant tokens are skipped for robustness
            _ => (),
        }
    }
    limits
}

fn parse_setoption(ctx: &mut SearchContext, input: &str) {
    let mut parts = input.split_whitespace().skip(1);
    if parts.next() != Some("name") {
        eprintln!("setoption needs a name");
        return;
    }

    let mut name_tokens = Vec::new();
    let mut value = None;
    for token in parts.by_ref() {
        if token == "value" {
            value = parts.next();
            break;
        }
        name_tokens.push(token);
    }
    let name = name_tokens.join(" ");

    match name.as_str() {
        "Hash" => {
            let Some(megabytes) = value.and_then(|v| v.parse::<usize>().ok()) else {
                eprintln!("Hash needs a numeric value");
                return;
            };
            let megabytes = megabytes.clamp(1, 8192);
            if let Err(err) = ctx.tt.resize(megabytes) {
                // keep searching with the old table rather than dying
                eprintln!("failed to resize hash to {megabytes} MB: {err}");
            }
        }
        "Clear Hash" => ctx.tt.clear(),
        "Contempt" => {
            let Some(contempt) = value.and_then(|v| v.parse::<i32>().ok()) else {
                eprintln!("Contempt needs a numeric value");
                return;
            };
            ctx.contempt = contempt.clamp(0, 100);
        }
        other => eprintln!("ignoring option {other}"),
    }
}

/// Run one `go` command to completion. Returns true when `quit` arrived
/// while searching.
fn run_go(
    board: &mut Board,
    ctx: &mut SearchContext,
    stdin: &mpsc::Receiver<String>,
    input: &str,
) -> bool {
    let limits = parse_go(board, input);
    let mut info = SearchInfo::new(&limits);
    info.set_stdin(stdin);

    match bestmove(board, ctx, &mut info, &limits) {
        Some(m) => println!("bestmove {m}"),
        // mate or stalemate on the board already
        None => println!("bestmove 0000"),
    }
    info.quit
}

pub fn main_loop() -> anyhow::Result<()> {
    let mut board = Board::startpos();
    let mut ctx = SearchContext::new(DEFAULT_HASH_MB);
    let stdin = stdin_reader();

    loop {
        std::io::stdout().flush()?;
        let line = stdin
            .recv()
            .context("stdin closed before a quit command")?;
        let input = line.trim();

        match input.split_whitespace().next() {
            Some("uci") => print_uci_response(),
            Some("isready") => println!("readyok"),
            Some("ucinewgame") => ctx.tt.clear(),
            Some("position") => parse_position(&mut board, input),
            Some("go") => {
                if run_go(&mut board, &mut ctx, &stdin, input) {
                    break;
                }
            }
            Some("setoption") => parse_setoption(&mut ctx, input),
            Some("eval") => {
                if board.is_check() {
                    println!("{board}eval = none (in check)");
                } else {
                    println!("{board}eval = {}", evaluate(&board, &mut ctx.caches));
                }
            }
            Some("quit") => break,
            // a stray stop with no search running is a no-op
            Some("stop") | None => (),
            Some(other) => eprintln!("unknown command: {other}"),
        }
    }

    Ok(())
}

mod tests {
    #![allow(unused_imports)]
    use super::*;

    #[test]
    fn position_with_moves() {
        let mut board = Board::startpos();
        parse_position(&mut board, "position startpos moves e2e4 e7e5 g1f3");
        assert_eq!(board.ply(), 3);
        assert_eq!(board.turn(), Colour::Black);
    }

    #[test]
    fn illegal_move_keeps_the_legal_prefix() {
        let mut board = Board::startpos();
        parse_position(&mut board, "position startpos moves e2e4 e7e6 e4e6");
        assert_eq!(board.ply(), 2);
    }

    #[test]
    fn position_fen_roundtrip() {
        let mut board = Board::startpos();
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        parse_position(&mut board, &format!("position fen {fen}"));
        assert_eq!(board.fen(), fen);
    }

    #[test]
    fn go_parsing_uses_our_clock() {
        let board = Board::startpos();
        let limits = parse_go(&board, "go wtime 60000 btime 30000 winc 1000 binc 2000");
        assert_eq!(limits.time, 60_000);
        assert_eq!(limits.increment, 1000);
        let limits = parse_go(&board, "go depth 9 nodes 12345");
        assert_eq!(limits.depth, 9);
        assert_eq!(limits.nodes, 12_345);
    }

    #[test]
    fn setoption_contempt() {
        let mut ctx = SearchContext::new(1);
        parse_setoption(&mut ctx, "setoption name Contempt value 40");
        assert_eq!(ctx.contempt, 40);
        parse_setoption(&mut ctx, "setoption name Contempt value 900");
        assert_eq!(ctx.contempt, 100);
    }
}
