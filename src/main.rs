#![allow(dead_code)]

mod prodigy;

use std::{env, num::ParseIntError, process::ExitCode, sync::{Arc, mpsc}};

use prodigy::*;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/*----------------------------------------------------------------*/

const DEFAULT_DEPTH: usize = 5;
const USAGE: &str = "usage: prodigy [perft \"<FEN>\" <DEPTH> | search \"<FEN>\" <HASH_MB>]";

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown command `{0}`, {usage}", usage = USAGE)]
    UnknownCommand(String),
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenParseError),
    #[error("search finished without reporting a move")]
    SearchAborted,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = env::args().skip(1).collect::<Vec<String>>();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    match args.first().map(String::as_str) {
        None => run_perft(STARTING_POSITION_FEN, DEFAULT_DEPTH),
        Some("perft") => {
            let fen = args.get(1).map_or(STARTING_POSITION_FEN, String::as_str);
            let depth = match args.get(2) {
                Some(depth) => depth.parse::<usize>()?,
                None => DEFAULT_DEPTH,
            };

            run_perft(fen, depth)
        }
        Some("search") => {
            let fen = args.get(1).map_or(STARTING_POSITION_FEN, String::as_str);
            let megabytes = match args.get(2) {
                Some(megabytes) => megabytes.parse::<usize>()?,
                None => TranspositionTable::DEFAULT_MEGABYTES,
            };

            run_search(fen, megabytes)
        }
        Some("-h" | "--help") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(cmd) => Err(CliError::UnknownCommand(cmd.to_owned())),
    }
}

fn run_perft(fen: &str, depth: usize) -> Result<(), CliError> {
    let zobrist = Zobrist::default();
    let position = Position::from_fen(fen, &zobrist)?;
    let move_gen = MoveGenerator::new(Arc::new(Tables::default()));

    info!(fen, depth, "running perft");
    let result = perft(&move_gen, &zobrist, &position, depth);
    info!(nodes = result.nodes(), "perft finished");

    println!("{:#}", position);
    println!("{}", result);

    Ok(())
}

fn run_search(fen: &str, megabytes: usize) -> Result<(), CliError> {
    let zobrist = Zobrist::default();
    let position = Position::from_fen(fen, &zobrist)?;
    let ttable = TranspositionTable::new(megabytes);
    let controller = Controller::new(RandomSearcher::new(Arc::new(Tables::default())));

    let (tx, rx) = mpsc::channel();
    controller.start_searching(position, move |mv| {
        let _ = tx.send(mv);
    });

    let best = rx.recv().map_err(|_| CliError::SearchAborted)?;

    if let Some(mv) = best {
        ttable.try_insert(position.hash(), Some(mv), 0, 1, NodeType::Pv);
    }

    info!(fen, buckets = ttable.bucket_count(), stored = ttable.find(position.hash()).is_some(), "search finished");

    match best {
        Some(mv) => println!("bestmove {}", mv),
        None => println!("bestmove 0000"),
    }

    Ok(())
}

/*----------------------------------------------------------------*/
