//! wordgrid: create, share and decode word-search boards from the command line.

mod config;
mod sample;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use wordgrid_core::{token, Board, Result, Word};

use crate::config::{resolve_seed, Cli, Command};
use crate::sample::generate_sample_board;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::New { seed, words } => {
            let seed = resolve_seed(*seed);
            debug!(seed, words = words.len(), "building board");

            let mut board = Board::with_seed(seed);
            for word in words {
                board.add_word(word.clone());
            }
            print_board(&board, cli.metrics)?;
        }
        Command::Decode { token } => {
            let board = token::decode(token)?;
            print!("{board}");
        }
        Command::Sample { seed, words } => {
            let seed = resolve_seed(*seed);
            debug!(seed, words, "generating sample board");

            let board = generate_sample_board(seed, *words as usize);
            let token = print_board(&board, cli.metrics)?;
            print_verification(&board, &token)?;
        }
        Command::Demo => run_demo(cli.metrics)?,
    }

    Ok(())
}

/// Print a board followed by its token; returns the token.
fn print_board(board: &Board, metrics: bool) -> Result<String> {
    let (token, token_metrics) = token::encode_with_metrics(board)?;

    print!("{board}");
    println!();
    println!("token: {token}");

    if metrics {
        println!();
        token_metrics.print_summary();
    }

    Ok(token)
}

fn print_verification(board: &Board, token: &str) -> Result<()> {
    let decoded = token::decode(token)?;
    println!();
    if decoded == *board {
        println!("Verification: PASSED ✓");
    } else {
        println!("Verification: FAILED ✗ (decoded board differs)");
    }
    Ok(())
}

/// Four fixed words on a fresh random board, shown before and after a token
/// round trip.
fn run_demo(metrics: bool) -> Result<()> {
    use wordgrid_core::Move::*;

    let mut board = Board::new();
    board.add_word(Word::new(0, 1, vec![South, South, East, NorthEast]));
    board.add_word(Word::new(1, 3, vec![East, South, West, NorthWest]));
    board.add_word(Word::new(
        1,
        3,
        vec![North, NorthWest, West, NorthWest, NorthEast, South, East],
    ));
    board.add_word(Word::new(1, 0, vec![North, West, East]));

    let token = print_board(&board, metrics)?;
    println!("------");
    print!("{}", token::decode(&token)?);

    Ok(())
}
