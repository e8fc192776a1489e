//! Command-line configuration for the wordgrid tool.
//!
//! # Philosophy
//!
//! Every command works with zero options. Seeds that are not given are drawn
//! at random and printed, so any run can be reproduced with `--seed`.

use clap::{Parser, Subcommand};
use rand::Rng;
use wordgrid_core::board::MAX_SEED;
use wordgrid_core::Word;

/// Create, share and decode word-search boards.
#[derive(Parser, Debug)]
#[command(name = "wordgrid", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print size metrics for every token produced
    #[arg(long, global = true)]
    pub metrics: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a board from explicit words and print its token
    New {
        /// Board seed (default: random)
        #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_SEED))]
        seed: Option<u64>,

        /// A found word as ROW,COL:MOVE,MOVE,... (repeatable), e.g. 0,1:S,S,E,NE
        #[arg(long = "word", value_name = "ROW,COL:MOVES")]
        words: Vec<Word>,
    },

    /// Decode a token and print the board it describes
    Decode {
        /// Token as printed by `new` or `sample`
        token: String,
    },

    /// Build a board with random on-grid word paths
    Sample {
        /// Board seed, also drives the word paths (default: random)
        #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_SEED))]
        seed: Option<u64>,

        /// Number of words to generate
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(0..=255))]
        words: u16,
    },

    /// Run the built-in four-word demo on a random board
    Demo,
}

impl Cli {
    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Use the given seed, or draw a fresh one that fits a board.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_SEED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wordgrid_core::Move;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_with_words() {
        let cli = Cli::try_parse_from([
            "wordgrid",
            "new",
            "--seed",
            "12345",
            "--word",
            "0,1:S,S,E,NE",
            "--word",
            "1,0:N,W,E",
        ])
        .unwrap();

        match cli.command {
            Command::New { seed, words } => {
                assert_eq!(seed, Some(12345));
                assert_eq!(words.len(), 2);
                assert_eq!(words[1].moves, vec![Move::North, Move::West, Move::East]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.metrics);
    }

    #[test]
    fn test_rejects_bad_word() {
        let result = Cli::try_parse_from(["wordgrid", "new", "--word", "0,1:UP"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_wide_seed() {
        let result = Cli::try_parse_from(["wordgrid", "new", "--seed", "9223372036854775808"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_defaults() {
        let cli = Cli::try_parse_from(["wordgrid", "sample", "--metrics"]).unwrap();
        match cli.command {
            Command::Sample { seed, words } => {
                assert_eq!(seed, None);
                assert_eq!(words, 4);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.metrics);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_resolve_seed() {
        assert_eq!(resolve_seed(Some(9)), 9);
        assert!(resolve_seed(None) <= MAX_SEED);
    }
}
