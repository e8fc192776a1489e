//! wordgrid-core: seeded word-search boards and their compact share tokens
//!
//! A board is a 63-bit seed (which deterministically generates a 5×5 letter
//! grid) plus the list of word paths found on it. This library turns that
//! state into a short URL-safe token and back:
//! - Fields are bit-packed into one value, first field least significant
//! - The value is written as minimal big-endian bytes
//! - The bytes are zlib-compressed and base64-encoded (URL-safe alphabet)
//!
//! # Architecture
//!
//! - `bitio`: LSB-first bit packing over a growable byte buffer
//! - `board`: `Board`, `Word` and `Move`, plus their text forms
//! - `grid`: letter grid generation from a seed, path walking
//! - `token`: field layout, compression and text encoding
//! - `metrics`: per-encode size accounting
//!
//! # Example
//!
//! ```
//! use wordgrid_core::{Board, Move, Word};
//!
//! let mut board = Board::with_seed(12345);
//! board.add_word(Word::new(0, 1, vec![Move::South, Move::South, Move::East, Move::NorthEast]));
//!
//! let token = wordgrid_core::token::encode(&board).unwrap();
//! let decoded = wordgrid_core::token::decode(&token).unwrap();
//! assert_eq!(decoded, board);
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: malformed tokens and oversized boards return typed errors
//! - **No silent truncation**: every field is checked against its width
//! - **Deterministic**: the same board always yields the same token, and the
//!   same seed always yields the same grid

pub mod bitio;
pub mod board;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod token;

// Re-export commonly used types
pub use board::{Board, Move, Word};
pub use error::{Error, Result};
pub use grid::Grid;
pub use metrics::TokenMetrics;
