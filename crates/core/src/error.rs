//! Error types for the wordgrid codec.
//!
//! All operations return structured errors rather than panicking.
//! A malformed token never produces a partial board; the caller gets one of
//! these instead.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: packing or extracting fields from the bit stream
/// - Encode: board fields that do not fit their wire widths
/// - Decode: tokens that are not valid base64, zlib, or packed boards
/// - Parse: textual moves and words (CLI input)
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., value wider than its field)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Board cannot be represented in the token format
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Token is corrupted, truncated, or foreign
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Textual move or word could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Bit-level I/O errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitIoError {
    /// Field width larger than a single `u64`
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),

    /// Value has set bits above the field width
    #[error("value {value} does not fit in {width} bits")]
    ValueTooWide { value: u64, width: usize },

    /// Attempted to read past the reader's bit limit
    #[error("insufficient bits: requested {requested}, available {available}")]
    InsufficientBits { requested: usize, available: usize },
}

/// Field overflow while encoding a board.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("seed {seed} does not fit in {bits} bits")]
    SeedOutOfRange { seed: u64, bits: usize },

    #[error("board has {count} words, at most {max} can be encoded")]
    TooManyWords { count: usize, max: usize },

    #[error("word {index} has {count} moves, at most {max} can be encoded")]
    TooManyMoves { index: usize, count: usize, max: usize },

    #[error("word {index} starts at ({row}, {col}), coordinates must be at most {max}")]
    StartOutOfRange { index: usize, row: u8, col: u8, max: u8 },

    /// Compressor failed while writing into memory
    #[error("compression failed: {0}")]
    Compress(#[from] std::io::Error),
}

/// Malformed token errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64 text: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid compressed data: {0}")]
    Inflate(#[from] flate2::DecompressError),

    /// Compressed stream ended before its end-of-stream marker
    #[error("compressed stream is truncated")]
    TruncatedStream,

    /// Bytes follow the end of the compressed stream
    #[error("{extra} unexpected bytes after the compressed stream")]
    TrailingInput { extra: usize },

    #[error("packed payload larger than {max} bytes")]
    PayloadTooLarge { max: usize },

    /// Set bits remain after the last word was read
    #[error("unexpected data after bit {position}")]
    TrailingBits { position: usize },

    /// Field read past the end of the packed stream
    #[error("packed stream exhausted: {0}")]
    Stream(#[from] BitIoError),

    #[error("invalid move ordinal: {0}")]
    InvalidMove(u8),
}

/// Textual move/word parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown move {0:?}, expected one of N, NE, E, SE, S, SW, W, NW")]
    UnknownMove(String),

    #[error("invalid word {0:?}, expected ROW,COL:MOVE,MOVE,...")]
    MalformedWord(String),

    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
