//! Board token serialization and parsing.
//!
//! A token packages a board's seed and word paths as short URL-safe text:
//! - Fields are bit-packed LSB-first into one value (see [`crate::bitio`])
//! - The value is serialized as minimal big-endian bytes
//! - The bytes are zlib-compressed and base64-encoded with the URL-safe
//!   alphabet
//!
//! # Field Layout
//!
//! ```text
//! bit 0 ->
//! +-------------------+
//! | seed (63)         |
//! +-------------------+
//! | word_count (8)    |  0..=255
//! +-------------------+
//! | per word:         |
//! |   start_row (3)   |
//! |   start_col (3)   |
//! |   move_count (4)  |  0..=15
//! |   moves (3 each)  |  0=N 1=NE 2=E 3=SE 4=S 5=SW 6=W 7=NW
//! +-------------------+
//! ```
//!
//! There is no framing or version field: decode reads the exact sequence of
//! widths encode wrote. Tokens are emitted without `=` padding; padded tokens
//! are accepted on decode.

use std::io::Write;

use base64::alphabet;
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose};
use base64::Engine;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use tracing::{debug, trace};

use crate::bitio::{BitReader, BitWriter};
use crate::board::{Board, Move, Word, MAX_SEED, SEED_BITS};
use crate::error::{DecodeError, EncodeError, Result};
use crate::metrics::TokenMetrics;

/// Bits holding the number of words
pub const WORD_COUNT_BITS: usize = 8;

/// Bits holding each start coordinate
pub const START_BITS: usize = 3;

/// Bits holding a word's move count
pub const MOVE_COUNT_BITS: usize = 4;

/// Bits holding one move ordinal
pub const MOVE_BITS: usize = 3;

pub const MAX_WORDS: usize = (1 << WORD_COUNT_BITS) - 1;
pub const MAX_MOVES: usize = (1 << MOVE_COUNT_BITS) - 1;
pub const MAX_START: u8 = (1 << START_BITS) - 1;

/// Packed size of the largest encodable board.
pub const MAX_PACKED_BITS: usize = SEED_BITS
    + WORD_COUNT_BITS
    + MAX_WORDS * (2 * START_BITS + MOVE_COUNT_BITS + MAX_MOVES * MOVE_BITS);

/// Largest packed payload a valid token can inflate to.
pub const MAX_PACKED_BYTES: usize = MAX_PACKED_BITS.div_ceil(8);

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode a board into a URL-safe token.
///
/// # Errors
/// Returns an `EncodeError` if any field exceeds its width (seed, word count,
/// move count, start coordinates). No partial token is produced.
pub fn encode(board: &Board) -> Result<String> {
    encode_with_metrics(board).map(|(token, _)| token)
}

/// Encode a board and report the size at each stage.
pub fn encode_with_metrics(board: &Board) -> Result<(String, TokenMetrics)> {
    let bits = pack_fields(board)?;
    let packed_bits = bits.bit_len();
    let packed = bits.finish();

    let compressed = compress(&packed)?;
    let token = TOKEN_ENGINE.encode(&compressed);

    debug!(
        seed = board.seed(),
        words = board.words().len(),
        packed_bytes = packed.len(),
        compressed_bytes = compressed.len(),
        token_chars = token.len(),
        "encoded board token"
    );

    let metrics = TokenMetrics {
        packed_bits,
        packed_bytes: packed.len(),
        compressed_bytes: compressed.len(),
        token_chars: token.len(),
    };

    Ok((token, metrics))
}

/// Decode a token back into a board.
///
/// Surrounding whitespace is ignored; padding is optional.
///
/// # Errors
/// - `DecodeError::Base64` if the text is not URL-safe base64
/// - `DecodeError::Inflate`, `TruncatedStream` or `TrailingInput` if the bytes
///   are not exactly one valid zlib stream
/// - `DecodeError::PayloadTooLarge` or `TrailingBits` if the packed payload
///   holds more than one board
pub fn decode(token: &str) -> Result<Board> {
    let compressed = TOKEN_ENGINE
        .decode(token.trim())
        .map_err(DecodeError::from)?;
    let packed = decompress(&compressed)?;
    let board = unpack(&packed)?;

    debug!(
        seed = board.seed(),
        words = board.words().len(),
        packed_bytes = packed.len(),
        "decoded board token"
    );

    Ok(board)
}

/// Bit-pack a board into minimal big-endian bytes, without compression.
///
/// A board with seed 0 and no words packs to zero bytes.
pub fn pack(board: &Board) -> Result<Vec<u8>> {
    Ok(pack_fields(board)?.finish())
}

/// Parse the bytes produced by [`pack`].
///
/// An empty slice is the packed value zero: seed 0 and no words.
pub fn unpack(bytes: &[u8]) -> Result<Board> {
    if bytes.len() > MAX_PACKED_BYTES {
        return Err(DecodeError::PayloadTooLarge {
            max: MAX_PACKED_BYTES,
        }
        .into());
    }

    let mut bits = BitReader::from_be_bytes(bytes, MAX_PACKED_BITS);

    let seed = read_field(&mut bits, SEED_BITS)?;
    let word_count = read_field(&mut bits, WORD_COUNT_BITS)? as usize;

    let mut words = Vec::with_capacity(word_count);
    for index in 0..word_count {
        let start_row = read_field(&mut bits, START_BITS)? as u8;
        let start_col = read_field(&mut bits, START_BITS)? as u8;
        let move_count = read_field(&mut bits, MOVE_COUNT_BITS)? as usize;

        let moves = (0..move_count)
            .map(|_| {
                let ordinal = read_field(&mut bits, MOVE_BITS)? as u8;
                Move::from_ordinal(ordinal).ok_or(DecodeError::InvalidMove(ordinal))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        trace!(index, start_row, start_col, move_count, "unpacked word");
        words.push(Word::new(start_row, start_col, moves));
    }

    if !bits.remaining_is_zero() {
        return Err(DecodeError::TrailingBits {
            position: bits.position(),
        }
        .into());
    }

    Ok(Board::from_parts(seed, words))
}

impl Board {
    /// Shorthand for [`encode`].
    pub fn to_token(&self) -> Result<String> {
        encode(self)
    }

    /// Shorthand for [`decode`].
    pub fn from_token(token: &str) -> Result<Board> {
        decode(token)
    }
}

fn pack_fields(board: &Board) -> Result<BitWriter> {
    check_widths(board)?;

    let mut bits = BitWriter::new();
    bits.write_bits(board.seed(), SEED_BITS)?;
    bits.write_bits(board.words().len() as u64, WORD_COUNT_BITS)?;

    for word in board.words() {
        bits.write_bits(word.start_row as u64, START_BITS)?;
        bits.write_bits(word.start_col as u64, START_BITS)?;
        bits.write_bits(word.moves.len() as u64, MOVE_COUNT_BITS)?;

        for m in &word.moves {
            bits.write_bits(m.ordinal() as u64, MOVE_BITS)?;
        }
    }

    Ok(bits)
}

/// Reject any field that would not fit its width.
fn check_widths(board: &Board) -> std::result::Result<(), EncodeError> {
    if board.seed() > MAX_SEED {
        return Err(EncodeError::SeedOutOfRange {
            seed: board.seed(),
            bits: SEED_BITS,
        });
    }

    if board.words().len() > MAX_WORDS {
        return Err(EncodeError::TooManyWords {
            count: board.words().len(),
            max: MAX_WORDS,
        });
    }

    for (index, word) in board.words().iter().enumerate() {
        if word.start_row > MAX_START || word.start_col > MAX_START {
            return Err(EncodeError::StartOutOfRange {
                index,
                row: word.start_row,
                col: word.start_col,
                max: MAX_START,
            });
        }
        if word.moves.len() > MAX_MOVES {
            return Err(EncodeError::TooManyMoves {
                index,
                count: word.moves.len(),
                max: MAX_MOVES,
            });
        }
    }

    Ok(())
}

fn read_field(bits: &mut BitReader, width: usize) -> std::result::Result<u64, DecodeError> {
    Ok(bits.read_bits(width)?)
}

fn compress(bytes: &[u8]) -> std::result::Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Inflate exactly one zlib stream of at most `MAX_PACKED_BYTES`.
fn decompress(bytes: &[u8]) -> std::result::Result<Vec<u8>, DecodeError> {
    let mut inflater = Decompress::new(true);
    // One spare byte distinguishes "exactly full" from "too large"
    let mut out = Vec::with_capacity(MAX_PACKED_BYTES + 1);

    let status = inflater.decompress_vec(bytes, &mut out, FlushDecompress::Finish)?;
    if out.len() > MAX_PACKED_BYTES {
        return Err(DecodeError::PayloadTooLarge {
            max: MAX_PACKED_BYTES,
        });
    }
    if status != Status::StreamEnd {
        return Err(DecodeError::TruncatedStream);
    }

    let consumed = inflater.total_in() as usize;
    if consumed < bytes.len() {
        return Err(DecodeError::TrailingInput {
            extra: bytes.len() - consumed,
        });
    }

    Ok(out)
}
