//! Bit-level I/O for packing fixed-width fields into one value.
//!
//! `BitWriter` and `BitReader` treat the stream as a single unsigned integer
//! built LSB-first: the first field written occupies the least-significant
//! bits, the next field sits directly above it, and so on. Internally the
//! value lives in a little-endian byte buffer with a bit cursor, so there is no
//! width limit beyond memory.
//!
//! # Serialization
//! - `BitWriter::finish` emits the minimal big-endian bytes of the value (no
//!   leading zero bytes). A value of zero serializes to an empty vector.
//! - `BitReader::from_be_bytes` is the inverse. Bits above the highest stored
//!   byte read as zero, because the minimal form drops them, up to the
//!   reader's bit limit.
//!
//! # Example
//! ```
//! use wordgrid_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! // value = 0b11_101
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b0001_1101]);
//!
//! let mut reader = BitReader::from_be_bytes(&bytes, 5);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(2).unwrap(), 0b11);
//! ```

use crate::error::BitIoError;

/// Widest field a single call can move.
pub const MAX_FIELD_BITS: usize = 64;

/// Writes fields LSB-first into a growable buffer.
///
/// # Invariants
/// - `bytes.len() == bit_len.div_ceil(8)`
/// - bits at positions `>= bit_len` are zero
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Little-endian bytes of the accumulated value
    bytes: Vec<u8>,
    /// Bit cursor: total width of all fields written so far
    bit_len: usize,
}

impl BitWriter {
    /// Create a new BitWriter holding the value zero.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    /// Append `value` as a field of `count` bits above everything written so
    /// far.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if count > 64
    /// - `BitIoError::ValueTooWide` if `value` has bits set at or above `count`
    pub fn write_bits(&mut self, value: u64, count: usize) -> Result<(), BitIoError> {
        if count > MAX_FIELD_BITS {
            return Err(BitIoError::InvalidBitCount(count));
        }
        if count < MAX_FIELD_BITS && value >> count != 0 {
            return Err(BitIoError::ValueTooWide {
                value,
                width: count,
            });
        }

        let mut remaining = count;
        let mut val = value;

        while remaining > 0 {
            let byte_idx = self.bit_len / 8;
            let bit_offset = self.bit_len % 8;
            if byte_idx == self.bytes.len() {
                self.bytes.push(0);
            }

            // Fill the free high bits of the current byte
            let bits_to_write = remaining.min(8 - bit_offset);
            let mask = (1u16 << bits_to_write) - 1;
            let bits = (val & mask as u64) as u8;
            self.bytes[byte_idx] |= bits << bit_offset;

            val >>= bits_to_write;
            self.bit_len += bits_to_write;
            remaining -= bits_to_write;
        }

        Ok(())
    }

    /// Total width of all fields written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Position of the highest set bit plus one (0 for an all-zero stream).
    pub fn significant_bits(&self) -> usize {
        match self.bytes.iter().rposition(|&b| b != 0) {
            Some(idx) => idx * 8 + (8 - self.bytes[idx].leading_zeros() as usize),
            None => 0,
        }
    }

    /// Finish writing and return the minimal big-endian bytes of the value.
    ///
    /// High zero bytes are dropped, so trailing zero fields and an all-zero
    /// stream cost nothing. This consumes the writer.
    pub fn finish(mut self) -> Vec<u8> {
        let significant = self.significant_bits().div_ceil(8);
        self.bytes.truncate(significant);
        self.bytes.reverse();
        self.bytes
    }
}

/// Reads fields LSB-first from a packed value.
///
/// The reader owns a little-endian copy of the value. Positions beyond the
/// stored bytes read as zero until `limit` bits have been consumed.
///
/// # Invariants
/// - `position <= limit`
#[derive(Debug, Clone)]
pub struct BitReader {
    /// Little-endian bytes of the packed value
    bytes: Vec<u8>,
    /// Bits consumed so far
    position: usize,
    /// Total bits that may be read
    limit: usize,
}

impl BitReader {
    /// Build a reader over the big-endian bytes produced by
    /// [`BitWriter::finish`], allowing at most `limit` bits to be read.
    pub fn from_be_bytes(bytes: &[u8], limit: usize) -> Self {
        let mut le = bytes.to_vec();
        le.reverse();
        Self {
            bytes: le,
            position: 0,
            limit,
        }
    }

    /// Read the next `count` bits as an unsigned value.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if count > 64
    /// - `BitIoError::InsufficientBits` if fewer than `count` bits remain
    ///   before the limit
    pub fn read_bits(&mut self, count: usize) -> Result<u64, BitIoError> {
        if count > MAX_FIELD_BITS {
            return Err(BitIoError::InvalidBitCount(count));
        }

        let available = self.bits_remaining();
        if count > available {
            return Err(BitIoError::InsufficientBits {
                requested: count,
                available,
            });
        }

        let mut result = 0u64;
        let mut filled = 0;

        while filled < count {
            let byte_idx = self.position / 8;
            let bit_offset = self.position % 8;

            let bits_to_read = (count - filled).min(8 - bit_offset);
            let byte = self.bytes.get(byte_idx).copied().unwrap_or(0);
            let mask = ((1u16 << bits_to_read) - 1) as u8;
            let bits = (byte >> bit_offset) & mask;

            result |= (bits as u64) << filled;

            self.position += bits_to_read;
            filled += bits_to_read;
        }

        Ok(result)
    }

    /// Number of bits that may still be read.
    pub fn bits_remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True if no set bit remains at or above the current position,
    /// including bits stored beyond the limit.
    pub fn remaining_is_zero(&self) -> bool {
        let byte_idx = self.position / 8;
        let bit_offset = self.position % 8;

        match self.bytes.get(byte_idx) {
            None => true,
            Some(&partial) => {
                partial >> bit_offset == 0 && self.bytes[byte_idx + 1..].iter().all(|&b| b == 0)
            }
        }
    }
}
