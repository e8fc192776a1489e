//! Size metrics for a single token encode.
//!
//! Each encode reports how many bits the board layout used and what every
//! later stage (byte serialization, compression, base64) did to the size.
//! Small boards usually grow under zlib because of its fixed header and
//! checksum; the ratio makes that visible.

/// Sizes observed at each stage of one encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenMetrics {
    /// Width of all fields written, including high zero fields
    pub packed_bits: usize,

    /// Length of the minimal big-endian packed bytes
    pub packed_bytes: usize,

    /// Length of the zlib stream
    pub compressed_bytes: usize,

    /// Length of the final token text
    pub token_chars: usize,
}

impl TokenMetrics {
    /// Compute compression ratio (compressed / packed).
    ///
    /// Returns 0.0 if the packed payload is empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.packed_bytes == 0 {
            0.0
        } else {
            self.compressed_bytes as f64 / self.packed_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Token Metrics ===");
        println!("Packed:     {} bits ({} bytes)", self.packed_bits, self.packed_bytes);
        println!(
            "Compressed: {} bytes ({:.1}% of packed)",
            self.compressed_bytes,
            self.compression_ratio() * 100.0
        );
        println!("Token:      {} chars", self.token_chars);
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "packed_bits={}\n\
             packed_bytes={}\n\
             compressed_bytes={}\n\
             token_chars={}\n\
             compression_ratio={:.4}\n",
            self.packed_bits,
            self.packed_bytes,
            self.compressed_bytes,
            self.token_chars,
            self.compression_ratio(),
        )
    }
}
