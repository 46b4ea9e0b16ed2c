//! Metrics collection and reporting for codec runs.
//!
//! Tracks what a single encode or decode run did:
//! - Source and output sizes in characters
//! - Distinct symbols and encoded bit count
//! - Table lines skipped while parsing
//! - Timing information
//!
//! # Thread Safety
//!
//! `CodecMetrics` is a plain value updated by the caller at each stage; it is
//! not shared between runs.

use std::time::{Duration, Instant};

/// Bits per character of the stored text before encoding.
///
/// Ratios are reported against UTF-16 code units, 16 bits per character.
pub const RAW_BITS_PER_CHAR: u64 = 16;

/// Metrics for one codec run.
#[derive(Debug, Clone)]
pub struct CodecMetrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Text ===
    /// Characters of source text (encode) or table total (decode)
    pub source_chars: u64,

    /// Characters produced by decoding
    pub decoded_chars: u64,

    /// Distinct symbols in the frequency table
    pub distinct_symbols: u64,

    // === Encoding ===
    /// Length of the bit-string
    pub encoded_bits: u64,

    /// Longest code in the table
    pub max_code_len: u64,

    /// Whether the body went through the cipher
    pub encrypted: bool,

    // === Table ===
    /// Frequency-table lines skipped during parsing
    pub skipped_table_lines: u64,
}

impl CodecMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            source_chars: 0,
            decoded_chars: 0,
            distinct_symbols: 0,
            encoded_bits: 0,
            max_code_len: 0,
            encrypted: false,
            skipped_table_lines: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Average code length in bits.
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.source_chars == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.source_chars as f64
        }
    }

    /// Encoded bits over raw bits ([`RAW_BITS_PER_CHAR`] per character).
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn compression_ratio(&self) -> f64 {
        if self.source_chars == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / (self.source_chars * RAW_BITS_PER_CHAR) as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Codec Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Text ===");
        println!("Source chars: {}", self.source_chars);
        if self.decoded_chars > 0 {
            println!("Decoded chars: {}", self.decoded_chars);
            if self.decoded_chars == self.source_chars {
                println!("Verification: PASSED ✓");
            } else {
                println!("Verification: FAILED ✗ (length mismatch)");
            }
        }
        println!("Distinct symbols: {}", self.distinct_symbols);
        println!();

        println!("=== Encoding ===");
        println!("Encoded bits: {}", self.encoded_bits);
        println!("Longest code: {} bits", self.max_code_len);
        println!("Bits/symbol: {:.3}", self.bits_per_symbol());
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!("Encrypted: {}", if self.encrypted { "yes" } else { "no" });
        if self.skipped_table_lines > 0 {
            println!("Skipped table lines: {}", self.skipped_table_lines);
        }
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             source_chars={}\n\
             decoded_chars={}\n\
             distinct_symbols={}\n\
             encoded_bits={}\n\
             max_code_len={}\n\
             bits_per_symbol={:.4}\n\
             compression_ratio={:.4}\n\
             encrypted={}\n\
             skipped_table_lines={}\n",
            self.duration().as_millis(),
            self.source_chars,
            self.decoded_chars,
            self.distinct_symbols,
            self.encoded_bits,
            self.max_code_len,
            self.bits_per_symbol(),
            self.compression_ratio(),
            self.encrypted,
            self.skipped_table_lines,
        )
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}
