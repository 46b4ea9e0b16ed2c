//! Error types for the huffxor codec.
//!
//! All operations return structured errors rather than panicking. The only
//! local recovery in the crate is frequency-table parsing, which skips bad
//! lines; every other failure propagates to the caller as-is.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: tree construction or code lookup
/// - Payload: bit-string decoding or payload record parsing
/// - Cipher: key problems in the XOR layer
/// - Table: frequency-table records with nothing usable in them
/// - I/O: file system operations performed by callers
#[derive(Debug, Error)]
pub enum Error {
    /// Nothing to encode
    #[error("source text is empty: nothing to encode")]
    EmptySource,

    /// Tree construction or code lookup failed
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Encoded payload is malformed
    #[error("malformed payload: {0}")]
    Payload(#[from] PayloadError),

    /// Cipher key problem
    #[error("invalid key: {0}")]
    Cipher(#[from] CipherError),

    /// Frequency table record could not be recovered
    #[error("frequency table error: {0}")]
    Table(#[from] TableError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Huffman tree and code table errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: cannot build a tree")]
    EmptyFrequencyTable,

    /// Combined weight does not fit in a u64
    #[error("frequency total overflows u64")]
    WeightOverflow,

    /// A source character has no code in the table
    #[error("no code for character {symbol:?} at position {position}")]
    MissingCode { symbol: char, position: usize },
}

/// Payload decoding errors.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Bit-string contains something other than '0' or '1'
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    /// Input ran out while the walk was inside the tree
    #[error("payload truncated: input ended mid-code after {position} bits")]
    Truncated { position: usize },

    /// The walk tried to follow a branch the tree does not have
    #[error("no branch for bit at position {position}")]
    NoSuchBranch { position: usize },

    /// Payload record has no header line
    #[error("missing ENCRYPTED/PLAIN header")]
    MissingHeader,

    /// Payload record header is not one of the known markers
    #[error("unknown header {0:?}")]
    UnknownHeader(String),

    /// Decoded text length disagrees with the frequency table total
    #[error("length mismatch: table records {expected} characters, payload decoded to {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// Body would contain a line break that the reader cannot recover
    #[error("payload body contains a line break at position {position}")]
    LineBreakInBody { position: usize },
}

/// XOR cipher errors.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Key has no characters
    #[error("cipher key is empty")]
    EmptyKey,

    /// Payload is marked encrypted but no key was supplied
    #[error("payload is encrypted but no key was supplied")]
    MissingKey,

    /// XOR result is not a Unicode scalar value
    #[error("xor result at position {position} is not a valid character ({value:#x})")]
    Unrepresentable { position: usize, value: u32 },
}

/// Frequency table record errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// Every line was blank, malformed, or zero-count
    #[error("no valid entries recovered ({skipped} lines skipped)")]
    NoValidEntries { skipped: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
