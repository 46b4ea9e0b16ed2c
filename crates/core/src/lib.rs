//! huffxor-core: Huffman text codec with a repeating-key XOR layer
//!
//! This library provides the core components for a small text codec that:
//! - Counts character frequencies and builds a Huffman tree from them
//! - Encodes text into a string of '0'/'1' characters and decodes it back
//! - Optionally obfuscates the bit-string with a repeating-key XOR
//! - Persists the frequency table so the decoder can rebuild the same tree
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `frequency`: Character counting
//! - `tree`: Deterministic Huffman tree construction
//! - `codes`: Code table generation
//! - `bitstream`: Bit-string encode/decode
//! - `cipher`: Repeating-key XOR
//! - `table_codec`: Frequency table record format
//! - `payload`: Encoded payload record format
//! - `pipeline`: End-to-end encode/decode over both records
//! - `metrics`: Observable run statistics
//!
//! # Example
//! ```
//! use huffxor_core::pipeline::{decode_record, encode_text};
//!
//! let encoded = encode_text("ab\ncab", Some("k3y")).unwrap();
//! let table = encoded.table_record();
//! let payload = encoded.payload_record().unwrap();
//!
//! let decoded = decode_record(&payload, &table, Some("k3y")).unwrap();
//! assert_eq!(decoded.text, "ab\ncab");
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: The same frequency table always yields the same tree
//! - **Pure**: No I/O; callers own files and handles

pub mod bitstream;
pub mod cipher;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod metrics;
pub mod payload;
pub mod pipeline;
pub mod table_codec;
pub mod tree;

// Re-export commonly used types
pub use codes::CodeTable;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use payload::{PayloadMode, PayloadRecord};
pub use tree::{HuffmanNode, HuffmanTree};
