//! Bit-string encode/decode.
//!
//! The encoded payload is a `String` of `'0'` and `'1'` characters: the
//! concatenation of every source character's code, with no separators.
//! Decoding relies entirely on prefix-freedom to find symbol boundaries.
//!
//! Decoding is strict: any character other than `'0'` or `'1'` is rejected
//! instead of being read as a right turn.

use crate::codes::CodeTable;
use crate::error::{Error, HuffmanError, PayloadError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Encode `text` with `codes`.
///
/// # Errors
/// - `Error::EmptySource` if `text` is empty
/// - `HuffmanError::MissingCode` if a character has no code (the code table
///   came from a different text)
pub fn encode(text: &str, codes: &CodeTable) -> Result<String> {
    if text.is_empty() {
        return Err(Error::EmptySource);
    }

    let mut bits = String::with_capacity(text.len() * 4);
    for (position, symbol) in text.chars().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or(HuffmanError::MissingCode { symbol, position })?;
        bits.push_str(code);
    }
    Ok(bits)
}

/// Decode a bit-string by walking `tree` one bit at a time.
///
/// An empty bit-string decodes to an empty string.
///
/// # Errors
/// - `PayloadError::InvalidBit` on a character other than `'0'`/`'1'`
/// - `PayloadError::NoSuchBranch` if a bit leads nowhere (only possible with
///   a single-leaf tree, whose one code is `"0"`)
/// - `PayloadError::Truncated` if input ends in the middle of a code
pub fn decode(bits: &str, tree: &HuffmanTree) -> Result<String> {
    let root = tree.root();
    let mut text = String::new();

    if let HuffmanNode::Leaf { symbol, .. } = root {
        for (position, bit) in bits.chars().enumerate() {
            match bit {
                '0' => text.push(*symbol),
                '1' => return Err(PayloadError::NoSuchBranch { position }.into()),
                found => return Err(PayloadError::InvalidBit { position, found }.into()),
            }
        }
        return Ok(text);
    }

    let mut current = root;
    let mut consumed = 0;
    for (position, bit) in bits.chars().enumerate() {
        let go_right = match bit {
            '0' => false,
            '1' => true,
            found => return Err(PayloadError::InvalidBit { position, found }.into()),
        };
        current = current
            .child(go_right)
            .ok_or(PayloadError::NoSuchBranch { position })?;

        if let HuffmanNode::Leaf { symbol, .. } = current {
            text.push(*symbol);
            current = root;
        }
        consumed = position + 1;
    }

    if !std::ptr::eq(current, root) {
        return Err(PayloadError::Truncated { position: consumed }.into());
    }

    Ok(text)
}
