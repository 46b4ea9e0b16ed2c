//! Repeating-key XOR over Unicode scalar values.
//!
//! This is obfuscation, not encryption: the key repeats and XOR leaks
//! everything to anyone with a known plaintext.

use crate::error::{CipherError, Result};

/// XOR each character of `data` with the key character at the same position
/// modulo the key length.
///
/// Applying the same key twice restores the input.
///
/// # Errors
/// - `CipherError::EmptyKey` if `key` is empty
/// - `CipherError::Unrepresentable` if a result falls outside the valid `char`
///   range. Data made of `'0'`/`'1'` never triggers this.
pub fn apply(data: &str, key: &str) -> Result<String> {
    let key: Vec<u32> = key.chars().map(u32::from).collect();
    if key.is_empty() {
        return Err(CipherError::EmptyKey.into());
    }

    let mut out = String::with_capacity(data.len());
    for (position, ch) in data.chars().enumerate() {
        let value = u32::from(ch) ^ key[position % key.len()];
        let mixed = char::from_u32(value).ok_or(CipherError::Unrepresentable { position, value })?;
        out.push(mixed);
    }
    Ok(out)
}

/// Validate a key without transforming anything.
pub fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        Err(CipherError::EmptyKey.into())
    } else {
        Ok(())
    }
}
