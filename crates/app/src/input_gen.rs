//! Sample text generation for trying the codec.
//!
//! When no source file is at hand, `huffxor sample` writes one with
//! interesting frequency characteristics.
//!
//! # Design
//!
//! Generated text has:
//! - Prose-like runs drawn from a small word list (skewed frequencies)
//! - Repeated phrases (few distinct symbols, long runs)
//! - Runs of a single character (degenerate-ish stretches)
//! - Sprinkled non-ASCII characters and punctuation (rare symbols)
//!
//! Lines break every few dozen characters so newline handling is exercised.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;

const WORDS: &[&str] = &[
    "the", "of", "and", "a", "to", "in", "is", "tree", "code", "leaf", "bit", "node", "weight",
    "frequency", "prefix", "huffman", "decode", "encode", "key", "table",
];

const RARE: &[char] = &['é', 'ß', 'λ', '→', '✓', '—', 'ø', '¿', '"', ';', ':', '\t'];

/// Generate sample text of exactly `size_chars` characters.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_chars`: length of the generated text in characters
pub fn generate_sample_text(seed: u64, size_chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut chars: Vec<char> = Vec::with_capacity(size_chars);

    while chars.len() < size_chars {
        let segment_len = rng.gen_range(40..=400);

        // Choose segment type randomly
        let segment_type: u8 = rng.gen_range(0..10);
        let segment: String = match segment_type {
            // 50% prose-like
            0..=4 => generate_prose(&mut rng, segment_len),

            // 20% repeated phrase
            5..=6 => {
                let phrase_len = rng.gen_range(8..=24);
                let phrase = generate_prose(&mut rng, phrase_len);
                phrase.chars().cycle().take(segment_len).collect()
            }

            // 10% single-character run
            7 => {
                let ch = WORDS[rng.gen_range(0..WORDS.len())]
                    .chars()
                    .next()
                    .unwrap_or('x');
                std::iter::repeat(ch).take(segment_len).collect()
            }

            // 20% prose with rare characters mixed in
            _ => generate_prose(&mut rng, segment_len)
                .chars()
                .map(|c| {
                    if c != '\n' && rng.gen_bool(0.1) {
                        RARE[rng.gen_range(0..RARE.len())]
                    } else {
                        c
                    }
                })
                .collect(),
        };

        chars.extend(segment.chars());
        chars.push('\n');
    }

    // Truncate to exact size
    chars.truncate(size_chars);
    chars.into_iter().collect()
}

/// Words separated by spaces with a line break roughly every 60 characters.
fn generate_prose(rng: &mut ChaCha8Rng, len: usize) -> String {
    let mut out = String::with_capacity(len + 16);
    let mut line_len = 0;
    while out.chars().count() < len {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        out.push_str(word);
        line_len += word.len();
        if line_len > 60 {
            out.push('\n');
            line_len = 0;
        } else {
            out.push(if rng.gen_bool(0.1) { ',' } else { ' ' });
            line_len += 1;
        }
    }
    out.chars().take(len).collect()
}

/// Write generated text to a file.
pub fn write_sample_file(path: &Path, seed: u64, size_chars: usize) -> std::io::Result<()> {
    std::fs::write(path, generate_sample_text(seed, size_chars))
}
