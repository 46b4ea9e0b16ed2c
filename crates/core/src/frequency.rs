//! Character frequency counting.
//!
//! A [`FrequencyTable`] is the only artifact needed to rebuild the encoding
//! tree, so it is persisted next to the payload and reloaded verbatim at decode
//! time. Counts are always strictly positive; a character that does not occur
//! is simply absent.

use std::collections::HashMap;

/// Occurrence count per character.
///
/// # Invariants
/// - Every stored count is > 0
/// - Iteration order carries no meaning; use [`FrequencyTable::sorted_entries`]
///   where a stable order is needed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Tally every character of `text`.
    ///
    /// Empty input yields an empty table; callers that need a tree must
    /// reject it before building one.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for ch in text.chars() {
            *table.counts.entry(ch).or_insert(0) += 1;
        }
        table
    }

    /// Set the count for `symbol`, returning the previous count.
    ///
    /// A zero count removes the symbol.
    pub fn insert(&mut self, symbol: char, count: u64) -> Option<u64> {
        if count == 0 {
            self.counts.remove(&symbol)
        } else {
            self.counts.insert(symbol, count)
        }
    }

    /// Count for `symbol`, if present.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the source text in characters.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(symbol, count)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }

    /// All entries sorted by symbol.
    pub fn sorted_entries(&self) -> Vec<(char, u64)> {
        let mut entries: Vec<(char, u64)> = self.iter().collect();
        entries.sort_unstable_by_key(|&(ch, _)| ch);
        entries
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.insert(symbol, count);
        }
        table
    }
}

/// Rebuild text from lines read one at a time from storage.
///
/// A single `'\n'` goes between consecutive lines and no newline follows the
/// last one, so a stored text that ended with a newline comes back without it.
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(line.as_ref());
    }
    text
}
