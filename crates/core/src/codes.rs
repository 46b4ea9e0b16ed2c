//! Code table generation.
//!
//! Walks a [`HuffmanTree`] and records, for each leaf, the root-to-leaf path
//! as a string of `'0'` (left) and `'1'` (right). Codes are prefix-free by
//! construction since only leaves carry symbols.

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};
use std::collections::HashMap;

/// Code assigned to the root when the tree is a single leaf.
pub const SINGLE_LEAF_CODE: &str = "0";

/// Mapping from symbol to its bit-string code.
///
/// # Invariants
/// - Every code is non-empty and contains only `'0'` and `'1'`
/// - No code is a prefix of another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, String>,
}

impl CodeTable {
    /// Generate codes for every leaf of `tree`.
    ///
    /// A single-leaf tree has no branching to derive a path from; its symbol
    /// gets [`SINGLE_LEAF_CODE`].
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();

        if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
            codes.insert(*symbol, SINGLE_LEAF_CODE.to_string());
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((right.as_ref(), right_path));
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        log::debug!("generated {} codes", codes.len());
        Self { codes }
    }

    /// Code for `symbol`, if it has one.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&ch, code)| (ch, code.as_str()))
    }

    /// Entries sorted by code length, then code, for display.
    pub fn sorted_entries(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<(char, &str)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.1.len().cmp(&b.1.len()).then(a.1.cmp(b.1)));
        entries
    }

    /// Check that no code is a prefix of a different code.
    ///
    /// After sorting, a code that prefixes others sorts immediately before
    /// the first of them, so adjacent pairs are enough.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Number of bits an encoding of text with these frequencies will take.
    ///
    /// Symbols without a code are ignored.
    pub fn encoded_len(&self, table: &FrequencyTable) -> u64 {
        table
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum()
    }
}
