//! Huffman tree construction.
//!
//! The tree is rebuilt from a persisted [`FrequencyTable`] at decode time, so
//! construction must be a pure function of table *content*, independent of
//! the table's hash iteration order.
//!
//! # Tie-breaking
//!
//! Nodes are kept in a min-heap keyed by `(weight, seq)`:
//! - leaves are seeded in ascending `char` order with `seq = 0..k`
//! - every merged node takes the next free `seq`
//!
//! Equal weights therefore come out oldest-first. The first node extracted
//! becomes the left child, the second the right child.
//!
//! # Traversal
//!
//! Every walk over the tree uses an explicit stack. Pathological
//! (Fibonacci-like) frequency tables produce trees whose depth approaches the
//! number of distinct symbols.

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of the Huffman tree.
///
/// Internal nodes exclusively own both children; leaves carry the symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Frequency of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Child reached by `bit` (`false` = left, `true` = right).
    ///
    /// Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => {
                Some(if bit { right.as_ref() } else { left.as_ref() })
            }
        }
    }

    fn merge(left: HuffmanNode, right: HuffmanNode) -> Result<HuffmanNode> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(HuffmanError::WeightOverflow)?;
        Ok(HuffmanNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest `(weight, seq)`.
#[derive(Debug)]
struct QueuedNode {
    weight: u64,
    seq: u64,
    node: HuffmanNode,
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueuedNode {}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A complete Huffman tree with exactly one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree for a frequency table.
    ///
    /// # Errors
    /// - `HuffmanError::EmptyFrequencyTable` if the table has no entries
    /// - `HuffmanError::WeightOverflow` if the counts sum past `u64::MAX`
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffmanError::EmptyFrequencyTable.into());
        }

        let mut heap = BinaryHeap::with_capacity(table.len());
        let mut next_seq = 0u64;
        for (symbol, weight) in table.sorted_entries() {
            heap.push(QueuedNode {
                weight,
                seq: next_seq,
                node: HuffmanNode::Leaf { symbol, weight },
            });
            next_seq += 1;
        }

        while heap.len() > 1 {
            let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
                break;
            };
            let node = HuffmanNode::merge(first.node, second.node)?;
            heap.push(QueuedNode {
                weight: node.weight(),
                seq: next_seq,
                node,
            });
            next_seq += 1;
        }

        let root = heap
            .pop()
            .map(|queued| queued.node)
            .ok_or(HuffmanError::EmptyFrequencyTable)?;

        log::debug!(
            "built huffman tree: {} symbols, total weight {}",
            table.len(),
            root.weight()
        );

        Ok(Self { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Root frequency, equal to the source length in characters.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Sum of all leaf weights.
    pub fn leaf_weight_sum(&self) -> u64 {
        self.leaves().map(HuffmanNode::weight).sum()
    }

    /// Length of the longest root-to-leaf path. A single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => max_depth = max_depth.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        max_depth
    }

    /// Iterate over leaves in left-to-right order.
    pub fn leaves(&self) -> impl Iterator<Item = &HuffmanNode> + '_ {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match node {
                    HuffmanNode::Leaf { .. } => return Some(node),
                    HuffmanNode::Internal { left, right, .. } => {
                        stack.push(right.as_ref());
                        stack.push(left.as_ref());
                    }
                }
            }
            None
        })
    }

    /// Indented dump of the tree, one node per line, left subtree first.
    ///
    /// ```text
    /// internal (6)
    ///   internal (2)
    ///     leaf '\n' (1)
    ///     leaf 'c' (1)
    ///   ...
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            let indent = "  ".repeat(depth);
            let line = match node {
                HuffmanNode::Leaf { symbol, weight } => {
                    format!("{indent}leaf {symbol:?} ({weight})\n")
                }
                HuffmanNode::Internal {
                    weight,
                    left,
                    right,
                } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                    format!("{indent}internal ({weight})\n")
                }
            };
            out.push_str(&line);
        }
        out
    }
}
