use std::collections::BTreeMap;

use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::node::{Node, Symbol};
use crate::queue::MinPriorityQueue;

if_tracing! {
    use tracing::debug;
}

/// Occurrence count per distinct symbol.
///
/// Ordered so that leaves are always seeded in ascending symbol order.
pub type FrequencyTable<S> = BTreeMap<S, usize>;

pub fn count_frequencies<S: Symbol>(symbols: &[S]) -> FrequencyTable<S> {
    symbols.iter().copied().fold(FrequencyTable::new(), |mut acc, symbol| {
        *acc.entry(symbol).or_insert(0) += 1;
        acc
    })
}

/// Runs the merge loop and hands back the single remaining node, or `None` for an empty
/// table.
///
/// Every pop pair becomes `(left, right)` of a new parent in pop order. A table with a
/// single symbol returns that leaf untouched. `pop_min` only fails on a drained queue, so
/// a failed first pop means nothing was seeded and a failed second pop means `left` is
/// the root.
pub(crate) fn build_root<S: Symbol>(frequencies: &FrequencyTable<S>) -> Option<Node<S>> {
    let mut queue = MinPriorityQueue::with_capacity(frequencies.len());
    for (&symbol, &weight) in frequencies {
        queue.insert(Node::leaf(symbol, weight));
    }

    loop {
        let left = queue.pop_min().ok()?;
        let Ok(right) = queue.pop_min() else {
            return Some(left);
        };
        queue.insert(Node::merge(left, right));
    }
}

/// A built Huffman tree, or the empty tree for zero symbols.
///
/// The tree is immutable once built; encoders and decoders only borrow it, so one tree
/// can serve any number of threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Option<Node<S>>,
}

impl<S: Symbol> HuffmanTree<S> {
    pub const fn empty() -> Self {
        Self { root: None }
    }

    /// Builds a tree from a frequency table. An empty table gives the empty tree.
    pub fn build(frequencies: &FrequencyTable<S>) -> Self {
        let root = build_root(frequencies);

        if_tracing! {
            debug!(
                symbols = frequencies.len(),
                depth = root.as_ref().map_or(0, Node::depth),
                "built huffman tree"
            );
        }

        Self { root }
    }

    pub fn from_symbols(symbols: &[S]) -> Self {
        Self::build(&count_frequencies(symbols))
    }

    pub fn from_root(root: Node<S>) -> Self {
        Self { root: Some(root) }
    }

    pub const fn root(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    /// The root, or [`HuffmanError::InvalidTree`] for the empty tree.
    pub fn try_root(&self) -> Result<&Node<S>> {
        self.root.as_ref().ok_or(HuffmanError::InvalidTree)
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct symbols.
    pub fn symbol_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }

    /// Total number of symbols the tree was built from.
    pub fn total_weight(&self) -> usize {
        self.root.as_ref().map_or(0, Node::weight)
    }

    pub fn code_table(&self) -> CodeTable<S> {
        CodeTable::generate(self)
    }
}

impl<S: Symbol> Default for HuffmanTree<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl HuffmanTree<char> {
    pub fn from_text(text: &str) -> Self {
        let symbols: Vec<char> = text.chars().collect();
        Self::from_symbols(&symbols)
    }
}

impl HuffmanTree<u8> {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_symbols(bytes)
    }
}
