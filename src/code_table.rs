use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::error::{HuffmanError, Result};
use crate::node::{Node, Symbol};
use crate::tree::HuffmanTree;

/// Code assigned to the lone leaf of a single-symbol tree.
///
/// An empty code would make `"aaaa"` and `"a"` encode to the same (empty) stream.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Symbol to code mapping derived from a tree, `'0'` for a left edge and `'1'` for a right one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, String>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walks every root-to-leaf path of `tree`. The empty tree yields an empty table.
    pub fn generate(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        let Some(root) = tree.root() else {
            return Self { codes };
        };

        if let Node::Leaf { symbol, .. } = root {
            codes.insert(*symbol, SINGLE_SYMBOL_CODE.to_string());
            return Self { codes };
        }

        let mut stack = vec![(root, String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    stack.push((right, right_path));

                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((left, left_path));
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Like [`get`](Self::get) but reports a missing symbol as [`HuffmanError::UnknownSymbol`].
    pub fn code(&self, symbol: &S) -> Result<&str> {
        self.get(symbol)
            .ok_or_else(|| HuffmanError::UnknownSymbol(format!("{:?}", symbol)))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, S, String> {
        self.codes.iter()
    }

    /// Number of bits `symbols` encode to.
    pub fn encoded_len(&self, symbols: &[S]) -> Result<usize> {
        symbols
            .iter()
            .try_fold(0usize, |acc, symbol| Ok(acc + self.code(symbol)?.len()))
    }

    /// No code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        // after sorting, a prefix sits right before some string it prefixes
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl<'a, S> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a String);
    type IntoIter = btree_map::Iter<'a, S, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
