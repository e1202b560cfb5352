use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::node::{Node, Symbol};
use crate::tree::HuffmanTree;

pub mod bitstring;
pub mod packed;

/// One encoded representation of a symbol sequence.
///
/// Encoding only needs the code table; decoding only needs the tree. An implementation
/// must satisfy `decode(encode(s, tree.code_table()), tree) == s` for every `s` made of
/// symbols the tree knows, including the empty sequence.
pub trait BitCodec<S: Symbol> {
    type Encoded;

    fn encode(&self, symbols: &[S], table: &CodeTable<S>) -> Result<Self::Encoded>;

    fn decode(&self, encoded: &Self::Encoded, tree: &HuffmanTree<S>) -> Result<Vec<S>>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Encodes then decodes `symbols` with `tree`, returning the encoding and the decode.
    fn roundtrip(&self, symbols: &[S], tree: &HuffmanTree<S>) -> Result<(Self::Encoded, Vec<S>)> {
        let encoded = self.encode(symbols, &tree.code_table())?;
        let decoded = self.decode(&encoded, tree)?;
        Ok((encoded, decoded))
    }
}

/// Rejects encoding real symbols with a table that came from the empty tree.
fn check_table<S: Symbol>(symbols: &[S], table: &CodeTable<S>) -> Result<()> {
    if !symbols.is_empty() && table.is_empty() {
        return Err(HuffmanError::InvalidTree);
    }
    Ok(())
}

/// Cursor that walks a tree one bit at a time, shared by every decoder.
///
/// It resets to the root after each emitted symbol and never asks a leaf for a child.
#[derive(Debug)]
pub(crate) struct Traversal<'t, S> {
    root: &'t Node<S>,
    current: &'t Node<S>,
    position: usize,
}

impl<'t, S: Symbol> Traversal<'t, S> {
    pub(crate) fn new(tree: &'t HuffmanTree<S>) -> Result<Self> {
        let root = tree.try_root()?;
        Ok(Self { root, current: root, position: 0 })
    }

    /// Follows `bit` (`true` is a right edge) and returns the symbol if a leaf was reached.
    pub(crate) fn step(&mut self, bit: bool) -> Result<Option<S>> {
        let position = self.position;
        self.position += 1;

        // single-symbol tree: every symbol is the one-bit code "0"
        if let Node::Leaf { symbol, .. } = self.root {
            return if bit { Err(HuffmanError::InvalidCode { position }) } else { Ok(Some(*symbol)) };
        }

        let next = self.current.child(bit).ok_or(HuffmanError::InvalidCode { position })?;
        match next {
            Node::Leaf { symbol, .. } => {
                self.current = self.root;
                Ok(Some(*symbol))
            }
            Node::Internal { .. } => {
                self.current = next;
                Ok(None)
            }
        }
    }

    /// Ends the walk, failing if the last code was cut short.
    pub(crate) fn finish(self) -> Result<()> {
        if core::ptr::eq(self.current, self.root) {
            Ok(())
        } else {
            Err(HuffmanError::IncompleteCode { length: self.position })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_emits_at_leaves_and_resets() {
        let tree = HuffmanTree::from_text("abacabad");
        let mut walk = Traversal::new(&tree).expect("non-empty tree");
        // a=0 b=10 c=110 d=111
        assert_eq!(walk.step(false), Ok(Some('a')));
        assert_eq!(walk.step(true), Ok(None));
        assert_eq!(walk.step(false), Ok(Some('b')));
        assert_eq!(walk.step(true), Ok(None));
        assert_eq!(walk.step(true), Ok(None));
        assert_eq!(walk.step(true), Ok(Some('d')));
        assert_eq!(walk.finish(), Ok(()));
    }

    #[test]
    fn traversal_reports_cut_off_code() {
        let tree = HuffmanTree::from_text("abacabad");
        let mut walk = Traversal::new(&tree).expect("non-empty tree");
        assert_eq!(walk.step(true), Ok(None));
        assert_eq!(walk.step(true), Ok(None));
        assert_eq!(walk.finish(), Err(HuffmanError::IncompleteCode { length: 2 }));
    }

    #[test]
    fn traversal_needs_a_tree() {
        let tree = HuffmanTree::<char>::empty();
        assert!(matches!(Traversal::new(&tree), Err(HuffmanError::InvalidTree)));
    }

    #[test]
    fn single_leaf_tree_only_accepts_zero() {
        let tree = HuffmanTree::from_text("zzz");
        let mut walk = Traversal::new(&tree).expect("non-empty tree");
        assert_eq!(walk.step(false), Ok(Some('z')));
        assert_eq!(walk.step(false), Ok(Some('z')));
        assert_eq!(walk.step(true), Err(HuffmanError::InvalidCode { position: 2 }));
    }
}
