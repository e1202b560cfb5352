use core::fmt::Debug;

/// Anything that can be counted and looked up in a code table.
///
/// Text goes through as `char`, raw data as `u8`.
pub trait Symbol: Copy + Ord + Debug {}

impl<T: Copy + Ord + Debug> Symbol for T {}

/// A node of a Huffman tree.
///
/// Internal nodes own exactly two children and never carry a symbol, so every symbol
/// value (including `'\0'`) is usable as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf { symbol: S, weight: usize },
    Internal { weight: usize, left: Box<Node<S>>, right: Box<Node<S>> },
}

impl<S: Symbol> Node<S> {
    pub const fn leaf(symbol: S, weight: usize) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Joins two nodes under a new parent weighing their sum. `left` ends up on the `0` edge.
    pub fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub const fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<S> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// The child on the `bit` edge, `None` for leaves.
    pub fn child(&self, bit: bool) -> Option<&Self> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_weights_and_keeps_order() {
        let parent = Node::merge(Node::leaf('c', 1), Node::leaf('d', 3));
        assert_eq!(parent.weight(), 4);
        assert!(!parent.is_leaf());
        assert_eq!(parent.symbol(), None);
        assert_eq!(parent.child(false).and_then(Node::symbol), Some('c'));
        assert_eq!(parent.child(true).and_then(Node::symbol), Some('d'));
    }

    #[test]
    fn leaves_have_no_children() {
        let leaf = Node::leaf(b'x', 7);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.child(false), None);
        assert_eq!(leaf.child(true), None);
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.leaf_count(), 1);
    }

    #[test]
    fn nul_is_an_ordinary_symbol() {
        let leaf = Node::leaf('\0', 1);
        assert_eq!(leaf.symbol(), Some('\0'));
    }

    #[test]
    fn depth_and_leaf_count() {
        let inner = Node::merge(Node::leaf('c', 1), Node::leaf('d', 1));
        let mid = Node::merge(Node::leaf('b', 2), inner);
        let root = Node::merge(Node::leaf('a', 4), mid);
        assert_eq!(root.weight(), 8);
        assert_eq!(root.depth(), 3);
        assert_eq!(root.leaf_count(), 4);
    }
}
