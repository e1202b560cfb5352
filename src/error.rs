use thiserror::Error;

/// Everything that can go wrong while building, encoding or decoding.
///
/// None of these are fatal; they describe bad input or a tree that does not match
/// the stream being decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// A tree was required but the input had zero symbols.
    ///
    /// The builders never return this: zero symbols give [`HuffmanTree::empty`], and work
    /// that needs symbols against that tree reports [`HuffmanError::InvalidTree`].
    ///
    /// [`HuffmanTree::empty`]: crate::tree::HuffmanTree::empty
    #[error("cannot build a Huffman tree from zero symbols")]
    EmptyInput,

    /// Encoding or decoding needed a tree with at least one symbol.
    #[error("the Huffman tree has no symbols")]
    InvalidTree,

    /// The symbol has no entry in the code table. The argument is its debug rendering.
    #[error("symbol {0} has no code in the table")]
    UnknownSymbol(String),

    /// `pop_min` was called on an empty queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// A bitstring contained something other than `'0'` or `'1'`.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    /// The bit at `position` does not lead anywhere in the tree.
    #[error("bit at position {position} does not match any code")]
    InvalidCode { position: usize },

    /// The stream ended in the middle of a code.
    #[error("stream of {length} bits ends in the middle of a code")]
    IncompleteCode { length: usize },

    /// A packed buffer had no length word.
    #[error("packed buffer is missing its length word")]
    MissingLength,

    /// A packed buffer claims more bits than its payload words hold.
    #[error("packed buffer claims {length} bits ({needed} words) but holds {available} words")]
    TruncatedBuffer { length: usize, needed: usize, available: usize },

    /// The encoded bit count does not fit in the 32-bit length word.
    #[error("{0} encoded bits do not fit in a 32-bit length word")]
    BitLengthOverflow(usize),
}

pub type Result<T, E = HuffmanError> = core::result::Result<T, E>;
