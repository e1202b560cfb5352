//! Huffman coding over arbitrary symbol sequences.
//!
//! A frequency table is turned into a prefix-free code by repeatedly merging the two
//! lightest nodes of a [`MinPriorityQueue`]. The resulting [`HuffmanTree`] yields a
//! [`CodeTable`] used for encoding, while decoding only ever walks the tree.
//!
//! Two encoded representations are provided:
//!
//! - [`Bitstring`]: a printable string of `'0'` / `'1'` characters, one per bit.
//! - [`PackedWords`]: `[length, word, word, ...]`, where `length` is the number of valid
//!   bits and every following `u32` holds 32 bits, most significant bit first, with the
//!   last word zero-padded.
//!
//! ```
//! use huffpack::{HuffmanTree, encode_bitstring, encode_packed, decode_packed};
//!
//! let input: Vec<char> = "abacabad".chars().collect();
//! let tree = HuffmanTree::from_symbols(&input);
//! let table = tree.code_table();
//!
//! assert_eq!(encode_bitstring(&input, &table)?, "01001100100111");
//!
//! let words = encode_packed(&input, &table)?;
//! assert_eq!(decode_packed(&words, &tree)?, input);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

pub mod code_table;
pub mod codec;
pub mod config;
pub mod error;
pub mod node;
pub mod queue;
pub mod roundtrip;
pub mod tree;


pub use code_table::CodeTable;
pub use codec::bitstring::{Bitstring, decode_bitstring, encode_bitstring};
pub use codec::packed::{PackedWords, decode_packed, encode_packed};
pub use codec::BitCodec;
pub use config::Config;
pub use error::{HuffmanError, Result};
pub use node::{Node, Symbol};
pub use queue::MinPriorityQueue;
pub use roundtrip::RoundTrip;
pub use tree::{FrequencyTable, HuffmanTree};
