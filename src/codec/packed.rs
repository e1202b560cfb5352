//! Length-prefixed packed words.
//!
//! Layout: `[length, word_1, word_2, ...]`. `length` counts valid bits. Bits fill each
//! word from bit 31 down to bit 0; the unused low bits of the last word are zero and are
//! never interpreted. Zero bits encode to `[0]`.

use crate::code_table::CodeTable;
use crate::codec::{BitCodec, Traversal, check_table};
use crate::error::{HuffmanError, Result};
use crate::node::Symbol;
use crate::tree::HuffmanTree;

if_tracing! {
    use tracing::debug;
}

pub const WORD_BITS: usize = u32::BITS as usize;

/// Packed representation: a bit-count header followed by MSB-first 32-bit words.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedWords;

impl<S: Symbol> BitCodec<S> for PackedWords {
    type Encoded = Vec<u32>;

    fn encode(&self, symbols: &[S], table: &CodeTable<S>) -> Result<Vec<u32>> {
        encode_packed(symbols, table)
    }

    fn decode(&self, encoded: &Vec<u32>, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
        decode_packed(encoded, tree)
    }

    fn name(&self) -> &'static str {
        "packed"
    }
}

/// Total buffer length, header included, for `bit_count` payload bits.
pub const fn packed_len(bit_count: usize) -> usize {
    bit_count.div_ceil(WORD_BITS) + 1
}

pub fn encode_packed<S: Symbol>(symbols: &[S], table: &CodeTable<S>) -> Result<Vec<u32>> {
    check_table(symbols, table)?;

    let length = table.encoded_len(symbols)?;
    let header = u32::try_from(length).map_err(|_| HuffmanError::BitLengthOverflow(length))?;

    let mut words = Vec::with_capacity(packed_len(length));
    words.push(header);

    let mut accumulator = 0u32;
    // free bits left in the accumulator; the next bit lands at `cursor - 1`
    let mut cursor = WORD_BITS;
    for symbol in symbols {
        for bit in table.code(symbol)?.bytes() {
            if cursor == 0 {
                words.push(accumulator);
                accumulator = 0;
                cursor = WORD_BITS;
            }
            cursor -= 1;
            accumulator |= u32::from(bit == b'1') << cursor;
        }
    }
    if cursor < WORD_BITS {
        words.push(accumulator);
    }

    if_tracing! {
        debug!(symbols = symbols.len(), bits = length, words = words.len(), "packed encode complete");
    }

    Ok(words)
}

/// Decodes exactly `words[0]` bits; padding past them is ignored.
pub fn decode_packed<S: Symbol>(words: &[u32], tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let (&header, payload) = words.split_first().ok_or(HuffmanError::MissingLength)?;
    let length = header as usize;
    if length == 0 {
        return Ok(Vec::new());
    }

    let needed = length.div_ceil(WORD_BITS);
    if payload.len() < needed {
        return Err(HuffmanError::TruncatedBuffer {
            length,
            needed,
            available: payload.len(),
        });
    }

    let mut walk = Traversal::new(tree)?;
    let mut symbols = Vec::new();
    for position in 0..length {
        let word = payload[position / WORD_BITS];
        let shift = WORD_BITS - 1 - position % WORD_BITS;
        if let Some(symbol) = walk.step((word >> shift) & 1 == 1)? {
            symbols.push(symbol);
        }
    }
    walk.finish()?;

    if_tracing! {
        debug!(bits = length, symbols = symbols.len(), "packed decode complete");
    }

    Ok(symbols)
}
