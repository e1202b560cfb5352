use crate::code_table::CodeTable;
use crate::codec::{BitCodec, Traversal, check_table};
use crate::error::{HuffmanError, Result};
use crate::node::Symbol;
use crate::tree::HuffmanTree;

if_tracing! {
    use tracing::debug;
}

/// Printable representation: one `'0'` or `'1'` character per bit, no separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bitstring;

impl<S: Symbol> BitCodec<S> for Bitstring {
    type Encoded = String;

    fn encode(&self, symbols: &[S], table: &CodeTable<S>) -> Result<String> {
        encode_bitstring(symbols, table)
    }

    fn decode(&self, encoded: &String, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
        decode_bitstring(encoded, tree)
    }

    fn name(&self) -> &'static str {
        "bitstring"
    }
}

/// Concatenates the code of every symbol, in input order.
pub fn encode_bitstring<S: Symbol>(symbols: &[S], table: &CodeTable<S>) -> Result<String> {
    check_table(symbols, table)?;

    let mut bits = String::new();
    for symbol in symbols {
        bits.push_str(table.code(symbol)?);
    }

    if_tracing! {
        debug!(symbols = symbols.len(), bits = bits.len(), "bitstring encode complete");
    }

    Ok(bits)
}

/// Walks `tree` along `bits`, emitting a symbol at every leaf.
pub fn decode_bitstring<S: Symbol>(bits: &str, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    if bits.is_empty() {
        return Ok(Vec::new());
    }

    let mut walk = Traversal::new(tree)?;
    let mut symbols = Vec::new();
    for (position, found) in bits.chars().enumerate() {
        let bit = match found {
            '0' => false,
            '1' => true,
            _ => return Err(HuffmanError::InvalidBit { position, found }),
        };
        if let Some(symbol) = walk.step(bit)? {
            symbols.push(symbol);
        }
    }
    walk.finish()?;

    if_tracing! {
        debug!(bits = bits.len(), symbols = symbols.len(), "bitstring decode complete");
    }

    Ok(symbols)
}
