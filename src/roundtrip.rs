use serde::Serialize;

use crate::code_table::CodeTable;
use crate::codec::bitstring::{decode_bitstring, encode_bitstring};
use crate::codec::packed::{decode_packed, encode_packed};
use crate::error::Result;
use crate::tree::HuffmanTree;

if_tracing! {
    use tracing::info;
}

/// Everything produced by pushing one piece of text through both representations.
///
/// Use the accessors to get at the [`original`](RoundTrip::get_original) text, the
/// [`bitstring`](RoundTrip::get_bitstring) and [`packed`](RoundTrip::get_packed) encodings,
/// and what each of them [decoded back to](RoundTrip::get_decoded_bitstring).
#[derive(Clone, Debug)]
pub struct RoundTrip<'orig> {
    original: &'orig str,
    tree: HuffmanTree<char>,
    table: CodeTable<char>,
    bitstring: String,
    packed: Vec<u32>,
    decoded_bitstring: String,
    decoded_packed: String,
}

impl<'orig> RoundTrip<'orig> {
    /// Builds a tree from `text`, encodes `text` both ways and decodes both encodings.
    pub fn run(text: &'orig str) -> Result<Self> {
        let symbols: Vec<char> = text.chars().collect();
        let tree = HuffmanTree::from_symbols(&symbols);
        let table = tree.code_table();

        let bitstring = encode_bitstring(&symbols, &table)?;
        let packed = encode_packed(&symbols, &table)?;
        let decoded_bitstring: String = decode_bitstring(&bitstring, &tree)?.into_iter().collect();
        let decoded_packed: String = decode_packed(&packed, &tree)?.into_iter().collect();

        let roundtrip = Self {
            original: text,
            tree,
            table,
            bitstring,
            packed,
            decoded_bitstring,
            decoded_packed,
        };

        if_tracing! {
            info!(
                symbols = symbols.len(),
                distinct = roundtrip.table.len(),
                bits = roundtrip.total_bits(),
                words = roundtrip.packed.len(),
                successful = roundtrip.is_successful(),
                "roundtrip finished"
            );
        }

        Ok(roundtrip)
    }

    /// Whether both decodes reproduced the original text.
    pub fn is_successful(&self) -> bool {
        self.decoded_bitstring == self.original && self.decoded_packed == self.original
    }

    pub const fn get_original(&self) -> &'orig str {
        self.original
    }

    pub const fn get_tree(&self) -> &HuffmanTree<char> {
        &self.tree
    }

    pub const fn get_code_table(&self) -> &CodeTable<char> {
        &self.table
    }

    pub fn get_bitstring(&self) -> &str {
        &self.bitstring
    }

    /// `[length, word, ...]` as produced by the packed encoder.
    pub fn get_packed(&self) -> &[u32] {
        &self.packed
    }

    pub fn get_decoded_bitstring(&self) -> &str {
        &self.decoded_bitstring
    }

    pub fn get_decoded_packed(&self) -> &str {
        &self.decoded_packed
    }

    pub fn total_bits(&self) -> usize {
        self.bitstring.len()
    }

    /// Encoded bits over the bits of the UTF-8 input; `0.0` for empty input.
    pub fn ratio(&self) -> f64 {
        let input_bits = self.original.len() * 8;
        if input_bits == 0 {
            return 0.0;
        }
        self.total_bits() as f64 / input_bits as f64
    }

    pub fn report(&self) -> Report<'_> {
        Report {
            input: self.original,
            codes: self
                .table
                .iter()
                .map(|(symbol, code)| CodeEntry { symbol: *symbol, code })
                .collect(),
            bitstring: &self.bitstring,
            packed: &self.packed,
            decoded_bitstring: &self.decoded_bitstring,
            decoded_packed: &self.decoded_packed,
            total_bits: self.total_bits(),
            ratio: self.ratio(),
            successful: self.is_successful(),
        }
    }
}

/// Serializable view of a [`RoundTrip`].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report<'a> {
    pub input: &'a str,
    pub codes: Vec<CodeEntry<'a>>,
    pub bitstring: &'a str,
    pub packed: &'a [u32],
    pub decoded_bitstring: &'a str,
    pub decoded_packed: &'a str,
    pub total_bits: usize,
    pub ratio: f64,
    pub successful: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry<'a> {
    pub symbol: char,
    pub code: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abacabad() {
        let roundtrip = RoundTrip::run("abacabad").expect("roundtrip");
        assert!(roundtrip.is_successful());
        assert_eq!(roundtrip.get_bitstring(), "01001100100111");
        assert_eq!(roundtrip.get_packed(), &[14, 0x4C9C_0000]);
        assert_eq!(roundtrip.get_decoded_bitstring(), "abacabad");
        assert_eq!(roundtrip.get_decoded_packed(), "abacabad");
        assert_eq!(roundtrip.total_bits(), 14);
    }

    #[test]
    fn empty_text() {
        let roundtrip = RoundTrip::run("").expect("roundtrip");
        assert!(roundtrip.is_successful());
        assert!(roundtrip.get_tree().is_empty());
        assert_eq!(roundtrip.get_bitstring(), "");
        assert_eq!(roundtrip.get_packed(), &[0]);
        assert_eq!(roundtrip.ratio(), 0.0);
    }

    #[test]
    fn report_serializes() {
        let roundtrip = RoundTrip::run("aab").expect("roundtrip");
        let json = serde_json::to_value(roundtrip.report()).expect("serializable");
        assert_eq!(json["input"], "aab");
        assert_eq!(json["bitstring"], "110");
        assert_eq!(json["packed"], serde_json::json!([3, 0xC000_0000u32]));
        assert_eq!(json["codes"][0], serde_json::json!({ "symbol": "a", "code": "1" }));
        assert_eq!(json["successful"], true);
    }

    #[test]
    fn ratio_counts_bits_against_bytes() {
        let roundtrip = RoundTrip::run("aaaa").expect("roundtrip");
        assert_eq!(roundtrip.total_bits(), 4);
        assert_eq!(roundtrip.ratio(), 4.0 / 32.0);
    }

    #[test]
    fn ratio_uses_utf8_length() {
        let roundtrip = RoundTrip::run("éé").expect("roundtrip");
        assert_eq!(roundtrip.total_bits(), 2);
        assert_eq!(roundtrip.ratio(), 2.0 / 32.0);
    }
}
