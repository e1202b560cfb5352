use core::fmt::Write;

use anyhow::Result;
use huffpack::config::{OutputFormat, WordRadix};
use huffpack::{Config, RoundTrip};
use serde::Serialize;

/// Formats a round trip the way `config` asks for.
pub fn roundtrip(roundtrip: &RoundTrip<'_>, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&roundtrip.report())?),
        OutputFormat::Text => Ok(roundtrip_text(roundtrip, config)),
    }
}

fn roundtrip_text(roundtrip: &RoundTrip<'_>, config: &Config) -> String {
    let mut out = String::new();
    // infallible for String
    let _ = writeln!(out, "{:?} has been encoded as {:?} ({} bits)", roundtrip.get_original(), roundtrip.get_bitstring(), roundtrip.total_bits());
    let _ = writeln!(out, "packed words: {}", words(roundtrip.get_packed(), config.radix));

    if config.show_codes {
        let _ = writeln!(out, "codes:");
        for (symbol, code) in roundtrip.get_code_table() {
            let _ = writeln!(out, "  {:?} {}", symbol, code);
        }
    }

    let _ = writeln!(out, "the bitstring was read back as: {:?}", roundtrip.get_decoded_bitstring());
    let _ = writeln!(out, "the packed words were read back as: {:?}", roundtrip.get_decoded_packed());
    if !roundtrip.is_successful() {
        let _ = writeln!(out, "ROUNDTRIP MISMATCH");
    }
    out
}

/// `[length] word word ...`, the length always in decimal.
pub fn words(words: &[u32], radix: WordRadix) -> String {
    let Some((length, payload)) = words.split_first() else {
        return String::from("[]");
    };
    let mut out = format!("[{}]", length);
    for &word in payload {
        out.push(' ');
        out.push_str(&radix.format_word(word));
    }
    out
}

#[derive(Serialize)]
struct Decoded<'a> {
    decoded: &'a str,
}

pub fn decoded(text: &str, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Decoded { decoded: text })?),
        OutputFormat::Text => Ok(text.to_string()),
    }
}
