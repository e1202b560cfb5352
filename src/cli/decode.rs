use anyhow::{Context, Result};
use huffpack::{Config, HuffmanTree, decode_bitstring, decode_packed, if_tracing};

use crate::cli::{DecodeArgs, StreamArgs, render};

pub fn decode(args: DecodeArgs, config: Config) -> Result<()> {
    let config = args.output.apply(config);

    if_tracing! {
        let started = std::time::Instant::now();
    }
    let text = decode_stream(&args.corpus, &args.stream)?;
    if_tracing! {
        tracing::info!(event = "decode_complete", elapsed_us = %started.elapsed().as_micros(), decoded_len = text.chars().count(), "decode finished");
    }

    println!("{}", render::decoded(&text, &config)?);
    Ok(())
}

/// Rebuilds the tree from `corpus` and decodes whichever stream was given.
fn decode_stream(corpus: &str, stream: &StreamArgs) -> Result<String> {
    let tree = HuffmanTree::from_text(corpus);
    let symbols = match (&stream.bits, &stream.words) {
        (Some(bits), _) => decode_bitstring(bits, &tree).context("failed to decode bitstring")?,
        (None, Some(words)) => decode_packed(words, &tree).context("failed to decode packed words")?,
        (None, None) => anyhow::bail!("nothing to decode: pass --bits or --words"),
    };
    Ok(symbols.into_iter().collect())
}
