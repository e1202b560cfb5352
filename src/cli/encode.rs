use anyhow::{Context, Result};
use huffpack::{Config, RoundTrip, if_tracing};

use crate::cli::{EncodeArgs, render};

pub fn encode(args: EncodeArgs, config: Config) -> Result<()> {
    let config = args.output.apply(config);

    if_tracing! {
        let started = std::time::Instant::now();
    }
    let roundtrip = RoundTrip::run(&args.text).context("encoding failed")?;
    if_tracing! {
        tracing::info!(event = "encode_complete", elapsed_us = %started.elapsed().as_micros(), bits = roundtrip.total_bits(), "encode finished");
    }

    println!("{}", render::roundtrip(&roundtrip, &config)?);
    Ok(())
}
