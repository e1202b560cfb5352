use std::process;

use clap::Parser;
use huffpack::if_tracing;

if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

use crate::cli::{Cli, Command};

mod cli;

fn main() {
    if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    let result = cli::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Encode(args) => cli::encode::encode(args, config),
        Command::Decode(args) => cli::decode::decode(args, config),
        Command::Console(args) => cli::console::console(args, config),
    });

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
