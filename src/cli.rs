//! Console front-end for huffpack.
//!
//! > `$exename encode <text> [--format text|json] [--radix dec|hex|bin] [--show-codes]`
//!
//! builds a tree from `<text>`, prints the bitstring and the packed words, then decodes
//! both and prints what came back.
//!
//! > `$exename decode --corpus <text> (--bits <0101..> | --words <len,word,..>)`
//!
//! the decoder only needs the tree, and the tree is a function of the text it was built
//! from, so `--corpus` must be the same text that was encoded. words may be given in
//! decimal or as `0x` prefixed hex.
//!
//! > `$exename console [--prompt <prompt>]`
//!
//! reads a line, prints the same report as `encode`, asks whether to go again. errors are
//! printed and the loop carries on.
//!
//! every command accepts `--config <path to json>`; command line flags win over the file.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use huffpack::Config;
use huffpack::config::{OutputFormat, WordRadix};

pub mod console;
pub mod decode;
pub mod encode;
pub mod render;

/// CLI arguments for huffpack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load console settings from a JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode text and show both representations
    #[command(alias = "enc")]
    Encode(EncodeArgs),

    /// Decode a bitstring or packed words against a tree rebuilt from a corpus
    #[command(alias = "dec")]
    Decode(DecodeArgs),

    /// Interactive encode/decode loop
    Console(ConsoleArgs),
}

/// Output settings shared by every command
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Print results as plain text or JSON
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Base used for printing packed words
    #[arg(long, value_enum)]
    pub radix: Option<WordRadix>,

    /// Also print the symbol to code table
    #[arg(long)]
    pub show_codes: bool,
}

impl OutputArgs {
    /// Overrides `config` with whatever was given on the command line.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(radix) = self.radix {
            config.radix = radix;
        }
        config.show_codes |= self.show_codes;
        config
    }
}

/// Arguments specific to the encode command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to encode, one symbol per character
    pub text: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments specific to the decode command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Text the tree is rebuilt from
    #[arg(long)]
    pub corpus: String,

    #[command(flatten)]
    pub stream: StreamArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// The encoded stream to decode, in exactly one representation
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct StreamArgs {
    /// A string of 0s and 1s
    #[arg(long)]
    pub bits: Option<String>,

    /// Packed words, comma separated, length word first
    #[arg(long, value_delimiter = ',', value_parser = parse_word)]
    pub words: Option<Vec<u32>>,
}

/// Arguments specific to the console command
#[derive(Args, Debug)]
pub struct ConsoleArgs {
    /// Prompt printed before each line is read
    #[arg(long)]
    pub prompt: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).with_context(|| match path {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to load default config".to_string(),
    })
}

/// Parses a packed word given in decimal or `0x` hex.
fn parse_word(word: &str) -> Result<u32, String> {
    let word = word.trim();
    let parsed = match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => word.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid word {:?}: {}", word, e))
}
