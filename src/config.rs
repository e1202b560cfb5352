use std::fs;
use std::io;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for loading a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How results are printed.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Base used when printing packed words.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WordRadix {
    #[default]
    Dec,
    Hex,
    Bin,
}

impl WordRadix {
    pub fn format_word(self, word: u32) -> String {
        match self {
            WordRadix::Dec => word.to_string(),
            WordRadix::Hex => format!("{:#010x}", word),
            WordRadix::Bin => format!("{:032b}", word),
        }
    }
}

/// Console settings, usually read from a JSON file.
///
/// Every field is optional in the file; missing ones take their default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Printed before reading each line in the interactive console.
    pub prompt: String,
    pub format: OutputFormat,
    pub radix: WordRadix,
    /// Print the symbol to code table along with the encodings.
    pub show_codes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Please enter a string: ".to_string(),
            format: OutputFormat::Text,
            radix: WordRadix::Dec,
            show_codes: false,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = Config::from_json(r#"{ "radix": "hex" }"#).expect("valid config");
        assert_eq!(config.radix, WordRadix::Hex);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.prompt, Config::default().prompt);
        assert!(!config.show_codes);
    }

    #[test]
    fn full_config() {
        let config = Config::from_json(
            r#"{ "prompt": "> ", "format": "json", "radix": "bin", "show_codes": true }"#,
        )
        .expect("valid config");
        assert_eq!(
            config,
            Config {
                prompt: "> ".to_string(),
                format: OutputFormat::Json,
                radix: WordRadix::Bin,
                show_codes: true,
            }
        );
    }

    #[test]
    fn rejects_unknown_variants() {
        assert!(matches!(Config::from_json(r#"{ "radix": "octal" }"#), Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Config::from_file(Path::new("/definitely/not/here/huffpack.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Config::load(None).expect("defaults"), Config::default());
    }

    #[test]
    fn word_formatting() {
        assert_eq!(WordRadix::Dec.format_word(0x0ABF_C000), "180338688");
        assert_eq!(WordRadix::Hex.format_word(0x0ABF_C000), "0x0abfc000");
        assert_eq!(WordRadix::Bin.format_word(5), format!("{}101", "0".repeat(29)));
    }
}
