//! Command-line interface
//!
//! Thin caller surface over the conversion engine: the batch report entry
//! point plus small inspection helpers for platform detection and raw
//! identifier encoding.

use clap::{Parser, Subcommand};

use crate::config::EncodingConfig;
use crate::services::{self, LinkConverter};

#[derive(Debug, Parser)]
#[command(name = "manybaht", version, about = "Media link obfuscation engine")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Input links; bare `manybaht [URLS]...` prints the batch report
    pub urls: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Resolve the effective command; bare positional URLs are shorthand
    /// for the text-report `convert`
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Convert {
            urls: self.urls,
            json: false,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert one or more links and print the per-link report
    Convert {
        /// Input links (non-URL entries are reported inline, not skipped)
        urls: Vec<String>,

        /// Emit structured JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Print the detected platform for an input string
    Detect {
        /// Input string to classify
        input: String,
    },
    /// Encode a raw identifier with the configured parameters
    Encode {
        /// Identifier to encode
        plaintext: String,
    },
}

/// Execute a parsed command and render its output
pub fn run(
    command: &Command,
    converter: &LinkConverter,
    encoding: &EncodingConfig,
) -> anyhow::Result<String> {
    match command {
        Command::Convert { urls, json } => {
            if *json {
                let results: Vec<_> = urls.iter().map(|u| converter.convert_link(u)).collect();
                Ok(serde_json::to_string_pretty(&results)?)
            } else {
                Ok(services::convert_all(converter, urls))
            }
        }
        Command::Detect { input } => Ok(converter.detect_platform(input).to_string()),
        Command::Encode { plaintext } => Ok(services::encode(plaintext.as_bytes(), encoding)),
    }
}
