pub mod check;
pub mod count;
pub mod expand;
pub mod parse;

use std::fs;
use std::io::{self, Read};
use std::net::Ipv4Addr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use iprange_common::AddressRangeList;
use iprange_common::config::{Config, DEFAULT_MAX_ADDRESSES};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "iprange")]
#[command(about = "Parse and expand IPv4 range lists.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat to print bare data only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Refuse to materialize more addresses than this (0 disables the limit)
    #[arg(long = "max", value_name = "COUNT", default_value_t = DEFAULT_MAX_ADDRESSES, global = true)]
    pub max_addresses: u64,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse ranges and show their bounds
    #[command(alias = "p")]
    Parse {
        #[command(flatten)]
        input: RangeInput,
    },
    /// Print every address covered by the ranges
    #[command(alias = "e")]
    Expand {
        #[command(flatten)]
        input: RangeInput,
        /// Walk the ranges one address at a time, ignoring --max
        #[arg(long)]
        stream: bool,
        /// Expand ranges on all cores
        #[arg(long, conflicts_with = "stream")]
        parallel: bool,
    },
    /// Check whether an address is covered by the ranges
    #[command(alias = "c")]
    Check {
        address: Ipv4Addr,
        #[command(flatten)]
        input: RangeInput,
    },
    /// Count the addresses covered by the ranges
    #[command(alias = "n")]
    Count {
        #[command(flatten)]
        input: RangeInput,
    },
}

/// Where range text comes from: positional tokens, a file, or stdin.
#[derive(Args, Debug)]
pub struct RangeInput {
    /// Ranges such as 10.0.0.1-5, 192.168.0.0/24, 172.16.*.* or 10.0.0-2.1
    pub ranges: Vec<String>,

    /// Read ranges from a file, one or more per line ('-' for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            max_addresses: (self.max_addresses > 0).then_some(self.max_addresses),
            no_color: self.no_color,
        }
    }
}

impl RangeInput {
    /// Collects the raw range text. Stdin is read only when nothing else was given.
    pub fn read(&self) -> anyhow::Result<String> {
        let mut text = self.ranges.join(",");

        let from_file = match &self.file {
            Some(path) if path.as_os_str() == "-" => Some(read_stdin()?),
            Some(path) => Some(
                fs::read_to_string(path)
                    .with_context(|| format!("failed to read ranges from {}", path.display()))?,
            ),
            None if self.ranges.is_empty() => Some(read_stdin()?),
            None => None,
        };

        if let Some(content) = from_file {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&content);
        }
        Ok(text)
    }

    /// Reads and parses the range list, logging the offending token on failure.
    pub fn load(&self) -> anyhow::Result<AddressRangeList> {
        let text = self.read()?;
        let list = iprange_common::parse_list(&text).inspect_err(|err| {
            if let Some(token) = err.token() {
                error!("Rejected range: {token}");
            }
        })?;

        debug!(ranges = list.len(), "parsed range list");
        Ok(list)
    }
}

#[cfg(test)]
impl RangeInput {
    pub(crate) fn from_tokens(tokens: &[&str]) -> Self {
        Self {
            ranges: tokens.iter().map(|token| token.to_string()).collect(),
            file: None,
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read ranges from stdin")?;
    Ok(buf)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
