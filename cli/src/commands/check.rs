use std::io::{self, Write};
use std::net::Ipv4Addr;

use colored::*;
use iprange_common::AddressRangeList;
use iprange_common::config::Config;
use tracing::debug;

use crate::commands::RangeInput;
use crate::terminal::{format, print};

/// Reports the ranges covering `address`. Returns whether any does.
pub fn check(address: Ipv4Addr, input: &RangeInput, cfg: &Config) -> anyhow::Result<bool> {
    let list: AddressRangeList = input.load()?;
    let hits: Vec<_> = list.matching(address).collect();
    debug!(%address, hits = hits.len(), "membership check");

    match cfg.quiet {
        0 => {
            for (idx, range) in &hits {
                print::range_tree(*idx, &range.to_string(), &[]);
            }
            let verdict: ColoredString = if hits.is_empty() {
                "not covered".red().bold()
            } else {
                "covered".green().bold()
            };
            print::field(&address.to_string(), verdict, 15);
        }
        1 => {
            let mut out = io::stdout().lock();
            for (_, range) in &hits {
                writeln!(out, "{range}")?;
            }
            if hits.is_empty() {
                print::status(format!(
                    "{} is outside every range",
                    format::addr_str(&address.to_string())
                ));
            }
        }
        _ => {}
    }

    Ok(!hits.is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
