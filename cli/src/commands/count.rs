use std::io::{self, Write};

use iprange_common::config::Config;
use iprange_common::{AddressRangeList, Expand};

use crate::commands::RangeInput;
use crate::terminal::{format, print};

/// Prints how many addresses the ranges cover. Never expands them.
pub fn count(input: &RangeInput, cfg: &Config) -> anyhow::Result<u64> {
    let list: AddressRangeList = input.load()?;
    let total: u64 = list.address_count();

    if cfg.quiet > 0 {
        writeln!(io::stdout().lock(), "{total}")?;
        return Ok(total);
    }

    print::field("Ranges", format::count_str(list.len() as u64), 9);
    print::field("Addresses", format::count_str(total), 9);
    Ok(total)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
