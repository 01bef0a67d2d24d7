use std::fmt::Display;
use std::io::{self, BufWriter, ErrorKind, Write};

use iprange_common::config::Config;
use iprange_common::{AddressRangeList, Expand};
use tracing::{debug, warn};

use crate::commands::RangeInput;
use crate::terminal::{format, print};

pub fn expand(input: &RangeInput, stream: bool, parallel: bool, cfg: &Config) -> anyhow::Result<()> {
    let list: AddressRangeList = input.load()?;
    let count: u64 = list.address_count();
    debug!(ranges = list.len(), addresses = count, stream, parallel, "expanding");

    let written = if stream {
        write_lines(list.addresses())?
    } else {
        let addresses = match (cfg.max_addresses, parallel) {
            (Some(limit), true) => list.par_expand_within(limit),
            (Some(limit), false) => list.expand_within(limit),
            (None, true) => Ok(list.par_expand()),
            (None, false) => Ok(list.expand()),
        }
        .inspect_err(|_| warn!("Use --stream or raise --max to walk ranges this large"))?;

        write_lines(addresses)?
    };

    if written && cfg.quiet == 0 {
        print::status(format!("Expanded {} addresses", format::count_str(count)));
    }
    Ok(())
}

/// Writes one item per line to stdout. Returns `false` if the reader went away early.
fn write_lines<T: Display>(items: impl IntoIterator<Item = T>) -> io::Result<bool> {
    let mut out = BufWriter::new(io::stdout().lock());
    let result = items
        .into_iter()
        .try_for_each(|item| writeln!(out, "{item}"))
        .and_then(|_| out.flush());

    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
