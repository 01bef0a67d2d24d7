use std::io::{self, Write};

use colored::*;
use iprange_common::config::Config;
use iprange_common::{AddressRangeList, Expand};

use crate::commands::RangeInput;
use crate::terminal::{format, print};

pub fn parse(input: &RangeInput, cfg: &Config) -> anyhow::Result<()> {
    let list: AddressRangeList = input.load()?;

    if list.is_empty() {
        print::no_results();
        return Ok(());
    }

    if cfg.quiet > 0 {
        let mut out = io::stdout().lock();
        for range in &list {
            writeln!(out, "{range}")?;
        }
        return Ok(());
    }

    for (idx, range) in list.iter().enumerate() {
        print::range_tree(idx, &range.to_string(), &format::range_to_details(range));
    }

    print::summary(format!(
        "{} ranges covering {} addresses",
        list.len().to_string().green().bold(),
        format::count_str(list.address_count())
    ));
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use iprange_common::RangeError;

    #[test]
    fn test_parse_report() {
        let input = RangeInput::from_tokens(&["10.0.0.0/24", "10.0.0-2.5", "172.16.*.*"]);
        assert!(parse(&input, &Config::default()).is_ok());

        let quiet = Config {
            quiet: 1,
            ..Config::default()
        };
        assert!(parse(&input, &quiet).is_ok());
    }

    #[test]
    fn test_parse_blank_input() {
        let input = RangeInput::from_tokens(&[" ", ""]);
        assert!(parse(&input, &Config::default()).is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_range() {
        let input = RangeInput::from_tokens(&["10.0.0.1", "10.0.0.5-3"]);
        let err = parse(&input, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RangeError>(),
            Some(RangeError::InvalidRangeList { position: 2, .. })
        ));
    }
}
