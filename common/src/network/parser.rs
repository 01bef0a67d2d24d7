//! # Range Parsing
//!
//! Turns textual range descriptions into [`AddressRange`] values.
//!
//! Supported token forms, checked in this order:
//! * **Wildcard**: `192.168.*.*` (each `*` is `0` in the lower bound, `255` in the upper).
//! * **CIDR**: `10.0.0.0/8`.
//! * **Hyphen**: `10.0.0.1-10.0.0.9`, `10.0.0.1-9`, or per-octet `10.0.0-2.1-3`.
//! * **Host**: `10.0.0.1`.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::{RangeError, Result};
use crate::network::range::{AddressRange, AddressRangeList};

/// Parses a single token into a range.
pub fn parse(token: &str) -> Result<AddressRange> {
    let token = token.trim();

    if token.contains('*') {
        parse_wildcard(token)
    } else if token.contains('/') {
        parse_cidr(token)
    } else if token.contains('-') {
        parse_hyphen(token)
    } else {
        let addr = parse_address(token).map_err(|reason| RangeError::range(token, reason))?;
        Ok(AddressRange::single(addr))
    }
}

/// Parses a comma or newline separated list of tokens.
///
/// Whitespace is dropped and blank entries are skipped. The first bad token
/// fails the whole list.
pub fn parse_list(text: &str) -> Result<AddressRangeList> {
    let normalized: String = text
        .replace('\n', ",")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    normalized
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            parse(token).map_err(|source| RangeError::InvalidRangeList {
                position: index + 1,
                token: token.to_string(),
                source: Box::new(source),
            })
        })
        .collect()
}

fn parse_wildcard(token: &str) -> Result<AddressRange> {
    let invalid = || RangeError::InvalidWildcardRange {
        token: token.to_string(),
    };

    let first = parse_address(&token.replace('*', "0")).map_err(|_| invalid())?;
    let last = parse_address(&token.replace('*', "255")).map_err(|_| invalid())?;

    AddressRange::new(first, last).map_err(|_| invalid())
}

fn parse_cidr(token: &str) -> Result<AddressRange> {
    let Some((addr_str, prefix_str)) = token.split_once('/') else {
        return Err(RangeError::cidr(token, "missing '/'"));
    };

    let addr = parse_address(addr_str).map_err(|reason| RangeError::cidr(token, reason))?;
    let prefix = parse_prefix(prefix_str).map_err(|reason| RangeError::cidr(token, reason))?;

    let network =
        Ipv4Network::new(addr, prefix).map_err(|e| RangeError::cidr(token, e.to_string()))?;

    AddressRange::new(network.network(), network.broadcast())
        .map_err(|e| RangeError::cidr(token, e.to_string()))
}

/// Picks between the whole-address and per-octet hyphen forms.
///
/// A single `-` with a full address on its left is always the whole-address
/// form; anything else must be four dot-separated groups.
fn parse_hyphen(token: &str) -> Result<AddressRange> {
    if let Some((left, right)) = token.split_once('-') {
        if !right.contains('-') {
            if let Ok(first) = parse_address(left) {
                return parse_whole_range(token, first, right);
            }
        }
    }

    parse_octet_range(token)
}

/// `10.0.0.1-10.0.0.9`, or `10.0.0.1-9` where the bare number replaces the last octet.
fn parse_whole_range(token: &str, first: Ipv4Addr, end_str: &str) -> Result<AddressRange> {
    let last = if end_str.contains('.') {
        parse_address(end_str).map_err(|reason| RangeError::range(token, reason))?
    } else {
        let last_octet =
            parse_short_end(end_str).map_err(|reason| RangeError::range(token, reason))?;
        let mut octets = first.octets();
        octets[3] = last_octet;
        Ipv4Addr::from(octets)
    };

    AddressRange::new(first, last)
        .map_err(|_| RangeError::range(token, "lower bound above upper bound"))
}

/// `10.0.0-2.1-3`: every group is either `n` or an ascending `a-b`.
fn parse_octet_range(token: &str) -> Result<AddressRange> {
    let groups: Vec<&str> = token.split('.').collect();
    if groups.len() != 4 {
        return Err(RangeError::range(
            token,
            format!("expected 4 octet groups, found {}", groups.len()),
        ));
    }

    let mut lower = [0u8; 4];
    let mut upper = [0u8; 4];

    for (i, group) in groups.iter().enumerate() {
        let (lo, hi) = match group.split_once('-') {
            Some((lo, hi)) => (parse_octet(lo), parse_octet(hi)),
            None => (parse_octet(group), parse_octet(group)),
        };
        let lo = lo.map_err(|reason| RangeError::range(token, reason))?;
        let hi = hi.map_err(|reason| RangeError::range(token, reason))?;

        if lo > hi {
            return Err(RangeError::range(
                token,
                format!("octet range '{group}' is descending"),
            ));
        }
        lower[i] = lo;
        upper[i] = hi;
    }

    AddressRange::per_octet(Ipv4Addr::from(lower), Ipv4Addr::from(upper))
        .map_err(|e| RangeError::range(token, e.to_string()))
}

/// Strict dotted-decimal: exactly four octets, see [`parse_octet`].
fn parse_address(s: &str) -> std::result::Result<Ipv4Addr, String> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(format!("'{s}' has {} octets, expected 4", parts.len()));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_octet(part)?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Base-10 integer in `0..=255`: digits only, no sign, no leading zero.
fn parse_octet(s: &str) -> std::result::Result<u8, String> {
    if s.is_empty() {
        return Err("empty octet".to_string());
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("octet '{s}' is not a decimal number"));
    }
    if s.len() > 1 && s.starts_with('0') {
        return Err(format!("octet '{s}' has a leading zero"));
    }
    s.parse::<u8>()
        .map_err(|_| format!("octet '{s}' is greater than 255"))
}

/// The bare end of `a.b.c.d-n`. Unlike full octets, `05` is accepted as `5`.
fn parse_short_end(s: &str) -> std::result::Result<u8, String> {
    let digits = s.trim_start_matches('0');
    if digits.is_empty() && !s.is_empty() {
        return Ok(0);
    }
    parse_octet(digits)
}

fn parse_prefix(s: &str) -> std::result::Result<u8, String> {
    let prefix = parse_octet(s).map_err(|_| format!("prefix '{s}' is not a number"))?;
    if prefix > 32 {
        return Err(format!("prefix length {prefix} is outside 0..=32"));
    }
    Ok(prefix)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
