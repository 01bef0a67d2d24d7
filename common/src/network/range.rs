//! # IPv4 Range Model
//!
//! An [`AddressRange`] is an inclusive `first..=last` pair of IPv4 addresses,
//! always ordered so that `first <= last` as big-endian 32-bit integers.
//!
//! Ranges come in two layouts:
//! * [`Layout::Contiguous`]: every address numerically between the bounds
//!   (`10.0.0.1-5`, `10.0.0.0/8`, `10.*.*.*`).
//! * [`Layout::PerOctet`]: each octet column varies independently between the
//!   matching octets of `first` and `last` (`10.0.0-2.5` holds three addresses).

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{RangeError, Result};
use crate::network::parser;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    Contiguous,
    PerOctet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressRange {
    first: Ipv4Addr,
    last: Ipv4Addr,
    layout: Layout,
}

impl AddressRange {
    /// Builds a contiguous range, rejecting `first > last`.
    pub fn new(first: Ipv4Addr, last: Ipv4Addr) -> Result<Self> {
        if u32::from(first) > u32::from(last) {
            return Err(RangeError::range(
                &format!("{first}-{last}"),
                "lower bound above upper bound",
            ));
        }
        Ok(Self {
            first,
            last,
            layout: Layout::Contiguous,
        })
    }

    pub fn single(addr: Ipv4Addr) -> Self {
        Self {
            first: addr,
            last: addr,
            layout: Layout::Contiguous,
        }
    }

    /// Builds a range whose octet columns vary independently.
    ///
    /// Every octet of `first` must be lower than or equal to the same octet of `last`.
    /// Grids that form one numeric block (`10.0.0-0.1-5`, `10.0.2-3.0-255`) are
    /// stored as [`Layout::Contiguous`].
    pub fn per_octet(first: Ipv4Addr, last: Ipv4Addr) -> Result<Self> {
        let descending = first
            .octets()
            .iter()
            .zip(last.octets())
            .any(|(lo, hi)| *lo > hi);
        if descending {
            return Err(RangeError::range(
                &format!("{first}-{last}"),
                "an octet column is descending",
            ));
        }

        let layout = if is_contiguous_block(first.octets(), last.octets()) {
            Layout::Contiguous
        } else {
            Layout::PerOctet
        };
        Ok(Self {
            first,
            last,
            layout,
        })
    }

    pub fn first(&self) -> Ipv4Addr {
        self.first
    }

    pub fn last(&self) -> Ipv4Addr {
        self.last
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        match self.layout {
            Layout::Contiguous => {
                let addr = u32::from(addr);
                u32::from(self.first) <= addr && addr <= u32::from(self.last)
            }
            Layout::PerOctet => {
                let (lo, hi) = (self.first.octets(), self.last.octets());
                addr.octets()
                    .iter()
                    .enumerate()
                    .all(|(i, octet)| lo[i] <= *octet && *octet <= hi[i])
            }
        }
    }

    /// Number of addresses in the range. Fits `u64` even for `0.0.0.0/0`.
    pub fn count(&self) -> u64 {
        match self.layout {
            Layout::Contiguous => u64::from(u32::from(self.last) - u32::from(self.first)) + 1,
            Layout::PerOctet => self
                .first
                .octets()
                .iter()
                .zip(self.last.octets())
                .map(|(lo, hi)| u64::from(hi - lo) + 1)
                .product(),
        }
    }

    /// Cursor over the range in ascending order, one address at a time.
    pub fn iter(&self) -> AddressIter {
        AddressIter {
            range: *self,
            next: Some(self.first),
        }
    }

    /// The address following `current`, or `None` once `current` is `last`.
    fn successor(&self, current: Ipv4Addr) -> Option<Ipv4Addr> {
        if current == self.last {
            return None;
        }
        let (floor, ceil) = match self.layout {
            Layout::Contiguous => ([0; 4], [u8::MAX; 4]),
            Layout::PerOctet => (self.first.octets(), self.last.octets()),
        };
        carry_increment(current.octets(), floor, ceil).map(Ipv4Addr::from)
    }
}

/// Whether an octet grid is one unbroken numeric block: every column after
/// the first differing one spans `0..=255`.
fn is_contiguous_block(lo: [u8; 4], hi: [u8; 4]) -> bool {
    match (0..4).find(|&i| lo[i] != hi[i]) {
        None => true,
        Some(i) => (i + 1..4).all(|j| lo[j] == 0 && hi[j] == u8::MAX),
    }
}

/// Adds one to `octets`, least significant byte first, wrapping each column
/// from its ceiling back to its floor and carrying into the next column.
fn carry_increment(mut octets: [u8; 4], floor: [u8; 4], ceil: [u8; 4]) -> Option<[u8; 4]> {
    for i in (0..4).rev() {
        if octets[i] < ceil[i] {
            octets[i] += 1;
            return Some(octets);
        }
        octets[i] = floor[i];
    }
    None
}

impl fmt::Display for AddressRange {
    /// Writes the range back as a token the parser accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout {
            Layout::Contiguous if self.is_single() => write!(f, "{}", self.first),
            Layout::Contiguous => write!(f, "{}-{}", self.first, self.last),
            Layout::PerOctet => {
                let (lo, hi) = (self.first.octets(), self.last.octets());
                for i in 0..4 {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    if lo[i] == hi[i] {
                        write!(f, "{}", lo[i])?;
                    } else {
                        write!(f, "{}-{}", lo[i], hi[i])?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl FromStr for AddressRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

/// Ascending cursor over one [`AddressRange`].
///
/// Stops strictly when the current address equals the range's `last`, so a
/// range ending at `255.255.255.255` terminates without wrapping.
#[derive(Clone, Debug)]
pub struct AddressIter {
    range: AddressRange,
    next: Option<Ipv4Addr>,
}

impl Iterator for AddressIter {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.range.successor(current);
        Some(current)
    }
}

impl std::iter::FusedIterator for AddressIter {}

/// Ordered ranges, in the order they appeared in the input text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressRangeList {
    ranges: Vec<AddressRange>,
}

impl AddressRangeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRange> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[AddressRange] {
        &self.ranges
    }

    /// Whether any range of the list covers `addr`.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.ranges.iter().any(|range| range.contains(addr))
    }

    /// Ranges covering `addr`, with their position in the list.
    pub fn matching(&self, addr: Ipv4Addr) -> impl Iterator<Item = (usize, &AddressRange)> {
        self.ranges
            .iter()
            .enumerate()
            .filter(move |(_, range)| range.contains(addr))
    }
}

impl From<Vec<AddressRange>> for AddressRangeList {
    fn from(ranges: Vec<AddressRange>) -> Self {
        Self { ranges }
    }
}

impl FromIterator<AddressRange> for AddressRangeList {
    fn from_iter<I: IntoIterator<Item = AddressRange>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressRangeList {
    type Item = AddressRange;
    type IntoIter = std::vec::IntoIter<AddressRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressRangeList {
    type Item = &'a AddressRange;
    type IntoIter = std::slice::Iter<'a, AddressRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl fmt::Display for AddressRangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl FromStr for AddressRangeList {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_list(s)
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
