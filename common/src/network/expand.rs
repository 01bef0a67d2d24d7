//! # Range Expansion
//!
//! One [`Expand`] operation shared by a single [`AddressRange`] and an
//! [`AddressRangeList`]. Expanding a list is the concatenation of expanding
//! each of its ranges, in list order.
//!
//! Eager expansion costs memory proportional to the address count. Callers
//! that cannot afford that use [`Expand::addresses`] or bound the eager path
//! with [`Expand::expand_within`].

use std::iter::FlatMap;
use std::net::Ipv4Addr;
use std::slice;

use rayon::prelude::*;

use crate::error::{RangeError, Result};
use crate::network::range::{AddressIter, AddressRange, AddressRangeList};

pub trait Expand {
    type Addresses<'a>: Iterator<Item = Ipv4Addr>
    where
        Self: 'a;

    /// Lazily walks the addresses in order.
    fn addresses(&self) -> Self::Addresses<'_>;

    /// How many addresses [`Expand::addresses`] yields.
    fn address_count(&self) -> u64;

    /// Materializes every address as a dotted-decimal string.
    fn expand(&self) -> Vec<String> {
        self.addresses().map(|addr| addr.to_string()).collect()
    }

    /// Like [`Expand::expand`], but refuses up front when more than `limit` addresses would be produced.
    fn expand_within(&self, limit: u64) -> Result<Vec<String>> {
        check_limit(self.address_count(), limit)?;
        Ok(self.expand())
    }
}

impl Expand for AddressRange {
    type Addresses<'a>
        = AddressIter
    where
        Self: 'a;

    fn addresses(&self) -> Self::Addresses<'_> {
        self.iter()
    }

    fn address_count(&self) -> u64 {
        self.count()
    }
}

type RangeToAddresses = fn(&AddressRange) -> AddressIter;

impl Expand for AddressRangeList {
    type Addresses<'a>
        = FlatMap<slice::Iter<'a, AddressRange>, AddressIter, RangeToAddresses>
    where
        Self: 'a;

    fn addresses(&self) -> Self::Addresses<'_> {
        self.iter().flat_map(AddressRange::iter as RangeToAddresses)
    }

    fn address_count(&self) -> u64 {
        self.iter()
            .fold(0u64, |total, range| total.saturating_add(range.count()))
    }
}

impl AddressRangeList {
    /// Eager expansion with the ranges expanded on the rayon pool.
    ///
    /// Output order is the same as [`Expand::expand`].
    pub fn par_expand(&self) -> Vec<String> {
        self.as_slice()
            .par_iter()
            .map(|range| range.expand())
            .collect::<Vec<Vec<String>>>()
            .concat()
    }

    pub fn par_expand_within(&self, limit: u64) -> Result<Vec<String>> {
        check_limit(self.address_count(), limit)?;
        Ok(self.par_expand())
    }
}

fn check_limit(count: u64, limit: u64) -> Result<()> {
    if count > limit {
        return Err(RangeError::RangeTooLarge { count, limit });
    }
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
