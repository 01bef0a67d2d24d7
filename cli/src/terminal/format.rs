use colored::*;
use iprange_common::{AddressRange, Expand, Layout};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn range_to_details(range: &AddressRange) -> Vec<Detail> {
    let layout: &str = match range.layout() {
        Layout::Contiguous => "contiguous",
        Layout::PerOctet => "per-octet",
    };

    vec![
        (String::from("First"), addr_str(&range.first().to_string())),
        (String::from("Last"), addr_str(&range.last().to_string())),
        (String::from("Layout"), layout.normal()),
        (String::from("Count"), count_str(range.address_count())),
    ]
}

pub fn addr_str(addr: &str) -> ColoredString {
    addr.color(colors::IPV4_ADDR)
}

pub fn count_str(count: u64) -> ColoredString {
    count.to_string().color(colors::ACCENT).bold()
}
