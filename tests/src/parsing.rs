#![cfg(test)]
use iprange_common::{AddressRange, AddressRangeList, Layout, RangeError, parse, parse_list};
use std::net::Ipv4Addr;

/// Every host address parses to a single-address range.
#[test]
fn host_addresses_are_single_ranges() {
    for addr in [
        Ipv4Addr::UNSPECIFIED,
        Ipv4Addr::LOCALHOST,
        Ipv4Addr::new(192, 168, 1, 1),
        Ipv4Addr::new(10, 255, 0, 9),
        Ipv4Addr::BROADCAST,
    ] {
        let range: AddressRange = parse(&addr.to_string()).unwrap();
        assert_eq!(range.first(), addr);
        assert_eq!(range.last(), addr);
    }
}

#[test]
fn short_hyphen_form_keeps_first_three_octets() {
    for (a, b) in [(0u8, 0u8), (1, 5), (10, 200), (254, 255)] {
        let range = parse(&format!("172.16.4.{a}-{b}")).unwrap();
        assert_eq!(range.first(), Ipv4Addr::new(172, 16, 4, a));
        assert_eq!(range.last(), Ipv4Addr::new(172, 16, 4, b));
    }
}

#[test]
fn trailing_wildcards_cover_the_block() {
    let range = parse("192.168.*.*").unwrap();
    assert_eq!(range.first(), Ipv4Addr::new(192, 168, 0, 0));
    assert_eq!(range.last(), Ipv4Addr::new(192, 168, 255, 255));
}

#[test]
fn documented_failures_have_their_kind() {
    assert!(matches!(parse("999.1.1.1"), Err(RangeError::InvalidRange { .. })));
    assert!(matches!(parse("10.0.0.5-3"), Err(RangeError::InvalidRange { .. })));
    assert!(matches!(parse("10.0.0.0/33"), Err(RangeError::InvalidCidr { .. })));
    assert!(matches!(parse("10.0.0.**9"), Err(RangeError::InvalidWildcardRange { .. })));
}

#[test]
fn list_normalizes_whitespace_and_newlines() {
    let list: AddressRangeList = parse_list(" 10.0.0.1, 10.0.0.2\n10.0.0.3 ").unwrap();
    let expected: Vec<AddressRange> = (1..=3)
        .map(|host| AddressRange::single(Ipv4Addr::new(10, 0, 0, host)))
        .collect();
    assert_eq!(list.as_slice(), expected.as_slice());
}

#[test]
fn list_failure_discards_everything() {
    let err = "10.0.0.1, 10.0.0.2, nonsense, 10.0.0.4"
        .parse::<AddressRangeList>()
        .unwrap_err();
    assert!(matches!(
        err,
        RangeError::InvalidRangeList { position: 3, .. }
    ));
    assert_eq!(err.token(), Some("nonsense"));
}

#[test]
fn mixed_forms_in_one_list() {
    let list = parse_list("10.0.0.0/30\n10.0.0-1.9, 172.16.*.1\n\n192.168.1.1-192.168.1.3,").unwrap();
    let layouts: Vec<Layout> = list.iter().map(|r| r.layout()).collect();
    assert_eq!(
        layouts,
        vec![
            Layout::Contiguous,
            Layout::PerOctet,
            Layout::Contiguous,
            Layout::Contiguous
        ]
    );
    assert!(list.contains(Ipv4Addr::new(10, 0, 1, 9)));
    assert!(!list.contains(Ipv4Addr::new(10, 0, 1, 8)));
    assert!(list.contains(Ipv4Addr::new(172, 16, 200, 0)));
}
