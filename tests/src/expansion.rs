#![cfg(test)]
use iprange_common::{AddressRange, Expand, parse, parse_list};
use std::net::Ipv4Addr;

fn as_u32(s: &str) -> u32 {
    u32::from(s.parse::<Ipv4Addr>().unwrap())
}

#[test]
fn cidr_expansion_has_block_size_and_endpoints() {
    for prefix in 16u32..=32 {
        let token = format!("10.1.2.3/{prefix}");
        let range = parse(&token).unwrap();
        let addrs = range.expand();

        assert_eq!(addrs.len() as u64, 1u64 << (32 - prefix), "{token}");

        let mask: u32 = if prefix == 0 { 0 } else { u32::MAX << (32 - prefix) };
        let network = Ipv4Addr::from(as_u32("10.1.2.3") & mask);
        let broadcast = Ipv4Addr::from(u32::from(network) | !mask);
        assert_eq!(addrs.first().map(String::as_str), Some(network.to_string().as_str()));
        assert_eq!(addrs.last().map(String::as_str), Some(broadcast.to_string().as_str()));
    }
}

#[test]
fn contiguous_expansion_is_strictly_increasing() {
    for token in ["10.0.0.250-10.0.1.5", "192.168.0.0/23", "172.16.3.*", "255.255.255.0-255"] {
        let range: AddressRange = parse(token).unwrap();
        let addrs = range.expand();
        let values: Vec<u32> = addrs.iter().map(|a| as_u32(a)).collect();

        assert!(values.windows(2).all(|w| w[0] < w[1]), "{token}");
        assert_eq!(values.first().copied(), Some(u32::from(range.first())));
        assert_eq!(values.last().copied(), Some(u32::from(range.last())));
        assert_eq!(
            values.len() as u64,
            u64::from(u32::from(range.last()) - u32::from(range.first())) + 1
        );
    }
}

#[test]
fn per_octet_expansion_scopes_carry_to_columns() {
    let range = parse("10.0.0-2.5").unwrap();
    assert_eq!(range.expand(), vec!["10.0.0.5", "10.0.1.5", "10.0.2.5"]);

    let grid = parse("10.0-1.0-1.1-2").unwrap();
    assert_eq!(grid.address_count(), 8);
    let values: Vec<u32> = grid.expand().iter().map(|a| as_u32(a)).collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn broadcast_single_terminates() {
    let range = parse("255.255.255.255").unwrap();
    assert_eq!(range.expand(), vec!["255.255.255.255"]);
}

#[test]
fn list_expansion_concatenates() -> anyhow::Result<()> {
    let list = parse_list("10.0.0.3-4\n10.0.0.1, 10.0.0.3-4")?;
    assert_eq!(
        list.expand(),
        vec!["10.0.0.3", "10.0.0.4", "10.0.0.1", "10.0.0.3", "10.0.0.4"]
    );
    assert_eq!(list.par_expand(), list.expand());
    assert_eq!(list.addresses().count() as u64, list.address_count());
    Ok(())
}

#[test]
fn full_space_is_counted_not_materialized() {
    let range = parse("0.0.0.0/0").unwrap();
    assert_eq!(range.address_count(), 1u64 << 32);
    assert!(range.expand_within(1 << 20).is_err());
    assert_eq!(range.addresses().nth(65_536), Some(Ipv4Addr::new(0, 1, 0, 0)));
}
