//! # iprange common
//!
//! Parsing and expansion of human-written IPv4 range descriptions.
//!
//! * [`network::parser`] turns tokens like `10.0.0.1-5`, `192.168.0.0/16`,
//!   `172.16.*.*` or `10.0.0-2.5` into an [`AddressRange`].
//! * [`network::expand`] walks ranges and produces the addresses they denote.
//!
//! Everything here is pure and synchronous. Nothing logs; failures come back
//! as [`RangeError`] values.

pub mod config;
pub mod error;
pub mod network;

pub use error::{RangeError, Result};
pub use network::expand::Expand;
pub use network::parser::{parse, parse_list};
pub use network::range::{AddressIter, AddressRange, AddressRangeList, Layout};
