//! Address range data model.
//!
//! - [`ipv4`] - dotted-quad text to host-order `u32` and netmask arithmetic
//! - [`Range`] - inclusive `[lo, hi]` address interval
//! - [`OrderedRangeSet`] - ranges kept sorted as they are inserted

mod ipv4;
mod range;
mod range_set;

// Re-export public types
pub use ipv4::{
    broadcast_addr, format_address, netmask, network_addr, parse_address, parse_address_lenient,
    MAX_LENGTH,
};
pub use range::Range;
pub use range_set::OrderedRangeSet;
