//! IPv4 address codec and netmask arithmetic.
//!
//! Addresses are carried around as host-order `u32` values so that ranges can
//! be compared and stepped with plain integer math. [`Ipv4Addr`] is only used
//! at the text boundary.

use crate::error::CidrError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-quad text into a host-order `u32`.
///
/// The strict `a.b.c.d` form is tried first. Anything else falls back to the
/// classic `inet_aton` shorthand, see [`parse_address_lenient`].
///
/// # Examples
/// ```
/// use cidr_merge::models::parse_address;
/// assert_eq!(parse_address("10.0.1.2").unwrap(), 0x0A000102);
/// assert!(parse_address("10.0.1.256").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<u32, CidrError> {
    if let Ok(addr) = text.parse::<Ipv4Addr>() {
        return Ok(u32::from(addr));
    }
    parse_address_lenient(text).ok_or_else(|| CidrError::InvalidAddress(text.to_string()))
}

/// Format a host-order `u32` as `a.b.c.d`.
pub fn format_address(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Convert a prefix length to a netmask with `prefix` leading one-bits.
///
/// `netmask(0)` is all zeros; a plain `u32::MAX << 32` would overflow.
///
/// # Examples
/// ```
/// use cidr_merge::models::netmask;
/// assert_eq!(netmask(0), 0);
/// assert_eq!(netmask(24), 0xFFFFFF00);
/// assert_eq!(netmask(32), u32::MAX);
/// ```
pub fn netmask(prefix: u8) -> u32 {
    debug_assert!(prefix <= MAX_LENGTH, "prefix /{prefix} is longer than /{MAX_LENGTH}");
    let right_len = u32::from(MAX_LENGTH.saturating_sub(prefix));
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// First address of the block of length `prefix` containing `addr`.
pub fn network_addr(addr: u32, prefix: u8) -> u32 {
    addr & netmask(prefix)
}

/// Last (broadcast) address of the block of length `prefix` containing `addr`.
pub fn broadcast_addr(addr: u32, prefix: u8) -> u32 {
    addr | !netmask(prefix)
}

lazy_static! {
    // One number of the inet_aton shorthand: hex, octal or decimal.
    static ref PART: Regex =
        Regex::new(r"^(?:0[xX][0-9a-fA-F]+|0[0-7]*|[1-9][0-9]*)$").expect("Invalid Regex?");
}

fn parse_part(part: &str) -> Option<u32> {
    if !PART.is_match(part) {
        return None;
    }
    if let Some(hex) = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if part.len() > 1 && part.starts_with('0') {
        u32::from_str_radix(&part[1..], 8).ok()
    } else {
        part.parse().ok()
    }
}

/// Parse the `inet_aton` shorthand forms.
///
/// One to four dot-separated numbers, each decimal, octal (leading `0`) or
/// hex (leading `0x`). Leading numbers fill one byte each and the last one
/// fills every remaining low-order byte, so `10.1` is `10.0.0.1` and
/// `127.65535` is `127.0.255.255`.
pub fn parse_address_lenient(text: &str) -> Option<u32> {
    let parts = text
        .split('.')
        .map(parse_part)
        .collect::<Option<Vec<u32>>>()?;
    let (last, leading) = parts.split_last()?;
    if leading.len() > 3 || leading.iter().any(|&p| p > 0xFF) {
        return None;
    }

    let free_bits = u32::from(MAX_LENGTH) - 8 * leading.len() as u32;
    if free_bits < 32 && last >> free_bits != 0 {
        return None;
    }

    let high = leading
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &p)| acc | p << (24 - 8 * i as u32));
    Some(high | last)
}
