//! Parsing of one input line into a [`Range`].
//!
//! Accepted notations:
//! - `a.b.c.d` - one address
//! - `a.b.c.d/n` - a CIDR block
//! - `lo-hi` - an explicit range, where each side may itself be `a.b.c.d/n`

use crate::error::CidrError;
use crate::models::{netmask, parse_address, Range, MAX_LENGTH};
use std::str::FromStr;

/// Parse one trimmed input line into a normalized range.
///
/// The low side is rounded down to the start of its block and the high side
/// rounded up to the block's broadcast address. Without `-` the single side
/// supplies both ends, so `10.0.0.0/24` covers the whole /24.
///
/// # Examples
/// ```
/// use cidr_merge::processing::parse_range;
/// let r = parse_range("10.0.0.7/24").unwrap();
/// assert_eq!((r.lo, r.hi), (0x0A000000, 0x0A0000FF));
/// assert!(parse_range("10.0.0.9-10.0.0.1").is_err());
/// ```
pub fn parse_range(line: &str) -> Result<Range, CidrError> {
    let (first, second) = match line.split_once('-') {
        Some((first, second)) => (first, Some(second)),
        None => (line, None),
    };

    let (addr, mask) = parse_cidr(first)?;
    let lo = addr & mask;
    let hi = match second {
        Some(second) => {
            let (addr, mask) = parse_cidr(second)?;
            addr | !mask
        }
        None => addr | !mask,
    };

    Range::new(lo, hi).map_err(|_| CidrError::InvalidRange(line.to_string()))
}

/// Split `addr[/prefix]` into the address and the netmask of its prefix.
fn parse_cidr(text: &str) -> Result<(u32, u32), CidrError> {
    let (addr, prefix) = match text.split_once('/') {
        Some((addr, prefix)) => (addr, parse_prefix(prefix)),
        None => (text, MAX_LENGTH),
    };
    Ok((parse_address(addr.trim())?, netmask(prefix)))
}

/// Read a prefix length the way C `atoi` would and clamp it into `0..=32`.
///
/// Leading whitespace and a sign are allowed, parsing stops at the first
/// non-digit, and no digits at all reads as 0. Out-of-range values are
/// clamped, never rejected.
fn parse_prefix(text: &str) -> u8 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    match digits.parse::<u32>() {
        Ok(value) => value.min(u32::from(MAX_LENGTH)) as u8,
        // More digits than fit in a u32 is certainly above 32.
        Err(_) => MAX_LENGTH,
    }
}

impl FromStr for Range {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Range, CidrError> {
        parse_range(s.trim())
    }
}
