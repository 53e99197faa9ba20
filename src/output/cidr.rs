//! Decomposition of an address range into minimal CIDR blocks.

use crate::error::CidrError;
use crate::models::{
    broadcast_addr, format_address, network_addr, parse_address, Range, MAX_LENGTH,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aligned block of `2^(32 - prefix)` addresses starting at `addr`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CidrBlock {
    /// Network address, aligned to the prefix.
    pub addr: u32,
    /// Prefix length (0-32).
    pub prefix: u8,
}

impl CidrBlock {
    /// Get the highest (broadcast) address in the block.
    pub fn broadcast(&self) -> u32 {
        broadcast_addr(self.addr, self.prefix)
    }

    pub fn range(&self) -> Range {
        Range {
            lo: self.addr,
            hi: self.broadcast(),
        }
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", format_address(self.addr), self.prefix)
    }
}

/// Strict `a.b.c.d/n` with `n <= 32` and the address aligned to `n`.
impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<CidrBlock, CidrError> {
        let (addr, prefix) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| CidrError::InvalidAddress(s.to_string()))?;
        let addr = parse_address(addr)?;
        let prefix: u8 = prefix
            .parse()
            .ok()
            .filter(|p| *p <= MAX_LENGTH)
            .ok_or_else(|| CidrError::InvalidAddress(s.to_string()))?;
        if network_addr(addr, prefix) != addr {
            return Err(CidrError::InvalidAddress(s.to_string()));
        }
        Ok(CidrBlock { addr, prefix })
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CidrBlock>()
            .map_err(|_| de::Error::custom(format!("invalid CIDR block: {s}")))
    }
}

/// Iterator over the minimal CIDR blocks covering a range, in address order.
#[derive(Debug, Clone)]
pub struct CidrBlocks {
    next: Option<u32>,
    hi: u32,
}

/// Split `range` into the fewest aligned CIDR blocks that cover it exactly.
///
/// # Examples
/// ```
/// use cidr_merge::models::Range;
/// use cidr_merge::output::cidr_blocks;
/// let blocks: Vec<String> = cidr_blocks(Range { lo: 0x0A000001, hi: 0x0A000004 })
///     .map(|b| b.to_string())
///     .collect();
/// assert_eq!(blocks, ["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/32"]);
/// ```
pub fn cidr_blocks(range: Range) -> CidrBlocks {
    CidrBlocks {
        next: Some(range.lo),
        hi: range.hi,
    }
}

impl Iterator for CidrBlocks {
    type Item = CidrBlock;

    fn next(&mut self) -> Option<CidrBlock> {
        let lo = self.next?;

        // Largest block first; /32 always fits since lo <= hi.
        let prefix = (0..=MAX_LENGTH)
            .find(|&p| network_addr(lo, p) == lo && broadcast_addr(lo, p) <= self.hi)
            .unwrap_or(MAX_LENGTH);
        let block = CidrBlock { addr: lo, prefix };

        // checked_add stops at 255.255.255.255 instead of wrapping to 0.
        self.next = block
            .broadcast()
            .checked_add(1)
            .filter(|&next| next <= self.hi);
        Some(block)
    }
}
