//! Inclusive IPv4 address range.

use super::ipv4::format_address;
use crate::error::CidrError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Inclusive interval `[lo, hi]` of host-order addresses, with `lo <= hi`.
///
/// Ordering is by `lo` first and `hi` second, which is the order ranges are
/// kept in by [`OrderedRangeSet`](super::OrderedRangeSet).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    /// Lowest address in the range.
    pub lo: u32,
    /// Highest address in the range.
    pub hi: u32,
}

impl Range {
    /// Create a range, failing with [`CidrError::InvalidRange`] if `hi < lo`.
    pub fn new(lo: u32, hi: u32) -> Result<Range, CidrError> {
        if hi < lo {
            return Err(CidrError::InvalidRange(format!(
                "{}-{}",
                format_address(lo),
                format_address(hi)
            )));
        }
        Ok(Range { lo, hi })
    }

    /// Number of addresses covered. `0.0.0.0/0` needs 33 bits.
    pub fn num_addresses(&self) -> u64 {
        u64::from(self.hi - self.lo) + 1
    }

    pub fn contains(&self, addr: u32) -> bool {
        self.lo <= addr && addr <= self.hi
    }
}

/// `lo` alone for a single address, `lo-hi` otherwise.
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.lo == self.hi {
            write!(f, "{}", format_address(self.lo))
        } else {
            write!(f, "{}-{}", format_address(self.lo), format_address(self.hi))
        }
    }
}

impl Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Range, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Range>()
            .map_err(|e: CidrError| de::Error::custom(format!("invalid range {s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_new() {
        assert_eq!(Range::new(1, 2).unwrap(), Range { lo: 1, hi: 2 });
        assert_eq!(Range::new(7, 7).unwrap(), Range { lo: 7, hi: 7 });
        let err = Range::new(0xC0A8010A, 0xC0A80105).unwrap_err();
        assert_eq!(
            err.to_string(),
            "range ends are reversed: 192.168.1.10-192.168.1.5"
        );
    }

    #[test]
    fn test_range_cmp() {
        let a = Range { lo: 1, hi: 5 };
        let b = Range { lo: 1, hi: 9 };
        let c = Range { lo: 2, hi: 3 };
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(a, Range { lo: 1, hi: 5 });
    }

    #[test]
    fn test_range_size_and_contains() {
        assert_eq!(Range { lo: 9, hi: 9 }.num_addresses(), 1);
        assert_eq!(Range { lo: 0, hi: u32::MAX }.num_addresses(), 1 << 32);
        let r = Range { lo: 10, hi: 20 };
        assert!(r.contains(10));
        assert!(r.contains(20));
        assert!(!r.contains(9));
        assert!(!r.contains(21));
    }

    #[test]
    fn test_range_display() {
        assert_eq!(Range { lo: 0xC0A80105, hi: 0xC0A80105 }.to_string(), "192.168.1.5");
        assert_eq!(
            Range { lo: 0xC0A80105, hi: 0xC0A8010A }.to_string(),
            "192.168.1.5-192.168.1.10"
        );
    }

    #[test]
    fn test_range_serde() {
        let r = Range { lo: 0x0A000000, hi: 0x0A0000FF };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""10.0.0.0-10.0.0.255""#);
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r);
        assert_eq!(
            serde_json::from_str::<Range>(r#""10.0.0.0/24""#).unwrap(),
            r
        );
        assert!(serde_json::from_str::<Range>(r#""10.0.0.9-10.0.0.1""#).is_err());
    }
}
