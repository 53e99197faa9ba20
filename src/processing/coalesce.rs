//! Merging of sorted ranges into maximal disjoint runs.

use crate::models::Range;
use std::iter::Peekable;

/// Lazy single pass over `(lo, hi)`-sorted ranges yielding merged runs.
///
/// Each run is as long as possible: consecutive runs neither overlap nor
/// touch. The pass cannot be restarted; run it again over the same sorted
/// input to get the runs a second time.
#[derive(Debug, Clone)]
pub struct Coalesce<I: Iterator<Item = Range>> {
    ranges: Peekable<I>,
}

/// Coalesce ranges that are already sorted by `(lo, hi)`.
///
/// Unsorted input gives unspecified (but memory-safe) runs; feed it through
/// [`OrderedRangeSet`](crate::models::OrderedRangeSet) first.
pub fn coalesce<T>(sorted: T) -> Coalesce<T::IntoIter>
where
    T: IntoIterator<Item = Range>,
{
    Coalesce {
        ranges: sorted.into_iter().peekable(),
    }
}

impl<I: Iterator<Item = Range>> Iterator for Coalesce<I> {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        let first = self.ranges.next()?;
        let lo = first.lo;
        let mut hi = first.hi;

        // Nested or duplicate ranges add nothing.
        while self.ranges.next_if(|r| r.hi <= hi).is_some() {}

        // Overlapping or adjacent. Once hi is the top address nothing can
        // extend it, the saturating add only folds in what is left.
        while let Some(next) = self.ranges.next_if(|r| r.lo <= hi.saturating_add(1)) {
            hi = hi.max(next.hi);
        }

        log::trace!("run {}", Range { lo, hi });
        Some(Range { lo, hi })
    }
}
