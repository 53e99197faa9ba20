//! Sorted collection of ranges awaiting coalescing.

use super::Range;
use crate::processing::{coalesce, Coalesce};
use itertools::Itertools;
use std::{slice, vec};

/// Ranges kept in ascending `(lo, hi)` order as they are inserted.
///
/// Duplicates are kept. The set is consumed whole by [`coalesce`](Self::coalesce).
#[derive(Debug, Default, Clone)]
pub struct OrderedRangeSet {
    ranges: Vec<Range>,
}

impl OrderedRangeSet {
    pub fn new() -> OrderedRangeSet {
        OrderedRangeSet { ranges: Vec::new() }
    }

    /// Insert before the first range that is `>=` the new one.
    pub fn insert(&mut self, range: Range) {
        let at = self.ranges.partition_point(|r| *r < range);
        log::trace!("insert {range} at {at}/{}", self.ranges.len());
        self.ranges.insert(at, range);
        debug_assert!(self.ranges.iter().tuple_windows().all(|(a, b)| a <= b));
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    /// Merge everything into maximal disjoint runs, see [`Coalesce`].
    pub fn coalesce(self) -> Coalesce<vec::IntoIter<Range>> {
        coalesce(self)
    }
}

impl IntoIterator for OrderedRangeSet {
    type Item = Range;
    type IntoIter = vec::IntoIter<Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl Extend<Range> for OrderedRangeSet {
    fn extend<T: IntoIterator<Item = Range>>(&mut self, iter: T) {
        for range in iter {
            self.insert(range);
        }
    }
}

impl FromIterator<Range> for OrderedRangeSet {
    fn from_iter<T: IntoIterator<Item = Range>>(iter: T) -> Self {
        let mut set = OrderedRangeSet::new();
        set.extend(iter);
        set
    }
}
