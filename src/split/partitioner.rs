use std::ops::Range;

use tracing::{debug, warn};

use super::error::SplitError;
use super::partition::{Item, Partition};
use super::prefix::{char_len, common_prefix_len, prefix_eq, take_chars};
use super::{OverflowPolicy, SplitConfig};

/// Splits a sorted item list into groups of at most `max_size` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    max_size: usize,
    preserve_grouping: bool,
    overflow: OverflowPolicy,
}

impl Partitioner {
    /// Fails with [`SplitError::InvalidMaxSize`] when `max_size` is 0.
    pub fn new(
        max_size: usize,
        preserve_grouping: bool,
        overflow: OverflowPolicy,
    ) -> Result<Self, SplitError> {
        if max_size < 1 {
            return Err(SplitError::InvalidMaxSize(max_size));
        }
        Ok(Self {
            max_size,
            preserve_grouping,
            overflow,
        })
    }

    pub fn from_config(config: &SplitConfig) -> Result<Self, SplitError> {
        Self::new(
            config.max_group_size,
            config.preserve_grouping,
            config.overflow,
        )
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Group `items`, which must already be sorted case-insensitively by name.
    ///
    /// Every group is a contiguous slice of the input; the returned partition
    /// is unnamed.
    pub fn partition<T>(&self, items: Vec<Item<T>>) -> Result<Partition<T>, SplitError> {
        let ranges = self.group_ranges(&items);
        debug!(
            items = items.len(),
            groups = ranges.len(),
            "partitioned items"
        );
        Partition::from_ranges(items, ranges)
    }

    fn group_ranges<T>(&self, items: &[Item<T>]) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut cursor = 0;

        while cursor < items.len() {
            let start = cursor;
            let mut prefix_len = char_len(&items[start].name);
            cursor += 1;

            while cursor < items.len() && cursor - start < self.max_size {
                prefix_len = prefix_len.min(common_prefix_len(
                    &items[start].name,
                    &items[cursor].name,
                ));
                cursor += 1;
            }

            if self.preserve_grouping && cursor < items.len() {
                cursor = self.settle_boundary(items, start, cursor, prefix_len + 1);
            }

            ranges.push(start..cursor);
        }

        ranges
    }

    /// Decide where a full group `[start, end)` really ends so that the run
    /// sharing the group's extended prefix (`prefix_len` characters of its
    /// last item) does not straddle the boundary.
    ///
    /// Returns the new end, which is always greater than `start`.
    fn settle_boundary<T>(
        &self,
        items: &[Item<T>],
        start: usize,
        end: usize,
        prefix_len: usize,
    ) -> usize {
        let last = items[end - 1].name.as_str();
        let next = items[end].name.as_str();

        if !prefix_eq(last, next, prefix_len) {
            return end;
        }

        let mut keep = end - 1;
        while keep > start && prefix_eq(&items[keep].name, last, prefix_len) {
            keep -= 1;
        }

        if keep > start || !prefix_eq(&items[start].name, last, prefix_len) {
            let new_end = keep + 1;
            debug!(
                boundary = end,
                rolled_back = end - new_end,
                prefix = %take_chars(last, prefix_len),
                "moved prefix run into next group"
            );
            return new_end;
        }

        match self.overflow {
            OverflowPolicy::Split => {
                warn!(
                    prefix = %take_chars(last, prefix_len),
                    max_size = self.max_size,
                    "prefix run longer than max group size, splitting it"
                );
                end
            }
            OverflowPolicy::Extend => {
                let mut extended = end;
                while extended < items.len() && prefix_eq(&items[extended].name, last, prefix_len)
                {
                    extended += 1;
                }
                warn!(
                    prefix = %take_chars(last, prefix_len),
                    max_size = self.max_size,
                    size = extended - start,
                    "prefix run longer than max group size, growing group to keep it whole"
                );
                extended
            }
        }
    }
}

#[cfg(test)]
#[path = "partitioner_test.rs"]
mod tests;
