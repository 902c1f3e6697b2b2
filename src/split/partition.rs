use std::ops::Range;

use serde::Serialize;

use super::error::SplitError;

/// A named unit to be grouped. Only `name` takes part in ordering and
/// labelling; `payload` travels with it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    pub name: String,
    pub payload: T,
}

impl<T> Item<T> {
    pub fn new(name: impl Into<String>, payload: T) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

impl Item<()> {
    /// An item that carries nothing besides its name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, ())
    }
}

/// A contiguous `[start, end)` slice of the partition's item arena plus its
/// label, which is assigned once after grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Group {
    pub range: Range<usize>,
    pub name: Option<String>,
}

/// Borrowed view of one group.
#[derive(Debug)]
pub struct GroupView<'a, T> {
    pub name: Option<&'a str>,
    pub items: &'a [Item<T>],
}

impl<'a, T> GroupView<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&'a Item<T>> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&'a Item<T>> {
        self.items.last()
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.items.iter().map(|item| item.name.as_str())
    }
}

/// A named group with owned payloads, ready for the stage that moves files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder<T> {
    pub name: String,
    pub items: Vec<T>,
}

/// Ordered sequence of groups covering a sorted item list exactly once.
#[derive(Debug, Clone)]
pub struct Partition<T> {
    items: Vec<Item<T>>,
    groups: Vec<Group>,
}

impl<T> Partition<T> {
    /// Build a partition from an item arena and group ranges, checking that
    /// the ranges are non-empty, contiguous and cover every item.
    pub(crate) fn from_ranges(
        items: Vec<Item<T>>,
        ranges: Vec<Range<usize>>,
    ) -> Result<Self, SplitError> {
        let mut expected_start = 0;
        for (index, range) in ranges.iter().enumerate() {
            if range.is_empty() {
                return Err(SplitError::invariant(format!("group {index} is empty")));
            }
            if range.start != expected_start {
                return Err(SplitError::invariant(format!(
                    "group {index} starts at item {} but the previous group ended at {expected_start}",
                    range.start
                )));
            }
            expected_start = range.end;
        }
        if expected_start != items.len() {
            return Err(SplitError::invariant(format!(
                "groups cover {expected_start} of {} items",
                items.len()
            )));
        }

        let groups = ranges
            .into_iter()
            .map(|range| Group { range, name: None })
            .collect();
        Ok(Self { items, groups })
    }

    /// Build a partition from consecutive group sizes, e.g. to label a
    /// grouping computed elsewhere.
    pub fn from_sizes(items: Vec<Item<T>>, sizes: &[usize]) -> Result<Self, SplitError> {
        let mut ranges = Vec::with_capacity(sizes.len());
        let mut start = 0usize;
        for (index, size) in sizes.iter().enumerate() {
            let end = start.checked_add(*size).ok_or_else(|| {
                SplitError::invariant(format!("group {index} of size {size} overflows"))
            })?;
            ranges.push(start..end);
            start = end;
        }
        Self::from_ranges(items, ranges)
    }

    /// Skips every range check, so tests can hand the namer shapes that
    /// `from_ranges` refuses.
    #[cfg(test)]
    pub(crate) fn from_ranges_unchecked(items: Vec<Item<T>>, ranges: Vec<Range<usize>>) -> Self {
        let groups = ranges
            .into_iter()
            .map(|range| Group { range, name: None })
            .collect();
        Self { items, groups }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn group(&self, index: usize) -> Option<GroupView<'_, T>> {
        self.groups.get(index).map(|group| self.view(group))
    }

    pub fn groups(&self) -> impl ExactSizeIterator<Item = GroupView<'_, T>> + '_ {
        self.groups.iter().map(|group| self.view(group))
    }

    /// All items in partition order.
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Size of the largest group, 0 for an empty partition.
    pub fn largest_group(&self) -> usize {
        self.groups.iter().map(|g| g.range.len()).max().unwrap_or(0)
    }

    /// True once every group carries a label.
    pub fn is_named(&self) -> bool {
        self.groups.iter().all(|g| g.name.is_some())
    }

    /// Store a label for group `index`. Labels are write-once: storing a
    /// different label over an existing one is an invariant violation.
    pub(crate) fn set_name(&mut self, index: usize, name: String) -> Result<(), SplitError> {
        let group = self
            .groups
            .get_mut(index)
            .ok_or_else(|| SplitError::invariant(format!("no group at index {index}")))?;
        match &group.name {
            Some(existing) if *existing != name => Err(SplitError::invariant(format!(
                "group {index} is already named {existing:?}, refusing {name:?}"
            ))),
            Some(_) => Ok(()),
            None => {
                group.name = Some(name);
                Ok(())
            }
        }
    }

    /// Consume the partition into `(name, payloads)` folders.
    ///
    /// Fails if any group has not been named yet.
    pub fn into_folders(self) -> Result<Vec<Folder<T>>, SplitError> {
        let mut items = self.items.into_iter();
        let mut folders = Vec::with_capacity(self.groups.len());

        for (index, group) in self.groups.into_iter().enumerate() {
            let name = group
                .name
                .ok_or_else(|| SplitError::invariant(format!("group {index} has no name")))?;
            let payloads: Vec<T> = items
                .by_ref()
                .take(group.range.len())
                .map(|item| item.payload)
                .collect();
            folders.push(Folder {
                name,
                items: payloads,
            });
        }

        Ok(folders)
    }

    fn view<'a>(&'a self, group: &'a Group) -> GroupView<'a, T> {
        GroupView {
            name: group.name.as_deref(),
            items: &self.items[group.range.clone()],
        }
    }
}

#[cfg(test)]
#[path = "partition_test.rs"]
mod tests;
