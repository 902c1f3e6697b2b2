use tracing::debug;

use super::error::SplitError;
use super::partition::{GroupView, Partition};
use super::prefix::{char_len, chars_eq, divergence_index, labels_eq, take_chars};

/// Separator placed between the start and end labels of a range.
pub const DEFAULT_SEPARATOR: &str = "->";

/// Derives range labels such as `"a"`, `"b->c"` or `"apro->azu"` for every
/// group of a partition from the group's boundary names and those of its
/// neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namer {
    separator: String,
}

impl Default for Namer {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

/// First and last item names of one group.
#[derive(Debug, Clone, Copy)]
struct Bounds<'a> {
    first: &'a str,
    last: &'a str,
}

impl Namer {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Compute the label of every group without touching the partition.
    pub fn labels<T>(&self, partition: &Partition<T>) -> Result<Vec<String>, SplitError> {
        let bounds = partition
            .groups()
            .enumerate()
            .map(|(index, group)| bounds_of(index, &group))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(last_index) = bounds.len().checked_sub(1) else {
            return Ok(Vec::new());
        };

        let starts = start_labels(&bounds);
        let mut labels = Vec::with_capacity(bounds.len());

        for (index, (group, start)) in bounds.iter().zip(&starts).enumerate() {
            let end = if index == last_index {
                final_end_label(group, start)
            } else {
                end_label(group, start, bounds[index + 1].first)
            };
            labels.push(self.join(start, end));
        }

        Ok(labels)
    }

    /// Label every group of `partition` in place.
    ///
    /// Labels are write-once; naming an already named partition again is a
    /// no-op as long as membership has not changed.
    pub fn assign<T>(&self, partition: &mut Partition<T>) -> Result<(), SplitError> {
        let labels = self.labels(partition)?;
        for (index, label) in labels.into_iter().enumerate() {
            debug!(group = index, label = %label, "named group");
            partition.set_name(index, label)?;
        }
        Ok(())
    }

    fn join(&self, start: &str, end: &str) -> String {
        if labels_eq(start, end) {
            start.to_string()
        } else {
            format!("{start}{}{end}", self.separator)
        }
    }
}

fn bounds_of<'a, T>(index: usize, group: &GroupView<'a, T>) -> Result<Bounds<'a>, SplitError> {
    match (group.first(), group.last()) {
        (Some(first), Some(last)) => Ok(Bounds {
            first: &first.name,
            last: &last.name,
        }),
        _ => Err(SplitError::invariant(format!(
            "group {index} has no items to name"
        ))),
    }
}

/// Start labels: the first character for the first group, then the first
/// `k + 1` characters of each group's first name, where `k` is where it
/// diverges from the previous group's last name.
fn start_labels<'a>(bounds: &[Bounds<'a>]) -> Vec<&'a str> {
    let mut starts = Vec::with_capacity(bounds.len());
    if let Some(first) = bounds.first() {
        starts.push(take_chars(first.first, 1));
    }
    for pair in bounds.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let k = divergence_index(current.first, previous.last);
        starts.push(take_chars(current.first, k + 1));
    }
    starts
}

/// End label of a group that has a successor.
fn end_label<'a>(group: &Bounds<'a>, start: &str, next_first: &str) -> &'a str {
    let mut end_len = divergence_index(group.last, next_first) + 1;
    let start_len = char_len(start);
    if start_len > end_len && same_leading_char(group.first, group.last) {
        end_len = start_len - 1;
    }
    take_chars(group.last, end_len)
}

/// End label of the last group, which has no successor to compare with.
fn final_end_label<'a>(group: &Bounds<'a>, start: &str) -> &'a str {
    if same_leading_char(start, group.last) {
        take_chars(group.last, char_len(start))
    } else {
        take_chars(group.last, 1)
    }
}

fn same_leading_char(a: &str, b: &str) -> bool {
    match (a.chars().next(), b.chars().next()) {
        (Some(x), Some(y)) => chars_eq(x, y),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "namer_test.rs"]
mod tests;
