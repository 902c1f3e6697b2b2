//! Bounded partitioning of sorted names into range-labelled groups.
//!
//! The [`Partitioner`] cuts a case-insensitively sorted item list into
//! contiguous groups of at most `max_group_size` items, optionally pulling a
//! group boundary back so that names sharing an extended prefix stay
//! together. The [`Namer`] then labels every group with a short range such
//! as `"a"`, `"b->c"` or `"apro->azu"`, derived from where its boundary names
//! diverge from those of the neighbouring groups.

mod error;
mod namer;
mod partition;
mod partitioner;
mod prefix;

use serde::{Deserialize, Serialize};

pub use error::SplitError;
pub use namer::{DEFAULT_SEPARATOR, Namer};
pub use partition::{Folder, GroupView, Item, Partition};
pub use partitioner::Partitioner;

/// Default upper bound on items per group.
pub const DEFAULT_MAX_GROUP_SIZE: usize = 100;

/// What to do when a single extended-prefix run does not fit in one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Close the group at exactly the maximum size and let the run continue
    /// in the next group.
    #[default]
    Split,
    /// Let the group grow past the maximum size until the run ends.
    Extend,
}

impl OverflowPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Extend => "extend",
        }
    }
}

/// Settings for one partition-and-name pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    pub max_group_size: usize,
    pub preserve_grouping: bool,
    pub overflow: OverflowPolicy,
    pub separator: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_group_size: DEFAULT_MAX_GROUP_SIZE,
            preserve_grouping: true,
            overflow: OverflowPolicy::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<(), SplitError> {
        Partitioner::from_config(self).map(|_| ())
    }
}

/// Partition `items` (sorted case-insensitively by name) and label every
/// group. Returns a fully named partition or an error, never a partial one.
pub fn plan<T>(items: Vec<Item<T>>, config: &SplitConfig) -> Result<Partition<T>, SplitError> {
    let partitioner = Partitioner::from_config(config)?;
    let mut partition = partitioner.partition(items)?;
    Namer::new(config.separator.as_str()).assign(&mut partition)?;
    Ok(partition)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
