//! Split sorted file names into size-bounded folders with range labels.
//!
//! ```
//! use foldsplit::{Item, SplitConfig, plan};
//!
//! let items = ["apple", "apricot", "banana", "cherry"]
//!     .into_iter()
//!     .map(Item::named)
//!     .collect();
//! let config = SplitConfig {
//!     max_group_size: 2,
//!     preserve_grouping: false,
//!     ..SplitConfig::default()
//! };
//! let folders = plan(items, &config)?.into_folders()?;
//! assert_eq!(folders[0].name, "a");
//! assert_eq!(folders[1].name, "b->c");
//! # Ok::<(), foldsplit::SplitError>(())
//! ```

pub mod config;
pub mod split;

pub use config::{Config, ConfigError};
pub use split::{
    DEFAULT_MAX_GROUP_SIZE, DEFAULT_SEPARATOR, Folder, GroupView, Item, Namer, OverflowPolicy,
    Partition, Partitioner, SplitConfig, SplitError, plan,
};
