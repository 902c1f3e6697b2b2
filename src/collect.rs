use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use foldsplit::Item;

/// Include/exclude glob filter applied to item names.
#[derive(Debug, Default)]
pub struct NameFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl NameFilter {
    /// An empty `include` list keeps every name.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, globset::Error> {
        Ok(Self {
            include: build_set(include)?,
            exclude: build_set(exclude)?,
        })
    }

    pub fn accepts(&self, name: &str) -> bool {
        if self.include.as_ref().is_some_and(|set| !set.is_match(name)) {
            return false;
        }
        !self.exclude.as_ref().is_some_and(|set| set.is_match(name))
    }
}

fn build_set(patterns: &[String]) -> Result<Option<GlobSet>, globset::Error> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(Some(builder.build()?))
}

/// Name used for ordering: the final path component, or the whole line when
/// there is none (e.g. `..`).
pub fn item_name(path: &Path, line: &str) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| line.to_string())
}

/// Read one path per line, skipping blank lines and names the filter
/// rejects. Items come back in input order.
pub fn read_items<R: BufRead>(reader: R, filter: &NameFilter) -> io::Result<Vec<Item<PathBuf>>> {
    let mut items = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let path = PathBuf::from(trimmed);
        let name = item_name(&path, trimmed);
        if !filter.accepts(&name) {
            skipped += 1;
            continue;
        }
        items.push(Item::new(name, path));
    }

    debug!(kept = items.len(), skipped, "collected names");
    Ok(items)
}

/// Sort case-insensitively by name, breaking ties on the exact name so the
/// order is deterministic.
pub fn sort_items<T>(items: &mut [Item<T>]) {
    items.sort_by_cached_key(|item| (item.name.to_lowercase(), item.name.clone()));
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
