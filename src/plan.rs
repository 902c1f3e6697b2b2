use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::collect::{NameFilter, read_items, sort_items};
use crate::report::{PlanSummary, print_json, print_report};
use foldsplit::{Folder, SplitConfig};

fn open_input(input: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match input {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Collect, sort, partition and name. Nothing is printed.
pub fn build<R: BufRead>(
    reader: R,
    filter: &NameFilter,
    config: &SplitConfig,
) -> Result<Vec<Folder<PathBuf>>, Box<dyn Error>> {
    config.validate()?;

    let mut items = read_items(reader, filter)?;
    sort_items(&mut items);

    let folders = foldsplit::plan(items, config)?.into_folders()?;
    Ok(folders)
}

pub fn run(
    input: Option<&Path>,
    filter: &NameFilter,
    config: &SplitConfig,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let reader = open_input(input).map_err(|err| -> Box<dyn Error> {
        match input {
            Some(path) => format!("{}: {err}", path.display()).into(),
            None => err.into(),
        }
    })?;

    let folders = build(reader, filter, config)?;
    let summary = PlanSummary::new(&folders, config);

    info!(
        items = summary.items,
        folders = summary.folders,
        largest = summary.largest_folder,
        "planned folders"
    );
    if summary.oversized() {
        warn!(
            largest = summary.largest_folder,
            max = summary.max_group_size,
            "some folders exceed the maximum size to keep prefix runs whole"
        );
    }

    if json {
        print_json(&summary, &folders)?;
    } else {
        print_report(&summary, &folders);
    }

    Ok(())
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
