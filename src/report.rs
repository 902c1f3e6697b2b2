use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::report_helpers::{max_width, pad_right, print_json_stdout, separator};
use foldsplit::{Folder, OverflowPolicy, SplitConfig};

/// Totals and settings of one planning run.
#[derive(Debug, Serialize)]
pub struct PlanSummary {
    pub items: usize,
    pub folders: usize,
    pub largest_folder: usize,
    pub max_group_size: usize,
    pub preserve_grouping: bool,
    pub overflow: OverflowPolicy,
}

impl PlanSummary {
    pub fn new(folders: &[Folder<PathBuf>], config: &SplitConfig) -> Self {
        Self {
            items: folders.iter().map(|f| f.items.len()).sum(),
            folders: folders.len(),
            largest_folder: folders.iter().map(|f| f.items.len()).max().unwrap_or(0),
            max_group_size: config.max_group_size,
            preserve_grouping: config.preserve_grouping,
            overflow: config.overflow,
        }
    }

    /// Folders that grew past the maximum under the `extend` policy.
    pub fn oversized(&self) -> bool {
        self.largest_folder > self.max_group_size
    }
}

#[derive(Serialize)]
struct JsonFolder {
    name: String,
    count: usize,
    items: Vec<String>,
}

#[derive(Serialize)]
struct JsonPlan<'a> {
    summary: &'a PlanSummary,
    folders: Vec<JsonFolder>,
}

fn json_plan<'a>(summary: &'a PlanSummary, folders: &[Folder<PathBuf>]) -> JsonPlan<'a> {
    JsonPlan {
        summary,
        folders: folders
            .iter()
            .map(|f| JsonFolder {
                name: f.name.clone(),
                count: f.items.len(),
                items: f.items.iter().map(|p| p.display().to_string()).collect(),
            })
            .collect(),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn print_report(summary: &PlanSummary, folders: &[Folder<PathBuf>]) {
    if folders.is_empty() {
        println!("No names to split.");
        return;
    }

    let firsts: Vec<String> = folders
        .iter()
        .map(|f| f.items.first().map(|p| file_name(p)).unwrap_or_default())
        .collect();
    let lasts: Vec<String> = folders
        .iter()
        .map(|f| f.items.last().map(|p| file_name(p)).unwrap_or_default())
        .collect();

    let name_width = max_width(folders.iter().map(|f| f.name.as_str()), 6);
    let first_width = max_width(firsts.iter().map(String::as_str), 5);
    let last_width = max_width(lasts.iter().map(String::as_str), 4);
    let header_width = name_width + first_width + last_width + 12;
    let separator = separator(header_width.max(68));

    println!("{separator}");
    println!(
        " {} {:>6}  {}  Last",
        pad_right("Folder", name_width),
        "Items",
        pad_right("First", first_width)
    );
    println!("{separator}");

    for ((folder, first), last) in folders.iter().zip(&firsts).zip(&lasts) {
        println!(
            " {} {:>6}  {}  {}",
            pad_right(&folder.name, name_width),
            folder.items.len(),
            pad_right(first, first_width),
            last
        );
    }

    println!("{separator}");
    println!(
        " {} items in {} folders (max {} per folder, largest {})",
        summary.items, summary.folders, summary.max_group_size, summary.largest_folder
    );
    if summary.preserve_grouping {
        println!(
            " Prefix runs kept together; overflow policy: {}.",
            summary.overflow.as_str()
        );
    }
}

pub fn print_json(
    summary: &PlanSummary,
    folders: &[Folder<PathBuf>],
) -> Result<(), Box<dyn std::error::Error>> {
    print_json_stdout(&json_plan(summary, folders))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
