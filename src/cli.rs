//! CLI argument definitions for the `fsplit` command.
//!
//! Defines the subcommands, their arguments, and long help text
//! using the `clap` derive macros.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use foldsplit::{OverflowPolicy, SplitConfig};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "fsplit",
    version,
    about = "Split sorted file names into size-bounded, range-named folders"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Plan folders for a list of paths and print the result
    #[command(long_about = cli_help::PLAN)]
    Plan(PlanArgs),

    /// Print shell completions to stdout
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of the `plan` subcommand.
///
/// Split settings are optional so that values from the config file are
/// only overridden when a flag is actually given.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// File with one path per line (default: stdin, also with `-`)
    pub input: Option<PathBuf>,

    /// Maximum number of items per folder
    #[arg(short = 'n', long, value_name = "N")]
    pub max_group_size: Option<usize>,

    /// Keep names sharing an extended prefix in the same folder
    #[arg(long, overrides_with = "no_preserve_grouping")]
    pub preserve_grouping: bool,

    /// Fill every folder to the maximum size regardless of prefixes
    #[arg(long, overrides_with = "preserve_grouping")]
    pub no_preserve_grouping: bool,

    /// What to do with a prefix run longer than the maximum size
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,

    /// Text placed between the start and end of a folder label
    #[arg(long)]
    pub separator: Option<String>,

    /// Only keep names matching this glob (repeatable)
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Drop names matching this glob (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Config file (default: ./fsplit.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Log verbosity: 0 = warnings, 1 = progress, 2 = debug
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub verbosity: Option<u8>,
}

impl PlanArgs {
    /// `Some(true)`/`Some(false)` when one of the grouping flags was given.
    pub fn preserve_override(&self) -> Option<bool> {
        if self.preserve_grouping {
            Some(true)
        } else if self.no_preserve_grouping {
            Some(false)
        } else {
            None
        }
    }

    /// Apply command-line overrides on top of file settings.
    pub fn apply_to(&self, config: &mut SplitConfig) {
        if let Some(max) = self.max_group_size {
            config.max_group_size = max;
        }
        if let Some(preserve) = self.preserve_override() {
            config.preserve_grouping = preserve;
        }
        if let Some(overflow) = self.overflow {
            config.overflow = overflow;
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
    }

    /// Input path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
