//! Long help text constants for CLI subcommands.
//!
//! Kept out of `cli.rs` so the argument definitions stay short.

/// Folder planning: grouping rules and label format.
pub const PLAN: &str = "\
Plan folders for a list of paths, one per line.

Names (the last path component) are sorted case-insensitively and cut into
consecutive folders of at most N items.

Prefix preservation (on by default):
  When a folder fills up, its common prefix plus one more character is the
  extended prefix. If the last name in the folder and the next name share
  it, the names carrying it are pushed into the next folder instead.
  A run too long for one folder is handled by --overflow:
    split   -- close the folder at N items (default)
    extend  -- let the folder grow until the run ends

Folder labels:
  Each folder is labelled with the shortest start and end prefixes that tell
  it apart from its neighbours, e.g.

    a          every name starts with 'a'
    b->c       names from 'b' up to 'c'
    apro->azu  names from 'apro' up to 'azu'

Settings are read from --config, or ./fsplit.toml when present; flags
override file values.

Examples:
  ls roms | fsplit plan -n 64                  # plan from stdin
  fsplit plan list.txt --include '*.atr' --json
  fsplit plan list.txt --no-preserve-grouping  # strict N per folder";
