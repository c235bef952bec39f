//! Inclusion checks for files and pruning checks for directories.

use crate::app::models::FinderConfig;
use regex::Regex;

/// Directory names used by version-control systems for their metadata.
pub const VCS_DIRECTORIES: [&str; 9] = [
    ".svn",
    "_svn",
    "CVS",
    "_darcs",
    ".arch-params",
    ".monotone",
    ".bzr",
    ".git",
    ".hg",
];

pub fn is_hidden(dir_name: &str) -> bool {
    dir_name.starts_with('.')
}

pub fn is_vcs(dir_name: &str) -> bool {
    VCS_DIRECTORIES.contains(&dir_name)
}

/// Whether the walker may descend into a directory with this name.
pub fn should_descend(dir_name: &str, exclude_hidden: bool, exclude_vcs: bool) -> bool {
    !(exclude_hidden && is_hidden(dir_name)) && !(exclude_vcs && is_vcs(dir_name))
}

/// Passes when no include pattern is configured or at least one matches.
pub fn matches_include(patterns: &[Regex], name: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|re| re.is_match(name))
}

/// Passes when no exclude pattern matches.
pub fn passes_exclude(patterns: &[Regex], name: &str) -> bool {
    !patterns.iter().any(|re| re.is_match(name))
}

/// Inclusive range check; a missing bound is not enforced.
pub fn within_size(min: Option<i64>, max: Option<i64>, size: u64) -> bool {
    let size = i64::try_from(size).unwrap_or(i64::MAX);
    min.map_or(true, |min| size >= min) && max.map_or(true, |max| size <= max)
}

/// Runs every file check against a bare file name and its size.
pub fn accepts_file(config: &FinderConfig, name: &str, size: u64) -> bool {
    matches_include(&config.include_patterns, name)
        && passes_exclude(&config.exclude_patterns, name)
        && within_size(config.min_size, config.max_size, size)
}
