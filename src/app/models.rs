use regex::Regex;
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::PathBuf;

/// The filter state accumulated by a [`Finder`](crate::Finder).
#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub root: PathBuf,
    /// `None` means unbounded recursion.
    pub max_depth: Option<usize>,
    pub include_patterns: Vec<Regex>,
    pub exclude_patterns: Vec<Regex>,
    pub min_size: Option<i64>,
    pub max_size: Option<i64>,
    pub exclude_hidden: bool,
    pub exclude_vcs: bool,
}

impl FinderConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            min_size: None,
            max_size: None,
            exclude_hidden: false,
            exclude_vcs: false,
        }
    }
}

/// A single file discovered during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub size: u64,
    pub is_dir: bool,
}

impl Entry {
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }
}

/// A subtree the walker could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// Result of a walk: the matching files plus whatever was skipped on the way.
#[derive(Debug, Default)]
pub struct WalkReport {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedPath>,
}

/// Filter options as they appear in a preset file.
///
/// Sizes stay strings so they go through the same parser as the fluent calls.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FinderOptions {
    pub depth: Option<i64>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub min_size: Option<String>,
    pub max_size: Option<String>,
    pub exclude_hidden: bool,
    pub exclude_vcs: bool,
}
