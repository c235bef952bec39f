use crate::app::models::{Entry, FinderConfig, SkippedPath, WalkReport};
use crate::app::predicate::{accepts_file, should_descend};
use ignore::{DirEntry, WalkBuilder};

pub struct Scanner<'a> {
    config: &'a FinderConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a FinderConfig) -> Self {
        Self { config }
    }

    /// Walks the whole tree depth-first and materializes every matching file.
    ///
    /// Unreadable subtrees contribute nothing; they are logged and listed in
    /// [`WalkReport::skipped`]. Ordering follows the directory listing.
    pub fn scan(&self) -> WalkReport {
        let mut report = WalkReport::default();
        let exclude_hidden = self.config.exclude_hidden;
        let exclude_vcs = self.config.exclude_vcs;

        // Files sit one level below the deepest directory we may enter.
        let max_depth = self.config.max_depth.map(|depth| depth.saturating_add(1));

        log::debug!(
            "Walking {} (max depth {:?})",
            self.config.root.display(),
            self.config.max_depth
        );

        let walker = WalkBuilder::new(&self.config.root)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(max_depth)
            .filter_entry(move |entry| {
                !is_dir(entry)
                    || should_descend(
                        &entry.file_name().to_string_lossy(),
                        exclude_hidden,
                        exclude_vcs,
                    )
            })
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(found) = self.process_entry(entry, &mut report) {
                        report.entries.push(found);
                    }
                }
                Err(err) => {
                    log::warn!("Skipping unreadable path: {}", err);
                    report.skipped.push(SkippedPath {
                        path: error_path(&err),
                        reason: err.to_string(),
                    });
                }
            }
        }

        log::debug!(
            "Walk of {} found {} files, skipped {} paths",
            self.config.root.display(),
            report.entries.len(),
            report.skipped.len()
        );
        report
    }

    fn process_entry(&self, entry: DirEntry, report: &mut WalkReport) -> Option<Entry> {
        // Directories are traversal state only, including the root itself.
        if is_dir(&entry) || entry.depth() == 0 {
            return None;
        }

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                log::warn!("Cannot stat {}: {}", entry.path().display(), err);
                report.skipped.push(SkippedPath {
                    path: Some(entry.path().to_path_buf()),
                    reason: err.to_string(),
                });
                return None;
            }
        };

        let name = entry.file_name().to_string_lossy();
        if !accepts_file(self.config, &name, size) {
            return None;
        }

        Some(Entry {
            path: entry.into_path(),
            size,
            is_dir: false,
        })
    }
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().map_or(false, |ft| ft.is_dir())
}

fn error_path(err: &ignore::Error) -> Option<std::path::PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
