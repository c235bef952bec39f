use crate::app::error::FinderError;
use crate::app::models::{Entry, FinderConfig, FinderOptions, WalkReport};
use crate::app::scanner::Scanner;
use crate::app::size::parse_size;
use regex::Regex;
use std::fs;
use std::path::{is_separator, Path, PathBuf};

/// Fluent file finder.
///
/// Configuration calls never fail outright: a failure is recorded on the
/// finder (the last one wins) and chaining continues. Inspect it with
/// [`Finder::error`] or [`Finder::check`]. [`Finder::get`] ignores it.
///
/// ```no_run
/// use dirfinder::Finder;
///
/// let files = Finder::new("/home/me/project")
///     .depth(2)
///     .include_name(r"\.rs$")
///     .exclude_vcs()
///     .get();
/// ```
#[derive(Debug)]
pub struct Finder {
    config: FinderConfig,
    error: Option<FinderError>,
}

impl Finder {
    /// Creates a finder rooted at `path`.
    ///
    /// Surrounding whitespace and one trailing separator are removed; a root
    /// that is not valid UTF-8 is kept verbatim. The root must exist and be a
    /// directory (symlinks are followed), otherwise the error is recorded.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root = match path.to_str() {
            Some(text) => PathBuf::from(normalize_root(text)),
            None => path.to_path_buf(),
        };
        let error = match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => None,
            Ok(_) => Some(FinderError::NotADirectory(root.clone())),
            Err(source) => Some(FinderError::Io {
                path: root.clone(),
                source,
            }),
        };
        if let Some(err) = &error {
            log::debug!("Finder root rejected: {}", err);
        }

        Self {
            config: FinderConfig::new(root),
            error,
        }
    }

    /// Limits recursion; `0` only looks at the root directory itself.
    pub fn depth(mut self, depth: i64) -> Self {
        match usize::try_from(depth) {
            Ok(depth) => self.config.max_depth = Some(depth),
            Err(_) => self.record(FinderError::NegativeDepth(depth)),
        }
        self
    }

    /// Only keep files whose name matches this pattern (or any other include).
    pub fn include_name(mut self, pattern: &str) -> Self {
        match compile(pattern) {
            Ok(re) => self.config.include_patterns.push(re),
            Err(err) => self.record(err),
        }
        self
    }

    pub fn include_names<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .fold(self, |finder, pattern| finder.include_name(pattern.as_ref()))
    }

    /// Drop files whose name matches this pattern.
    pub fn exclude_name(mut self, pattern: &str) -> Self {
        match compile(pattern) {
            Ok(re) => self.config.exclude_patterns.push(re),
            Err(err) => self.record(err),
        }
        self
    }

    pub fn exclude_names<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .fold(self, |finder, pattern| finder.exclude_name(pattern.as_ref()))
    }

    /// Smallest accepted file size, e.g. `"230"`, `"1 K"`, `"2 Gi"`.
    ///
    /// An unparsable size still resets the bound to `0`. A size above the
    /// current maximum is rejected and the previous minimum kept.
    pub fn min_size(mut self, size: &str) -> Self {
        match parse_size(size) {
            Ok(min) => match self.config.max_size {
                Some(max) if min > max => {
                    self.record(FinderError::SizeBoundsConflict { min, max })
                }
                _ => self.config.min_size = Some(min),
            },
            Err(err) => {
                self.config.min_size = Some(0);
                self.record(err);
            }
        }
        self
    }

    /// Largest accepted file size; see [`Finder::min_size`].
    pub fn max_size(mut self, size: &str) -> Self {
        match parse_size(size) {
            Ok(max) => match self.config.min_size {
                Some(min) if max < min => {
                    self.record(FinderError::SizeBoundsConflict { min, max })
                }
                _ => self.config.max_size = Some(max),
            },
            Err(err) => {
                self.config.max_size = Some(0);
                self.record(err);
            }
        }
        self
    }

    /// Do not descend into directories whose name starts with a dot.
    pub fn exclude_hidden(mut self) -> Self {
        self.config.exclude_hidden = true;
        self
    }

    /// Do not descend into version-control metadata directories.
    pub fn exclude_vcs(mut self) -> Self {
        self.config.exclude_vcs = true;
        self
    }

    /// Replays preset options through the fluent calls above.
    pub fn apply(self, options: &FinderOptions) -> Self {
        let mut finder = self;
        if let Some(depth) = options.depth {
            finder = finder.depth(depth);
        }
        finder = finder
            .include_names(&options.include)
            .exclude_names(&options.exclude);
        if let Some(min) = &options.min_size {
            finder = finder.min_size(min);
        }
        if let Some(max) = &options.max_size {
            finder = finder.max_size(max);
        }
        if options.exclude_hidden {
            finder = finder.exclude_hidden();
        }
        if options.exclude_vcs {
            finder = finder.exclude_vcs();
        }
        finder
    }

    /// Returns every matching file. Any recorded error is ignored.
    pub fn get(&self) -> Vec<Entry> {
        self.walk().entries
    }

    /// Like [`Finder::get`], also reporting subtrees that could not be read.
    pub fn walk(&self) -> WalkReport {
        Scanner::new(&self.config).scan()
    }

    pub fn error(&self) -> Option<&FinderError> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn take_error(&mut self) -> Option<FinderError> {
        self.error.take()
    }

    pub fn check(&self) -> Result<&Self, &FinderError> {
        match &self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.config.max_depth
    }

    pub fn include_patterns(&self) -> &[Regex] {
        &self.config.include_patterns
    }

    pub fn exclude_patterns(&self) -> &[Regex] {
        &self.config.exclude_patterns
    }

    pub fn min_bound(&self) -> Option<i64> {
        self.config.min_size
    }

    pub fn max_bound(&self) -> Option<i64> {
        self.config.max_size
    }

    pub fn excludes_hidden(&self) -> bool {
        self.config.exclude_hidden
    }

    pub fn excludes_vcs(&self) -> bool {
        self.config.exclude_vcs
    }

    fn record(&mut self, err: FinderError) {
        log::debug!("Finder configuration error: {}", err);
        self.error = Some(err);
    }
}

fn compile(pattern: &str) -> Result<Regex, FinderError> {
    Regex::new(pattern).map_err(|source| FinderError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn normalize_root(path: &str) -> String {
    let trimmed = path.trim();
    let mut chars = trimmed.chars();
    match chars.next_back() {
        Some(last) if is_separator(last) && trimmed.len() > 1 => chars.as_str().to_string(),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("f1")).unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        (dir, root)
    }

    #[test]
    fn normalizes_root() {
        assert_eq!(normalize_root("fixture"), "fixture");
        assert_eq!(normalize_root("fixture/"), "fixture");
        assert_eq!(normalize_root(" fixture/f1/    "), "fixture/f1");
        assert_eq!(normalize_root("fixture//"), "fixture/");
        assert_eq!(normalize_root("/"), "/");
    }

    #[test]
    fn construct_accepts_directories() {
        let (_dir, root) = fixture();
        let finder = Finder::new(format!(" {root}/f1/  "));
        assert!(finder.error().is_none());
        assert_eq!(finder.root(), Path::new(&format!("{root}/f1")));
        assert_eq!(finder.max_depth(), None);
        assert_eq!(finder.min_bound(), None);
        assert_eq!(finder.max_bound(), None);
    }

    #[test]
    fn construct_takes_paths() {
        let (dir, _root) = fixture();
        let finder = Finder::new(dir.path().join("f1"));
        assert!(finder.check().is_ok());
        assert_eq!(finder.root(), dir.path().join("f1"));
    }

    #[cfg(unix)]
    #[test]
    fn construct_keeps_non_utf8_roots() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (dir, _root) = fixture();
        let odd = dir.path().join(OsStr::from_bytes(b"odd\xff"));
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("a.txt"), "x").unwrap();

        let finder = Finder::new(&odd);
        assert!(finder.check().is_ok());
        assert_eq!(finder.root(), odd.as_path());
        assert_eq!(finder.get().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn construct_follows_symlinked_roots() {
        let (dir, root) = fixture();
        fs::write(dir.path().join("f1/inside.txt"), "x").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("f1"), &link).unwrap();

        let finder = Finder::new(&link);
        assert!(finder.check().is_ok());
        assert_eq!(finder.get().len(), 1);

        fs::write(dir.path().join("plain.txt"), "x").unwrap();
        std::os::unix::fs::symlink(format!("{root}/plain.txt"), dir.path().join("file_link"))
            .unwrap();
        let finder = Finder::new(dir.path().join("file_link"));
        assert_eq!(
            finder.error().map(FinderError::kind),
            Some(ErrorKind::NotADirectory)
        );
    }

    #[test]
    fn construct_rejects_missing_and_files() {
        let (dir, root) = fixture();
        let missing = Finder::new(format!("{root}/fake"));
        assert_eq!(missing.error().map(FinderError::kind), Some(ErrorKind::Io));

        fs::write(dir.path().join("plain.txt"), "x").unwrap();
        let file = Finder::new(format!("{root}/plain.txt"));
        assert_eq!(
            file.error().map(FinderError::kind),
            Some(ErrorKind::NotADirectory)
        );
    }

    #[test]
    fn depth_rejects_negative_values() {
        let (_dir, root) = fixture();
        for depth in [0, 1, 10] {
            let finder = Finder::new(&root).depth(depth);
            assert!(finder.check().is_ok());
            assert_eq!(finder.max_depth(), Some(depth as usize));
        }
        for depth in [-1, -10] {
            let finder = Finder::new(&root).depth(depth);
            assert_eq!(
                finder.error().map(FinderError::kind),
                Some(ErrorKind::InvalidArgument)
            );
            assert_eq!(finder.max_depth(), None);
        }
    }

    #[test]
    fn single_patterns() {
        let (_dir, root) = fixture();
        let ok = Finder::new(&root).include_name("test");
        assert!(!ok.has_error());
        assert_eq!(ok.include_patterns().len(), 1);

        let bad = Finder::new(&root).exclude_name("(*");
        assert_eq!(
            bad.error().map(FinderError::kind),
            Some(ErrorKind::InvalidArgument)
        );
        assert!(bad.exclude_patterns().is_empty());
    }

    #[test]
    fn batch_keeps_successes_and_last_failure() {
        let (_dir, root) = fixture();
        let finder = Finder::new(&root).include_names(["(*", "test1", "[", "test2"]);
        assert_eq!(finder.include_patterns().len(), 2);
        match finder.error() {
            Some(FinderError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "["),
            other => panic!("unexpected error: {other:?}"),
        }

        let finder = Finder::new(&root).exclude_names(vec!["test1".to_string(), "test2".into()]);
        assert!(!finder.has_error());
        assert_eq!(finder.exclude_patterns().len(), 2);
    }

    #[test]
    fn successful_batch_does_not_clear_earlier_error() {
        let (_dir, root) = fixture();
        let finder = Finder::new(&root).depth(-1).include_names(["a", "b"]);
        assert!(matches!(finder.error(), Some(FinderError::NegativeDepth(-1))));
    }

    #[test]
    fn size_bound_round_trip() {
        let (_dir, root) = fixture();
        for text in ["1", "1 K", "1 Ki", "100 Mi", "12 Gi"] {
            let finder = Finder::new(&root).min_size(text);
            assert!(!finder.has_error());
            assert_eq!(finder.min_bound(), Some(parse_size(text).unwrap()));
        }
    }

    #[test]
    fn failed_parse_resets_bound_to_zero() {
        let (_dir, root) = fixture();
        let finder = Finder::new(&root).max_size("10").max_size("12G");
        assert_eq!(
            finder.error().map(FinderError::kind),
            Some(ErrorKind::InvalidArgument)
        );
        assert_eq!(finder.max_bound(), Some(0));
    }

    #[test]
    fn conflicting_bounds_are_rejected() {
        let (_dir, root) = fixture();
        let finder = Finder::new(&root).min_size("2 K").max_size("1 K");
        assert_eq!(finder.error().map(FinderError::kind), Some(ErrorKind::Logic));
        assert_eq!(finder.min_bound(), Some(2_000));
        assert_eq!(finder.max_bound(), None);

        let finder = Finder::new(&root).max_size("1 K").min_size("1 Ki");
        assert_eq!(finder.error().map(FinderError::kind), Some(ErrorKind::Logic));
        assert_eq!(finder.min_bound(), None);
        assert_eq!(finder.max_bound(), Some(1_000));

        let finder = Finder::new(&root).min_size("1 K").max_size("1 K");
        assert!(finder.check().is_ok());
    }

    #[test]
    fn apply_replays_options() {
        let (_dir, root) = fixture();
        let options = FinderOptions {
            depth: Some(2),
            include: vec![r"\.rs$".into()],
            exclude: vec!["^test".into(), "(".into()],
            min_size: Some("1".into()),
            max_size: Some("1 Ki".into()),
            exclude_hidden: true,
            exclude_vcs: false,
        };
        let finder = Finder::new(&root).apply(&options);
        assert_eq!(finder.max_depth(), Some(2));
        assert_eq!(finder.include_patterns().len(), 1);
        assert_eq!(finder.exclude_patterns().len(), 1);
        assert_eq!(finder.min_bound(), Some(1));
        assert_eq!(finder.max_bound(), Some(1_024));
        assert!(finder.excludes_hidden());
        assert!(!finder.excludes_vcs());
        assert!(matches!(
            finder.error(),
            Some(FinderError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn take_error_clears_the_sticky_error() {
        let (_dir, root) = fixture();
        let mut finder = Finder::new(&root).depth(-3);
        assert!(finder.take_error().is_some());
        assert!(finder.check().is_ok());
    }
}
