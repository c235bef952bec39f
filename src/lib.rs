//! Fluent filter-and-walk over a directory tree.
//!
//! ```no_run
//! use dirfinder::Finder;
//!
//! let finder = Finder::new("src").include_name(r"\.rs$").exclude_hidden();
//! for entry in finder.get() {
//!     println!("{} ({} bytes)", entry.path.display(), entry.size);
//! }
//! ```

pub mod app;

pub use app::error::{ErrorKind, FinderError};
pub use app::finder::Finder;
pub use app::models::{Entry, FinderConfig, FinderOptions, SkippedPath, WalkReport};
pub use app::predicate::VCS_DIRECTORIES;
pub use app::size::parse_size;
