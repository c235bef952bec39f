use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`FinderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed depth, size string or regular expression.
    InvalidArgument,
    /// The root exists but is not a directory.
    NotADirectory,
    /// The root could not be stat'ed.
    Io,
    /// A size bound would make `min > max`.
    Logic,
}

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("invalid name pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed size {0:?}: expected \"<number>\" or \"<number> <unit>\"")]
    MalformedSize(String),

    #[error("invalid number in size {text:?}: {source}")]
    InvalidSizeNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown size unit {unit:?} in {text:?} (expected K, Ki, M, Mi, G or Gi)")]
    UnknownSizeUnit { text: String, unit: String },

    #[error("size {0:?} does not fit in a signed 64-bit byte count")]
    SizeOverflow(String),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("size bounds conflict: minimum {min} is greater than maximum {max}")]
    SizeBoundsConflict { min: i64, max: i64 },
}

impl FinderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinderError::NegativeDepth(_)
            | FinderError::InvalidPattern { .. }
            | FinderError::MalformedSize(_)
            | FinderError::InvalidSizeNumber { .. }
            | FinderError::UnknownSizeUnit { .. }
            | FinderError::SizeOverflow(_) => ErrorKind::InvalidArgument,
            FinderError::NotADirectory(_) => ErrorKind::NotADirectory,
            FinderError::Io { .. } => ErrorKind::Io,
            FinderError::SizeBoundsConflict { .. } => ErrorKind::Logic,
        }
    }
}
