use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    // Traversal
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scan aborted unexpectedly: {}", .0.display())]
    WorkerPanic(PathBuf),

    // Config
    #[error("invalid search root: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("invalid thread count: {0}")]
    InvalidThreadCount(usize),

    // Runtime
    #[error("thread pool failure: {0}")]
    ThreadPool(String),
}

impl FinderError {
    /// Classify an I/O failure that happened while listing `path`.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            std::io::ErrorKind::NotFound         => Self::NotFound(path),
            _                                    => Self::Io { path, source },
        }
    }

    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::InvalidRoot(p)
            | Self::WorkerPanic(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the search can continue after this error.
    ///
    /// Recoverable errors are the per-directory listing failures: the walk
    /// records them and keeps going. Everything else is rejected before the
    /// walk starts.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_)
                | Self::NotFound(_)
                | Self::Io { .. }
                | Self::WorkerPanic(_)
        )
    }
}
