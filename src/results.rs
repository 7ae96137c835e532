use std::time::Duration;

/// The output of a completed (or cancelled) search.
///
/// Path order is not meaningful: paths found in the same wave are appended
/// concurrently. Use [`sorted_paths`](Self::sorted_paths) when a stable order
/// is needed.
#[derive(Debug, Clone, Default)]
pub struct Results {
    /// Matched paths, relative to the root unless `.absolute_paths(true)`.
    pub paths: Vec<String>,

    /// One human-readable line per directory that could not be listed.
    /// Only populated if `.report_errors(true)` was set on the builder.
    pub errors: Vec<String>,

    /// Scan performance statistics.
    pub stats: ScanStats,

    /// `true` when the walk stopped early because its cancel token was set.
    /// The paths collected so far are still valid.
    pub cancelled: bool,
}

impl Results {
    /// Number of matched paths.
    pub fn matches(&self) -> usize {
        self.paths.len()
    }

    pub fn sorted_paths(&self) -> Vec<String> {
        let mut paths = self.paths.clone();
        paths.sort_unstable();
        paths
    }
}

/// A single wave's contribution, as yielded by [`Waves`](crate::Waves).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaveBatch {
    /// Zero-based wave index. Wave `n` scanned the directories at depth `n`.
    pub wave: usize,

    /// Paths matched while scanning this wave's directories.
    pub paths: Vec<String>,

    /// Listing failures from this wave, if error reporting is enabled.
    pub errors: Vec<String>,
}

/// Performance statistics for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Total number of non-directory entries encountered (matched or not).
    pub files: usize,

    /// Total number of directories scanned, the root included.
    pub dirs: usize,

    /// Number of waves that ran to completion.
    pub waves: usize,

    /// Wall-clock time from search start to completion.
    pub duration: Duration,

    /// Total entries scanned per second. Convenience field, equal to
    /// `(files + dirs) / duration.as_secs_f64()`, clamped to 0 on
    /// zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    /// Compute `entries_per_sec` from raw counts and duration.
    pub(crate) fn compute(files: usize, dirs: usize, waves: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            waves,
            duration,
            entries_per_sec: eps,
        }
    }
}
