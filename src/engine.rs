use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};

use crate::entry::EntryKind;
use crate::error::FinderError;
use crate::queue::{DirectoryQueue, PendingDir};
use crate::results::{ScanStats, WaveBatch};
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Traversal parameters passed from the builder to the engine.
///
/// `pub(crate)`, not part of the public API. Callers configure these
/// via the builder methods.
#[derive(Debug, Clone)]
pub(crate) struct WalkConfig {
    pub threads:        usize,
    pub max_depth:      Option<usize>,
    pub include_dirs:   bool,
    pub report_errors:  bool,
    pub absolute_paths: bool,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Level-synchronised directory walker.
///
/// Each call to [`run_wave`](Engine::run_wave) scans exactly the directories
/// that were queued when it started, one rayon task per directory, and
/// returns once every task has finished. Directories discovered meanwhile
/// wait for the next call.
pub(crate) struct Engine {
    root:    PathBuf,
    config:  WalkConfig,
    matcher: Arc<dyn Matcher>,
    pool:    ThreadPool,
    queue:   DirectoryQueue,
    files:   AtomicUsize,
    dirs:    AtomicUsize,
    waves:   usize,
    started: Instant,
}

/// What one worker produced for one directory. Merged into the wave's
/// accumulator under a single lock acquisition.
#[derive(Default)]
struct DirScan {
    paths: Vec<String>,
    files: usize,
    error: Option<FinderError>,
}

impl Engine {
    /// `root` must already be validated as an existing directory.
    pub(crate) fn new(
        root: PathBuf,
        config: WalkConfig,
        matcher: Arc<dyn Matcher>,
    ) -> Result<Self, FinderError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("filefinder-{i}"))
            .build()
            .map_err(|e| FinderError::ThreadPool(e.to_string()))?;

        let queue = DirectoryQueue::new();
        queue.push(PendingDir { path: root.clone(), depth: 0 });

        Ok(Self {
            root,
            config,
            matcher,
            pool,
            queue,
            files: AtomicUsize::new(0),
            dirs: AtomicUsize::new(0),
            waves: 0,
            started: Instant::now(),
        })
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    pub(crate) fn stats(&self) -> ScanStats {
        ScanStats::compute(
            self.files.load(Ordering::Relaxed),
            self.dirs.load(Ordering::Relaxed),
            self.waves,
            self.started.elapsed(),
        )
    }

    /// Run one wave to completion. Returns `None` when nothing is queued.
    pub(crate) fn run_wave(&mut self) -> Option<WaveBatch> {
        let wave = self.waves;
        let dirs = self.queue.drain_wave();
        if dirs.is_empty() {
            return None;
        }

        debug!(wave, width = dirs.len(), "starting wave");

        let acc = Mutex::new(WaveBatch { wave, ..WaveBatch::default() });
        let this = &*self;
        this.pool.install(|| {
            dirs.par_iter().for_each(|dir| {
                let scan = this.scan_isolated(dir);
                this.merge(&acc, scan);
            });
        });

        self.waves += 1;
        let batch = acc.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());

        debug!(
            wave,
            matches = batch.paths.len(),
            errors = batch.errors.len(),
            next_width = self.queue.len(),
            "wave complete"
        );
        Some(batch)
    }

    /// A panic inside one directory's scan (e.g. from a custom matcher) is
    /// recorded against that directory instead of tearing down the wave.
    fn scan_isolated(&self, dir: &PendingDir) -> DirScan {
        panic::catch_unwind(AssertUnwindSafe(|| self.scan_dir(dir))).unwrap_or_else(|_| DirScan {
            error: Some(FinderError::WorkerPanic(dir.path.clone())),
            ..DirScan::default()
        })
    }

    fn scan_dir(&self, dir: &PendingDir) -> DirScan {
        trace!(path = %dir.path.display(), depth = dir.depth, "scanning directory");
        self.dirs.fetch_add(1, Ordering::Relaxed);

        let mut scan = DirScan::default();
        let descend = self.config.max_depth.map_or(true, |max| dir.depth < max);

        let listing = match fs::read_dir(&dir.path) {
            Ok(listing) => listing,
            Err(e) => {
                scan.error = Some(FinderError::from_io(dir.path.clone(), e));
                return scan;
            }
        };

        // The first failing entry ends this directory; whatever was gathered
        // before it is kept.
        for res in listing {
            let kind_and_entry = res.and_then(|entry| EntryKind::of(&entry).map(|k| (k, entry)));
            let (kind, entry) = match kind_and_entry {
                Ok(pair) => pair,
                Err(e) => {
                    scan.error = Some(FinderError::from_io(dir.path.clone(), e));
                    break;
                }
            };

            let path = entry.path();

            if kind == EntryKind::Dir && descend {
                self.queue.push(PendingDir { path: path.clone(), depth: dir.depth + 1 });
            }

            let is_candidate = match kind {
                EntryKind::File => {
                    scan.files += 1;
                    true
                }
                _ => self.config.include_dirs && kind.is_dir_like(),
            };

            if is_candidate {
                let candidate = self.candidate_string(&path);
                if self.matcher.is_match(&candidate) {
                    scan.paths.push(candidate);
                }
            }
        }

        scan
    }

    fn merge(&self, acc: &Mutex<WaveBatch>, scan: DirScan) {
        self.files.fetch_add(scan.files, Ordering::Relaxed);

        let error = scan.error.map(|e| {
            debug!(error = %e, "directory listing failed");
            e.to_string()
        });

        if scan.paths.is_empty() && (error.is_none() || !self.config.report_errors) {
            return;
        }

        let mut batch = acc.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        batch.paths.extend(scan.paths);
        if self.config.report_errors {
            batch.errors.extend(error);
        }
    }

    /// The string handed to the matcher and returned to the caller.
    fn candidate_string(&self, path: &Path) -> String {
        if self.config.absolute_paths {
            return path.to_string_lossy().into_owned();
        }
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}
