use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::engine::Engine;
use crate::results::{Results, ScanStats, WaveBatch};

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// Cooperative cancellation for a running search.
///
/// Cheap to clone; all clones share one flag. The engine checks it before
/// scheduling each wave, so a wave already in progress always finishes and
/// the partial result stays consistent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ---------------------------------------------------------------------------
// Waves
// ---------------------------------------------------------------------------

/// Incremental search results, one [`WaveBatch`] per wave.
///
/// Created by [`SearchBuilder::stream`](crate::SearchBuilder::stream). Each
/// call to `next()` scans one level of the tree and blocks until that level
/// is done; batch `n` is always yielded before batch `n + 1`.
///
/// ```rust,no_run
/// let mut waves = filefinder::search()
///     .root("/var/log")
///     .extension("log")
///     .stream()?;
///
/// let cancel = waves.cancel_token();
/// for batch in &mut waves {
///     for path in &batch.paths {
///         println!("{path}");
///     }
///     if batch.wave == 2 {
///         cancel.cancel();
///     }
/// }
/// # Ok::<(), filefinder::FinderError>(())
/// ```
pub struct Waves {
    engine:    Engine,
    cancel:    CancelToken,
    cancelled: bool,
    done:      bool,
}

impl Waves {
    pub(crate) fn new(engine: Engine, cancel: CancelToken) -> Self {
        Self { engine, cancel, cancelled: false, done: false }
    }

    /// A handle that stops the walk at the next wave boundary.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Whether the walk ended because of cancellation.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Statistics for the waves that have run so far.
    pub fn stats(&self) -> ScanStats {
        self.engine.stats()
    }

    /// Run the remaining waves and fold every batch into one [`Results`].
    pub fn into_results(mut self) -> Results {
        let mut results = Results::default();
        for batch in &mut self {
            results.paths.extend(batch.paths);
            results.errors.extend(batch.errors);
        }
        results.stats = self.engine.stats();
        results.cancelled = self.cancelled;
        results
    }
}

impl Iterator for Waves {
    type Item = WaveBatch;

    fn next(&mut self) -> Option<WaveBatch> {
        if self.done {
            return None;
        }

        if self.cancel.is_cancelled() && self.engine.has_pending() {
            self.cancelled = true;
        }

        let batch = if self.cancelled { None } else { self.engine.run_wave() };

        if batch.is_none() {
            self.done = true;
            let stats = self.engine.stats();
            info!(
                files = stats.files,
                dirs = stats.dirs,
                waves = stats.waves,
                cancelled = self.cancelled,
                elapsed_ms = stats.duration.as_millis() as u64,
                "search finished"
            );
        }
        batch
    }
}
