use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::Mutex;

/// A directory waiting to be scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingDir {
    pub path:  PathBuf,
    /// Distance from the search root. Root = 0.
    pub depth: usize,
}

#[derive(Default)]
struct Inner {
    pending: VecDeque<PendingDir>,
    // One path per directory for the whole walk. Since links are never
    // followed this rarely rejects anything; it keeps the at-most-once rule
    // independent of how the engine discovers directories.
    seen:    HashSet<PathBuf>,
}

/// FIFO of directories shared by the workers of a wave.
///
/// Workers push concurrently while a wave runs; the engine takes a wave's
/// worth with [`drain_wave`](Self::drain_wave) at the boundary. A path is
/// accepted at most once for the lifetime of the queue.
#[derive(Default)]
pub(crate) struct DirectoryQueue {
    inner: Mutex<Inner>,
}

impl DirectoryQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Enqueue `dir` for the next wave. Returns `false` if this path was
    /// already enqueued during this walk.
    pub(crate) fn push(&self, dir: PendingDir) -> bool {
        let mut inner = self.lock();
        if !inner.seen.insert(dir.path.clone()) {
            return false;
        }
        inner.pending.push_back(dir);
        true
    }

    /// Remove exactly the directories present right now, in FIFO order.
    ///
    /// Anything pushed after this returns stays queued for the following wave.
    pub(crate) fn drain_wave(&self) -> Vec<PendingDir> {
        let mut inner = self.lock();
        let n = inner.pending.len();
        inner.pending.drain(..n).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A worker panicking mid-push cannot leave `Inner` half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(p: &str, depth: usize) -> PendingDir {
        PendingDir { path: PathBuf::from(p), depth }
    }

    #[test]
    fn drain_takes_only_items_present_at_call_time() {
        let q = DirectoryQueue::new();
        q.push(dir("a", 1));
        q.push(dir("b", 1));

        let wave = q.drain_wave();
        q.push(dir("a/c", 2));

        assert_eq!(wave, vec![dir("a", 1), dir("b", 1)]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain_wave(), vec![dir("a/c", 2)]);
        assert!(q.is_empty());
    }

    #[test]
    fn rejects_second_push_of_same_path() {
        let q = DirectoryQueue::new();
        assert!(q.push(dir("root", 0)));
        q.drain_wave();
        assert!(!q.push(dir("root", 3)), "a drained path must not come back");
        assert!(q.is_empty());
    }

    #[test]
    fn concurrent_pushes_are_all_kept() {
        let q = DirectoryQueue::new();
        std::thread::scope(|s| {
            for t in 0..4 {
                let q = &q;
                s.spawn(move || {
                    for i in 0..100 {
                        q.push(dir(&format!("{t}/{i}"), 1));
                    }
                });
            }
        });
        assert_eq!(q.drain_wave().len(), 400);
    }
}
