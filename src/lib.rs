//! # filefinder
//!
//! Breadth-first parallel file finder.
//!
//! filefinder walks a directory tree one level at a time. Every level (a
//! *wave*) is scanned in parallel on a bounded worker pool, one task per
//! directory; the next wave starts only when the current one is finished.
//! Each file is tested against a [`Matcher`], normally the name and/or
//! extension filter [`MatchCriteria`], and matching paths are collected.
//!
//! Symbolic links to directories are never entered, so link cycles cannot
//! trap the walk. A directory that cannot be listed is skipped and, if asked
//! for, reported; it never stops the search.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let results = filefinder::search()
//!     .root(".")
//!     .named("invoice")
//!     .extension("pdf")
//!     .run()?;
//!
//! println!("Found {} matches in {:.3}s",
//!     results.matches(),
//!     results.stats.duration.as_secs_f64()
//! );
//! # Ok::<(), filefinder::FinderError>(())
//! ```
//!
//! # Matching rules
//!
//! Matching operates on strings, never on the filesystem:
//!
//! ```rust
//! use filefinder::MatchCriteria;
//!
//! let by_ext = MatchCriteria::any().with_extension("foo");
//! assert!(by_ext.matches("a/b.foo"));
//! assert!(!by_ext.matches("d.foobar"));
//!
//! let exact = MatchCriteria::any().with_name("b").exact(true);
//! assert!(exact.matches("a/b.exe"));
//! assert!(!exact.matches("a/bb.exe"));
//! ```
//!
//! See [`MatchCriteria`] for the full rules, including the first-dot
//! extension definition used by [`extension_of`].

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod entry;
mod error;
mod matcher;
mod queue;
mod results;
mod stream;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{SearchBuilder, SearchOptions};
pub use error::FinderError;
pub use matcher::{extension_of, file_name_of, stem_of, MatchCriteria};
pub use results::{Results, ScanStats, WaveBatch};
pub use stream::{CancelToken, Waves};
pub use traits::Matcher;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
///
/// # Example
///
/// ```rust
/// let dir = std::env::temp_dir();
/// let results = filefinder::search()
///     .root(&dir)
///     .max_depth(0)
///     .run()
///     .unwrap();
///
/// assert!(!results.cancelled);
/// ```
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}
