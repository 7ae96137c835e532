use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::engine::{Engine, WalkConfig};
use crate::error::FinderError;
use crate::matcher::MatchCriteria;
use crate::results::Results;
use crate::stream::{CancelToken, Waves};
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// SearchOptions
// ---------------------------------------------------------------------------

/// Every knob of a search as one plain value.
///
/// All fields have defaults, so callers set only what they need:
///
/// ```rust
/// use filefinder::SearchOptions;
///
/// let opts = SearchOptions {
///     name: Some("invoice".into()),
///     extension: Some("pdf".into()),
///     ..SearchOptions::default()
/// };
/// assert!(!opts.exact);
/// ```
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Directory to search. Defaults to the current directory.
    pub root: PathBuf,

    /// Name filter. Substring of the file name, or the exact stem when
    /// `exact` is set. `None` or `""` disables it.
    pub name: Option<String>,

    /// Extension filter, leading `.` optional. `None` or `""` disables it.
    pub extension: Option<String>,

    /// Compare the stem for equality instead of substring search.
    pub exact: bool,

    /// Test directories against the criteria too.
    pub include_dirs: bool,

    /// Record one message per directory that could not be listed.
    pub report_errors: bool,

    /// Report absolute paths instead of paths relative to `root`.
    pub absolute_paths: bool,

    /// Worker threads per wave. Defaults to the logical CPU count.
    pub threads: usize,

    /// Deepest directory level to scan. `0` scans the root only.
    pub max_depth: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            root:           PathBuf::from("."),
            name:           None,
            extension:      None,
            exact:          false,
            include_dirs:   false,
            report_errors:  false,
            absolute_paths: false,
            threads:        num_cpus(),
            max_depth:      None,
        }
    }
}

impl SearchOptions {
    /// The match criteria these options describe.
    pub fn criteria(&self) -> MatchCriteria {
        MatchCriteria::new(self.name.as_deref(), self.extension.as_deref(), self.exact)
    }
}

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`filefinder::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) for the complete
/// result or [`stream()`](SearchBuilder::stream) for one batch per wave.
///
/// # Example
///
/// ```rust,no_run
/// let results = filefinder::search()
///     .root("/home/me/projects")
///     .named("main")
///     .extension("rs")
///     .report_errors(true)
///     .run()?;
///
/// for path in &results.paths {
///     println!("{path}");
/// }
/// # Ok::<(), filefinder::FinderError>(())
/// ```
#[derive(Default)]
pub struct SearchBuilder {
    opts:    SearchOptions,
    matcher: Option<Box<dyn Matcher>>,
    cancel:  Option<CancelToken>,
}

impl SearchBuilder {
    /// Start from a prepared [`SearchOptions`] value.
    pub fn from_options(opts: SearchOptions) -> Self {
        Self { opts, ..Self::default() }
    }

    // ── Root ──────────────────────────────────────────────────────────────

    /// Directory to search. Must exist; checked when the search starts.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.opts.root = root.into();
        self
    }

    // ── Criteria ──────────────────────────────────────────────────────────

    /// Match file names containing `name` (case-sensitive), or with stem
    /// exactly `name` when `.exact(true)` is set.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.opts.name = Some(name.into());
        self
    }

    /// Match files whose extension fits `ext`. The leading `.` is optional.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.opts.extension = Some(ext.into());
        self
    }

    /// Require the stem to equal the name filter. Needs `.named(..)`.
    pub fn exact(mut self, yes: bool) -> Self {
        self.opts.exact = yes;
        self
    }

    /// Replace the name/extension criteria with a custom matcher.
    ///
    /// When set, `.named()`, `.extension()` and `.exact()` are ignored.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Test directories against the criteria as well as files.
    ///
    /// Linked directories are reported too, though never entered.
    pub fn include_dirs(mut self, yes: bool) -> Self {
        self.opts.include_dirs = yes;
        self
    }

    /// Collect directory listing failures into [`Results::errors`].
    ///
    /// Disabled by default; failures are then dropped silently and the walk
    /// carries on either way.
    pub fn report_errors(mut self, yes: bool) -> Self {
        self.opts.report_errors = yes;
        self
    }

    /// Report absolute paths. The root is canonicalised once before the walk.
    pub fn absolute_paths(mut self, yes: bool) -> Self {
        self.opts.absolute_paths = yes;
        self
    }

    /// Size of the worker pool that scans each wave.
    ///
    /// Bounds how many directories are open at once, however wide a level is.
    pub fn threads(mut self, n: usize) -> Self {
        self.opts.threads = n;
        self
    }

    /// Maximum directory level to scan. `0` means the root only, `1` adds
    /// its immediate subdirectories, and so on. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.opts.max_depth = Some(d);
        self
    }

    /// Attach a token that stops the walk at the next wave boundary.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return results.
    ///
    /// Blocks until every wave has run or the cancel token is observed.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for problems detected before the walk starts
    /// (missing or non-directory root, `exact` without a name, zero threads,
    /// thread pool failure). Failures while listing directories are never
    /// fatal; they are collected into [`Results::errors`] when
    /// `.report_errors(true)` is set.
    pub fn run(self) -> Result<Results, FinderError> {
        Ok(self.stream()?.into_results())
    }

    /// Validate and return a lazy iterator that runs one wave per `next()`.
    ///
    /// # Errors
    ///
    /// Same as [`run()`](Self::run).
    pub fn stream(self) -> Result<Waves, FinderError> {
        let SearchBuilder { opts, matcher, cancel } = self;

        if opts.threads == 0 {
            return Err(FinderError::InvalidThreadCount(0));
        }

        let matcher: Arc<dyn Matcher> = match matcher {
            Some(m) => Arc::from(m),
            None => {
                let criteria = opts.criteria();
                if criteria.is_exact() && criteria.name().is_none() {
                    return Err(FinderError::InvalidCriteria(
                        "exact matching requires a name filter".into(),
                    ));
                }
                Arc::new(criteria)
            }
        };

        let root = validate_root(&opts)?;

        debug!(
            root = %root.display(),
            threads = opts.threads,
            max_depth = ?opts.max_depth,
            "starting search"
        );

        let config = WalkConfig {
            threads:        opts.threads,
            max_depth:      opts.max_depth,
            include_dirs:   opts.include_dirs,
            report_errors:  opts.report_errors,
            absolute_paths: opts.absolute_paths,
        };

        let engine = Engine::new(root, config, matcher)?;
        Ok(Waves::new(engine, cancel.unwrap_or_default()))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_root(opts: &SearchOptions) -> Result<PathBuf, FinderError> {
    if !opts.root.is_dir() {
        return Err(FinderError::InvalidRoot(opts.root.clone()));
    }
    if opts.absolute_paths {
        return opts
            .root
            .canonicalize()
            .map_err(|_| FinderError::InvalidRoot(opts.root.clone()));
    }
    Ok(opts.root.clone())
}

/// Get the logical CPU count, with a safe fallback.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
