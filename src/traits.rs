/// Determines whether a candidate path is a match.
///
/// The engine hands every candidate to the matcher as a string: relative to
/// the search root by default, absolute when `.absolute_paths(true)` is set.
/// Separators are whatever the platform produced, so implementations that
/// inspect components should accept both `/` and `\` (see
/// [`file_name_of`](crate::file_name_of)).
///
/// [`MatchCriteria`](crate::MatchCriteria) is the built-in implementation.
/// Implement this trait for anything else, such as regex or glob matching.
///
/// # Thread Safety
///
/// `Send + Sync` are required: matchers are shared across the worker pool
/// and called concurrently on different candidates.
///
/// # Example
///
/// ```rust
/// use filefinder::Matcher;
///
/// struct EndsWith(&'static str);
///
/// impl Matcher for EndsWith {
///     fn is_match(&self, candidate: &str) -> bool {
///         candidate.ends_with(self.0)
///     }
/// }
///
/// assert!(EndsWith(".rs").is_match("src/lib.rs"));
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this candidate should be included in results.
    fn is_match(&self, candidate: &str) -> bool;
}
