use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Both separators are recognised on every platform.
fn is_separator(c: char) -> bool {
    matches!(c, '/' | '\\')
}

/// The component after the last `/` or `\`, or the whole string when there
/// is no separator.
///
/// ```rust
/// assert_eq!(filefinder::file_name_of("a/b/c.foo"), "c.foo");
/// assert_eq!(filefinder::file_name_of(r"a\b.exe"), "b.exe");
/// assert_eq!(filefinder::file_name_of("plain"), "plain");
/// ```
pub fn file_name_of(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(i) => &path[i + 1..],
        None    => path,
    }
}

/// Everything from the **first** `.` of `file_name` to the end, or `""`.
///
/// This is not the conventional last-dot extension: `d.cas.md` yields
/// `.cas.md`, and a dotfile such as `.bashrc` is all extension.
///
/// ```rust
/// assert_eq!(filefinder::extension_of("d.cas.md"), ".cas.md");
/// assert_eq!(filefinder::extension_of("Makefile"), "");
/// ```
pub fn extension_of(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(i) => &file_name[i..],
        None    => "",
    }
}

/// The segment of `file_name` before its first `.`.
pub fn stem_of(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(i) => &file_name[..i],
        None    => file_name,
    }
}

// ---------------------------------------------------------------------------
// MatchCriteria
// ---------------------------------------------------------------------------

/// Name / extension criteria applied to every candidate path.
///
/// Either axis may be disabled; with both disabled everything matches.
/// An empty string passed for either filter disables that axis rather than
/// requiring an empty value.
///
/// # Extension containment
///
/// The extension test passes when the **configured** extension contains the
/// candidate's derived extension as a substring. Configured `.foo` accepts
/// `a.foo` and also `b.f` (`.f` is inside `.foo`), but rejects `d.foobar`.
/// This is the established contract, not equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCriteria {
    name:      Option<String>,
    extension: Option<String>,
    exact:     bool,
}

impl MatchCriteria {
    /// Build criteria from optional filters.
    ///
    /// `extension` may be given with or without its leading `.`.
    pub fn new(name: Option<&str>, extension: Option<&str>, exact: bool) -> Self {
        Self {
            name:      name.filter(|n| !n.is_empty()).map(str::to_owned),
            extension: extension.filter(|e| !e.is_empty()).map(normalize_extension),
            exact,
        }
    }

    /// Criteria that accept every candidate.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        let ext = extension.as_ref();
        self.extension = (!ext.is_empty()).then(|| normalize_extension(ext));
        self
    }

    /// Compare the stem (text before the first `.`) for equality instead of
    /// looking for the name as a substring of the file name.
    pub fn exact(mut self, yes: bool) -> Self {
        self.exact = yes;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The normalised extension filter, always starting with `.`.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// `true` when neither axis filters.
    pub fn is_match_all(&self) -> bool {
        self.name.is_none() && self.extension.is_none()
    }

    /// Test a path or bare file name against these criteria.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.is_match_all() {
            return true;
        }

        let file_name = file_name_of(candidate);

        let name_ok = match self.name.as_deref() {
            None                  => true,
            Some(n) if self.exact => stem_of(file_name) == n,
            Some(n)               => file_name.contains(n),
        };

        let ext_ok = match self.extension.as_deref() {
            None => true,
            Some(configured) => {
                let derived = extension_of(file_name);
                !derived.is_empty() && configured.contains(derived)
            }
        };

        name_ok && ext_ok
    }
}

impl Matcher for MatchCriteria {
    fn is_match(&self, candidate: &str) -> bool {
        self.matches(candidate)
    }
}

fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_owned()
    } else {
        format!(".{ext}")
    }
}
