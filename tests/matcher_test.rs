use filefinder::{extension_of, file_name_of, stem_of, MatchCriteria, Matcher};

const FILES: [&str; 8] = [
    "a.foo",
    "b.f",
    "c.exe",
    "d.foobar",
    "a/b.exe",
    "a/b.foo",
    "a/b/c.foo",
    "b/c/d.cas.md",
];

fn matching<'a>(criteria: &MatchCriteria, candidates: &[&'a str]) -> Vec<&'a str> {
    candidates.iter().copied().filter(|c| criteria.is_match(c)).collect()
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

#[test]
fn file_names_are_taken_after_last_separator() {
    let names: Vec<&str> = FILES.iter().map(|f| file_name_of(f)).collect();
    assert_eq!(
        names,
        ["a.foo", "b.f", "c.exe", "d.foobar", "b.exe", "b.foo", "c.foo", "d.cas.md"]
    );
}

#[test]
fn file_name_accepts_both_separators() {
    assert_eq!(file_name_of(r"a\b\c.foo"), "c.foo");
    assert_eq!(file_name_of(r"a/b\c.foo"), "c.foo");
    assert_eq!(file_name_of(r"a\b/c.foo"), "c.foo");
    assert_eq!(file_name_of("dir/"), "");
    assert_eq!(file_name_of(""), "");
}

#[test]
fn extensions_start_at_first_dot() {
    let exts: Vec<&str> = FILES.iter().map(|f| extension_of(file_name_of(f))).collect();
    assert_eq!(
        exts,
        [".foo", ".f", ".exe", ".foobar", ".exe", ".foo", ".foo", ".cas.md"]
    );
}

#[test]
fn extension_edge_cases() {
    assert_eq!(extension_of("Makefile"), "");
    assert_eq!(extension_of(".bashrc"), ".bashrc");
    assert_eq!(extension_of("trailing."), ".");
    assert_eq!(extension_of("archive.tar.gz"), ".tar.gz");
}

#[test]
fn stem_is_text_before_first_dot() {
    assert_eq!(stem_of("d.cas.md"), "d");
    assert_eq!(stem_of("README"), "README");
    assert_eq!(stem_of(".bashrc"), "");
}

// ---------------------------------------------------------------------------
// Criteria construction
// ---------------------------------------------------------------------------

#[test]
fn extension_is_normalized_with_leading_dot() {
    assert_eq!(MatchCriteria::new(None, Some("foo"), false).extension(), Some(".foo"));
    assert_eq!(MatchCriteria::new(None, Some(".foo"), false).extension(), Some(".foo"));
    assert_eq!(MatchCriteria::any().with_extension("rs").extension(), Some(".rs"));
}

#[test]
fn empty_filters_are_disabled() {
    let criteria = MatchCriteria::new(Some(""), Some(""), false);
    assert!(criteria.is_match_all());
    assert_eq!(criteria.name(), None);
    assert_eq!(criteria.extension(), None);
    assert_eq!(matching(&criteria, &FILES), FILES);

    // An empty extension filter must not demand extension-less files.
    assert!(MatchCriteria::any().with_extension("").matches("a.foo"));
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[test]
fn name_substring_checks_file_name_only() {
    let criteria = MatchCriteria::any().with_name("a");
    assert_eq!(matching(&criteria, &["a.foo", "b.foo", "a/b.exe"]), ["a.foo"]);
    assert_eq!(matching(&criteria, &FILES), ["a.foo", "d.foobar", "b/c/d.cas.md"]);
}

#[test]
fn name_substring_is_case_sensitive() {
    let criteria = MatchCriteria::any().with_name("Report");
    assert!(criteria.matches("docs/Report-2024.pdf"));
    assert!(!criteria.matches("docs/report-2024.pdf"));
}

#[test]
fn configured_extension_must_contain_derived_extension() {
    let criteria = MatchCriteria::any().with_extension("foo");
    assert_eq!(
        matching(&criteria, &["a.foo", "d.foobar", "a/b.foo"]),
        ["a.foo", "a/b.foo"]
    );
    // `.f` is a substring of `.foo`.
    assert_eq!(matching(&criteria, &FILES), ["a.foo", "b.f", "a/b.foo", "a/b/c.foo"]);
}

#[test]
fn files_without_extension_never_pass_extension_filter() {
    let criteria = MatchCriteria::any().with_extension("foo");
    assert!(!criteria.matches("a/Makefile"));
}

#[test]
fn multi_dot_extension_compares_whole_suffix() {
    assert!(MatchCriteria::any().with_extension("cas.md").matches("b/c/d.cas.md"));
    assert!(!MatchCriteria::any().with_extension("md").matches("b/c/d.cas.md"));
}

#[test]
fn exact_name_compares_stem() {
    let criteria = MatchCriteria::any().with_name("b").exact(true);
    assert_eq!(
        matching(&criteria, &["b.f", "a/b.exe", "a/b.foo", "c.exe"]),
        ["b.f", "a/b.exe", "a/b.foo"]
    );
    assert!(!criteria.matches("a/bb.exe"));
    assert!(criteria.matches("b"));
}

#[test]
fn name_and_extension_are_combined() {
    let criteria = MatchCriteria::new(Some("b"), Some("exe"), false);
    assert_eq!(matching(&criteria, &FILES), ["a/b.exe"]);

    let criteria = MatchCriteria::new(Some("a"), Some("exe"), false);
    assert!(matching(&criteria, &FILES).is_empty());
}
