//! End-to-end counts for the JavaScript fixtures.

use std::path::{Path, PathBuf};

use polyloclib::{
    count_path, read_ignore_file, scan_file, walk, CountOptions, FileTree, IgnorePatterns,
    LanguageRegistry, Locs,
};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/js")
}

fn locs(code: u64, comments: u64, blanks: u64) -> Locs {
    Locs {
        code,
        comments,
        blanks,
        total: code + comments + blanks,
    }
}

#[test]
fn easy_js_counts() {
    let result = scan_file(fixtures().join("easy.js"), &LanguageRegistry::default()).unwrap();

    assert_eq!(result.language.as_deref(), Some("JavaScript"));
    assert_eq!(result.stats, locs(16, 9, 7));
}

#[test]
fn hard_js_counts() {
    let result = scan_file(fixtures().join("hard.js"), &LanguageRegistry::default()).unwrap();

    assert_eq!(result.stats, locs(16, 27, 7));
}

#[test]
fn scanning_twice_is_identical() {
    let registry = LanguageRegistry::default();
    let path = fixtures().join("hard.js");

    assert_eq!(
        scan_file(&path, &registry).unwrap(),
        scan_file(&path, &registry).unwrap()
    );
}

#[test]
fn ignore_pattern_leaves_hard_js() {
    let ignore = IgnorePatterns::new().add("*easy.js").unwrap();

    let files = walk(fixtures(), &ignore, &LanguageRegistry::default()).unwrap();

    assert_eq!(files, vec![fixtures().join("hard.js")]);
}

#[test]
fn ignore_file_drives_the_walk() {
    let temp = tempfile::tempdir().unwrap();
    let ignore_file = temp.path().join("ignore.txt");
    std::fs::write(&ignore_file, "\n  *hard.js  \n\n").unwrap();

    let patterns = read_ignore_file(&ignore_file).unwrap();
    let ignore = IgnorePatterns::new().add_many(&patterns).unwrap();
    let files = walk(fixtures(), &ignore, &LanguageRegistry::default()).unwrap();

    assert_eq!(files, vec![fixtures().join("easy.js")]);
}

#[test]
fn directory_totals_and_tree() {
    let result = count_path(fixtures(), &CountOptions::new()).unwrap();

    assert_eq!(result.file_count, 2);
    assert_eq!(result.total.stats, locs(32, 36, 14));

    let tree = FileTree::from_results(&result.files);
    let root = tree.node(tree.root());
    assert_eq!(root.code, 32);
    assert_eq!(root.languages.get("JavaScript"), Some(&32));
}
