use repo_insight::core::scanner::scan_workspace;
use repo_insight::utils::error::InsightError;
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_listing_is_depth_first_with_directory_markers() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("a")).unwrap();
    std::fs::write(dir.path().join("a").join("b.txt"), "b").unwrap();
    std::fs::write(dir.path().join("package.json"), "{}").unwrap();
    std::fs::write(dir.path().join("z.txt"), "z").unwrap();

    let snapshot = scan_workspace(dir.path(), &[], &[], 12).unwrap();
    assert_eq!(snapshot.listing, "a/\na/b.txt\npackage.json\nz.txt");
}

#[test]
fn test_ignored_directories_are_pruned_whole() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("node_modules")).unwrap();
    std::fs::write(dir.path().join("node_modules").join("dep.js"), "x").unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join(".git").join("config"), "x").unwrap();
    std::fs::write(dir.path().join("kept.txt"), "x").unwrap();

    let snapshot =
        scan_workspace(dir.path(), &[], &strings(&[".git", "node_modules"]), 12).unwrap();
    assert_eq!(snapshot.listing, "kept.txt");
}

#[test]
fn test_max_depth_bounds_the_walk() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("d1").join("d2")).unwrap();
    std::fs::write(dir.path().join("d1").join("d2").join("deep.txt"), "x").unwrap();

    let snapshot = scan_workspace(dir.path(), &[], &[], 2).unwrap();
    assert!(snapshot.listing.contains("d1/d2/"));
    assert!(!snapshot.listing.contains("deep.txt"));
}

#[test]
fn test_only_allow_listed_root_files_are_read() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("package.json"), r#"{"name": "demo"}"#).unwrap();
    std::fs::write(dir.path().join("secrets.env"), "TOKEN=x").unwrap();
    // Allow-listed name below the root is listed but not read.
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("README.md"), "nested").unwrap();

    let snapshot = scan_workspace(
        dir.path(),
        &strings(&["package.json", "README.md"]),
        &[],
        12,
    )
    .unwrap();

    assert_eq!(snapshot.key_files.len(), 1);
    assert_eq!(snapshot.key_files[0].name, "package.json");
    assert_eq!(snapshot.key_files[0].contents, r#"{"name": "demo"}"#);
    assert!(snapshot.listing.contains("secrets.env"));
    assert!(snapshot.listing.contains("sub/README.md"));
}

#[test]
fn test_missing_allow_listed_files_are_simply_absent() {
    let dir = TempDir::new().unwrap();
    let snapshot =
        scan_workspace(dir.path(), &strings(&["package.json", "pom.xml"]), &[], 12).unwrap();
    assert!(snapshot.key_files.is_empty());
    assert_eq!(snapshot.entry_count(), 0);
}

#[test]
fn test_nonexistent_root_is_a_workspace_error() {
    let err = scan_workspace(
        std::path::Path::new("/definitely/not/a/workspace"),
        &[],
        &[],
        12,
    )
    .unwrap_err();
    assert!(matches!(err, InsightError::WorkspaceError { .. }));
}

#[test]
fn test_file_root_is_a_workspace_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "not a directory").unwrap();
    let err = scan_workspace(&file, &[], &[], 12).unwrap_err();
    assert!(matches!(err, InsightError::WorkspaceError { .. }));
}
