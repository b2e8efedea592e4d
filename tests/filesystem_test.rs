//! Tests for the RealFileSystem boundary implementation

use tempfile::TempDir;

use dayplan::infrastructure::traits::{FileSystem, RealFileSystem};

#[test]
fn given_content_when_writing_then_reads_back_identically() {
    let temp = TempDir::new().unwrap();
    let fs = RealFileSystem;
    let path = temp.path().join("note.md");

    fs.write(&path, "# Day 001\n").unwrap();

    assert!(fs.exists(&path));
    assert_eq!(fs.read_to_string(&path).unwrap(), "# Day 001\n");
}

#[test]
fn given_nested_path_when_creating_dirs_then_whole_chain_exists() {
    let temp = TempDir::new().unwrap();
    let fs = RealFileSystem;
    let dir = temp.path().join("days/day_001");

    fs.create_dir_all(&dir).unwrap();
    // Idempotent: a second call must not fail
    fs.create_dir_all(&dir).unwrap();

    assert!(fs.exists(&dir));
}

#[test]
fn given_file_in_missing_dir_when_ensuring_parent_then_parent_is_created() {
    let temp = TempDir::new().unwrap();
    let fs = RealFileSystem;
    let path = temp.path().join("docs/guide/README.md");

    fs.ensure_parent(&path).unwrap();

    assert!(fs.exists(&temp.path().join("docs/guide")));
    assert!(!fs.exists(&path));
}

#[test]
fn given_bare_filename_when_ensuring_parent_then_is_a_noop() {
    let fs = RealFileSystem;

    // No parent component, nothing to create
    fs.ensure_parent(std::path::Path::new("README.md")).unwrap();
}
