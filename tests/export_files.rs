//! Tests for per-category file export.

use scope_export::export::write_category_files;
use scope_export::scope::{assemble, Category, ExtractionResult};
use tempfile::TempDir;

#[test]
fn test_write_category_files_contents() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("nested").join("out");

    let mut result = ExtractionResult::new();
    result.push(Category::Domain, " a.com ");
    result.push(Category::Domain, "a.com");
    result.push(Category::Domain, "");
    result.push(Category::Domain, "b.com");
    result.push(Category::Github, "acme/repo");

    let written = write_category_files(&out_dir, &assemble(&result)).expect("Write should succeed");

    assert_eq!(
        written,
        vec![out_dir.join("domain.txt"), out_dir.join("github.txt")]
    );
    assert_eq!(
        std::fs::read_to_string(out_dir.join("domain.txt")).unwrap(),
        "a.com\nb.com"
    );
    assert_eq!(
        std::fs::read_to_string(out_dir.join("github.txt")).unwrap(),
        "acme/repo"
    );
    assert!(!out_dir.join("ios_app.txt").exists());
    assert!(!out_dir.join("android.txt").exists());
}

#[test]
fn test_write_category_files_overwrites_previous_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("android.txt"), "old.package").unwrap();

    let mut result = ExtractionResult::new();
    result.push(Category::Android, "new.package");
    write_category_files(temp_dir.path(), &assemble(&result)).expect("Write should succeed");

    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("android.txt")).unwrap(),
        "new.package"
    );
}

#[test]
fn test_write_category_files_empty_scope() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("never-created");

    let written = write_category_files(&out_dir, &assemble(&ExtractionResult::new()))
        .expect("Empty export should succeed");

    assert!(written.is_empty());
    assert!(!out_dir.exists());
}
