use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary source root for scanning
pub fn create_test_source_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a source file (and any parent folders) under the test root
pub fn create_test_file(src_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = src_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
