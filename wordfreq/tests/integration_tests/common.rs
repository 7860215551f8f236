// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn create_ignore_file(dir: &Path, words: &[&str]) -> Result<PathBuf> {
    let content = words.join("\n");
    create_test_file(dir, "ignored_words.txt", &content)
}

pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
The dog barks; the fox runs! Quick, quick: 42 foxes.";

pub fn setup_sample_file() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = create_test_file(dir.path(), "sample.txt", SAMPLE_TEXT)?;
    Ok((dir, path))
}
