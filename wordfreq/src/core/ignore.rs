// src/core/ignore.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Words excluded from frequency counting.
///
/// Entries are stored lowercased, so membership checks are
/// case-insensitive against the lowercased tokens the tokenizer
/// produces.
#[derive(Debug, Default)]
pub struct IgnoredWords {
    words: HashSet<String>,
}

impl IgnoredWords {
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Adds one word from an ignore list.
    ///
    /// Leading/trailing whitespace is trimmed; blank lines and `#`
    /// comment lines are skipped.
    pub fn add_word(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() || word.starts_with('#') {
            return;
        }
        self.words.insert(word.to_lowercase());
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Loads an ignored-word list, one word per line.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_ignored_words(path: &Path) -> Result<IgnoredWords> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    let mut ignored = IgnoredWords::new();
    for line in content.lines() {
        ignored.add_word(line);
    }
    Ok(ignored)
}
