// src/core/report.rs
use crate::core::counter::Entry;
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

/// Returns the count recorded for `word`, or 0 when absent.
///
/// Linear scan over the alphabetically sorted sequence.
#[must_use]
pub fn frequency_of(entries: &[Entry<String>], word: &str) -> u64 {
    entries
        .iter()
        .find(|entry| entry.key == word)
        .map_or(0, |entry| entry.count)
}

/// Selects the `k` most frequent entries by repeated thresholded scans.
///
/// Each pass walks the alphabetical sequence and keeps the first entry
/// with the highest count at or below the previous pick's count,
/// skipping words already selected. Ties on count therefore resolve to
/// the alphabetically earlier word. Returns fewer than `k` entries when
/// the sequence is shorter than `k`.
#[must_use]
pub fn top_entries<'a>(entries: &'a [Entry<String>], k: usize) -> Vec<&'a Entry<String>> {
    let mut selected: Vec<&Entry<String>> = Vec::new();
    let mut threshold = u64::MAX;

    for _ in 0..k.min(entries.len()) {
        let mut best: Option<&Entry<String>> = None;
        for entry in entries {
            if entry.count > threshold {
                continue;
            }
            if selected.iter().any(|picked| picked.key == entry.key) {
                continue;
            }
            if best.is_none_or(|current| entry.count > current.count) {
                best = Some(entry);
            }
        }
        let Some(best) = best else { break };
        threshold = best.count;
        selected.push(best);
    }
    selected
}

/// Selects the `k` least frequent entries, mirroring [`top_entries`]:
/// ties on count resolve to the alphabetically earlier word.
#[must_use]
pub fn bottom_entries<'a>(entries: &'a [Entry<String>], k: usize) -> Vec<&'a Entry<String>> {
    let mut selected: Vec<&Entry<String>> = Vec::new();
    let mut threshold = 0_u64;

    for _ in 0..k.min(entries.len()) {
        let mut best: Option<&Entry<String>> = None;
        for entry in entries {
            if entry.count < threshold {
                continue;
            }
            if selected.iter().any(|picked| picked.key == entry.key) {
                continue;
            }
            if best.is_none_or(|current| entry.count < current.count) {
                best = Some(entry);
            }
        }
        let Some(best) = best else { break };
        threshold = best.count;
        selected.push(best);
    }
    selected
}

/// Writes the frequency report: a `WORD : FREQUENCY` header followed by
/// one `<word> : <count>` line per entry in ascending alphabetical
/// order.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_report(path: &Path, entries: &[Entry<String>]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "WORD : FREQUENCY")?;
    for entry in entries {
        writeln!(writer, "{} : {}", entry.key, entry.count)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}
