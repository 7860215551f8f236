// src/core/analysis.rs
use crate::core::counter::OrderedCounter;
use crate::core::ignore::IgnoredWords;
use crate::core::tokenizer::{is_word, tokenize};
use crate::models::AnalysisStats;

/// The accumulated counts and tallies for one input text.
#[derive(Debug)]
pub struct Analysis {
    pub counter: OrderedCounter<String>,
    pub stats: AnalysisStats,
}

/// Tokenizes `content` and accumulates word frequencies.
///
/// Every token counts toward `stats.total_words`, including tokens that
/// are not words (numbers, stray punctuation runs) and words on the
/// ignore list; only valid, non-ignored words enter the counter.
#[must_use]
pub fn analyze(content: &str, ignored: &IgnoredWords) -> Analysis {
    let mut counter = OrderedCounter::new();
    let mut stats = AnalysisStats::new();

    for token in tokenize(content) {
        stats.total_words = stats.total_words.saturating_add(1);
        if !is_word(&token) || ignored.contains(&token) {
            continue;
        }
        counter.insert_or_increment(token);
    }

    stats.unique_words = u64::try_from(counter.len()).unwrap_or(u64::MAX);
    Analysis { counter, stats }
}
