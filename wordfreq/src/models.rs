// src/models.rs

/// Tallies gathered while counting one input text.
///
/// `total_words` counts every token the tokenizer produced, valid or
/// not; `unique_words` counts distinct words stored in the counter.
#[derive(Debug, Default)]
pub struct AnalysisStats {
    pub total_words: u64,
    pub unique_words: u64,
}

impl AnalysisStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_words: 0,
            unique_words: 0,
        }
    }
}
