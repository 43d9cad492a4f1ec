use serde::{Deserialize, Serialize};

/// One generated study item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    /// Question shown on the front of the card.
    pub question: String,
    /// Expected answer.
    pub answer: String,
}

impl QaPair {
    /// Creates a pair.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Lower-cased trimmed question used for duplicate detection.
    #[must_use]
    pub fn dedupe_key(&self) -> String {
        self.question.trim().to_lowercase()
    }
}

/// Pairs from one generation run together with per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Unique pairs, shuffled and truncated to the requested count.
    pub pairs: Vec<QaPair>,
    /// Sentences produced by segmentation.
    pub sentences_seen: usize,
    /// Sentences below the minimum word count.
    pub sentences_skipped: usize,
    /// Sentences abandoned after an internal fault.
    pub sentences_failed: usize,
    /// Pairs dropped because their question repeated an earlier one.
    pub duplicates_removed: usize,
    /// Whether a sentence or time budget stopped the run early.
    pub truncated_by_budget: bool,
}
