use std::panic::{self, AssertUnwindSafe};

use serde_json::json;
use shared_logging::LogLevel;

use crate::{
    answer::engine::AnswerEngine,
    keywords::extract_main_topics,
    telemetry::emit,
};

/// Reply when neither sentences nor topics were found.
pub const NO_SUMMARY_MESSAGE: &str = "I couldn't generate a meaningful summary.";
/// Reply after an internal fault.
pub const SUMMARY_ERROR_MESSAGE: &str = "I couldn't generate a summary for this content.";

/// Sentences kept in a summary.
pub const SUMMARY_SENTENCES: usize = 3;

impl AnswerEngine {
    /// Main topics of a note: keywords then entities, at most five.
    #[must_use]
    pub fn main_topics(&self, note: &str) -> Vec<String> {
        extract_main_topics(self.front_end(), note, self.settings().keyword_limit)
    }

    /// Short extractive summary: the first sentence plus later ones naming a main topic.
    #[must_use]
    pub fn summarize(&self, note: &str) -> String {
        match panic::catch_unwind(AssertUnwindSafe(|| self.build_summary(note))) {
            Ok(summary) => summary,
            Err(_) => {
                emit(
                    self.telemetry(),
                    LogLevel::Error,
                    "nlp.summary.failed",
                    json!({ "reason": "panic" }),
                );
                SUMMARY_ERROR_MESSAGE.to_string()
            }
        }
    }

    fn build_summary(&self, note: &str) -> String {
        let topics = self.main_topics(note);
        let sentences = self.front_end().segment(note);
        let lowered_topics: Vec<String> = topics.iter().map(|topic| topic.to_lowercase()).collect();

        let mut picked: Vec<&str> = Vec::new();
        if let Some((first, rest)) = sentences.split_first() {
            picked.push(first);
            for sentence in rest {
                if picked.len() >= SUMMARY_SENTENCES {
                    break;
                }
                let lowered = sentence.to_lowercase();
                if lowered_topics.iter().any(|topic| lowered.contains(topic.as_str())) {
                    picked.push(sentence);
                }
            }
        }

        emit(
            self.telemetry(),
            LogLevel::Info,
            "nlp.summary.generated",
            json!({ "sentences": picked.len(), "topics": topics.len() }),
        );
        if !picked.is_empty() {
            return picked.join(" ");
        }
        if topics.is_empty() {
            NO_SUMMARY_MESSAGE.to_string()
        } else {
            format!("This note contains: {}", topics.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keeps_first_sentence_and_topic_sentences() {
        let engine = AnswerEngine::default();
        let note = "Volcanoes form where plates meet. Birds migrate south. \
            Volcanoes erupt lava and ash. Lava cools into rock. Volcanoes can sleep for centuries.";
        let summary = engine.summarize(note);
        assert_eq!(
            summary,
            "Volcanoes form where plates meet. Volcanoes erupt lava and ash. Lava cools into rock."
        );
    }

    #[test]
    fn single_sentence_note_is_its_own_summary() {
        let engine = AnswerEngine::default();
        assert_eq!(engine.summarize("Cells divide."), "Cells divide.");
    }

    #[test]
    fn blank_note_has_no_summary() {
        let engine = AnswerEngine::default();
        assert_eq!(engine.summarize("   "), NO_SUMMARY_MESSAGE);
        assert!(engine.main_topics("").is_empty());
    }

    #[test]
    fn topics_are_capped_at_five() {
        let engine = AnswerEngine::default();
        let topics = engine.main_topics(
            "Marie Curie studied radium in Paris. Radium glows. Paris is large. Pierre Curie helped.",
        );
        assert!(topics.len() <= 5);
        assert!(topics.contains(&"radium".to_string()));
    }
}
