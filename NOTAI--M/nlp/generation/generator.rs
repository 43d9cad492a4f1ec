use std::{
    collections::HashSet,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    time::Instant,
};

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};
use shared_logging::LogLevel;

use crate::{
    config::GeneratorSettings,
    error::{NlpError, NlpResult},
    generation::{
        method::Strategy,
        pair::{GenerationReport, QaPair},
        strategies::{apply, SentenceContext},
    },
    lexical::{NoSiblingTerms, SiblingTermSource, TaxonomyLexicon},
    linguistic::LinguisticFrontEnd,
    telemetry::NlpTelemetry,
};

/// Turns free text into question/answer study pairs.
///
/// Each sentence gets the strategies in a freshly shuffled order and keeps the
/// first pair produced. Randomness comes from the owned [`ChaCha8Rng`], so a
/// fixed seed reproduces a run exactly.
pub struct QuestionGenerator {
    front_end: LinguisticFrontEnd,
    siblings: Arc<dyn SiblingTermSource>,
    settings: GeneratorSettings,
    rng: ChaCha8Rng,
    telemetry: Option<NlpTelemetry>,
}

impl QuestionGenerator {
    /// Creates a generator seeded from `settings.seed`, or from entropy when unset.
    #[must_use]
    pub fn new(
        front_end: LinguisticFrontEnd,
        settings: GeneratorSettings,
        telemetry: Option<NlpTelemetry>,
    ) -> Self {
        let rng = settings
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        let siblings: Arc<dyn SiblingTermSource> = match front_end.shared_resources() {
            Some(resources) => Arc::new(TaxonomyLexicon::new(resources)),
            None => Arc::new(NoSiblingTerms),
        };
        Self {
            front_end,
            siblings,
            settings,
            rng,
            telemetry,
        }
    }

    /// Generator over the shared resources with default settings and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(LinguisticFrontEnd::shared(), GeneratorSettings::default(), None)
            .with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Replaces the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: ChaCha8Rng) -> Self {
        self.rng = rng;
        self
    }

    /// Replaces the sibling-term source used by true/false statements.
    #[must_use]
    pub fn with_siblings(mut self, siblings: Arc<dyn SiblingTermSource>) -> Self {
        self.siblings = siblings;
        self
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates at most `num_pairs` unique pairs from `text`.
    pub fn generate_qa_pairs(&mut self, text: &str, num_pairs: usize) -> NlpResult<Vec<QaPair>> {
        self.generate_report(text, num_pairs).map(|report| report.pairs)
    }

    /// Generates pairs and returns them with the run counters.
    pub fn generate_report(&mut self, text: &str, num_pairs: usize) -> NlpResult<GenerationReport> {
        if text.trim().is_empty() {
            return Err(NlpError::EmptyInput);
        }
        let started = Instant::now();
        let deadline = self.settings.deadline();
        let sentences = self.front_end.segment(text);
        let mut report = GenerationReport {
            sentences_seen: sentences.len(),
            ..GenerationReport::default()
        };
        let mut collected = Vec::new();

        for (position, sentence) in sentences.iter().enumerate() {
            if self.settings.max_sentences.is_some_and(|max| position >= max)
                || deadline.is_some_and(|limit| started.elapsed() >= limit)
            {
                report.truncated_by_budget = true;
                break;
            }
            if sentence.split_whitespace().count() < self.settings.min_sentence_words {
                report.sentences_skipped += 1;
                continue;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.question_for(sentence)));
            match outcome {
                Ok(Ok(Some(pair))) => collected.push(pair),
                Ok(Ok(None)) => {}
                Ok(Err(err)) => {
                    report.sentences_failed += 1;
                    self.log_error(
                        "nlp.generation.sentence_failed",
                        &err,
                        json!({ "sentence": position }),
                    );
                }
                Err(_) => {
                    report.sentences_failed += 1;
                    self.log(
                        LogLevel::Error,
                        "nlp.generation.sentence_failed",
                        json!({ "sentence": position, "reason": "panic" }),
                    );
                }
            }
        }

        let mut seen = HashSet::new();
        let before = collected.len();
        collected.retain(|pair| seen.insert(pair.dedupe_key()));
        report.duplicates_removed = before - collected.len();
        collected.shuffle(&mut self.rng);
        collected.truncate(num_pairs);
        report.pairs = collected;

        self.log(
            LogLevel::Info,
            "nlp.generation.completed",
            json!({
                "requested": num_pairs,
                "produced": report.pairs.len(),
                "sentences_seen": report.sentences_seen,
                "sentences_skipped": report.sentences_skipped,
                "sentences_failed": report.sentences_failed,
                "duplicates_removed": report.duplicates_removed,
                "truncated_by_budget": report.truncated_by_budget,
            }),
        );
        Ok(report)
    }

    /// Tries the strategies in shuffled order; the first pair wins.
    fn question_for(&mut self, sentence: &str) -> NlpResult<Option<QaPair>> {
        let analyzed = self.front_end.analyze(sentence)?;
        let resources = self.front_end.resources()?;
        let ctx = SentenceContext {
            sentence: &analyzed,
            resources,
            siblings: self.siblings.as_ref(),
        };
        let mut order = Strategy::ALL;
        order.shuffle(&mut self.rng);
        for strategy in order {
            match apply(strategy, &ctx, &mut self.rng) {
                Ok(Some(pair)) => return Ok(Some(pair)),
                Ok(None) => {}
                Err(err) => {
                    if let Some(tel) = &self.telemetry {
                        let _ = tel.log_error(
                            "nlp.generation.strategy_failed",
                            &err,
                            json!({ "strategy": strategy.label() }),
                        );
                    }
                }
            }
        }
        Ok(None)
    }

    fn log(&self, level: LogLevel, message: &str, metadata: Value) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(level, message, metadata);
        }
    }

    fn log_error(&self, message: &str, err: &NlpError, metadata: Value) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log_error(message, err, metadata);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceSettings;
    use shared_logging::MemoryLogger;
    use std::time::Duration;

    const NOTES: &str = "Marie Curie discovered radium in Paris in 1898. \
        The mitochondria produce energy for the living cell. \
        Rivers carry fresh water slowly to the ocean.";

    #[test]
    fn blank_text_is_rejected() {
        let mut generator = QuestionGenerator::with_seed(1);
        assert!(matches!(generator.generate_qa_pairs("", 5), Err(NlpError::EmptyInput)));
        assert!(matches!(generator.generate_qa_pairs(" \n\t", 5), Err(NlpError::EmptyInput)));
    }

    #[test]
    fn one_pair_per_usable_sentence() {
        let mut generator = QuestionGenerator::with_seed(7);
        let report = generator.generate_report(NOTES, 100).unwrap();
        assert_eq!(report.sentences_seen, 3);
        assert_eq!(report.pairs.len(), 3);
        assert!(!report.truncated_by_budget);
    }

    #[test]
    fn short_sentences_are_skipped() {
        let mut generator = QuestionGenerator::with_seed(3);
        let report = generator
            .generate_report("Too short here. Cats chase mice around the old barn.", 10)
            .unwrap();
        assert_eq!(report.sentences_skipped, 1);
        assert_eq!(report.pairs.len(), 1);
    }

    #[test]
    fn output_is_truncated_to_request() {
        let mut generator = QuestionGenerator::with_seed(5);
        assert_eq!(generator.generate_qa_pairs(NOTES, 2).unwrap().len(), 2);
        assert!(generator.generate_qa_pairs(NOTES, 0).unwrap().is_empty());
    }

    #[test]
    fn same_seed_same_pairs() {
        let first = QuestionGenerator::with_seed(42).generate_qa_pairs(NOTES, 10).unwrap();
        let second = QuestionGenerator::with_seed(42).generate_qa_pairs(NOTES, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_sentences_are_deduplicated() {
        let text = "Cats chase mice around the barn. Cats chase mice around the barn.";
        let mut generator =
            QuestionGenerator::with_seed(9).with_siblings(Arc::new(NoSiblingTerms));
        let report = generator.generate_report(text, 10).unwrap();
        assert_eq!(report.pairs.len() + report.duplicates_removed, 2);
        let keys: HashSet<String> = report.pairs.iter().map(QaPair::dedupe_key).collect();
        assert_eq!(keys.len(), report.pairs.len());
    }

    #[test]
    fn sentence_budget_stops_early() {
        let settings = GeneratorSettings {
            max_sentences: Some(1),
            seed: Some(4),
            ..GeneratorSettings::default()
        };
        let sink = Arc::new(MemoryLogger::new());
        let telemetry = NlpTelemetry::builder("nlp").sink(sink.clone()).build().unwrap();
        let mut generator =
            QuestionGenerator::new(LinguisticFrontEnd::shared(), settings, Some(telemetry));
        let report = generator.generate_report(NOTES, 10).unwrap();
        assert!(report.truncated_by_budget);
        assert_eq!(report.pairs.len(), 1);
        assert!(sink.contains("nlp.generation.completed"));
    }

    #[test]
    fn unavailable_resources_yield_empty_success() {
        let mut generator = QuestionGenerator::new(
            LinguisticFrontEnd::unavailable(),
            GeneratorSettings::default(),
            None,
        );
        let report = generator.generate_report(NOTES, 5).unwrap();
        assert!(report.pairs.is_empty());
        assert_eq!(report.sentences_failed, 1);
    }

    #[test]
    fn expired_deadline_truncates_before_any_sentence() {
        let settings = GeneratorSettings {
            deadline_ms: Some(0),
            seed: Some(2),
            ..GeneratorSettings::default()
        };
        assert_eq!(settings.deadline(), Some(Duration::ZERO));
        let mut generator = QuestionGenerator::new(LinguisticFrontEnd::shared(), settings, None);
        let report = generator.generate_report(NOTES, 10).unwrap();
        assert!(report.truncated_by_budget);
        assert!(report.pairs.is_empty());
        assert_eq!(report.sentences_seen, 3);
    }

    #[test]
    fn configured_taxonomy_feeds_true_false_swaps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.toml");
        std::fs::write(&path, "[taxonomy]\nmetal = [\"mithril\", \"adamant\"]\n").unwrap();
        let front = LinguisticFrontEnd::from_settings(
            &ResourceSettings {
                extra_lexicon: Some(path),
            },
            None,
        );
        let text = "The mithril blade shone brightly in the hall.";
        let mut swapped = 0;
        for seed in 0..200 {
            let settings = GeneratorSettings {
                seed: Some(seed),
                ..GeneratorSettings::default()
            };
            let mut generator = QuestionGenerator::new(front.clone(), settings, None);
            for pair in generator.generate_qa_pairs(text, 1).unwrap() {
                if pair.question.starts_with("True or False: ")
                    && !pair.question.to_lowercase().contains("mithril")
                {
                    assert_eq!(pair.answer, "False");
                    swapped += 1;
                }
            }
        }
        assert!(swapped > 0, "mithril should be swapped for a configured sibling");
    }
}
