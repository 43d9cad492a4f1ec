//! Linguistic front end: segmentation, tokenization, tagging and entity chunking.

/// Named-entity chunking.
pub mod chunker;
mod lexicon;
/// Lexical resources and the extra-lexicon loader.
pub mod resources;
/// Sentence segmentation.
pub mod segment;
/// Rule-based part-of-speech tagger.
pub mod tagger;
/// Penn Treebank tags.
pub mod tags;
/// Word tokenization.
pub mod tokenize;

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use shared_logging::LogLevel;

pub use chunker::EntityType;
pub use resources::{ExtraLexicon, LinguisticResources};
pub use tags::PosTag;

use crate::{
    config::ResourceSettings,
    error::{NlpError, NlpResult},
    telemetry::{emit, NlpTelemetry},
};

/// A sentence with its tagged tokens and entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedSentence {
    /// Whitespace-normalized sentence text.
    pub text: String,
    /// Tokens in order with their tags.
    pub tokens: Vec<(String, PosTag)>,
    /// Entities in first-seen order.
    pub entities: Vec<(String, EntityType)>,
}

impl TaggedSentence {
    /// Token strings.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.tokens.iter().map(|(word, _)| word.as_str()).collect()
    }

    /// Entity texts of the given types, in order.
    #[must_use]
    pub fn entities_of(&self, types: &[EntityType]) -> Vec<&str> {
        self.entities
            .iter()
            .filter(|(_, kind)| types.contains(kind))
            .map(|(text, _)| text.as_str())
            .collect()
    }
}

/// Entry point to the linguistic pipeline.
///
/// Holds the resources when they loaded; without them segmentation falls back
/// to a single sentence, tagging reports [`NlpError::ResourceUnavailable`] and
/// entity extraction returns nothing.
#[derive(Debug, Clone)]
pub struct LinguisticFrontEnd {
    resources: Option<Arc<LinguisticResources>>,
}

impl Default for LinguisticFrontEnd {
    fn default() -> Self {
        Self::shared()
    }
}

impl LinguisticFrontEnd {
    /// Front end over the process-wide built-in resources.
    #[must_use]
    pub fn shared() -> Self {
        Self {
            resources: Some(LinguisticResources::shared()),
        }
    }

    /// Front end over explicit resources.
    #[must_use]
    pub fn with_resources(resources: Arc<LinguisticResources>) -> Self {
        Self {
            resources: Some(resources),
        }
    }

    /// Front end whose resources failed to load.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { resources: None }
    }

    /// Builds the front end from configuration.
    ///
    /// An extra lexicon that cannot load is logged and the built-in tables are used instead.
    #[must_use]
    pub fn from_settings(settings: &ResourceSettings, telemetry: Option<&NlpTelemetry>) -> Self {
        let Some(path) = &settings.extra_lexicon else {
            return Self::shared();
        };
        match LinguisticResources::load(Some(path)) {
            Ok(resources) => Self::with_resources(Arc::new(resources)),
            Err(err) => {
                emit(
                    telemetry,
                    LogLevel::Warn,
                    "nlp.resources.unavailable",
                    json!({ "path": path.display().to_string(), "error": err.to_string() }),
                );
                Self::shared()
            }
        }
    }

    /// Whether resources are loaded.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.resources.is_some()
    }

    /// Loaded resources.
    pub fn resources(&self) -> NlpResult<&LinguisticResources> {
        self.resources
            .as_deref()
            .ok_or_else(|| NlpError::ResourceUnavailable("lexical resources not loaded".into()))
    }

    /// Shared handle to the loaded resources, for components that outlive a borrow.
    #[must_use]
    pub fn shared_resources(&self) -> Option<Arc<LinguisticResources>> {
        self.resources.clone()
    }

    /// Splits text into sentences.
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<String> {
        match self.resources.as_deref() {
            Some(res) => segment::segment(text, res),
            None => segment::segment_whole(text),
        }
    }

    /// Splits a sentence into tokens.
    #[must_use]
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        tokenize::tokenize(sentence, self.resources.as_deref())
    }

    /// Tags a sentence.
    pub fn tag(&self, sentence: &str) -> NlpResult<Vec<(String, PosTag)>> {
        let res = self.resources()?;
        let tokens = tokenize::tokenize(sentence, Some(res));
        Ok(tagger::tag_tokens(&tokens, res))
    }

    /// Extracts typed entities from a sentence; empty when resources are missing.
    #[must_use]
    pub fn extract_entities(&self, sentence: &str) -> Vec<(String, EntityType)> {
        self.tag(sentence)
            .map(|tagged| self.chunk(&tagged))
            .unwrap_or_default()
    }

    /// Chunks already tagged tokens.
    #[must_use]
    pub fn chunk(&self, tagged: &[(String, PosTag)]) -> Vec<(String, EntityType)> {
        self.resources
            .as_deref()
            .map(|res| chunker::chunk(tagged, res))
            .unwrap_or_default()
    }

    /// Tags a sentence and chunks its entities.
    pub fn analyze(&self, sentence: &str) -> NlpResult<TaggedSentence> {
        let text = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
        let tokens = self.tag(&text)?;
        let entities = self.chunk(&tokens);
        Ok(TaggedSentence {
            text,
            tokens,
            entities,
        })
    }

    /// Whether the word is a stop word; false when resources are missing.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.resources
            .as_deref()
            .is_some_and(|res| res.is_stop_word(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_logging::MemoryLogger;
    use std::path::PathBuf;

    #[test]
    fn analyze_collects_tokens_and_entities() {
        let front = LinguisticFrontEnd::shared();
        let sentence = front
            .analyze("  Marie Curie   discovered radium. ")
            .unwrap();
        assert_eq!(sentence.text, "Marie Curie discovered radium.");
        assert_eq!(sentence.words(), vec!["Marie", "Curie", "discovered", "radium", "."]);
        assert_eq!(sentence.entities_of(&[EntityType::Person]), vec!["Marie Curie"]);
    }

    #[test]
    fn unavailable_front_end_degrades() {
        let front = LinguisticFrontEnd::unavailable();
        assert_eq!(
            front.segment("One. Two."),
            vec!["One. Two.".to_string()]
        );
        assert!(matches!(front.tag("One."), Err(NlpError::ResourceUnavailable(_))));
        assert!(front.extract_entities("Marie Curie lived in Paris.").is_empty());
        assert!(!front.is_stop_word("the"));
    }

    #[test]
    fn missing_lexicon_falls_back_to_builtin_tables() {
        let sink = Arc::new(MemoryLogger::new());
        let telemetry = NlpTelemetry::builder("nlp")
            .sink(sink.clone())
            .build()
            .unwrap();
        let settings = ResourceSettings {
            extra_lexicon: Some(PathBuf::from("/nonexistent/notai/lexicon.toml")),
        };
        let front = LinguisticFrontEnd::from_settings(&settings, Some(&telemetry));
        assert!(front.is_available());
        assert!(sink.contains("nlp.resources.unavailable"));
        assert_eq!(
            front.extract_entities("Marie Curie discovered radium in Paris."),
            vec![
                ("Marie Curie".to_string(), EntityType::Person),
                ("Paris".to_string(), EntityType::Gpe),
            ]
        );
    }

    #[test]
    fn loaded_resources_are_shared_with_callers() {
        let front = LinguisticFrontEnd::shared();
        let held = front.shared_resources().unwrap();
        assert!(Arc::ptr_eq(&held, &LinguisticResources::shared()));
        assert!(LinguisticFrontEnd::unavailable().shared_resources().is_none());
    }
}
