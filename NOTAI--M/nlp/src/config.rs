//! TOML configuration for the generator, answer engine, resources and logging.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use shared_logging::LogLevel;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NlpConfig {
    /// Question generator settings.
    #[serde(default)]
    pub generator: GeneratorSettings,
    /// Answer engine settings.
    #[serde(default)]
    pub answer: AnswerSettings,
    /// Linguistic resource settings.
    #[serde(default)]
    pub resources: ResourceSettings,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl NlpConfig {
    /// Loads configuration from a TOML file, resolving relative paths against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading nlp config {}", path.display()))?;
        let mut config = Self::from_toml(&raw).with_context(|| format!("parsing {}", path.display()))?;
        let source_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        if let Some(lexicon) = &mut config.resources.extra_lexicon {
            if lexicon.is_relative() {
                *lexicon = source_dir.join(&*lexicon);
            }
        }
        if let Some(log_path) = &mut config.logging.log_path {
            if log_path.is_relative() {
                *log_path = source_dir.join(&*log_path);
            }
        }
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks limits that would make the pipelines meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.generator.max_pairs == 0 {
            bail!("generator.max_pairs must be at least 1");
        }
        if self.generator.min_sentence_words == 0 {
            bail!("generator.min_sentence_words must be at least 1");
        }
        if self.generator.max_sentences == Some(0) {
            bail!("generator.max_sentences must be at least 1 when set");
        }
        if self.answer.relevant_sentence_limit == 0 {
            bail!("answer.relevant_sentence_limit must be at least 1");
        }
        if self.answer.keyword_limit == 0 {
            bail!("answer.keyword_limit must be at least 1");
        }
        self.logging.level()?;
        Ok(())
    }
}

/// Settings for flashcard generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// Sentences with fewer whitespace-delimited words are skipped.
    #[serde(default = "default_min_sentence_words")]
    pub min_sentence_words: usize,
    /// Largest pair count accepted by the runtime facade.
    #[serde(default = "default_max_pairs")]
    pub max_pairs: usize,
    /// Fixed RNG seed; entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stop after this many sentences.
    #[serde(default)]
    pub max_sentences: Option<usize>,
    /// Stop starting new sentences once this many milliseconds have elapsed.
    #[serde(default)]
    pub deadline_ms: Option<u64>,
}

impl GeneratorSettings {
    /// Deadline as a duration.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_sentence_words: default_min_sentence_words(),
            max_pairs: default_max_pairs(),
            seed: None,
            max_sentences: None,
            deadline_ms: None,
        }
    }
}

/// Settings for note question answering.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerSettings {
    /// Number of relevant sentences kept after scoring.
    #[serde(default = "default_relevant_sentence_limit")]
    pub relevant_sentence_limit: usize,
    /// Number of entities whose first mention is quoted as context.
    #[serde(default = "default_context_entity_limit")]
    pub context_entity_limit: usize,
    /// Maximum keywords extracted from a question.
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,
}

impl Default for AnswerSettings {
    fn default() -> Self {
        Self {
            relevant_sentence_limit: default_relevant_sentence_limit(),
            context_entity_limit: default_context_entity_limit(),
            keyword_limit: default_keyword_limit(),
        }
    }
}

/// Settings for the lexical resources backing the front end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceSettings {
    /// Optional TOML lexicon merged into the built-in tables.
    #[serde(default)]
    pub extra_lexicon: Option<PathBuf>,
}

/// Settings for structured logging.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// JSON-lines log destination; logging is disabled when absent.
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    /// Minimum level written (`debug`, `info`, `warn`, `error`).
    #[serde(default = "default_level")]
    pub level: String,
}

impl LoggingSettings {
    /// Parsed minimum level.
    pub fn level(&self) -> Result<LogLevel> {
        self.level.parse()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_path: None,
            level: default_level(),
        }
    }
}

const fn default_min_sentence_words() -> usize {
    5
}

const fn default_max_pairs() -> usize {
    50
}

const fn default_relevant_sentence_limit() -> usize {
    3
}

const fn default_context_entity_limit() -> usize {
    2
}

const fn default_keyword_limit() -> usize {
    10
}

fn default_level() -> String {
    "info".into()
}
