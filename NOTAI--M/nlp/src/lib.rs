#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms,
    missing_docs
)]

//! NotAI study core: flashcard generation and note question answering over a
//! rule-based linguistic front end.

/// TOML configuration.
pub mod config;
/// Error types.
pub mod error;
/// Keyword ranking and entity projections.
pub mod keywords;
/// Sibling-term lookup.
pub mod lexical;
/// Segmentation, tokenization, tagging and entity chunking.
pub mod linguistic;

/// Telemetry builder/hook for NLP components.
#[path = "../telemetry.rs"]
pub mod telemetry;

/// Question/answer pair generation.
#[path = "../generation/main.rs"]
pub mod generation;

/// Note question answering and summaries.
#[path = "../answer/main.rs"]
pub mod answer;

/// Console JSON-line command ingestion.
#[path = "../consolecmdreceiver.rs"]
pub mod console;

/// NLP runtime entry point.
#[path = "../main.rs"]
pub mod runtime;

pub use answer::{
    classify_question_type, AnswerBatchController, AnswerEngine, AnswerRequest, QuestionType,
};
pub use config::NlpConfig;
pub use console::{ConsoleCommand, ConsoleCommandReceiver};
pub use error::{NlpError, NlpResult};
pub use generation::{GenerationReport, QaPair, QuestionGenerator, Strategy};
pub use keywords::{extract_keywords, extract_main_topics, NoteEntities};
pub use lexical::{NoSiblingTerms, SiblingTermSource, TaxonomyLexicon};
pub use linguistic::{EntityType, LinguisticFrontEnd, PosTag, TaggedSentence};
pub use runtime::NlpRuntime;
pub use telemetry::{NlpTelemetry, NlpTelemetryBuilder};
