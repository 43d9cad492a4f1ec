//! Note question answering and summaries.

/// Async controller answering batches of questions.
pub mod advanced;
/// Question-type classification.
pub mod classify;
/// Rule-based answer engine.
pub mod engine;
/// Sentence retrieval and indicator matching.
pub mod retrieval;
/// Extractive note summaries.
pub mod summarize;

pub use advanced::{AnswerBatchController, AnswerRequest};
pub use classify::{classify_question_type, QuestionType};
pub use engine::{
    AnswerEngine, ERROR_MESSAGE, NEED_BOTH_MESSAGE, NO_LOCATIONS_MESSAGE, NO_PEOPLE_MESSAGE,
    NO_RELEVANT_MESSAGE, NO_TIME_MESSAGE,
};
pub use summarize::{NO_SUMMARY_MESSAGE, SUMMARY_ERROR_MESSAGE};
