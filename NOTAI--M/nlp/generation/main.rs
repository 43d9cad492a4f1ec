//! Flashcard generation: strategies, true/false rewriting and the driver.

/// Generation driver.
pub mod generator;
/// String helpers shared by the strategies.
pub mod helper;
/// Strategy enumeration.
pub mod method;
/// Generated pair and run report types.
pub mod pair;
/// Question-making strategies.
pub mod strategies;
/// True/false statement construction.
pub mod truefalse;

pub use generator::QuestionGenerator;
pub use method::Strategy;
pub use pair::{GenerationReport, QaPair};
pub use strategies::{SentenceContext, BLANK};
