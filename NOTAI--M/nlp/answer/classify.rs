use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::linguistic::LinguisticFrontEnd;

/// Kind of question, decided by its first recognized lead word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// "what" questions.
    Definition,
    /// "who" questions.
    Person,
    /// "where" questions.
    Location,
    /// "when" questions.
    Time,
    /// "why" questions.
    Reason,
    /// "how" questions.
    Method,
    /// "which" questions.
    Selection,
    /// "can" questions.
    Ability,
    /// "could" questions.
    Possibility,
    /// "would" questions.
    Hypothetical,
    /// "should" questions.
    Advice,
    /// "is"/"are" questions.
    Confirmation,
    /// "do"/"does" questions.
    Action,
    /// No lead word recognized.
    General,
}

static LEAD_WORDS: Lazy<HashMap<&'static str, QuestionType>> = Lazy::new(|| {
    HashMap::from([
        ("what", QuestionType::Definition),
        ("who", QuestionType::Person),
        ("where", QuestionType::Location),
        ("when", QuestionType::Time),
        ("why", QuestionType::Reason),
        ("how", QuestionType::Method),
        ("which", QuestionType::Selection),
        ("can", QuestionType::Ability),
        ("could", QuestionType::Possibility),
        ("would", QuestionType::Hypothetical),
        ("should", QuestionType::Advice),
        ("is", QuestionType::Confirmation),
        ("are", QuestionType::Confirmation),
        ("do", QuestionType::Action),
        ("does", QuestionType::Action),
    ])
});

impl QuestionType {
    /// Returns human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Person => "person",
            Self::Location => "location",
            Self::Time => "time",
            Self::Reason => "reason",
            Self::Method => "method",
            Self::Selection => "selection",
            Self::Ability => "ability",
            Self::Possibility => "possibility",
            Self::Hypothetical => "hypothetical",
            Self::Advice => "advice",
            Self::Confirmation => "confirmation",
            Self::Action => "action",
            Self::General => "general",
        }
    }

    /// Type signalled by a single lower-cased lead word.
    #[must_use]
    pub fn from_lead_word(word: &str) -> Option<Self> {
        LEAD_WORDS.get(word).copied()
    }
}

/// Classifies a question by the first token found in the lead-word table.
#[must_use]
pub fn classify_question_type(front: &LinguisticFrontEnd, question: &str) -> QuestionType {
    front
        .tokenize(&question.to_lowercase())
        .iter()
        .find_map(|token| QuestionType::from_lead_word(token))
        .unwrap_or(QuestionType::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_lead_word_wins() {
        let front = LinguisticFrontEnd::shared();
        assert_eq!(classify_question_type(&front, "Who discovered radium?"), QuestionType::Person);
        assert_eq!(classify_question_type(&front, "What is a cell?"), QuestionType::Definition);
        assert_eq!(classify_question_type(&front, "Is it true that cats fly?"), QuestionType::Confirmation);
        assert_eq!(
            classify_question_type(&front, "Tell me where the river ends, and why"),
            QuestionType::Location
        );
        assert_eq!(classify_question_type(&front, "Summarize this note"), QuestionType::General);
    }

    #[test]
    fn classification_is_pure() {
        let front = LinguisticFrontEnd::shared();
        let question = "How does photosynthesis work?";
        let first = classify_question_type(&front, question);
        assert_eq!(first, QuestionType::Method);
        assert!((0..10).all(|_| classify_question_type(&front, question) == first));
    }

    #[test]
    fn works_without_resources() {
        let front = LinguisticFrontEnd::unavailable();
        assert_eq!(classify_question_type(&front, "WHEN did it rain?"), QuestionType::Time);
    }
}
