use serde::{Deserialize, Serialize};

/// Question-making strategies tried per sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// "What is {noun}?" answered by the sentence.
    Definition,
    /// A person entity replaced by "who".
    Who,
    /// A place entity replaced by "where".
    Where,
    /// A time indicator replaced by "when".
    When,
    /// An adverb replaced by "how".
    How,
    /// A causal connective removed and the rest asked as "why".
    Why,
    /// The sentence, possibly negated or altered, judged true or false.
    TrueFalse,
    /// A content word blanked out.
    FillInBlank,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Definition,
        Self::Who,
        Self::Where,
        Self::When,
        Self::How,
        Self::Why,
        Self::TrueFalse,
        Self::FillInBlank,
    ];

    /// Returns human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Who => "who",
            Self::Where => "where",
            Self::When => "when",
            Self::How => "how",
            Self::Why => "why",
            Self::TrueFalse => "true_false",
            Self::FillInBlank => "fill_in_blank",
        }
    }
}
