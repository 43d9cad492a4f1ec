//! Penn Treebank part-of-speech tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Penn Treebank tag, plus the punctuation tags the tagger emits.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    CC,
    CD,
    DT,
    EX,
    FW,
    IN,
    JJ,
    JJR,
    JJS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    POS,
    PRP,
    PRPS,
    RB,
    RBR,
    RBS,
    RP,
    SYM,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    WPS,
    WRB,
    Period,
    Comma,
    Colon,
    OpenParen,
    CloseParen,
    Quote,
    Dollar,
    Hash,
}

impl PosTag {
    /// Tag label as written in the Penn Treebank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CC => "CC",
            Self::CD => "CD",
            Self::DT => "DT",
            Self::EX => "EX",
            Self::FW => "FW",
            Self::IN => "IN",
            Self::JJ => "JJ",
            Self::JJR => "JJR",
            Self::JJS => "JJS",
            Self::MD => "MD",
            Self::NN => "NN",
            Self::NNS => "NNS",
            Self::NNP => "NNP",
            Self::NNPS => "NNPS",
            Self::POS => "POS",
            Self::PRP => "PRP",
            Self::PRPS => "PRP$",
            Self::RB => "RB",
            Self::RBR => "RBR",
            Self::RBS => "RBS",
            Self::RP => "RP",
            Self::SYM => "SYM",
            Self::TO => "TO",
            Self::UH => "UH",
            Self::VB => "VB",
            Self::VBD => "VBD",
            Self::VBG => "VBG",
            Self::VBN => "VBN",
            Self::VBP => "VBP",
            Self::VBZ => "VBZ",
            Self::WDT => "WDT",
            Self::WP => "WP",
            Self::WPS => "WP$",
            Self::WRB => "WRB",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Quote => "''",
            Self::Dollar => "$",
            Self::Hash => "#",
        }
    }

    /// Parses a Penn label; unknown labels yield `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let tag = match label {
            "CC" => Self::CC,
            "CD" => Self::CD,
            "DT" => Self::DT,
            "EX" => Self::EX,
            "FW" => Self::FW,
            "IN" => Self::IN,
            "JJ" => Self::JJ,
            "JJR" => Self::JJR,
            "JJS" => Self::JJS,
            "MD" => Self::MD,
            "NN" => Self::NN,
            "NNS" => Self::NNS,
            "NNP" => Self::NNP,
            "NNPS" => Self::NNPS,
            "POS" => Self::POS,
            "PRP" => Self::PRP,
            "PRP$" => Self::PRPS,
            "RB" => Self::RB,
            "RBR" => Self::RBR,
            "RBS" => Self::RBS,
            "RP" => Self::RP,
            "SYM" => Self::SYM,
            "TO" => Self::TO,
            "UH" => Self::UH,
            "VB" => Self::VB,
            "VBD" => Self::VBD,
            "VBG" => Self::VBG,
            "VBN" => Self::VBN,
            "VBP" => Self::VBP,
            "VBZ" => Self::VBZ,
            "WDT" => Self::WDT,
            "WP" => Self::WP,
            "WP$" => Self::WPS,
            "WRB" => Self::WRB,
            "." => Self::Period,
            "," => Self::Comma,
            ":" => Self::Colon,
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            "''" | "``" => Self::Quote,
            "$" => Self::Dollar,
            "#" => Self::Hash,
            _ => return None,
        };
        Some(tag)
    }

    /// NN, NNS, NNP, NNPS.
    #[must_use]
    pub const fn is_noun(self) -> bool {
        matches!(self, Self::NN | Self::NNS | Self::NNP | Self::NNPS)
    }

    /// NNP, NNPS.
    #[must_use]
    pub const fn is_proper_noun(self) -> bool {
        matches!(self, Self::NNP | Self::NNPS)
    }

    /// VB, VBD, VBG, VBN, VBP, VBZ.
    #[must_use]
    pub const fn is_verb(self) -> bool {
        matches!(
            self,
            Self::VB | Self::VBD | Self::VBG | Self::VBN | Self::VBP | Self::VBZ
        )
    }

    /// JJ, JJR, JJS.
    #[must_use]
    pub const fn is_adjective(self) -> bool {
        matches!(self, Self::JJ | Self::JJR | Self::JJS)
    }

    /// RB, RBR, RBS.
    #[must_use]
    pub const fn is_adverb(self) -> bool {
        matches!(self, Self::RB | Self::RBR | Self::RBS)
    }

    /// MD.
    #[must_use]
    pub const fn is_modal(self) -> bool {
        matches!(self, Self::MD)
    }

    /// Nouns, verbs, adjectives and adverbs.
    #[must_use]
    pub const fn is_content(self) -> bool {
        self.is_noun() || self.is_verb() || self.is_adjective() || self.is_adverb()
    }

    /// Punctuation tags.
    #[must_use]
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            Self::Period
                | Self::Comma
                | Self::Colon
                | Self::OpenParen
                | Self::CloseParen
                | Self::Quote
        )
    }

    /// Tags that typically open a noun phrase, after which ambiguous words read as nouns.
    pub(crate) const fn opens_noun_phrase(self) -> bool {
        matches!(
            self,
            Self::DT | Self::PRPS | Self::POS | Self::CD | Self::WPS
        ) || self.is_adjective()
    }

    /// Tags that can act as a clause subject right before a finite verb.
    pub(crate) const fn can_be_subject(self) -> bool {
        matches!(
            self,
            Self::NN | Self::NNS | Self::NNP | Self::NNPS | Self::PRP | Self::WDT | Self::WP | Self::EX
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_classes_follow_penn_labels() {
        for tag in [PosTag::NN, PosTag::NNS, PosTag::NNP, PosTag::NNPS] {
            assert!(tag.as_str().starts_with("NN"));
            assert!(tag.is_noun());
        }
        for tag in [PosTag::VB, PosTag::VBD, PosTag::VBG, PosTag::VBN, PosTag::VBP, PosTag::VBZ] {
            assert!(tag.as_str().starts_with("VB"));
            assert!(tag.is_verb());
        }
        assert!(PosTag::JJS.is_adjective());
        assert!(PosTag::RBR.is_adverb());
        assert!(PosTag::MD.is_modal());
        assert!(!PosTag::MD.is_verb());
    }

    #[test]
    fn labels_round_trip() {
        assert_eq!(PosTag::from_label("PRP$"), Some(PosTag::PRPS));
        assert_eq!(PosTag::from_label("."), Some(PosTag::Period));
        assert_eq!(PosTag::from_label("XYZ"), None);
    }
}
