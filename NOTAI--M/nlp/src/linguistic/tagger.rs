//! Rule-based Penn Treebank tagger.
//!
//! Each token first receives a lexical class from the word lists (closed-class
//! words, irregular verbs, listed bases, open-class lists, suffix rules). A
//! left-to-right pass then settles ambiguous verb-like words from the tags
//! already assigned to their left.

use super::{
    resources::{LinguisticResources, VerbForm},
    tags::PosTag,
};

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ship", "hood", "ance", "ence", "ure",
    "dom", "ogy", "ery", "er", "or",
];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "al", "ic", "less", "ish",
];
const CLAUSE_OPENERS: &[&str] = &["\"", "'", "(", "[", ":", "\u{201c}", "\u{2018}", "``"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lex {
    Fixed(PosTag),
    Verb(VerbForm),
    PossessiveS,
    Her,
    There,
}

impl Lex {
    const fn starts_noun_phrase(self) -> bool {
        match self {
            Self::Fixed(tag) => tag.is_noun() || tag.is_adjective() || matches!(tag, PosTag::CD),
            Self::Verb(form) => matches!(form, VerbForm::Base | VerbForm::ThirdPerson | VerbForm::Gerund),
            Self::PossessiveS | Self::Her | Self::There => false,
        }
    }
}

/// Tags already tokenized words.
#[must_use]
pub fn tag_tokens<S: AsRef<str>>(
    tokens: &[S],
    resources: &LinguisticResources,
) -> Vec<(String, PosTag)> {
    let words: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    let first_word = words
        .iter()
        .position(|word| word.chars().next().is_some_and(char::is_alphanumeric));
    let lexical: Vec<Lex> = words
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            let initial = Some(idx) == first_word
                || (idx > 0 && CLAUSE_OPENERS.contains(&words[idx - 1]));
            lexical_class(word, initial, words.get(idx + 1).copied(), resources)
        })
        .collect();

    let mut tagged: Vec<(String, PosTag)> = Vec::with_capacity(words.len());
    for (idx, word) in words.iter().enumerate() {
        let context = Context {
            idx,
            words: &words,
            lexical: &lexical,
            tagged: &tagged,
            first_word,
            resources,
        };
        let tag = context.resolve();
        tagged.push(((*word).to_string(), tag));
    }
    tagged
}

fn lexical_class(
    word: &str,
    initial: bool,
    next: Option<&str>,
    resources: &LinguisticResources,
) -> Lex {
    if let Some(tag) = punctuation_tag(word) {
        return Lex::Fixed(tag);
    }
    if let Some(tag) = numeric_tag(word) {
        return Lex::Fixed(tag);
    }
    let lower = word.to_lowercase();
    if lower == "'s" || lower == "\u{2019}s" {
        return Lex::PossessiveS;
    }
    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    if capitalized && lower != "i" {
        if !initial {
            return Lex::Fixed(PosTag::NNP);
        }
        if let Some(lex) = initial_capitalized(word, &lower, next, resources) {
            return lex;
        }
    }
    word_class(&lower, resources)
}

/// Sentence-initial capitals are proper nouns unless the lexicon or a suffix rule explains the word.
fn initial_capitalized(
    word: &str,
    lower: &str,
    next: Option<&str>,
    resources: &LinguisticResources,
) -> Option<Lex> {
    if resources.in_gazetteer(lower) && resources.closed_class_tag(lower).is_none() {
        return Some(Lex::Fixed(PosTag::NNP));
    }
    if resources.knows_word(lower)
        || resources.verb_form(lower).is_some()
        || plural_noun(lower, resources)
        || suffix_class(lower).is_some()
    {
        return None;
    }
    let next_capitalized = next.is_some_and(|n| {
        n != "I" && n.chars().next().is_some_and(char::is_uppercase)
    });
    let acronym = word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase());
    if next_capitalized || acronym || !lower.ends_with('s') || lower.ends_with("ss") {
        Some(Lex::Fixed(PosTag::NNP))
    } else {
        None
    }
}

fn word_class(lower: &str, resources: &LinguisticResources) -> Lex {
    if let Some(tag) = resources.closed_class_tag(lower) {
        return match lower {
            "her" => Lex::Her,
            "there" => Lex::There,
            _ => Lex::Fixed(tag),
        };
    }
    if let Some((form, _)) = resources.exact_verb_form(lower) {
        return Lex::Verb(form);
    }
    if resources.is_listed_adjective(lower) {
        return Lex::Fixed(PosTag::JJ);
    }
    if resources.is_listed_adverb(lower) {
        return Lex::Fixed(PosTag::RB);
    }
    if resources.is_listed_noun(lower)
        || !resources.hypernyms_of(lower).is_empty()
        || !resources.hyponyms_of(lower).is_empty()
    {
        return Lex::Fixed(PosTag::NN);
    }
    if let Some((form, _)) = resources.inflected_verb_form(lower) {
        return Lex::Verb(form);
    }
    if plural_noun(lower, resources) {
        return Lex::Fixed(PosTag::NNS);
    }
    if let Some(lex) = suffix_class(lower) {
        return lex;
    }
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us")
    {
        Lex::Fixed(PosTag::NNS)
    } else {
        Lex::Fixed(PosTag::NN)
    }
}

fn plural_noun(lower: &str, resources: &LinguisticResources) -> bool {
    let Some(stem) = lower.strip_suffix('s') else {
        return false;
    };
    let mut candidates = vec![stem.to_string()];
    if let Some(prefix) = lower.strip_suffix("ies") {
        candidates.push(format!("{prefix}y"));
    }
    if let Some(prefix) = lower.strip_suffix("es") {
        candidates.push(prefix.to_string());
    }
    candidates.iter().any(|candidate| {
        resources.is_listed_noun(candidate)
            || !resources.hypernyms_of(candidate).is_empty()
            || !resources.hyponyms_of(candidate).is_empty()
    })
}

fn suffix_class(lower: &str) -> Option<Lex> {
    if lower.len() < 5 {
        return None;
    }
    if lower.ends_with("ly") {
        return Some(Lex::Fixed(PosTag::RB));
    }
    if lower.ends_with("ing") && lower.len() > 5 {
        return Some(Lex::Verb(VerbForm::Gerund));
    }
    if lower.ends_with("ed") {
        return Some(Lex::Verb(VerbForm::PastOrParticiple));
    }
    if NOUN_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
        return Some(Lex::Fixed(PosTag::NN));
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if NOUN_SUFFIXES.iter().any(|suffix| stem.ends_with(suffix)) {
            return Some(Lex::Fixed(PosTag::NNS));
        }
    }
    if ADJECTIVE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
        return Some(Lex::Fixed(PosTag::JJ));
    }
    None
}

fn punctuation_tag(word: &str) -> Option<PosTag> {
    if word.is_empty() || word.chars().any(char::is_alphanumeric) {
        return None;
    }
    let tag = match word {
        "." | "!" | "?" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" | "-" | "--" | "..." | "\u{2026}" | "\u{2013}" | "\u{2014}" => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenParen,
        ")" | "]" | "}" => PosTag::CloseParen,
        "\"" | "'" | "`" | "``" | "''" | "\u{201c}" | "\u{201d}" | "\u{2018}" | "\u{2019}" => {
            PosTag::Quote
        }
        "$" => PosTag::Dollar,
        "#" => PosTag::Hash,
        "%" => PosTag::NN,
        "&" => PosTag::CC,
        _ => PosTag::SYM,
    };
    Some(tag)
}

fn numeric_tag(word: &str) -> Option<PosTag> {
    if !word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let lower = word.to_lowercase();
    let digits = lower.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &lower[digits.len()..];
    if matches!(suffix, "st" | "nd" | "rd" | "th") && digits.chars().all(|c| c.is_ascii_digit()) {
        return Some(PosTag::JJ);
    }
    Some(PosTag::CD)
}

struct Context<'a> {
    idx: usize,
    words: &'a [&'a str],
    lexical: &'a [Lex],
    tagged: &'a [(String, PosTag)],
    first_word: Option<usize>,
    resources: &'a LinguisticResources,
}

impl Context<'_> {
    fn resolve(&self) -> PosTag {
        match self.lexical[self.idx] {
            Lex::Fixed(tag) => self.resolve_fixed(tag),
            Lex::Verb(form) => self.resolve_verb(form),
            Lex::PossessiveS => match self.prev() {
                Some((lower, tag))
                    if matches!(tag, PosTag::PRP | PosTag::EX | PosTag::WP | PosTag::WDT)
                        || matches!(lower.as_str(), "that" | "there" | "here" | "what" | "who") =>
                {
                    PosTag::VBZ
                }
                _ => PosTag::POS,
            },
            Lex::Her => match self.lexical.get(self.idx + 1) {
                Some(next) if next.starts_noun_phrase() => PosTag::PRPS,
                _ => PosTag::PRP,
            },
            Lex::There => {
                let next_is_be = self
                    .words
                    .get(self.idx + 1)
                    .is_some_and(|next| self.resources.is_be_form(&next.to_lowercase()));
                if next_is_be {
                    PosTag::EX
                } else {
                    PosTag::RB
                }
            }
        }
    }

    fn resolve_fixed(&self, tag: PosTag) -> PosTag {
        if tag == PosTag::VBP {
            if let Some((_, anchor)) = self.anchor() {
                if matches!(anchor, PosTag::MD | PosTag::TO) {
                    return PosTag::VB;
                }
            }
        }
        tag
    }

    fn resolve_verb(&self, form: VerbForm) -> PosTag {
        let lower = self.words[self.idx].to_lowercase();
        let anchor = self.anchor();
        let anchor_lower = anchor.as_ref().map(|(word, _)| word.as_str()).unwrap_or_default();
        let anchor_tag = anchor.as_ref().map(|(_, tag)| *tag);
        let prev_tag = self.prev().map(|(_, tag)| tag);
        let after_be = self.resources.is_be_form(anchor_lower);
        let after_have = matches!(anchor_lower, "have" | "has" | "had" | "having" | "'ve");
        let after_determiner =
            matches!(prev_tag, Some(PosTag::DT | PosTag::PRPS | PosTag::POS | PosTag::WPS));

        match form {
            VerbForm::Base => {
                if matches!(anchor_tag, Some(PosTag::MD | PosTag::TO)) {
                    PosTag::VB
                } else if after_have && self.resources.base_is_participle(&lower) {
                    PosTag::VBN
                } else if after_be {
                    if self.resources.base_is_participle(&lower) {
                        PosTag::VBN
                    } else if self.resources.is_listed_adjective(&lower) {
                        PosTag::JJ
                    } else {
                        PosTag::NN
                    }
                } else if matches!(anchor_lower, "do" | "does" | "did") {
                    PosTag::VB
                } else if prev_tag.is_some_and(|tag| tag.opens_noun_phrase() || tag == PosTag::IN)
                {
                    PosTag::NN
                } else if prev_tag.is_some_and(PosTag::can_be_subject) {
                    PosTag::VBP
                } else if Some(self.idx) == self.first_word {
                    PosTag::VB
                } else if self.resources.is_listed_noun(&lower) {
                    PosTag::NN
                } else {
                    PosTag::VB
                }
            }
            VerbForm::ThirdPerson => {
                if Some(self.idx) == self.first_word
                    || prev_tag.is_some_and(|tag| tag.opens_noun_phrase() || tag == PosTag::IN)
                {
                    PosTag::NNS
                } else {
                    PosTag::VBZ
                }
            }
            VerbForm::PastOrParticiple => {
                if after_be || after_have {
                    PosTag::VBN
                } else if after_determiner {
                    PosTag::JJ
                } else {
                    PosTag::VBD
                }
            }
            VerbForm::Past => PosTag::VBD,
            VerbForm::Participle => {
                if after_determiner {
                    PosTag::JJ
                } else {
                    PosTag::VBN
                }
            }
            VerbForm::Gerund => {
                if after_determiner || prev_tag.is_some_and(PosTag::is_adjective) {
                    PosTag::NN
                } else {
                    PosTag::VBG
                }
            }
        }
    }

    /// Immediately preceding token, lower-cased, with its tag.
    fn prev(&self) -> Option<(String, PosTag)> {
        self.tagged
            .last()
            .map(|(word, tag)| (word.to_lowercase(), *tag))
    }

    /// Nearest preceding token that is not an adverb.
    fn anchor(&self) -> Option<(String, PosTag)> {
        self.tagged
            .iter()
            .rev()
            .find(|(_, tag)| !tag.is_adverb())
            .map(|(word, tag)| (word.to_lowercase(), *tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistic::tokenize::tokenize;

    fn tags(sentence: &str) -> Vec<(String, String)> {
        let res = LinguisticResources::builtin();
        let tokens = tokenize(sentence, Some(&res));
        tag_tokens(&tokens, &res)
            .into_iter()
            .map(|(word, tag)| (word, tag.as_str().to_string()))
            .collect()
    }

    fn tag_of(sentence: &str, word: &str) -> String {
        tags(sentence)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, tag)| tag)
            .unwrap_or_default()
    }

    #[test]
    fn tags_simple_sentence() {
        assert_eq!(
            tags("The cat sat on the mat."),
            vec![
                ("The".to_string(), "DT".to_string()),
                ("cat".to_string(), "NN".to_string()),
                ("sat".to_string(), "VBD".to_string()),
                ("on".to_string(), "IN".to_string()),
                ("the".to_string(), "DT".to_string()),
                ("mat".to_string(), "NN".to_string()),
                (".".to_string(), ".".to_string()),
            ]
        );
    }

    #[test]
    fn proper_nouns_and_past_tense() {
        let tagged = tags("Marie Curie discovered radium in Paris.");
        let labels: Vec<&str> = tagged.iter().map(|(_, tag)| tag.as_str()).collect();
        assert_eq!(labels, vec!["NNP", "NNP", "VBD", "NN", "IN", "NNP", "."]);
    }

    #[test]
    fn context_repairs_verbs() {
        assert_eq!(tag_of("Plants need to use sunlight.", "use"), "VB");
        assert_eq!(tag_of("Radium was discovered by Curie.", "discovered"), "VBN");
        assert_eq!(tag_of("The work was hard.", "work"), "NN");
        assert_eq!(tag_of("They work every day.", "work"), "VBP");
        assert_eq!(tag_of("She uses a microscope.", "uses"), "VBZ");
        assert_eq!(tag_of("The plants grow quickly.", "plants"), "NNS");
        assert_eq!(tag_of("He will not go home.", "go"), "VB");
        assert_eq!(tag_of("She has run far.", "run"), "VBN");
        assert_eq!(tag_of("He is running fast.", "running"), "VBG");
    }

    #[test]
    fn closed_class_and_clitics() {
        assert_eq!(tag_of("There is a cat.", "There"), "EX");
        assert_eq!(tag_of("It's warm.", "'s"), "VBZ");
        assert_eq!(tag_of("Curie's lab is small.", "'s"), "POS");
        assert_eq!(tag_of("I saw her book.", "her"), "PRP$");
        assert_eq!(tag_of("I saw her.", "her"), "PRP");
        assert_eq!(tag_of("It can't fly.", "n't"), "RB");
        assert_eq!(tag_of("It can't fly.", "ca"), "MD");
    }

    #[test]
    fn suffixes_and_numbers() {
        assert_eq!(tag_of("She spoke quickly.", "quickly"), "RB");
        assert_eq!(tag_of("The situation was dangerous.", "dangerous"), "JJ");
        assert_eq!(tag_of("The situation was dangerous.", "situation"), "NN");
        assert_eq!(tag_of("It costs 1,000 dollars.", "1,000"), "CD");
        assert_eq!(tag_of("He came 1st in the race.", "1st"), "JJ");
    }
}
