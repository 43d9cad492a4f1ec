//! Named-entity chunking over tagged tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{resources::LinguisticResources, tags::PosTag, tokenize::detokenize};

const LOCATIVE_PREPOSITIONS: &[&str] = &[
    "in", "at", "from", "to", "near", "into", "across", "throughout", "toward", "towards",
];
const NAME_JOINERS: &[&str] = &["of", "de", "von", "van", "da", "del", "&"];
const MERIDIEM: &[&str] = &["am", "pm", "a.m.", "p.m."];
const SCALE_WORDS: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];

/// Entity categories recognised by the chunker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// People.
    Person,
    /// Countries, cities, states.
    Gpe,
    /// Non-political locations such as rivers or continents.
    Location,
    /// Companies, institutions, agencies.
    Organization,
    /// Calendar dates and years.
    Date,
    /// Clock times.
    Time,
    /// Monetary amounts.
    Money,
    /// Percentages.
    Percent,
}

impl EntityType {
    /// Every entity type, in reporting order.
    pub const ALL: [Self; 8] = [
        Self::Person,
        Self::Gpe,
        Self::Location,
        Self::Organization,
        Self::Date,
        Self::Time,
        Self::Money,
        Self::Percent,
    ];

    /// Upper-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Gpe => "GPE",
            Self::Location => "LOCATION",
            Self::Organization => "ORGANIZATION",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Money => "MONEY",
            Self::Percent => "PERCENT",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Groups tagged tokens into typed entity spans, deduplicated by text.
#[must_use]
pub fn chunk(tagged: &[(String, PosTag)], resources: &LinguisticResources) -> Vec<(String, EntityType)> {
    let lower: Vec<String> = tagged.iter().map(|(word, _)| word.to_lowercase()).collect();
    let scanner = Scanner {
        tagged,
        lower: &lower,
        resources,
    };
    let mut entities: Vec<(String, EntityType)> = Vec::new();
    let mut idx = 0;
    while idx < tagged.len() {
        let found = scanner
            .numeric(idx)
            .or_else(|| scanner.temporal(idx))
            .or_else(|| scanner.proper_run(idx));
        match found {
            Some(span) => {
                if !span.text.is_empty() && !entities.iter().any(|(text, _)| *text == span.text) {
                    entities.push((span.text, span.kind));
                }
                idx = span.end.max(idx + 1);
            }
            None => idx += 1,
        }
    }
    entities
}

struct Span {
    text: String,
    kind: EntityType,
    end: usize,
}

struct Scanner<'a> {
    tagged: &'a [(String, PosTag)],
    lower: &'a [String],
    resources: &'a LinguisticResources,
}

impl Scanner<'_> {
    fn word(&self, idx: usize) -> Option<&str> {
        self.lower.get(idx).map(String::as_str)
    }

    fn tag(&self, idx: usize) -> Option<PosTag> {
        self.tagged.get(idx).map(|(_, tag)| *tag)
    }

    fn is_number(&self, idx: usize) -> bool {
        self.tag(idx) == Some(PosTag::CD)
    }

    fn is_capitalized(&self, idx: usize) -> bool {
        self.tagged
            .get(idx)
            .and_then(|(word, _)| word.chars().next())
            .is_some_and(char::is_uppercase)
    }

    fn span(&self, start: usize, end: usize, kind: EntityType) -> Span {
        let words: Vec<&str> = self.tagged[start..end]
            .iter()
            .map(|(word, _)| word.as_str())
            .collect();
        Span {
            text: detokenize(&words),
            kind,
            end,
        }
    }

    /// Money and percentages.
    fn numeric(&self, idx: usize) -> Option<Span> {
        if self.tag(idx) == Some(PosTag::Dollar) && self.is_number(idx + 1) {
            let mut end = idx + 2;
            while self.word(end).is_some_and(|w| SCALE_WORDS.contains(&w)) {
                end += 1;
            }
            return Some(self.span(idx, end, EntityType::Money));
        }
        if !self.is_number(idx) {
            return None;
        }
        let mut end = idx + 1;
        while self.word(end).is_some_and(|w| SCALE_WORDS.contains(&w)) {
            end += 1;
        }
        match self.word(end) {
            Some("%" | "percent") => Some(self.span(idx, end + 1, EntityType::Percent)),
            Some(word) if self.resources.is_currency_word(word) => {
                Some(self.span(idx, end + 1, EntityType::Money))
            }
            _ => None,
        }
    }

    /// Dates and times.
    fn temporal(&self, idx: usize) -> Option<Span> {
        let word = self.word(idx)?;
        if self.is_number(idx) {
            if is_clock(word) {
                let end = if self.word(idx + 1).is_some_and(|w| MERIDIEM.contains(&w)) {
                    idx + 2
                } else {
                    idx + 1
                };
                return Some(self.span(idx, end, EntityType::Time));
            }
            if self.word(idx + 1).is_some_and(|w| MERIDIEM.contains(&w)) {
                return Some(self.span(idx, idx + 2, EntityType::Time));
            }
            if is_day(word) && self.is_month_at(idx + 1) {
                let end = self.extend_year(idx + 2);
                return Some(self.span(idx, end, EntityType::Date));
            }
            if is_year(word) || is_decade(word) {
                return Some(self.span(idx, idx + 1, EntityType::Date));
            }
            return None;
        }
        if matches!(word, "noon" | "midnight") {
            return Some(self.span(idx, idx + 1, EntityType::Time));
        }
        if self.is_month_at(idx) {
            let mut end = idx + 1;
            if self.word(end).is_some_and(is_day) {
                end += 1;
            }
            end = self.extend_year(end);
            return Some(self.span(idx, end, EntityType::Date));
        }
        if self.is_capitalized(idx) && self.resources.is_weekday(word) {
            return Some(self.span(idx, idx + 1, EntityType::Date));
        }
        None
    }

    fn is_month_at(&self, idx: usize) -> bool {
        // "may" and "march" are only months when capitalised
        self.word(idx)
            .is_some_and(|w| self.resources.is_month(w))
            && self.is_capitalized(idx)
    }

    fn extend_year(&self, mut end: usize) -> usize {
        if self.word(end) == Some(",") && self.word(end + 1).is_some_and(is_year) {
            end += 2;
        } else if self.word(end).is_some_and(is_year) {
            end += 1;
        }
        end
    }

    /// Runs of proper nouns, classified by gazetteers and context.
    fn proper_run(&self, idx: usize) -> Option<Span> {
        if !self.is_name_token(idx) {
            return None;
        }
        let mut end = idx + 1;
        loop {
            if self.is_name_token(end) {
                end += 1;
            } else if self.word(end).is_some_and(|w| NAME_JOINERS.contains(&w))
                && self.is_name_token(end + 1)
            {
                end += 2;
            } else {
                break;
            }
        }
        let words: Vec<&str> = (idx..end).filter_map(|i| self.word(i)).collect();
        let mut start = idx;
        let kind = self.classify(idx, end, &words, &mut start);
        Some(self.span(start, end, kind))
    }

    fn is_name_token(&self, idx: usize) -> bool {
        let Some(tag) = self.tag(idx) else {
            return false;
        };
        if !tag.is_proper_noun() {
            return false;
        }
        let word = self.word(idx).unwrap_or_default();
        !(self.resources.is_month(word) || self.resources.is_weekday(word))
    }

    fn classify(&self, idx: usize, end: usize, words: &[&str], start: &mut usize) -> EntityType {
        let res = self.resources;
        let joined = words.join(" ");
        let bare_words: Vec<&str> = words.iter().map(|w| w.trim_end_matches('.')).collect();

        if words.len() > 1 && res.is_honorific(words[0]) {
            *start = idx + 1;
            return EntityType::Person;
        }
        if res.is_organization(&joined)
            || words.iter().any(|w| res.is_org_marker(w))
            || bare_words.iter().any(|w| res.is_org_marker(w))
        {
            return EntityType::Organization;
        }
        if res.is_place(&joined) {
            return EntityType::Gpe;
        }
        let first = words[0];
        let last = words[words.len() - 1];
        if res.is_region(&joined)
            || (words.len() > 1 && (res.is_location_feature(last) || res.is_location_feature(first)))
        {
            return EntityType::Location;
        }
        if words.len() == 1 && self.is_acronym(idx) {
            return EntityType::Organization;
        }
        if words.iter().any(|w| res.is_place(w)) && words.len() <= 2 {
            return EntityType::Gpe;
        }
        if res.is_given_name(first) {
            return EntityType::Person;
        }
        let unknown_words = words.iter().all(|w| !res.knows_word(w));
        let after_locative = idx > 0
            && self
                .word(idx - 1)
                .is_some_and(|w| LOCATIVE_PREPOSITIONS.contains(&w));
        if after_locative && unknown_words {
            return EntityType::Gpe;
        }
        if words.len() > 1 && unknown_words {
            return EntityType::Person;
        }
        if words.len() == 1 && unknown_words && self.tag(end).is_some_and(|tag| tag.is_verb() || tag.is_modal()) {
            return EntityType::Person;
        }
        EntityType::Organization
    }

    fn is_acronym(&self, idx: usize) -> bool {
        self.tagged.get(idx).is_some_and(|(word, _)| {
            word.chars().filter(char::is_ascii_alphabetic).count() > 1
                && word
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '.' || c == '&')
        })
    }
}

fn is_clock(word: &str) -> bool {
    let mut parts = word.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(hours), Some(minutes), None) => {
            !hours.is_empty()
                && hours.len() <= 2
                && minutes.len() == 2
                && hours.chars().all(|c| c.is_ascii_digit())
                && minutes.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

fn is_year(word: &str) -> bool {
    word.len() == 4
        && word
            .parse::<u32>()
            .is_ok_and(|year| (1000..=2100).contains(&year))
}

fn is_decade(word: &str) -> bool {
    word.strip_suffix('s')
        .is_some_and(|stem| is_year(stem) && stem.ends_with('0'))
}

fn is_day(word: &str) -> bool {
    let digits = word.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    digits.len() <= 2
        && digits
            .parse::<u32>()
            .is_ok_and(|day| (1..=31).contains(&day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistic::{tagger::tag_tokens, tokenize::tokenize};

    fn entities(sentence: &str) -> Vec<(String, EntityType)> {
        let res = LinguisticResources::builtin();
        let tokens = tokenize(sentence, Some(&res));
        chunk(&tag_tokens(&tokens, &res), &res)
    }

    #[test]
    fn recognises_people_and_places() {
        assert_eq!(
            entities("Marie Curie discovered radium in Paris."),
            vec![
                ("Marie Curie".to_string(), EntityType::Person),
                ("Paris".to_string(), EntityType::Gpe),
            ]
        );
        assert_eq!(
            entities("Yesterday Dr. Watson visited the Amazon River."),
            vec![
                ("Watson".to_string(), EntityType::Person),
                ("Amazon River".to_string(), EntityType::Location),
            ]
        );
    }

    #[test]
    fn recognises_organizations() {
        let found = entities("She studied at the University of Paris with NASA engineers.");
        assert!(found.contains(&("University of Paris".to_string(), EntityType::Organization)));
        assert!(found.contains(&("NASA".to_string(), EntityType::Organization)));
    }

    #[test]
    fn recognises_dates_times_money_and_percent() {
        let found = entities("On March 5, 1990 at 10:30 am the price rose 5% to $20 on Monday.");
        assert!(found.contains(&("March 5, 1990".to_string(), EntityType::Date)));
        assert!(found.contains(&("10:30 am".to_string(), EntityType::Time)));
        assert!(found.contains(&("5%".to_string(), EntityType::Percent)));
        assert!(found.contains(&("$20".to_string(), EntityType::Money)));
        assert!(found.contains(&("Monday".to_string(), EntityType::Date)));
        assert_eq!(
            entities("The war ended in 1945 after 300 million dollars were spent."),
            vec![
                ("1945".to_string(), EntityType::Date),
                ("300 million dollars".to_string(), EntityType::Money),
            ]
        );
    }

    #[test]
    fn duplicates_are_collapsed() {
        assert_eq!(
            entities("Paris is large and Paris is old."),
            vec![("Paris".to_string(), EntityType::Gpe)]
        );
    }

    #[test]
    fn no_entities_in_plain_sentence() {
        assert!(entities("The cat sat on the mat.").is_empty());
    }
}
