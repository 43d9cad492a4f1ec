//! Keyword ranking and entity projections shared by generation and answering.

use indexmap::IndexMap;
use serde::Serialize;

use crate::linguistic::{EntityType, LinguisticFrontEnd};

/// Keywords kept when no limit is configured.
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// Topics kept by [`extract_main_topics`].
pub const MAIN_TOPIC_LIMIT: usize = 5;

/// Lower-cased content words ordered by descending frequency, ties by first occurrence.
///
/// Nouns, verbs, adjectives and adverbs are kept; stop words and tokens
/// without any alphanumeric character are dropped. Returns an empty list when
/// the front end cannot tag.
#[must_use]
pub fn extract_keywords(front: &LinguisticFrontEnd, text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let Ok(tagged) = front.tag(&lowered) else {
        return Vec::new();
    };
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for (word, tag) in tagged {
        if !tag.is_content() || front.is_stop_word(&word) {
            continue;
        }
        if !word.chars().any(char::is_alphanumeric) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(limit).map(|(word, _)| word).collect()
}

/// Entity texts whose type is one of `types`, in order.
#[must_use]
pub fn entities_by_type(entities: &[(String, EntityType)], types: &[EntityType]) -> Vec<String> {
    entities
        .iter()
        .filter(|(_, kind)| types.contains(kind))
        .map(|(text, _)| text.clone())
        .collect()
}

/// Entities of a whole note, grouped by type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteEntities {
    by_type: IndexMap<EntityType, Vec<String>>,
}

impl NoteEntities {
    /// Adds an entity unless its type already holds the same text.
    pub fn insert(&mut self, text: String, kind: EntityType) {
        let bucket = self.by_type.entry(kind).or_default();
        if !bucket.contains(&text) {
            bucket.push(text);
        }
    }

    /// Texts of one type.
    #[must_use]
    pub fn get(&self, kind: EntityType) -> &[String] {
        self.by_type.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Texts of several types, concatenated in the order given.
    #[must_use]
    pub fn of(&self, types: &[EntityType]) -> Vec<String> {
        types
            .iter()
            .flat_map(|kind| self.get(*kind).iter().cloned())
            .collect()
    }

    /// All texts in [`EntityType::ALL`] order.
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        self.of(&EntityType::ALL)
    }

    /// True when no entity was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(Vec::is_empty)
    }
}

/// Entities from every sentence of a note, deduplicated per type in first-seen order.
#[must_use]
pub fn extract_note_entities(front: &LinguisticFrontEnd, note: &str) -> NoteEntities {
    let mut entities = NoteEntities::default();
    for sentence in front.segment(note) {
        for (text, kind) in front.extract_entities(&sentence) {
            entities.insert(text, kind);
        }
    }
    entities
}

/// Keywords followed by entity texts, deduplicated, at most [`MAIN_TOPIC_LIMIT`].
#[must_use]
pub fn extract_main_topics(front: &LinguisticFrontEnd, note: &str, keyword_limit: usize) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    let keywords = extract_keywords(front, note, keyword_limit);
    let entities = extract_note_entities(front, note).all();
    for topic in keywords.into_iter().chain(entities) {
        if topics.len() == MAIN_TOPIC_LIMIT {
            break;
        }
        if !topics.contains(&topic) {
            topics.push(topic);
        }
    }
    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_rank_by_frequency_then_order() {
        let front = LinguisticFrontEnd::shared();
        let keywords = extract_keywords(
            &front,
            "Photosynthesis uses sunlight. Plants need sunlight and water for photosynthesis.",
            DEFAULT_KEYWORD_LIMIT,
        );
        assert_eq!(keywords[0], "photosynthesis");
        assert_eq!(keywords[1], "sunlight");
        assert!(keywords.contains(&"water".to_string()));
        assert!(!keywords.contains(&"and".to_string()));
        assert!(!keywords.contains(&".".to_string()));
    }

    #[test]
    fn keywords_respect_limit_and_skip_stop_words() {
        let front = LinguisticFrontEnd::shared();
        let keywords = extract_keywords(&front, "Who is the most famous scientist?", 1);
        assert_eq!(keywords, vec!["famous".to_string()]);
        assert!(extract_keywords(&front, "the and of", 10).is_empty());
    }

    #[test]
    fn unavailable_front_end_yields_nothing() {
        let front = LinguisticFrontEnd::unavailable();
        assert!(extract_keywords(&front, "Plants need water.", 10).is_empty());
        assert!(extract_note_entities(&front, "Marie Curie lived in Paris.").is_empty());
    }

    #[test]
    fn note_entities_group_by_type() {
        let front = LinguisticFrontEnd::shared();
        let entities = extract_note_entities(
            &front,
            "Marie Curie lived in Paris. Marie Curie later visited London and the Alps.",
        );
        assert_eq!(entities.get(EntityType::Person), ["Marie Curie".to_string()]);
        assert_eq!(
            entities.of(&[EntityType::Gpe, EntityType::Location]),
            vec!["Paris".to_string(), "London".to_string(), "Alps".to_string()]
        );
        let projected = entities_by_type(
            &[
                ("Paris".to_string(), EntityType::Gpe),
                ("Marie Curie".to_string(), EntityType::Person),
            ],
            &[EntityType::Person],
        );
        assert_eq!(projected, vec!["Marie Curie".to_string()]);
    }

    #[test]
    fn main_topics_are_capped() {
        let front = LinguisticFrontEnd::shared();
        let topics = extract_main_topics(
            &front,
            "Rivers carry water to oceans. Mountains store snow. Forests hold animals. Deserts lack rain.",
            DEFAULT_KEYWORD_LIMIT,
        );
        assert!(topics.len() <= MAIN_TOPIC_LIMIT);
        assert!(!topics.is_empty());
    }
}
