//! Sibling-term lookup used to build false statements.
//!
//! A sibling of a word is another hyponym of one of its hypernyms: "copper"
//! is a sibling of "iron" because both sit under "metal".

use std::sync::Arc;

use crate::linguistic::LinguisticResources;

/// Capability to look up sibling terms of a word.
pub trait SiblingTermSource: Send + Sync {
    /// Sibling terms of `word`, without the word itself; empty when unknown.
    fn lookup_sibling_terms(&self, word: &str) -> Vec<String>;
}

/// Sibling lookup over the taxonomy held by [`LinguisticResources`].
#[derive(Debug, Clone)]
pub struct TaxonomyLexicon {
    resources: Arc<LinguisticResources>,
}

impl TaxonomyLexicon {
    /// Wraps the given resources.
    #[must_use]
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self { resources }
    }

    /// Lexicon over the process-wide resources.
    #[must_use]
    pub fn shared() -> Self {
        Self::new(LinguisticResources::shared())
    }

    fn siblings_of(&self, lower: &str) -> Vec<String> {
        let mut siblings: Vec<String> = Vec::new();
        for hypernym in self.resources.hypernyms_of(lower) {
            for hyponym in self.resources.hyponyms_of(hypernym) {
                if hyponym != lower && !siblings.contains(hyponym) {
                    siblings.push(hyponym.clone());
                }
            }
        }
        siblings
    }
}

impl SiblingTermSource for TaxonomyLexicon {
    fn lookup_sibling_terms(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        let direct = self.siblings_of(&lower);
        if !direct.is_empty() {
            return direct;
        }
        for singular in singular_forms(&lower) {
            let siblings = self.siblings_of(&singular);
            if !siblings.is_empty() {
                return siblings.iter().map(|sibling| pluralize(sibling)).collect();
            }
        }
        Vec::new()
    }
}

/// Source that never finds siblings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSiblingTerms;

impl SiblingTermSource for NoSiblingTerms {
    fn lookup_sibling_terms(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}

fn singular_forms(lower: &str) -> Vec<String> {
    let mut forms = Vec::new();
    if let Some(stem) = lower.strip_suffix("ies") {
        forms.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        forms.push(stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if !stem.ends_with('s') {
            forms.push(stem.to_string());
        }
    }
    forms
}

fn pluralize(word: &str) -> String {
    if word.contains(' ') {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) {
            return format!("{stem}ies");
        }
    }
    if word.ends_with(['s', 'x', 'z']) || word.ends_with("ch") || word.ends_with("sh") {
        return format!("{word}es");
    }
    format!("{word}s")
}
