//! Process-wide lexical resources for the linguistic front end.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
    sync::Arc,
};

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use super::{lexicon, tags::PosTag};
use crate::error::{NlpError, NlpResult};

static SHARED: OnceCell<Arc<LinguisticResources>> = OnceCell::new();

/// User-supplied additions merged into the built-in tables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraLexicon {
    /// Given names recognised as people.
    #[serde(default)]
    pub names: Vec<String>,
    /// Geo-political place names (may be multi-word).
    #[serde(default)]
    pub places: Vec<String>,
    /// Full organization names.
    #[serde(default)]
    pub organizations: Vec<String>,
    /// Extra stop words.
    #[serde(default)]
    pub stop_words: Vec<String>,
    /// Hypernym to hyponym lists.
    #[serde(default)]
    pub taxonomy: IndexMap<String, Vec<String>>,
}

impl ExtraLexicon {
    /// Reads an extra lexicon from a TOML file.
    pub fn load(path: &Path) -> NlpResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| NlpError::Lexicon {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        toml::from_str(&raw).map_err(|err| NlpError::Lexicon {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }
}

/// Inflectional reading of a verb-like word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerbForm {
    Base,
    ThirdPerson,
    Past,
    Participle,
    PastOrParticiple,
    Gerund,
}

/// Word lists, gazetteers and taxonomy used by tagging and chunking.
#[derive(Debug)]
pub struct LinguisticResources {
    stop_words: HashSet<String>,
    closed_class: HashMap<&'static str, PosTag>,
    be_forms: HashSet<&'static str>,
    aux_forms: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    nouns: HashSet<&'static str>,
    verb_bases: HashSet<&'static str>,
    irregular_bases: HashSet<&'static str>,
    irregular_past: HashMap<&'static str, &'static str>,
    irregular_participle: HashMap<&'static str, &'static str>,
    abbreviations: HashSet<&'static str>,
    honorifics: HashSet<&'static str>,
    given_names: HashSet<String>,
    places: HashSet<String>,
    organizations: HashSet<String>,
    regions: HashSet<&'static str>,
    location_features: HashSet<&'static str>,
    org_markers: HashSet<&'static str>,
    months: HashSet<&'static str>,
    weekdays: HashSet<&'static str>,
    currency_words: HashSet<&'static str>,
    hyponyms: IndexMap<String, Vec<String>>,
    hypernyms: HashMap<String, Vec<String>>,
}

impl LinguisticResources {
    /// Returns the process-wide built-in resources, initialising them once.
    pub fn shared() -> Arc<Self> {
        SHARED.get_or_init(|| Arc::new(Self::builtin())).clone()
    }

    /// Builds resources from the compiled-in tables only.
    #[must_use]
    pub fn builtin() -> Self {
        let mut closed_class = HashMap::new();
        for (word, label) in lexicon::CLOSED_CLASS {
            if let Some(tag) = PosTag::from_label(label) {
                closed_class.insert(*word, tag);
            }
        }
        let mut irregular_bases = HashSet::new();
        let mut irregular_past = HashMap::new();
        let mut irregular_participle = HashMap::new();
        for (base, past, participle) in lexicon::IRREGULAR_VERBS {
            irregular_bases.insert(*base);
            irregular_past.insert(*past, *base);
            irregular_participle.insert(*participle, *base);
        }
        let mut verb_bases: HashSet<&'static str> = lexicon::VERB_BASES.iter().copied().collect();
        verb_bases.extend(irregular_bases.iter().copied());

        let mut resources = Self {
            stop_words: owned(lexicon::STOP_WORDS),
            closed_class,
            be_forms: borrowed(lexicon::BE_FORMS),
            aux_forms: borrowed(lexicon::AUX_FORMS),
            adverbs: borrowed(lexicon::ADVERBS),
            adjectives: borrowed(lexicon::ADJECTIVES),
            nouns: borrowed(lexicon::NOUNS),
            verb_bases,
            irregular_bases,
            irregular_past,
            irregular_participle,
            abbreviations: borrowed(lexicon::ABBREVIATIONS),
            honorifics: borrowed(lexicon::HONORIFICS),
            given_names: owned(lexicon::GIVEN_NAMES),
            places: owned(lexicon::PLACES),
            organizations: HashSet::new(),
            regions: borrowed(lexicon::REGIONS),
            location_features: borrowed(lexicon::LOCATION_FEATURES),
            org_markers: borrowed(lexicon::ORG_MARKERS),
            months: borrowed(lexicon::MONTHS),
            weekdays: borrowed(lexicon::WEEKDAYS),
            currency_words: borrowed(lexicon::CURRENCY_WORDS),
            hyponyms: IndexMap::new(),
            hypernyms: HashMap::new(),
        };
        for (hypernym, members) in lexicon::TAXONOMY {
            resources.add_taxonomy(hypernym, members.iter().copied());
        }
        resources
    }

    /// Builds the built-in tables merged with an optional extra lexicon file.
    pub fn load(extra: Option<&Path>) -> NlpResult<Self> {
        let mut resources = Self::builtin();
        if let Some(path) = extra {
            resources.merge(ExtraLexicon::load(path)?);
        }
        Ok(resources)
    }

    /// Merges user additions; entries are lower-cased.
    pub fn merge(&mut self, extra: ExtraLexicon) {
        self.given_names
            .extend(extra.names.iter().map(|name| name.trim().to_lowercase()));
        self.places
            .extend(extra.places.iter().map(|place| place.trim().to_lowercase()));
        self.organizations
            .extend(extra.organizations.iter().map(|org| org.trim().to_lowercase()));
        self.stop_words
            .extend(extra.stop_words.iter().map(|word| word.trim().to_lowercase()));
        for (hypernym, members) in &extra.taxonomy {
            self.add_taxonomy(hypernym, members.iter().map(String::as_str));
        }
    }

    fn add_taxonomy<'a>(&mut self, hypernym: &str, members: impl Iterator<Item = &'a str>) {
        let hypernym = hypernym.trim().to_lowercase();
        let entry = self.hyponyms.entry(hypernym.clone()).or_default();
        for member in members {
            let member = member.trim().to_lowercase();
            if member.is_empty() || entry.contains(&member) {
                continue;
            }
            entry.push(member.clone());
            let parents = self.hypernyms.entry(member).or_default();
            if !parents.contains(&hypernym) {
                parents.push(hypernym.clone());
            }
        }
    }

    /// Whether the lower-cased word is a stop word.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    pub(crate) fn closed_class_tag(&self, lower: &str) -> Option<PosTag> {
        self.closed_class.get(lower).copied()
    }

    pub(crate) fn is_be_form(&self, lower: &str) -> bool {
        self.be_forms.contains(lower)
    }

    pub(crate) fn is_aux_form(&self, lower: &str) -> bool {
        self.aux_forms.contains(lower)
    }

    pub(crate) fn is_listed_adverb(&self, lower: &str) -> bool {
        self.adverbs.contains(lower)
    }

    pub(crate) fn is_listed_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower)
    }

    pub(crate) fn is_listed_noun(&self, lower: &str) -> bool {
        self.nouns.contains(lower)
    }

    /// True when the base form doubles as the past participle ("put", "come").
    pub(crate) fn base_is_participle(&self, lower: &str) -> bool {
        matches!(self.irregular_participle.get(lower), Some(base) if *base == lower)
    }

    /// Whether any word list knows this word.
    #[must_use]
    pub fn knows_word(&self, lower: &str) -> bool {
        self.closed_class.contains_key(lower)
            || self.verb_bases.contains(lower)
            || self.irregular_past.contains_key(lower)
            || self.irregular_participle.contains_key(lower)
            || self.adjectives.contains(lower)
            || self.adverbs.contains(lower)
            || self.nouns.contains(lower)
            || self.hypernyms.contains_key(lower)
            || self.hyponyms.contains_key(lower)
    }

    /// Classifies a verb-like word and returns its base form.
    pub(crate) fn verb_form(&self, lower: &str) -> Option<(VerbForm, String)> {
        self.exact_verb_form(lower)
            .or_else(|| self.inflected_verb_form(lower))
    }

    /// Irregular forms and listed base forms.
    pub(crate) fn exact_verb_form(&self, lower: &str) -> Option<(VerbForm, String)> {
        if self.irregular_bases.contains(lower) {
            return Some((VerbForm::Base, lower.to_string()));
        }
        let past = self.irregular_past.get(lower).copied();
        let participle = self.irregular_participle.get(lower).copied();
        match (past, participle) {
            (Some(base), Some(_)) => Some((VerbForm::PastOrParticiple, base.to_string())),
            (Some(base), None) => Some((VerbForm::Past, base.to_string())),
            (None, Some(base)) => Some((VerbForm::Participle, base.to_string())),
            (None, None) if self.verb_bases.contains(lower) => {
                Some((VerbForm::Base, lower.to_string()))
            }
            (None, None) => None,
        }
    }

    /// Regular `-s`, `-ed` and `-ing` inflections of listed verbs.
    pub(crate) fn inflected_verb_form(&self, lower: &str) -> Option<(VerbForm, String)> {
        if let Some(base) = self
            .regular_stem(lower, &["ies"], &["y"])
            .or_else(|| self.regular_stem(lower, &["es", "s"], &[""]))
        {
            return Some((VerbForm::ThirdPerson, base));
        }
        if let Some(base) = self.ed_stem(lower) {
            return Some((VerbForm::PastOrParticiple, base));
        }
        self.ing_stem(lower).map(|base| (VerbForm::Gerund, base))
    }

    /// Base form of a verb, when the lexicon knows it.
    #[must_use]
    pub fn verb_lemma(&self, word: &str) -> Option<String> {
        self.verb_form(&word.to_lowercase()).map(|(_, base)| base)
    }

    fn regular_stem(&self, lower: &str, suffixes: &[&str], replacements: &[&str]) -> Option<String> {
        for suffix in suffixes {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if stem.len() < 2 {
                continue;
            }
            for replacement in replacements {
                let candidate = format!("{stem}{replacement}");
                if self.verb_bases.contains(candidate.as_str()) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn ed_stem(&self, lower: &str) -> Option<String> {
        if let Some(stem) = self.regular_stem(lower, &["ied"], &["y"]) {
            return Some(stem);
        }
        let stem = lower.strip_suffix("ed")?;
        if stem.len() < 2 {
            return None;
        }
        for candidate in [stem.to_string(), format!("{stem}e"), undouble(stem)] {
            if self.verb_bases.contains(candidate.as_str()) {
                return Some(candidate);
            }
        }
        None
    }

    fn ing_stem(&self, lower: &str) -> Option<String> {
        let stem = lower.strip_suffix("ing")?;
        if stem.len() < 2 {
            return None;
        }
        let mut candidates = vec![stem.to_string(), format!("{stem}e"), undouble(stem)];
        if let Some(prefix) = stem.strip_suffix('y') {
            candidates.push(format!("{prefix}ie"));
        }
        candidates
            .into_iter()
            .find(|candidate| self.verb_bases.contains(candidate.as_str()))
    }

    /// Whether the token (with its trailing dot) is a known abbreviation.
    #[must_use]
    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.contains(token.to_lowercase().as_str())
    }

    pub(crate) fn is_honorific(&self, lower: &str) -> bool {
        self.honorifics.contains(lower)
    }

    pub(crate) fn is_given_name(&self, lower: &str) -> bool {
        self.given_names.contains(lower)
    }

    pub(crate) fn is_place(&self, lower: &str) -> bool {
        self.places.contains(lower)
    }

    pub(crate) fn is_organization(&self, lower: &str) -> bool {
        self.organizations.contains(lower)
    }

    pub(crate) fn is_region(&self, lower: &str) -> bool {
        self.regions.contains(lower)
    }

    pub(crate) fn is_location_feature(&self, lower: &str) -> bool {
        self.location_features.contains(lower)
    }

    pub(crate) fn is_org_marker(&self, lower: &str) -> bool {
        self.org_markers.contains(lower)
    }

    pub(crate) fn is_month(&self, lower: &str) -> bool {
        self.months.contains(lower)
    }

    pub(crate) fn is_weekday(&self, lower: &str) -> bool {
        self.weekdays.contains(lower)
    }

    pub(crate) fn is_currency_word(&self, lower: &str) -> bool {
        self.currency_words.contains(lower)
    }

    /// Whether the word appears in any gazetteer.
    pub(crate) fn in_gazetteer(&self, lower: &str) -> bool {
        self.is_given_name(lower)
            || self.is_place(lower)
            || self.is_region(lower)
            || self.is_honorific(lower)
            || self.is_month(lower)
            || self.is_weekday(lower)
            || self.is_org_marker(lower)
    }

    /// Hypernyms recorded for a word.
    #[must_use]
    pub fn hypernyms_of(&self, lower: &str) -> &[String] {
        self.hypernyms.get(lower).map_or(&[], Vec::as_slice)
    }

    /// Hyponyms recorded under a hypernym.
    #[must_use]
    pub fn hyponyms_of(&self, lower: &str) -> &[String] {
        self.hyponyms.get(lower).map_or(&[], Vec::as_slice)
    }
}

fn borrowed(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

fn owned(words: &[&str]) -> HashSet<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    if bytes.len() >= 3 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        stem[..stem.len() - 1].to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn shared_resources_are_initialised_once() {
        let first = LinguisticResources::shared();
        let second = LinguisticResources::shared();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn verb_forms_resolve_to_bases() {
        let res = LinguisticResources::builtin();
        assert_eq!(res.verb_lemma("discovered").as_deref(), Some("discover"));
        assert_eq!(res.verb_lemma("studies").as_deref(), Some("study"));
        assert_eq!(res.verb_lemma("running").as_deref(), Some("run"));
        assert_eq!(res.verb_lemma("went").as_deref(), Some("go"));
        assert_eq!(res.verb_lemma("used").as_deref(), Some("use"));
        assert_eq!(res.verb_lemma("dying").as_deref(), Some("die"));
        assert!(res.verb_lemma("morning").is_none());
        assert_eq!(
            res.verb_form("sat").map(|(form, _)| form),
            Some(VerbForm::PastOrParticiple)
        );
        assert_eq!(res.verb_form("took").map(|(form, _)| form), Some(VerbForm::Past));
        assert!(res.base_is_participle("put"));
        assert!(!res.base_is_participle("walk"));
    }

    #[test]
    fn extra_lexicon_extends_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexicon.toml");
        fs::write(
            &path,
            "names = [\"Zorblat\"]\nplaces = [\"Gondor\"]\norganizations = [\"Acme Robotics\"]\nstop_words = [\"basically\"]\n\n[taxonomy]\nmetal = [\"mithril\"]\n",
        )
        .unwrap();
        let res = LinguisticResources::load(Some(&path)).unwrap();
        assert!(res.is_given_name("zorblat"));
        assert!(res.is_place("gondor"));
        assert!(res.is_organization("acme robotics"));
        assert!(res.is_stop_word("Basically"));
        assert!(res.hyponyms_of("metal").iter().any(|m| m == "mithril"));
        assert!(res.hyponyms_of("metal").iter().any(|m| m == "iron"));
    }

    #[test]
    fn malformed_lexicon_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "names = 3").unwrap();
        let err = LinguisticResources::load(Some(&path)).unwrap_err();
        assert!(matches!(err, NlpError::Lexicon { .. }));
        let missing = LinguisticResources::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(missing, Err(NlpError::Lexicon { .. })));
    }
}
