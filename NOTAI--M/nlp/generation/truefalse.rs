//! True/false statements built by negating a verb, removing a negation or
//! swapping a noun for a sibling term.
//!
//! Removing an existing negation is always labelled "False" even though the
//! resulting statement is not checked against anything.

use rand::{seq::SliceRandom, Rng};

use crate::{
    generation::{
        helper::{capitalize_first, strip_trailing_marks},
        pair::QaPair,
        strategies::SentenceContext,
    },
    linguistic::{tokenize::detokenize, PosTag},
};

/// Builds a true/false pair; always succeeds.
pub fn true_false<R: Rng + ?Sized>(ctx: &SentenceContext<'_>, rng: &mut R) -> QaPair {
    let tokens = &ctx.sentence.tokens;
    let verbs: Vec<usize> = indices(tokens, |word, tag| {
        tag.is_verb() && word.chars().any(char::is_alphabetic)
    });
    let nouns: Vec<usize> = indices(tokens, |word, tag| {
        tag.is_noun() && word.chars().any(char::is_alphanumeric)
    });
    let mut words: Vec<String> = tokens.iter().map(|(word, _)| word.clone()).collect();

    let truth = if rng.gen_bool(0.5) && !verbs.is_empty() {
        if !remove_negation(&mut words) {
            negate_verb(ctx, &mut words, &verbs, rng);
        }
        false
    } else if let Some(&index) = nouns.choose(rng) {
        let siblings = ctx.siblings.lookup_sibling_terms(&words[index]);
        match siblings.choose(rng) {
            Some(sibling) => {
                words[index] = match_case(&words[index], sibling);
                false
            }
            None => true,
        }
    } else {
        true
    };

    let statement = capitalize_first(&detokenize(&words));
    let question = format!("True or False: {}.", strip_trailing_marks(&statement));
    QaPair::new(question, if truth { "True" } else { "False" })
}

fn indices(tokens: &[(String, PosTag)], keep: impl Fn(&str, PosTag) -> bool) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, (word, tag))| keep(word.as_str(), *tag))
        .map(|(index, _)| index)
        .collect()
}

/// Removes the first "not" or "n't"; false when the sentence has neither.
fn remove_negation(words: &mut Vec<String>) -> bool {
    if let Some(index) = words.iter().position(|word| word.eq_ignore_ascii_case("not")) {
        words.remove(index);
        return true;
    }
    let Some(index) = words
        .iter()
        .position(|word| word.to_lowercase().ends_with("n't"))
    else {
        return false;
    };
    if words[index].chars().count() > 3 {
        let word = &words[index];
        let trimmed = word[..word.len() - 3].to_string();
        words[index] = trimmed;
        return true;
    }
    words.remove(index);
    if let Some(host) = index.checked_sub(1).and_then(|i| words.get_mut(i)) {
        let repaired = match host.to_lowercase().as_str() {
            "ca" => Some("can"),
            "wo" => Some("will"),
            "sha" => Some("shall"),
            _ => None,
        };
        if let Some(full) = repaired {
            *host = match_case(host, full);
        }
    }
    true
}

fn negate_verb<R: Rng + ?Sized>(
    ctx: &SentenceContext<'_>,
    words: &mut Vec<String>,
    verbs: &[usize],
    rng: &mut R,
) {
    let Some(&index) = verbs.choose(rng) else {
        return;
    };
    let tokens = &ctx.sentence.tokens;
    let resources = ctx.resources;
    let (verb, tag) = (&tokens[index].0, tokens[index].1);
    let lower = verb.to_lowercase();
    let previous = index.checked_sub(1).map(|i| &tokens[i]);
    let after_auxiliary = previous.is_some_and(|(word, prev_tag)| {
        let word = word.to_lowercase();
        *prev_tag == PosTag::MD || resources.is_be_form(&word) || resources.is_aux_form(&word)
    });
    let next_is_verb = tokens.get(index + 1).is_some_and(|(_, next)| next.is_verb());

    if after_auxiliary {
        words.insert(index, "not".to_string());
    } else if resources.is_be_form(&lower)
        || tag == PosTag::MD
        || (resources.is_aux_form(&lower) && next_is_verb)
    {
        words.insert(index + 1, "not".to_string());
    } else {
        let auxiliary = match tag {
            PosTag::VBP => "do",
            PosTag::VBZ => "does",
            _ => "did",
        };
        if let Some(base) = base_form(ctx, &lower) {
            words[index] = base;
        }
        words.insert(index, "not".to_string());
        words.insert(index, auxiliary.to_string());
    }
}

fn base_form(ctx: &SentenceContext<'_>, lower: &str) -> Option<String> {
    match lower {
        "has" | "had" | "having" => Some("have".to_string()),
        "does" | "did" => Some("do".to_string()),
        _ => ctx.resources.verb_lemma(lower),
    }
}

/// Copies the leading capital of `model` onto `word`.
fn match_case(model: &str, word: &str) -> String {
    if model.starts_with(char::is_uppercase) {
        capitalize_first(word)
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lexical::{NoSiblingTerms, SiblingTermSource, TaxonomyLexicon},
        linguistic::LinguisticFrontEnd,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn outcomes(text: &str, siblings: &dyn SiblingTermSource) -> Vec<QaPair> {
        let front = LinguisticFrontEnd::shared();
        let sentence = front.analyze(text).unwrap();
        let ctx = SentenceContext {
            sentence: &sentence,
            resources: front.resources().unwrap(),
            siblings,
        };
        (0..32)
            .map(|seed| true_false(&ctx, &mut ChaCha8Rng::seed_from_u64(seed)))
            .collect()
    }

    #[test]
    fn verb_negation_uses_do_support() {
        let pairs = outcomes("Marie Curie discovered radium in Paris.", &NoSiblingTerms);
        let negated = pairs
            .iter()
            .find(|pair| pair.answer == "False")
            .expect("some seed negates the verb");
        assert_eq!(
            negated.question,
            "True or False: Marie Curie did not discover radium in Paris."
        );
        assert!(pairs
            .iter()
            .filter(|pair| pair.answer == "True")
            .all(|pair| pair.question == "True or False: Marie Curie discovered radium in Paris."));
    }

    #[test]
    fn be_and_modal_take_a_bare_not() {
        let pairs = outcomes("The cat is asleep on the mat.", &NoSiblingTerms);
        assert!(pairs
            .iter()
            .any(|pair| pair.question == "True or False: The cat is not asleep on the mat."));
        let pairs = outcomes("Students can borrow books from the library.", &NoSiblingTerms);
        assert!(pairs.iter().any(|pair| {
            pair.question == "True or False: Students can not borrow books from the library."
        }));
    }

    #[test]
    fn existing_negation_is_removed_and_marked_false() {
        let pairs = outcomes("Penguins cannot fly over the ocean.", &NoSiblingTerms);
        let flipped = pairs
            .iter()
            .find(|pair| pair.question == "True or False: Penguins can fly over the ocean.")
            .expect("some seed removes the negation");
        assert_eq!(flipped.answer, "False");

        let pairs = outcomes("Whales don't breathe under water.", &NoSiblingTerms);
        assert!(pairs
            .iter()
            .any(|pair| pair.question == "True or False: Whales do breathe under water."));
    }

    #[test]
    fn noun_swap_uses_sibling_terms() {
        let pairs = outcomes("The iron bar rusted in the rain.", &TaxonomyLexicon::shared());
        assert!(pairs
            .iter()
            .filter(|pair| pair.answer == "False")
            .any(|pair| !pair.question.contains("iron") || !pair.question.contains("rusted")));
        assert!(pairs.iter().all(|pair| pair.question.starts_with("True or False: ")));
        assert!(pairs.iter().all(|pair| pair.question.ends_with('.')));
    }

    #[test]
    fn statements_without_verbs_or_nouns_stay_true() {
        let pairs = outcomes("Very, very quickly!", &NoSiblingTerms);
        assert!(pairs
            .iter()
            .all(|pair| pair.answer == "True" && pair.question == "True or False: Very, very quickly."));
    }
}
