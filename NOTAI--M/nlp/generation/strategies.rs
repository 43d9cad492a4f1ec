use rand::{seq::SliceRandom, Rng};

use crate::{
    error::NlpResult,
    generation::{
        helper::{normalize_whitespace, replace_first, strip_trailing_marks, to_question},
        method::Strategy,
        pair::QaPair,
        truefalse,
    },
    lexical::SiblingTermSource,
    linguistic::{tokenize::detokenize, EntityType, LinguisticResources, PosTag, TaggedSentence},
};

/// Token put in place of the blanked word.
pub const BLANK: &str = "________";

const TIME_WORDS: &[&str] = &[
    "yesterday", "today", "tomorrow", "morning", "afternoon", "evening", "night",
];
const MONTH_NAMES: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];
const WEEKDAY_NAMES: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];
const TIME_PHRASES: &[&str] = &["last week", "next week", "last month", "next month"];
const TIME_SPANS: &[&str] = &["year", "decade", "century"];
const CAUSAL_CONNECTIVES: &[&str] = &["because", "since", "as", "due to", "caused by", "result of"];

/// Everything a strategy may look at for one sentence.
pub struct SentenceContext<'a> {
    /// Analyzed sentence.
    pub sentence: &'a TaggedSentence,
    /// Lexical resources behind the analysis.
    pub resources: &'a LinguisticResources,
    /// Sibling lookup for true/false alterations.
    pub siblings: &'a dyn SiblingTermSource,
}

impl SentenceContext<'_> {
    pub(crate) fn is_stop_word(&self, word: &str) -> bool {
        self.resources.is_stop_word(word)
    }

    fn answer(&self) -> String {
        normalize_whitespace(&self.sentence.text)
    }

    fn question_pair(&self, question: String) -> QaPair {
        QaPair::new(question, self.answer())
    }
}

/// Runs one strategy; `Ok(None)` when it does not apply to the sentence.
pub fn apply<R: Rng + ?Sized>(
    strategy: Strategy,
    ctx: &SentenceContext<'_>,
    rng: &mut R,
) -> NlpResult<Option<QaPair>> {
    match strategy {
        Strategy::Definition => Ok(definition(ctx, rng)),
        Strategy::Who => replace_entity(ctx, rng, &[EntityType::Person], "who"),
        Strategy::Where => {
            replace_entity(ctx, rng, &[EntityType::Gpe, EntityType::Location], "where")
        }
        Strategy::When => when(ctx),
        Strategy::How => how(ctx, rng),
        Strategy::Why => why(ctx),
        Strategy::TrueFalse => Ok(Some(truefalse::true_false(ctx, rng))),
        Strategy::FillInBlank => Ok(fill_in_blank(ctx, rng)),
    }
}

fn definition<R: Rng + ?Sized>(ctx: &SentenceContext<'_>, rng: &mut R) -> Option<QaPair> {
    let nouns: Vec<&str> = ctx
        .sentence
        .tokens
        .iter()
        .filter(|(word, tag)| {
            tag.is_noun() && !ctx.is_stop_word(word) && word.chars().any(char::is_alphanumeric)
        })
        .map(|(word, _)| word.as_str())
        .collect();
    let noun = nouns.choose(rng)?;
    Some(ctx.question_pair(format!("What is {noun}?")))
}

fn replace_entity<R: Rng + ?Sized>(
    ctx: &SentenceContext<'_>,
    rng: &mut R,
    types: &[EntityType],
    wh_word: &str,
) -> NlpResult<Option<QaPair>> {
    let candidates = ctx.sentence.entities_of(types);
    let Some(entity) = candidates.choose(rng) else {
        return Ok(None);
    };
    let Some(rewritten) = replace_first(&ctx.sentence.text, entity, wh_word)? else {
        return Ok(None);
    };
    Ok(Some(ctx.question_pair(to_question(&rewritten))))
}

fn when(ctx: &SentenceContext<'_>) -> NlpResult<Option<QaPair>> {
    let Some(indicator) = first_time_indicator(&ctx.sentence.tokens) else {
        return Ok(None);
    };
    let Some(rewritten) = replace_first(&ctx.sentence.text, indicator, "when")? else {
        return Ok(None);
    };
    Ok(Some(ctx.question_pair(to_question(&rewritten))))
}

/// First indicator in list order present in the tokens.
///
/// Month and weekday names only count when capitalized, so "may" and "march"
/// used as verbs are not taken for dates.
fn first_time_indicator(tokens: &[(String, PosTag)]) -> Option<&'static str> {
    let lowered: Vec<String> = tokens.iter().map(|(word, _)| word.to_lowercase()).collect();
    let has_word = |needle: &str| lowered.iter().any(|word| word == needle);
    let has_name = |needle: &str| {
        tokens.iter().any(|(word, _)| {
            word.eq_ignore_ascii_case(needle) && word.starts_with(char::is_uppercase)
        })
    };
    TIME_WORDS
        .iter()
        .copied()
        .find(|word| has_word(word))
        .or_else(|| MONTH_NAMES.iter().copied().find(|name| has_name(name)))
        .or_else(|| WEEKDAY_NAMES.iter().copied().find(|name| has_name(name)))
        .or_else(|| {
            TIME_PHRASES
                .iter()
                .copied()
                .find(|phrase| contains_phrase(&lowered, phrase))
        })
        .or_else(|| TIME_SPANS.iter().copied().find(|word| has_word(word)))
}

fn how<R: Rng + ?Sized>(ctx: &SentenceContext<'_>, rng: &mut R) -> NlpResult<Option<QaPair>> {
    let adverbs: Vec<&str> = ctx
        .sentence
        .tokens
        .iter()
        .filter(|(word, tag)| {
            tag.is_adverb()
                && word.chars().count() > 1
                && word.chars().all(char::is_alphabetic)
                && !ctx.is_stop_word(word)
        })
        .map(|(word, _)| word.as_str())
        .collect();
    let Some(adverb) = adverbs.choose(rng) else {
        return Ok(None);
    };
    let Some(rewritten) = replace_first(&ctx.sentence.text, adverb, "how")? else {
        return Ok(None);
    };
    Ok(Some(ctx.question_pair(to_question(&rewritten))))
}

fn why(ctx: &SentenceContext<'_>) -> NlpResult<Option<QaPair>> {
    let lowered: Vec<String> = ctx
        .sentence
        .tokens
        .iter()
        .map(|(word, _)| word.to_lowercase())
        .collect();
    let Some(connective) = CAUSAL_CONNECTIVES
        .iter()
        .copied()
        .find(|phrase| contains_phrase(&lowered, phrase))
    else {
        return Ok(None);
    };
    let Some(removed) = replace_first(&ctx.sentence.text, connective, "")? else {
        return Ok(None);
    };
    let collapsed = normalize_whitespace(&removed);
    let rest = strip_trailing_marks(&collapsed)
        .trim_start_matches(|c: char| matches!(c, ',' | ';' | ':') || c.is_whitespace());
    if rest.is_empty() {
        return Ok(None);
    }
    Ok(Some(ctx.question_pair(format!("Why {rest}?"))))
}

fn fill_in_blank<R: Rng + ?Sized>(ctx: &SentenceContext<'_>, rng: &mut R) -> Option<QaPair> {
    let tokens = &ctx.sentence.tokens;
    let candidates: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, (word, tag))| {
            (tag.is_noun() || tag.is_verb() || tag.is_adjective())
                && word.chars().count() > 3
                && !ctx.is_stop_word(word)
        })
        .map(|(index, _)| index)
        .collect();
    let index = *candidates.choose(rng)?;
    let mut words: Vec<&str> = tokens.iter().map(|(word, _)| word.as_str()).collect();
    let answer = words[index].to_string();
    words[index] = BLANK;
    let rebuilt = detokenize(&words);
    let question = format!("Fill in the blank: {}?", strip_trailing_marks(&rebuilt));
    Some(QaPair::new(question, answer))
}

/// Whether the space-separated phrase occurs as consecutive tokens.
pub(crate) fn contains_phrase(lowered: &[String], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split(' ').collect();
    lowered
        .windows(parts.len())
        .any(|window| window.iter().zip(&parts).all(|(word, part)| word == part))
}
