use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::error::NlpResult;

static TRAILING_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.?!]\s*\?$").unwrap());

/// Collapses runs of whitespace to single spaces and trims the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Drops trailing `.`, `?`, `!` and whitespace.
#[must_use]
pub fn strip_trailing_marks(text: &str) -> &str {
    text.trim_end_matches(|c: char| matches!(c, '.' | '?' | '!') || c.is_whitespace())
}

/// Turns a rewritten statement into a question ending in a single `?`.
#[must_use]
pub fn to_question(statement: &str) -> String {
    let question = capitalize_first(&format!("{statement}?"));
    TRAILING_MARK.replace(&question, "?").into_owned()
}

/// Case-insensitive pattern for a word or phrase, anchored on word boundaries
/// where the phrase starts or ends with a word character.
pub fn phrase_pattern(phrase: &str) -> NlpResult<Regex> {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let starts_word = phrase.chars().next().is_some_and(is_word_char);
    let ends_word = phrase.chars().last().is_some_and(is_word_char);
    let pattern = format!(
        "(?i){}{}{}",
        if starts_word { r"\b" } else { "" },
        body,
        if ends_word { r"\b" } else { "" },
    );
    Ok(Regex::new(&pattern)?)
}

/// Replaces the first occurrence of `phrase`; `None` when it does not occur.
pub fn replace_first(text: &str, phrase: &str, replacement: &str) -> NlpResult<Option<String>> {
    if phrase.trim().is_empty() {
        return Ok(None);
    }
    let pattern = phrase_pattern(phrase)?;
    if !pattern.is_match(text) {
        return Ok(None);
    }
    Ok(Some(pattern.replacen(text, 1, NoExpand(replacement)).into_owned()))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
