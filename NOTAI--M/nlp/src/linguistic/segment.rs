//! Sentence segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::resources::LinguisticResources;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").expect("paragraph pattern"));

const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '\u{201c}', '\u{2018}'];

/// Splits text into sentences with whitespace collapsed.
///
/// A sentence ends at `.`, `!` or `?` (optionally followed by closing quotes or
/// brackets) when the next word starts with an upper-case letter, a digit or an
/// opening quote. Known abbreviations and single-letter initials never end a
/// sentence. Blank lines always do.
#[must_use]
pub fn segment(text: &str, resources: &LinguisticResources) -> Vec<String> {
    let mut sentences = Vec::new();
    for paragraph in PARAGRAPH_BREAK.split(text) {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        let mut current: Vec<&str> = Vec::new();
        for (idx, word) in words.iter().enumerate() {
            current.push(word);
            let next = words.get(idx + 1).copied();
            if ends_sentence(word, next, resources) {
                sentences.push(current.join(" "));
                current.clear();
            }
        }
        if !current.is_empty() {
            sentences.push(current.join(" "));
        }
    }
    sentences
}

/// Fallback used when resources are unavailable: the whole text as one sentence.
#[must_use]
pub fn segment_whole(text: &str) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        Vec::new()
    } else {
        vec![collapsed]
    }
}

fn ends_sentence(word: &str, next: Option<&str>, resources: &LinguisticResources) -> bool {
    let bare = word.trim_end_matches(CLOSERS);
    let Some(last) = bare.chars().last() else {
        return false;
    };
    if !matches!(last, '.' | '!' | '?') {
        return false;
    }
    if last == '.' && bare == word && is_abbreviation_or_initial(bare, resources) {
        return false;
    }
    let Some(next) = next else {
        return true;
    };
    next.chars()
        .next()
        .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit() || OPENERS.contains(&c))
}

fn is_abbreviation_or_initial(word: &str, resources: &LinguisticResources) -> bool {
    let word = word.trim_start_matches(OPENERS);
    if resources.is_abbreviation(word) {
        return true;
    }
    let body = &word[..word.len() - 1];
    let letters = body.chars().filter(|c| c.is_alphabetic()).count();
    letters == 1 && body.chars().count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        segment(text, &LinguisticResources::builtin())
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            split("The cat sat on the mat. It was warm! Was it happy?  Yes."),
            vec!["The cat sat on the mat.", "It was warm!", "Was it happy?", "Yes."]
        );
    }

    #[test]
    fn respects_abbreviations_and_initials() {
        assert_eq!(
            split("Dr. Smith met J. R. Tolkien in the U.S. in 1950. They talked."),
            vec!["Dr. Smith met J. R. Tolkien in the U.S. in 1950.", "They talked."]
        );
    }

    #[test]
    fn lowercase_continuation_does_not_split() {
        assert_eq!(split("It cost 3.5 dollars. e.g. this one."), vec!["It cost 3.5 dollars. e.g. this one."]);
    }

    #[test]
    fn quotes_and_blank_lines_end_sentences() {
        assert_eq!(
            split("She said \"Stop.\" Then she left\n\nA new paragraph"),
            vec!["She said \"Stop.\"", "Then she left", "A new paragraph"]
        );
    }

    #[test]
    fn whole_text_fallback_collapses_whitespace() {
        assert_eq!(segment_whole("  one\n two  "), vec!["one two"]);
        assert!(segment_whole("   ").is_empty());
    }
}
