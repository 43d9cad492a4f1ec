//! Sentence selection for answers: keyword relevance and indicator matching.

/// Sentences sharing at least one keyword with the question, best first.
///
/// A sentence scores one point per keyword contained in its lower-cased
/// text. Equal scores keep note order.
#[must_use]
pub fn relevant_sentences(sentences: &[String], keywords: &[String], limit: usize) -> Vec<String> {
    let mut scored: Vec<(&String, usize)> = sentences
        .iter()
        .map(|sentence| {
            let lowered = sentence.to_lowercase();
            let score = keywords
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .count();
            (sentence, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(sentence, _)| sentence.clone())
        .collect()
}

/// Whether any indicator occurs in the sentence as whole words.
///
/// Matching ignores case; a single-word indicator also matches its plural
/// with a trailing "s".
#[must_use]
pub fn mentions_any(sentence: &str, indicators: &[&str]) -> bool {
    let words = words_of(sentence);
    indicators.iter().any(|indicator| {
        let parts: Vec<&str> = indicator.split_whitespace().collect();
        match parts.as_slice() {
            [] => false,
            [single] => words
                .iter()
                .any(|word| word == single || word.strip_suffix('s') == Some(*single)),
            _ => words.windows(parts.len()).any(|window| {
                window.iter().zip(&parts).all(|(word, part)| word == part)
            }),
        }
    })
}

/// Sentences mentioning any indicator, in note order.
#[must_use]
pub fn sentences_mentioning<'a>(sentences: &'a [String], indicators: &[&str]) -> Vec<&'a str> {
    sentences
        .iter()
        .filter(|sentence| mentions_any(sentence, indicators))
        .map(String::as_str)
        .collect()
}

/// First sentence mentioning each of the first `limit` entities, joined by spaces.
#[must_use]
pub fn entity_context(entities: &[String], sentences: &[String], limit: usize) -> String {
    entities
        .iter()
        .take(limit)
        .filter_map(|entity| sentences.iter().find(|sentence| sentence.contains(entity.as_str())))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn words_of(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}
