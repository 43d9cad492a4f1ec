//! Penn-style word tokenization and its inverse.

use super::resources::LinguisticResources;

const LEADING: &[char] = &['"', '\'', '(', '[', '{', '\u{201c}', '\u{2018}', '$', '`'];
const TRAILING: &[char] = &[
    ',', ';', ':', '!', '?', '"', ')', ']', '}', '\'', '\u{201d}', '\u{2019}', '%',
];
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];
const NO_SPACE_BEFORE: &[&str] = &[
    ".", ",", ";", ":", "!", "?", "%", ")", "]", "}", "n't", "'s", "'re", "'ve", "'ll", "'d",
    "'m", "'", "\u{201d}", "\u{2019}", "...",
];
const NO_SPACE_AFTER: &[&str] = &["(", "[", "{", "$", "\u{201c}", "\u{2018}", "`"];

/// Splits a sentence into word and punctuation tokens.
///
/// Leading and trailing punctuation becomes separate tokens, clitics are split
/// off (`can't` → `ca` `n't`), while numbers (`3.5`, `1,000`, `10:30`),
/// hyphenated words and known abbreviations stay whole.
#[must_use]
pub fn tokenize(sentence: &str, resources: Option<&LinguisticResources>) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in sentence.split_whitespace() {
        split_chunk(chunk, resources, &mut tokens);
    }
    tokens
}

fn split_chunk(chunk: &str, resources: Option<&LinguisticResources>, out: &mut Vec<String>) {
    let mut core = chunk;
    while let Some(first) = core.chars().next() {
        if !LEADING.contains(&first) || core.len() == first.len_utf8() {
            break;
        }
        if first == '\'' && CLITICS.iter().any(|clitic| core.eq_ignore_ascii_case(clitic)) {
            break;
        }
        out.push(first.to_string());
        core = &core[first.len_utf8()..];
    }

    let mut trailing = Vec::new();
    loop {
        let Some(last) = core.chars().last() else {
            break;
        };
        if core.len() == last.len_utf8() {
            break;
        }
        if last == '.' {
            if !strips_final_period(core, resources) {
                break;
            }
        } else if !TRAILING.contains(&last) {
            break;
        }
        trailing.push(last.to_string());
        core = &core[..core.len() - last.len_utf8()];
    }

    if !core.is_empty() {
        split_clitics(core, out);
    }
    out.extend(trailing.into_iter().rev());
}

fn strips_final_period(core: &str, resources: Option<&LinguisticResources>) -> bool {
    if core.chars().all(|c| c == '.') {
        return false;
    }
    let body = &core[..core.len() - 1];
    if body.contains('.') {
        return false;
    }
    if body.chars().count() == 1 && body.chars().all(char::is_alphabetic) {
        return false;
    }
    !resources.is_some_and(|res| res.is_abbreviation(core))
}

fn split_clitics(core: &str, out: &mut Vec<String>) {
    // typographic apostrophes split like ASCII ones
    let core = core.replace('\u{2019}', "'");
    let lower = core.to_lowercase();
    if lower == "cannot" {
        out.push(core[..3].to_string());
        out.push(core[3..].to_string());
        return;
    }
    if lower.len() > 3 && lower.ends_with("n't") && core.is_char_boundary(core.len() - 3) {
        out.push(core[..core.len() - 3].to_string());
        out.push(core[core.len() - 3..].to_string());
        return;
    }
    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let split = core.len() - clitic.len();
            if core.is_char_boundary(split) {
                out.push(core[..split].to_string());
                out.push(core[split..].to_string());
                return;
            }
        }
    }
    out.push(core);
}

/// Joins tokens back into text, undoing the spacing that tokenization introduced.
#[must_use]
pub fn detokenize<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut text = String::new();
    let mut glue_next = true;
    let mut open_double_quote = false;
    for token in tokens {
        let token = token.as_ref();
        let lower = token.to_lowercase();
        let mut attach = NO_SPACE_BEFORE.contains(&lower.as_str());
        let mut opens = NO_SPACE_AFTER.contains(&token);
        if token == "\"" {
            if open_double_quote {
                attach = true;
            } else {
                opens = true;
            }
            open_double_quote = !open_double_quote;
        }
        if !glue_next && !attach {
            text.push(' ');
        }
        text.push_str(token);
        glue_next = opens;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        let res = LinguisticResources::builtin();
        tokenize(text, Some(&res))
    }

    #[test]
    fn splits_punctuation_and_clitics() {
        assert_eq!(
            toks("Marie Curie didn't stop, did she?"),
            vec!["Marie", "Curie", "did", "n't", "stop", ",", "did", "she", "?"]
        );
        assert_eq!(toks("I can't go."), vec!["I", "ca", "n't", "go", "."]);
        assert_eq!(toks("Curie's lab"), vec!["Curie", "'s", "lab"]);
        assert_eq!(toks("(really)"), vec!["(", "really", ")"]);
        assert_eq!(toks("They don\u{2019}t know."), vec!["They", "do", "n't", "know", "."]);
    }

    #[test]
    fn keeps_numbers_abbreviations_and_hyphens() {
        assert_eq!(
            toks("Dr. Smith paid $1,000 at 10:30 for 3.5 well-known items."),
            vec![
                "Dr.", "Smith", "paid", "$", "1,000", "at", "10:30", "for", "3.5", "well-known",
                "items", "."
            ]
        );
        assert_eq!(toks("It rose 5%."), vec!["It", "rose", "5", "%", "."]);
        assert_eq!(toks("J. R. R. Tolkien wrote."), vec!["J.", "R.", "R.", "Tolkien", "wrote", "."]);
        assert_eq!(toks("See the U.S. today."), vec!["See", "the", "U.S.", "today", "."]);
    }

    #[test]
    fn detokenize_restores_spacing() {
        let tokens = toks("Marie didn't say \"hello\" (twice), costing $5.");
        assert_eq!(detokenize(&tokens), "Marie didn't say \"hello\" (twice), costing $5.");
        assert_eq!(detokenize(&["The", "cat", "sat", "."]), "The cat sat.");
    }

    #[test]
    fn works_without_resources() {
        assert_eq!(tokenize("Mr. Smith left.", None), vec!["Mr", ".", "Smith", "left", "."]);
    }
}
