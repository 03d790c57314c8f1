use super::CaseShape;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CAMEL_PREFIX: Regex = Regex::new(r"^([a-z]+)[a-zA-Z]*$").unwrap();
}

/// Split `s` into word tokens, assuming it has the given shape.
///
/// Tokens borrow from `s` and keep their original casing; normalizing case is
/// left to the caller. Input without any word content yields no tokens.
pub fn split_words(s: &str, shape: CaseShape) -> Vec<&str> {
    match shape {
        CaseShape::FreeForm => split_free_form(s),
        CaseShape::Camel => {
            let mut words: Vec<&str> = split_camel_prefix(s).into_iter().collect();
            words.extend(split_pascal_rest(s));
            words
        }
        CaseShape::Pascal => split_pascal_rest(s),
        CaseShape::Snake => split_delimited(s, '_'),
        CaseShape::Kebab => split_delimited(s, '-'),
    }
}

/// Leading lowercase run of a camelCase string, if `s` is one
pub fn split_camel_prefix(s: &str) -> Option<&str> {
    CAMEL_PREFIX
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|prefix| prefix.as_str())
}

/// Every word that starts with an uppercase ASCII letter.
///
/// Each token runs from an uppercase letter up to the next one. Anything
/// before the first uppercase letter is skipped.
pub fn split_pascal_rest(s: &str) -> Vec<&str> {
    let starts: Vec<usize> = s
        .char_indices()
        .filter(|(_, ch)| ch.is_ascii_uppercase())
        .map(|(idx, _)| idx)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(s.len());
            &s[start..end]
        })
        .collect()
}

// Anything other than an ASCII letter or digit separates words
fn split_free_form(s: &str) -> Vec<&str> {
    s.split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

fn split_delimited(s: &str, delimiter: char) -> Vec<&str> {
    s.split(delimiter).filter(|word| !word.is_empty()).collect()
}
