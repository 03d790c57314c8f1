use crate::locale::Locale;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // A word character with no word character right before it
    static ref WORD_START: Regex = Regex::new(r"\b\w").unwrap();
}

/// Upper-case the first letter of the first word, leaving everything else
/// untouched: `":> hello"` becomes `":> Hello"`.
pub fn capitalize_initial(s: &str) -> String {
    capitalize_initial_in(s, Locale::Root)
}

pub fn capitalize_initial_in(s: &str, locale: Locale) -> String {
    WORD_START
        .replacen(s, 1, |caps: &Captures| locale.to_uppercase(&caps[0]))
        .into_owned()
}

/// Upper-case the first letter of every word.
///
/// Word boundaries follow Unicode word classes, so `"élan"` becomes `"Élan"`
/// rather than treating `é` as a separator.
pub fn capitalize_words(s: &str) -> String {
    capitalize_words_in(s, Locale::Root)
}

pub fn capitalize_words_in(s: &str, locale: Locale) -> String {
    WORD_START
        .replace_all(s, |caps: &Captures| locale.to_uppercase(&caps[0]))
        .into_owned()
}
