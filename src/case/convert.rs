use super::predicates::{is_camel_case, is_pascal_case};
use super::words::split_words;
use super::CaseShape;
use crate::locale::Locale;
use log::trace;
use serde::{Deserialize, Serialize};

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Knobs shared by the case converters.
///
/// `expand_digits` only affects snake_case and kebab-case output; the camel
/// and pascal converters drop digits regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub expand_digits: bool,
    pub locale: Locale,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expand_digits(mut self, expand_digits: bool) -> Self {
        self.expand_digits = expand_digits;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Convert `s` to snake_case.
///
/// With `expand_digits`, every digit is spelled out as its own word
/// (`123` becomes `one_two_three`).
pub fn to_snake_case(s: &str, expand_digits: bool) -> String {
    to_snake_case_with(s, &ConvertOptions::new().with_expand_digits(expand_digits))
}

pub fn to_snake_case_with(s: &str, options: &ConvertOptions) -> String {
    join_lowercase(s, "_", options)
}

/// Convert `s` to kebab-case, see [`to_snake_case`]
pub fn to_kebab_case(s: &str, expand_digits: bool) -> String {
    to_kebab_case_with(s, &ConvertOptions::new().with_expand_digits(expand_digits))
}

pub fn to_kebab_case_with(s: &str, options: &ConvertOptions) -> String {
    join_lowercase(s, "-", options)
}

/// Convert `s` to camelCase. Anything that is not an ASCII letter, digits
/// included, only separates words.
pub fn to_camel_case(s: &str) -> String {
    to_camel_case_with(s, &ConvertOptions::new())
}

pub fn to_camel_case_with(s: &str, options: &ConvertOptions) -> String {
    let letters = letters_only(s);
    let locale = options.locale;

    if is_camel_case(&letters) {
        trace!("{:?} is already camelCase", letters);
        return letters;
    }
    if is_pascal_case(&letters) {
        trace!("lowering initial of PascalCase {:?}", letters);
        return locale.lower_first(&letters);
    }

    let mut camel = String::with_capacity(letters.len());
    for (idx, word) in split_words(&letters, CaseShape::FreeForm).into_iter().enumerate() {
        if idx == 0 {
            camel.push_str(&locale.to_lowercase(word));
        } else {
            camel.push_str(&title_word(word, locale));
        }
    }
    camel
}

/// Convert `s` to PascalCase, see [`to_camel_case`]
pub fn to_pascal_case(s: &str) -> String {
    to_pascal_case_with(s, &ConvertOptions::new())
}

pub fn to_pascal_case_with(s: &str, options: &ConvertOptions) -> String {
    let letters = letters_only(s);
    let locale = options.locale;

    if is_pascal_case(&letters) {
        trace!("{:?} is already PascalCase", letters);
        return letters;
    }
    if is_camel_case(&letters) {
        trace!("raising initial of camelCase {:?}", letters);
        return locale.upper_first(&letters);
    }

    split_words(&letters, CaseShape::FreeForm)
        .into_iter()
        .map(|word| title_word(word, locale))
        .collect()
}

// Shared body of the snake and kebab converters
fn join_lowercase(s: &str, separator: &str, options: &ConvertOptions) -> String {
    let shape = if is_camel_case(s) {
        CaseShape::Camel
    } else if is_pascal_case(s) {
        CaseShape::Pascal
    } else {
        CaseShape::FreeForm
    };
    trace!("joining {:?} with {:?} as {} input", s, separator, shape);

    let joined = if shape == CaseShape::FreeForm && options.expand_digits {
        split_words(&expand_digits(s), shape).join(separator)
    } else {
        split_words(s, shape).join(separator)
    };

    options.locale.to_lowercase(&joined)
}

fn expand_digits(s: &str) -> String {
    let mut expanded = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        match ch.to_digit(10) {
            Some(digit) => {
                expanded.push(' ');
                expanded.push_str(DIGIT_WORDS[digit as usize]);
                expanded.push(' ');
            }
            None => expanded.push(ch),
        }
    }
    expanded
}

fn letters_only(s: &str) -> String {
    s.chars()
        .map(|ch| if ch.is_ascii_alphabetic() { ch } else { ' ' })
        .collect()
}

fn title_word(word: &str, locale: Locale) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut titled = locale.to_uppercase(first.encode_utf8(&mut [0; 4]));
            titled.push_str(&locale.to_lowercase(chars.as_str()));
            titled
        }
        None => String::new(),
    }
}
