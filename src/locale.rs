use crate::error::{Error, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // Primary language subtag followed by any number of `-` or `_` delimited subtags
    static ref LANGUAGE_TAG: Regex = Regex::new(r"^[A-Za-z]{2,8}([-_][A-Za-z0-9]{1,8})*$").unwrap();
}

const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// Casing rules used by every upper/lower transformation in the crate.
///
/// Only languages whose case mappings differ from the Unicode defaults get a
/// variant; every other well-formed tag resolves to [`Locale::Root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    Root,
    Turkish,
    Azerbaijani,
    Lithuanian,
}

impl Locale {
    /// Canonical language tag for this locale
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Root => "und",
            Locale::Turkish => "tr",
            Locale::Azerbaijani => "az",
            Locale::Lithuanian => "lt",
        }
    }

    fn is_turkic(self) -> bool {
        matches!(self, Locale::Turkish | Locale::Azerbaijani)
    }

    /// Lower-case `s` using this locale's special casings on top of the
    /// Unicode default mapping.
    pub fn to_lowercase(self, s: &str) -> String {
        if self.is_turkic() {
            let mut mapped = String::with_capacity(s.len());
            let mut chars = s.chars().peekable();
            while let Some(ch) = chars.next() {
                match ch {
                    'I' if chars.peek() == Some(&COMBINING_DOT_ABOVE) => {
                        chars.next();
                        mapped.push('i');
                    }
                    'I' => mapped.push('ı'),
                    'İ' => mapped.push('i'),
                    _ => mapped.push(ch),
                }
            }
            return mapped.to_lowercase();
        }

        if self == Locale::Lithuanian {
            let mut mapped = String::with_capacity(s.len());
            let mut chars = s.chars().peekable();
            while let Some(ch) = chars.next() {
                match ch {
                    'Ì' => mapped.push_str("i\u{0307}\u{0300}"),
                    'Í' => mapped.push_str("i\u{0307}\u{0301}"),
                    'Ĩ' => mapped.push_str("i\u{0307}\u{0303}"),
                    'I' | 'J' | 'Į' if chars.peek().is_some_and(|&next| is_accent_above(next)) => {
                        mapped.extend(ch.to_lowercase());
                        mapped.push(COMBINING_DOT_ABOVE);
                    }
                    _ => mapped.push(ch),
                }
            }
            return mapped.to_lowercase();
        }

        s.to_lowercase()
    }

    /// Upper-case `s` using this locale's special casings on top of the
    /// Unicode default mapping.
    pub fn to_uppercase(self, s: &str) -> String {
        if self.is_turkic() {
            return s
                .chars()
                .map(|ch| if ch == 'i' { 'İ' } else { ch })
                .collect::<String>()
                .to_uppercase();
        }

        if self == Locale::Lithuanian {
            let mut mapped = String::with_capacity(s.len());
            let mut previous = None;
            for ch in s.chars() {
                let soft_dotted = matches!(previous, Some('i' | 'j' | 'į'));
                if !(ch == COMBINING_DOT_ABOVE && soft_dotted) {
                    mapped.push(ch);
                }
                previous = Some(ch);
            }
            return mapped.to_uppercase();
        }

        s.to_uppercase()
    }

    /// Upper-case only the first character of `s`
    pub fn upper_first(self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => {
                let mut out = self.to_uppercase(first.encode_utf8(&mut [0; 4]));
                out.push_str(chars.as_str());
                out
            }
            None => String::new(),
        }
    }

    /// Lower-case only the first character of `s`
    pub fn lower_first(self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => {
                let mut out = self.to_lowercase(first.encode_utf8(&mut [0; 4]));
                out.push_str(chars.as_str());
                out
            }
            None => String::new(),
        }
    }
}

fn is_accent_above(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{0314}' | '\u{033D}'..='\u{0344}' | '\u{0346}')
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        if !LANGUAGE_TAG.is_match(tag) {
            return Err(Error::InvalidLocale(tag.to_string()));
        }

        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let locale = match primary.as_str() {
            "tr" | "tur" => Locale::Turkish,
            "az" | "aze" => Locale::Azerbaijani,
            "lt" | "lit" => Locale::Lithuanian,
            _ => Locale::Root,
        };

        debug!("resolved locale tag {:?} to {}", tag, locale);
        Ok(locale)
    }
}

impl TryFrom<&str> for Locale {
    type Error = Error;

    fn try_from(tag: &str) -> Result<Self> {
        tag.parse()
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
