pub mod capitalize;
pub mod convert;
pub mod predicates;
pub mod words;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

pub use capitalize::{capitalize_initial, capitalize_initial_in, capitalize_words, capitalize_words_in};
pub use convert::{
    to_camel_case, to_camel_case_with, to_kebab_case, to_kebab_case_with, to_pascal_case,
    to_pascal_case_with, to_snake_case, to_snake_case_with, ConvertOptions,
};
pub use predicates::{is_camel_case, is_kebab_case, is_pascal_case, is_snake_case};
pub use words::{split_camel_prefix, split_pascal_rest, split_words};

/// Lexical convention of a string, used to pick a word-splitting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseShape {
    #[default]
    FreeForm,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl CaseShape {
    /// Classify `s`, checking camel, pascal, snake and kebab in that order.
    /// Snake and kebab are checked strictly (no digits).
    pub fn detect(s: &str) -> Self {
        if is_camel_case(s) {
            CaseShape::Camel
        } else if is_pascal_case(s) {
            CaseShape::Pascal
        } else if is_snake_case(s, false) {
            CaseShape::Snake
        } else if is_kebab_case(s, false) {
            CaseShape::Kebab
        } else {
            CaseShape::FreeForm
        }
    }
}

impl FromStr for CaseShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "free-form" | "freeform" | "normal" => Ok(CaseShape::FreeForm),
            "camel" => Ok(CaseShape::Camel),
            "pascal" => Ok(CaseShape::Pascal),
            "snake" => Ok(CaseShape::Snake),
            "kebab" => Ok(CaseShape::Kebab),
            _ => Err(Error::UnknownCaseShape(s.to_string())),
        }
    }
}

impl fmt::Display for CaseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseShape::FreeForm => write!(f, "free-form"),
            CaseShape::Camel => write!(f, "camel"),
            CaseShape::Pascal => write!(f, "pascal"),
            CaseShape::Snake => write!(f, "snake"),
            CaseShape::Kebab => write!(f, "kebab"),
        }
    }
}
