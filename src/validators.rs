use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALPHA: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
    static ref ALPHA_NUMERIC: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
}

/// Only ASCII letters, at least one of them
pub fn is_alpha(s: &str) -> bool {
    ALPHA.is_match(s)
}

/// Only ASCII letters and digits, with at least one of each
pub fn is_alpha_numeric(s: &str) -> bool {
    ALPHA_NUMERIC.is_match(s)
        && s.bytes().any(|b| b.is_ascii_alphabetic())
        && s.bytes().any(|b| b.is_ascii_digit())
}
