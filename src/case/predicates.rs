use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CAMEL_CASE: Regex = Regex::new(r"^[a-z]+[a-zA-Z]*$").unwrap();
    static ref PASCAL_CASE: Regex = Regex::new(r"^[A-Z][a-z]+[a-zA-Z]*$").unwrap();
    static ref SNAKE_CASE: Regex = Regex::new(r"^[a-z]+(_[a-z]+)*$").unwrap();
    static ref SNAKE_CASE_DIGITS: Regex = Regex::new(r"^([a-z][0-9]*)+(_[a-z0-9]+)*$").unwrap();
    static ref KEBAB_CASE: Regex = Regex::new(r"^[a-z]+(-[a-z]+)*$").unwrap();
    static ref KEBAB_CASE_DIGITS: Regex = Regex::new(r"^([a-z][0-9]*)+(-[a-z0-9]+)*$").unwrap();
}

/// `myVariableName`: a lowercase run followed by letters of any case
pub fn is_camel_case(s: &str) -> bool {
    CAMEL_CASE.is_match(s)
}

/// `MyVariableName`: one uppercase letter, a lowercase run, then letters of
/// any case. Bare capitals and acronyms are rejected.
pub fn is_pascal_case(s: &str) -> bool {
    PASCAL_CASE.is_match(s)
}

/// `my_variable_name`. With `allow_digits`, segments may carry digits but the
/// string must still open with a letter.
pub fn is_snake_case(s: &str, allow_digits: bool) -> bool {
    if allow_digits {
        SNAKE_CASE_DIGITS.is_match(s)
    } else {
        SNAKE_CASE.is_match(s)
    }
}

/// `my-variable-name`, same rules as [`is_snake_case`]
pub fn is_kebab_case(s: &str, allow_digits: bool) -> bool {
    if allow_digits {
        KEBAB_CASE_DIGITS.is_match(s)
    } else {
        KEBAB_CASE.is_match(s)
    }
}
