//! Pure string utilities: word-case detection and conversion, capitalization,
//! padding, comparison, merging, reversal and simple validators.
//!
//! Every function is total and allocation-local. Anything that changes letter
//! case takes a [`Locale`], defaulting to the Unicode root rules.

pub mod case;
pub mod compare;
pub mod error;
pub mod locale;
pub mod merge;
pub mod padding;
pub mod reverse;
pub mod validators;

pub use case::{
    capitalize_initial, capitalize_initial_in, capitalize_words, capitalize_words_in,
    is_camel_case, is_kebab_case, is_pascal_case, is_snake_case, split_camel_prefix,
    split_pascal_rest, split_words, to_camel_case, to_camel_case_with, to_kebab_case,
    to_kebab_case_with, to_pascal_case, to_pascal_case_with, to_snake_case, to_snake_case_with,
    CaseShape, ConvertOptions,
};
pub use compare::{
    compare, loose_compare, loose_compare_in, loose_region_match, loose_region_match_in,
    region_match, StringRegion,
};
pub use error::{Error, Result};
pub use locale::Locale;
pub use merge::{merge, Separator};
pub use padding::{
    pad_bidirectional, pad_bidirectional_default, pad_end, pad_end_default, pad_start,
    pad_start_default, Bias, PadOptions, DEFAULT_FILL,
};
pub use reverse::reverse;
pub use validators::{is_alpha, is_alpha_numeric};
