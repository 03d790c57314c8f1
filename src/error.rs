use thiserror::Error;

/// Errors raised when building option values from loose input.
///
/// Every text operation in this crate is total; only the constructors for
/// locales, padding bias and case shapes can reject their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),

    #[error("invalid padding bias {0} (expected 0 for start or 1 for end)")]
    InvalidBias(u8),

    #[error("unknown case shape: {0:?}")]
    UnknownCaseShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;
