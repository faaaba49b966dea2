use crate::country::Country;
use thiserror::Error;

/// Message carried by every "unsupported jurisdiction" error.
pub const NOT_IMPLEMENTED_MESSAGE: &str = "Not implemented yet";

/// Failure of a validation call that is not a plain "the number is invalid".
///
/// An invalid number is reported as `Ok(false)`. These variants are reserved for
/// callers asking for something the validators cannot answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No rule exists for this country.
    #[error("Not implemented yet")]
    UnsupportedJurisdiction(Country),

    /// The input does not have the fixed length the document requires.
    #[error("The document number must have {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The input contains a character outside of the document alphabet.
    #[error("The document number contains an invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl ValidationError {
    /// True for errors raised because the country has no rule, as opposed to a
    /// malformed input.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ValidationError::UnsupportedJurisdiction(_))
    }
}

impl From<ValidationError> for i64 {
    fn from(value: ValidationError) -> i64 {
        match value {
            ValidationError::UnsupportedJurisdiction(_) => -2,
            ValidationError::InvalidLength { .. } => -3,
            ValidationError::InvalidCharacter { .. } => -4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountryParseError {
    #[error("Unknown country code {0:?}")]
    UnknownCountry(String),

    #[error("The locale {0:?} has no region")]
    MissingRegion(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Not supported for score {0}")]
pub struct InvalidScoreError(pub u8);
