//! Portuguese identification card number ("Bilhete de Identidade").
//!
//! Besides a plain validity check, numbers can be scored: the score counts how
//! many validation stages the number passes, in order, before the first one that
//! fails. It is meant for user facing feedback on a partially typed number.

use crate::country::{dispatch, Country};
use crate::error::{InvalidScoreError, ValidationError};
use crate::identification::{
    is_blank, is_decimal_digits, is_digits, left_pad, split_check_digit, Validator,
    PT_NUMBER_LENGTH,
};
use std::fmt;

pub struct IdCardNumberChecksum;

const DIVISION_FACTOR: u32 = 11;
const FIRST_WEIGHT: u32 = 2;

impl Validator for IdCardNumberChecksum {
    fn validate(&self, number: &str) -> Result<bool, ValidationError> {
        Ok(is_valid(number))
    }
}

/// Outcome of scoring an identification card number. Each level means every
/// stage below it passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IdCardScore {
    /// The number is empty or only whitespace.
    Blank = 0,
    /// Not blank, but contains something other than ASCII digits.
    NotNumeric = 1,
    /// Numeric, but longer than 9 digits.
    WrongLength = 2,
    /// Well formed, but the check digit does not match.
    BadCheckDigit = 3,
    Valid = 4,
}

impl IdCardScore {
    pub const MINIMUM: IdCardScore = IdCardScore::Blank;
    pub const MAXIMUM: IdCardScore = IdCardScore::Valid;

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        self == Self::MAXIMUM
    }

    pub fn is_error(self) -> bool {
        self == Self::MINIMUM
    }

    pub fn is_warning(self) -> bool {
        !self.is_success() && !self.is_error()
    }

    pub fn message(self) -> &'static str {
        match self {
            IdCardScore::Blank => "The identification card number is blank",
            IdCardScore::NotNumeric => "The identification card number is not numeric",
            IdCardScore::WrongLength => {
                "The identification card number does not have the appropriate length (9)"
            }
            IdCardScore::BadCheckDigit => {
                "The identification card number check digit is not valid"
            }
            IdCardScore::Valid => "The identification card is valid",
        }
    }
}

impl TryFrom<u8> for IdCardScore {
    type Error = InvalidScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(IdCardScore::Blank),
            1 => Ok(IdCardScore::NotNumeric),
            2 => Ok(IdCardScore::WrongLength),
            3 => Ok(IdCardScore::BadCheckDigit),
            4 => Ok(IdCardScore::Valid),
            _ => Err(InvalidScoreError(value)),
        }
    }
}

impl From<IdCardScore> for u8 {
    fn from(score: IdCardScore) -> u8 {
        score.value()
    }
}

impl fmt::Display for IdCardScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validates a Portuguese identification card number, check digit included.
pub fn is_valid(number: &str) -> bool {
    score(number).is_success()
}

pub fn is_valid_for(country: Country, number: &str) -> Result<bool, ValidationError> {
    dispatch(country, || is_valid(number))
}

/// Scores a Portuguese identification card number.
pub fn score(number: &str) -> IdCardScore {
    if is_blank(number) {
        return IdCardScore::Blank;
    }
    if !is_digits(number) {
        return IdCardScore::NotNumeric;
    }
    let padded = left_pad(number);
    if padded.len() != PT_NUMBER_LENGTH {
        return IdCardScore::WrongLength;
    }
    match split_check_digit(&padded) {
        Some((digits, actual)) if check_digit(&digits) == Some(actual) => IdCardScore::Valid,
        _ => IdCardScore::BadCheckDigit,
    }
}

pub fn score_for(country: Country, number: &str) -> Result<IdCardScore, ValidationError> {
    dispatch(country, || score(number))
}

/// Computes the check digit for the first 8 digits of an identification card
/// number. Weights go from 2 on the last digit up to 9 on the first one.
/// Returns `None` if any of them is greater than 9.
pub fn check_digit(digits: &[u32; 8]) -> Option<u32> {
    if !is_decimal_digits(digits) {
        return None;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(FIRST_WEIGHT..)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let result = sum.div_ceil(DIVISION_FACTOR) * DIVISION_FACTOR - sum;
    if result > 9 {
        Some(0)
    } else {
        Some(result)
    }
}
