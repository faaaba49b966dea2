//! Portuguese tax identification number (NIF).
//! See: https://pt.wikipedia.org/wiki/Número_de_identificação_fiscal

use crate::country::{dispatch, Country};
use crate::error::ValidationError;
use crate::identification::{
    is_decimal_digits, is_digits, left_pad, split_check_digit, weighted_sum, Validator,
    PT_NUMBER_LENGTH,
};

/// Validates the check digit of a tax number, left padding it with zeros.
pub struct TaxNumberChecksum;

/// Same as [TaxNumberChecksum], also requiring a known entity type prefix.
pub struct StrictTaxNumberChecksum;

const WEIGHTS: &[u32; 8] = &[9, 8, 7, 6, 5, 4, 3, 2];
const DIVISION_FACTOR: u32 = 11;
const MINIMUM_REMAINDER: u32 = 2;

/// First digits assigned to individuals (1, 2) and to companies and other
/// entities (5 to 9).
const VALID_PREFIXES: &[char] = &['1', '2', '5', '6', '7', '8', '9'];

impl Validator for TaxNumberChecksum {
    fn validate(&self, number: &str) -> Result<bool, ValidationError> {
        Ok(is_valid(number))
    }
}

impl Validator for StrictTaxNumberChecksum {
    fn validate(&self, number: &str) -> Result<bool, ValidationError> {
        Ok(is_valid_strict(number))
    }
}

/// Validates a Portuguese tax number.
pub fn is_valid(number: &str) -> bool {
    padded_number(number).is_some_and(|padded| has_valid_check_digit(&padded))
}

/// Validates a tax number for `country`. Only Portugal is supported.
pub fn is_valid_for(country: Country, number: &str) -> Result<bool, ValidationError> {
    dispatch(country, || is_valid(number))
}

/// Validates a Portuguese tax number whose first digit must also be one of the
/// prefixes in use. Zero padded numbers never pass this check.
pub fn is_valid_strict(number: &str) -> bool {
    padded_number(number).is_some_and(|padded| {
        padded.starts_with(VALID_PREFIXES) && has_valid_check_digit(&padded)
    })
}

/// Computes the check digit for the first 8 digits of a tax number. Returns
/// `None` if any of them is greater than 9.
pub fn check_digit(digits: &[u32; 8]) -> Option<u32> {
    if !is_decimal_digits(digits) {
        return None;
    }
    let remainder = weighted_sum(digits, WEIGHTS) % DIVISION_FACTOR;
    if remainder < MINIMUM_REMAINDER {
        // 11 - 0 and 11 - 1 don't fit in a single digit
        Some(0)
    } else {
        Some(DIVISION_FACTOR - remainder)
    }
}

/// The 9 character zero padded number, or `None` if the input is empty, not
/// numeric or longer than 9 digits.
fn padded_number(number: &str) -> Option<String> {
    if !is_digits(number) {
        return None;
    }
    let padded = left_pad(number);
    (padded.len() == PT_NUMBER_LENGTH).then_some(padded)
}

fn has_valid_check_digit(padded: &str) -> bool {
    split_check_digit(padded)
        .is_some_and(|(digits, actual)| check_digit(&digits) == Some(actual))
}
