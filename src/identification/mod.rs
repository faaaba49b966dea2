pub mod citizen_card_number;
pub mod id_card_number;
pub mod tax_number;

use crate::error::ValidationError;

pub use crate::identification::citizen_card_number::CitizenCardChecksum;
pub use crate::identification::id_card_number::{IdCardNumberChecksum, IdCardScore};
pub use crate::identification::tax_number::{StrictTaxNumberChecksum, TaxNumberChecksum};

/// Both the tax number and the identification card number have 9 digits,
/// the last one being the check digit.
const PT_NUMBER_LENGTH: usize = 9;
const PADDING_CHAR: char = '0';

/// A Portuguese document number rule.
///
/// `Ok(false)` means the number was checked and is invalid. Errors are kept for
/// inputs that break the document format contract.
pub trait Validator: Send + Sync {
    fn validate(&self, number: &str) -> Result<bool, ValidationError>;
}

fn is_decimal_digits(digits: &[u32]) -> bool {
    digits.iter().all(|digit| *digit <= 9)
}

/// Blank means empty or only whitespace, leaving out the no-break spaces and
/// the next line control character.
fn is_blank(number: &str) -> bool {
    number.chars().all(|c| {
        matches!(c, '\u{1c}'..='\u{1f}')
            || (c.is_whitespace() && !matches!(c, '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}'))
    })
}

fn is_digits(number: &str) -> bool {
    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

/// Left pads `number` with zeros up to 9 characters. Numbers longer than that
/// are returned unchanged.
fn left_pad(number: &str) -> String {
    let padding = PT_NUMBER_LENGTH.saturating_sub(number.chars().count());
    let mut padded = String::with_capacity(padding + number.len());
    padded.extend(std::iter::repeat(PADDING_CHAR).take(padding));
    padded.push_str(number);
    padded
}

/// Splits a 9 digit number into its 8 payload digits and its check digit.
/// Returns `None` when `number` isn't exactly 9 ASCII digits.
fn split_check_digit(number: &str) -> Option<([u32; PT_NUMBER_LENGTH - 1], u32)> {
    if number.len() != PT_NUMBER_LENGTH {
        return None;
    }
    let mut digits = [0; PT_NUMBER_LENGTH - 1];
    let mut chars = number.chars();
    for digit in digits.iter_mut() {
        *digit = chars.next()?.to_digit(10)?;
    }
    let check_digit = chars.next()?.to_digit(10)?;
    Some((digits, check_digit))
}

fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}
