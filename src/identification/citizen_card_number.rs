use crate::error::ValidationError;
use crate::identification::Validator;

/// Validates the document number printed on Portuguese citizen cards
/// ("Cartão de Cidadão"): 8 digits of civil identification number, its check
/// digit, 2 version letters and a final check digit.
///
/// The checksum is a Luhn variant where letters count as 10 to 35.
/// See: https://www.cartaodecidadao.pt/images/stories/Algoritmo_Num_Documento_CC.pdf
pub struct CitizenCardChecksum;

pub const CITIZEN_CARD_LENGTH: usize = 12;
const FIRST_LETTER_VALUE: u32 = 10;

impl Validator for CitizenCardChecksum {
    fn validate(&self, number: &str) -> Result<bool, ValidationError> {
        is_valid(number)
    }
}

/// Validates a citizen card document number.
///
/// A wrong length or a character outside of `0-9A-Z` breaks the document format
/// and is reported as an error, a checksum mismatch returns `Ok(false)`.
pub fn is_valid(number: &str) -> Result<bool, ValidationError> {
    let length = number.chars().count();
    if length != CITIZEN_CARD_LENGTH {
        return Err(ValidationError::InvalidLength {
            expected: CITIZEN_CARD_LENGTH,
            actual: length,
        });
    }

    let values = number
        .chars()
        .enumerate()
        .map(|(position, character)| {
            char_value(character).ok_or(ValidationError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    let mut sum = 0;
    let mut is_doubled = false;
    for value in values.into_iter().rev() {
        if !is_doubled {
            sum += value;
        } else if value > 4 {
            // doubled values above 9 are reduced by 9, letters included
            sum += value * 2 - 9;
        } else {
            sum += value * 2;
        }
        is_doubled = !is_doubled;
    }
    Ok(sum % 10 == 0)
}

fn char_value(character: char) -> Option<u32> {
    match character {
        '0'..='9' => character.to_digit(10),
        'A'..='Z' => Some(character as u32 - 'A' as u32 + FIRST_LETTER_VALUE),
        _ => None,
    }
}
