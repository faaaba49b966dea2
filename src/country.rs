use crate::error::{CountryParseError, ValidationError};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Jurisdiction a document number belongs to, as an ISO 3166-1 alpha-2 code.
///
/// Only [Country::PT] has validation rules. Every other country is rejected
/// with [ValidationError::UnsupportedJurisdiction] instead of being treated as
/// an invalid number. Codes are read case-insensitively, in configuration files too.
#[derive(
    SerializeDisplay,
    DeserializeFromStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Country {
    #[default]
    PT,
    AO,
    BR,
    CV,
    ES,
    FR,
    GW,
    MO,
    MZ,
    ST,
    TL,
}

impl Country {
    pub const fn is_supported(self) -> bool {
        matches!(self, Country::PT)
    }

    /// Reads the region of a locale tag such as `pt-PT`, `pt_BR` or `pt-Latn-PT`.
    pub fn from_locale(locale: &str) -> Result<Self, CountryParseError> {
        let region = locale
            .split(['-', '_'])
            .skip(1)
            .find(|subtag| subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
            .ok_or_else(|| CountryParseError::MissingRegion(locale.to_string()))?;
        Country::parse(region)
    }

    pub fn parse(code: &str) -> Result<Self, CountryParseError> {
        Country::from_str(code.trim())
            .map_err(|_| CountryParseError::UnknownCountry(code.to_string()))
    }
}

/// Runs `portugal` when `country` is Portugal, and reports the country as
/// unsupported otherwise.
pub fn dispatch<T>(country: Country, portugal: impl FnOnce() -> T) -> Result<T, ValidationError> {
    if country.is_supported() {
        Ok(portugal())
    } else {
        Err(ValidationError::UnsupportedJurisdiction(country))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};
    use strum::IntoEnumIterator;

    #[test]
    fn only_portugal_is_supported() {
        for country in Country::iter() {
            assert_eq!(country.is_supported(), country == Country::PT);
        }
    }

    #[test]
    fn dispatch_runs_portuguese_rule() {
        assert_eq!(dispatch(Country::PT, || 42), Ok(42));
    }

    #[test]
    fn dispatch_rejects_other_countries_without_running_the_rule() {
        for country in Country::iter().filter(|c| *c != Country::PT) {
            let mut called = false;
            let result = dispatch(country, || called = true);
            assert_eq!(result, Err(ValidationError::UnsupportedJurisdiction(country)));
            assert!(!called);
        }
    }

    #[test]
    fn parse_country_codes() {
        assert_eq!(Country::parse("PT"), Ok(Country::PT));
        assert_eq!(Country::parse("pt"), Ok(Country::PT));
        assert_eq!(Country::parse(" br "), Ok(Country::BR));
        assert_eq!(
            Country::parse("XX"),
            Err(CountryParseError::UnknownCountry("XX".to_string()))
        );
    }

    #[test]
    fn parse_locales() {
        assert_eq!(Country::from_locale("pt-PT"), Ok(Country::PT));
        assert_eq!(Country::from_locale("pt_BR"), Ok(Country::BR));
        assert_eq!(Country::from_locale("pt-Latn-PT"), Ok(Country::PT));
        assert_eq!(
            Country::from_locale("pt"),
            Err(CountryParseError::MissingRegion("pt".to_string()))
        );
        assert_eq!(
            Country::from_locale("en-US"),
            Err(CountryParseError::UnknownCountry("US".to_string()))
        );
    }

    #[test]
    fn country_serializes_as_code() {
        assert_tokens(&Country::PT, &[Token::Str("PT")]);
        assert_eq!(Country::BR.to_string(), "BR");
        assert_eq!(Country::default(), Country::PT);
    }

    #[test]
    fn country_deserializes_case_insensitively() {
        assert_de_tokens(&Country::PT, &[Token::Str("pt")]);
        assert_de_tokens(&Country::BR, &[Token::Str("Br")]);
        assert_de_tokens_error::<Country>(&[Token::Str("XX")], "Matching variant not found");
    }
}
