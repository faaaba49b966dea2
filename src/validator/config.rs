use crate::country::{dispatch, Country};
use crate::error::ValidationError;
use crate::identification::{
    CitizenCardChecksum, IdCardNumberChecksum, StrictTaxNumberChecksum, TaxNumberChecksum,
    Validator,
};
use crate::validator::DocumentValidator;
use crate::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{AsRefStr, Display, EnumIter};

/// The kind of document number a [DocumentValidator] checks.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentType {
    TaxNumber,
    TaxNumberStrict,
    IdCardNumber,
    CitizenCardNumber,
}

impl Validator for DocumentType {
    fn validate(&self, number: &str) -> Result<bool, ValidationError> {
        match self {
            DocumentType::TaxNumber => TaxNumberChecksum.validate(number),
            DocumentType::TaxNumberStrict => StrictTaxNumberChecksum.validate(number),
            DocumentType::IdCardNumber => IdCardNumberChecksum.validate(number),
            DocumentType::CitizenCardNumber => CitizenCardChecksum.validate(number),
        }
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidatorConfig {
    pub document: DocumentType,
    #[serde(default)]
    pub country: Country,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new(document: DocumentType) -> Self {
        Self {
            document,
            country: Country::default(),
            labels: Labels::default(),
        }
    }

    pub fn document(&self, document: DocumentType) -> Self {
        self.mutate_clone(|x| x.document = document)
    }

    pub fn country(&self, country: Country) -> Self {
        self.mutate_clone(|x| x.country = country)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    /// Fails when no rule exists for the configured country.
    pub fn build(&self) -> Result<DocumentValidator, ValidationError> {
        dispatch(self.country, || DocumentValidator::new(self.clone()))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn should_have_default() {
        let config = ValidatorConfig::new(DocumentType::TaxNumber);
        assert_eq!(
            config,
            ValidatorConfig {
                document: DocumentType::TaxNumber,
                country: Country::PT,
                labels: Labels::empty(),
            }
        );
    }

    #[test]
    fn should_override_fields() {
        let config = ValidatorConfig::new(DocumentType::TaxNumber)
            .document(DocumentType::IdCardNumber)
            .country(Country::BR)
            .labels(Labels::new(&[("team", "onboarding")]));
        assert_eq!(config.document, DocumentType::IdCardNumber);
        assert_eq!(config.country, Country::BR);
        assert_eq!(config.labels, Labels::new(&[("team", "onboarding")]));
    }

    #[test]
    fn should_deserialize_with_defaults() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"document": "id_card_number"}"#).unwrap();
        assert_eq!(config, ValidatorConfig::new(DocumentType::IdCardNumber));

        let config: ValidatorConfig = serde_json::from_str(
            r#"{"document": "citizen_card_number", "country": "PT", "labels": null}"#,
        )
        .unwrap();
        assert_eq!(config, ValidatorConfig::new(DocumentType::CitizenCardNumber));

        let config: ValidatorConfig =
            serde_json::from_str(r#"{"document": "tax_number_strict", "country": "BR"}"#).unwrap();
        assert_eq!(
            config,
            ValidatorConfig::new(DocumentType::TaxNumberStrict).country(Country::BR)
        );
    }

    #[test]
    fn should_deserialize_lower_case_country() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"document": "tax_number", "country": "pt"}"#).unwrap();
        assert_eq!(config, ValidatorConfig::new(DocumentType::TaxNumber));
        assert!(config.build().is_ok());

        let config: ValidatorConfig =
            serde_json::from_str(r#"{"document": "tax_number", "country": "br"}"#).unwrap();
        assert_eq!(config.country, Country::BR);
    }

    #[test]
    fn document_names_match_serde_names() {
        for document in DocumentType::iter() {
            let json = serde_json::to_string(&document).unwrap();
            assert_eq!(json, format!("\"{}\"", document.as_ref()));
        }
    }

    #[test]
    fn build_rejects_unsupported_countries() {
        for document in DocumentType::iter() {
            assert!(ValidatorConfig::new(document).build().is_ok());
            let err = ValidatorConfig::new(document)
                .country(Country::FR)
                .build()
                .unwrap_err();
            assert_eq!(err, ValidationError::UnsupportedJurisdiction(Country::FR));
        }
    }

    #[test]
    fn document_type_routes_to_its_rule() {
        assert_eq!(DocumentType::TaxNumber.validate("217186246"), Ok(true));
        assert_eq!(DocumentType::TaxNumber.validate("389982482"), Ok(true));
        assert_eq!(DocumentType::TaxNumberStrict.validate("389982482"), Ok(false));
        assert_eq!(DocumentType::IdCardNumber.validate("120972778"), Ok(true));
        assert_eq!(DocumentType::IdCardNumber.validate("12097277"), Ok(false));
        assert_eq!(DocumentType::CitizenCardNumber.validate("000000000ZZ4"), Ok(true));
        assert!(DocumentType::CitizenCardNumber.validate("120972778").is_err());
    }
}
