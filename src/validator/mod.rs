pub mod config;
pub mod counters;

use crate::error::ValidationError;
use crate::identification::Validator;
use crate::validator::config::{DocumentType, ValidatorConfig};
use crate::validator::counters::Metrics;
use std::fmt;

/// A validator built from a [ValidatorConfig]. It checks numbers of a single
/// document type and counts the outcomes.
pub struct DocumentValidator {
    config: ValidatorConfig,
    metrics: Metrics,
}

impl DocumentValidator {
    pub(crate) fn new(config: ValidatorConfig) -> Self {
        let metrics = Metrics::new(config.document, &config.labels);
        Self { config, metrics }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn document(&self) -> DocumentType {
        self.config.document
    }

    pub fn validate(&self, number: &str) -> Result<bool, ValidationError> {
        let result = self.config.document.validate(number);
        match result {
            Ok(true) => self.metrics.valid.increment(1),
            Ok(false) => self.metrics.invalid.increment(1),
            Err(_) => self.metrics.malformed.increment(1),
        }
        result
    }
}

impl fmt::Debug for DocumentValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Validator for DocumentValidator {
    fn validate(&self, number: &str) -> Result<bool, ValidationError> {
        DocumentValidator::validate(self, number)
    }
}
