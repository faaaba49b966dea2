use crate::validator::config::DocumentType;
use crate::Labels;
use metrics::{counter, Counter};

pub struct Metrics {
    pub valid: Counter,
    pub invalid: Counter,
    pub malformed: Counter,
}

const VALIDATIONS: &str = "identification.validations";
const DOCUMENT: &str = "document";
const OUTCOME: &str = "outcome";

impl Metrics {
    pub fn new(document: DocumentType, labels: &Labels) -> Self {
        let labels = labels.clone_with_labels(Labels::new(&[(DOCUMENT, document.as_ref())]));
        Metrics {
            valid: counter!(
                VALIDATIONS,
                labels.clone_with_labels(Labels::new(&[(OUTCOME, "valid")]))
            ),
            invalid: counter!(
                VALIDATIONS,
                labels.clone_with_labels(Labels::new(&[(OUTCOME, "invalid")]))
            ),
            malformed: counter!(
                VALIDATIONS,
                labels.clone_with_labels(Labels::new(&[(OUTCOME, "malformed")]))
            ),
        }
    }
}
