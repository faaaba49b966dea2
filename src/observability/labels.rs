use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holder of multiple [Label] providing some methods to easily clone and adds new labels in it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels(BTreeMap<String, String>);

pub const NO_LABEL: Labels = Labels(BTreeMap::new());

impl Labels {
    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(&self, additional_labels: Labels) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.0);
        Labels(labels)
    }

    pub fn new(labels: &[(impl ToString, impl ToString)]) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        NO_LABEL
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}
