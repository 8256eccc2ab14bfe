//! Label selectors for list operations

use aggregator_types::ApiService;
use std::collections::BTreeMap;

/// A label selector matched against service labels.
///
/// An empty selector matches everything; a non-empty selector matches
/// services whose labels contain every listed key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    labels: BTreeMap<String, String>,
}

impl Selector {
    /// The universal selector: matches every service
    pub fn everything() -> Self {
        Self::default()
    }

    /// Selector requiring all of the given label pairs
    pub fn from_labels(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }

    /// Whether the given service matches this selector
    pub fn matches(&self, service: &ApiService) -> bool {
        self.labels
            .iter()
            .all(|(k, v)| service.labels.get(k) == Some(v))
    }
}
