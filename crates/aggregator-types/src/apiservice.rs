//! API service types and condition evaluation
//!
//! An ApiService represents a registered aggregation target. Its status is
//! a list of typed conditions; condition evaluation is total over every
//! possible status shape (missing or `Unknown` conditions never error,
//! they just evaluate to "not true").

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A registered API aggregation target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiService {
    /// Unique name of the service (identity within the listed set)
    pub name: String,

    /// Label metadata, matched by list selectors
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Registration spec for this aggregation target
    pub spec: ApiServiceSpec,

    /// Current observed status
    #[serde(default)]
    pub status: ApiServiceStatus,
}

/// Registration fields that define an aggregation target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiServiceSpec {
    /// API group served by this service
    pub group: String,

    /// API version served by this service
    pub version: String,
}

/// Observed status of an API service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiServiceStatus {
    /// Current service state conditions
    #[serde(default)]
    pub conditions: Vec<ApiServiceCondition>,
}

/// A typed condition attached to an API service status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiServiceCondition {
    /// The type of condition this entry describes
    pub condition_type: ApiServiceConditionType,

    /// Whether the condition currently holds
    pub status: ConditionStatus,

    /// When the condition last changed status
    pub last_transition_time: chrono::DateTime<chrono::Utc>,

    /// Machine-readable reason for the last transition
    pub reason: String,

    /// Human-readable detail about the last transition
    pub message: String,
}

/// Known condition types for API services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiServiceConditionType {
    /// The service can handle requests
    Available,
}

/// Three-valued condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl ApiServiceCondition {
    /// Create a condition with the transition time stamped as now
    pub fn new(
        condition_type: ApiServiceConditionType,
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            condition_type,
            status,
            last_transition_time: chrono::Utc::now(),
            reason: reason.into(),
            message: message.into(),
        }
    }
}

impl ApiService {
    /// Create a service with an empty status
    pub fn new(name: impl Into<String>, spec: ApiServiceSpec) -> Self {
        Self {
            name: name.into(),
            labels: BTreeMap::new(),
            spec,
            status: ApiServiceStatus::default(),
        }
    }

    /// Get the condition of the given type, if one has been observed
    pub fn condition(
        &self,
        condition_type: ApiServiceConditionType,
    ) -> Option<&ApiServiceCondition> {
        self.status
            .conditions
            .iter()
            .find(|c| c.condition_type == condition_type)
    }

    /// Whether the condition of the given type is currently `True`.
    ///
    /// Total over all status shapes: `False`, `Unknown`, and
    /// never-observed conditions all return `false`.
    pub fn is_condition_true(&self, condition_type: ApiServiceConditionType) -> bool {
        matches!(
            self.condition(condition_type),
            Some(c) if c.status == ConditionStatus::True
        )
    }

    /// Insert or update a condition.
    ///
    /// When a condition of the same type already exists with the same
    /// status, only reason and message are refreshed and the original
    /// transition time is kept.
    pub fn set_condition(&mut self, condition: ApiServiceCondition) {
        match self
            .status
            .conditions
            .iter_mut()
            .find(|c| c.condition_type == condition.condition_type)
        {
            Some(existing) => {
                if existing.status != condition.status {
                    existing.status = condition.status;
                    existing.last_transition_time = condition.last_transition_time;
                }
                existing.reason = condition.reason;
                existing.message = condition.message;
            }
            None => self.status.conditions.push(condition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_status(status: ConditionStatus) -> ApiService {
        let mut svc = ApiService::new("v1.metrics.example.io", ApiServiceSpec::default());
        svc.set_condition(ApiServiceCondition::new(
            ApiServiceConditionType::Available,
            status,
            "Passed",
            "all checks passed",
        ));
        svc
    }

    #[test]
    fn test_condition_true() {
        let svc = service_with_status(ConditionStatus::True);
        assert!(svc.is_condition_true(ApiServiceConditionType::Available));
    }

    #[test]
    fn test_condition_false() {
        let svc = service_with_status(ConditionStatus::False);
        assert!(!svc.is_condition_true(ApiServiceConditionType::Available));
    }

    #[test]
    fn test_condition_unknown() {
        let svc = service_with_status(ConditionStatus::Unknown);
        assert!(!svc.is_condition_true(ApiServiceConditionType::Available));
    }

    #[test]
    fn test_condition_absent() {
        let svc = ApiService::new("v1.metrics.example.io", ApiServiceSpec::default());
        assert!(svc.condition(ApiServiceConditionType::Available).is_none());
        assert!(!svc.is_condition_true(ApiServiceConditionType::Available));
    }

    #[test]
    fn test_set_condition_appends() {
        let svc = service_with_status(ConditionStatus::True);
        assert_eq!(svc.status.conditions.len(), 1);
    }

    #[test]
    fn test_set_condition_updates_in_place() {
        let mut svc = service_with_status(ConditionStatus::True);
        svc.set_condition(ApiServiceCondition::new(
            ApiServiceConditionType::Available,
            ConditionStatus::False,
            "FailedDiscoveryCheck",
            "no response from endpoint",
        ));

        assert_eq!(svc.status.conditions.len(), 1);
        assert!(!svc.is_condition_true(ApiServiceConditionType::Available));
        assert_eq!(svc.status.conditions[0].reason, "FailedDiscoveryCheck");
    }

    #[test]
    fn test_set_condition_preserves_transition_time_when_status_unchanged() {
        let mut svc = service_with_status(ConditionStatus::True);
        let first_transition = svc.status.conditions[0].last_transition_time;

        svc.set_condition(ApiServiceCondition::new(
            ApiServiceConditionType::Available,
            ConditionStatus::True,
            "Passed",
            "still passing",
        ));

        let cond = svc.condition(ApiServiceConditionType::Available).unwrap();
        assert_eq!(cond.last_transition_time, first_transition);
        assert_eq!(cond.message, "still passing");
    }

    #[test]
    fn test_serde_round_trip() {
        let svc = service_with_status(ConditionStatus::True);
        let json = serde_json::to_string(&svc).unwrap();
        let back: ApiService = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, svc.name);
        assert!(back.is_condition_true(ApiServiceConditionType::Available));
    }
}
