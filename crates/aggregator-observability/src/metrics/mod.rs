//! Metric schema for the aggregation layer
//!
//! Family names, help strings, and stability classification are fixed at
//! compile time. The gauge is produced by the [`collector`] on every
//! scrape; the counter is a process-wide static populated by the status
//! controller through [`record_unavailable`].

pub mod collector;
pub mod registry;

pub use collector::ApiServiceStatusCollector;
pub use registry::register;

use lazy_static::lazy_static;
use prometheus::{IntCounterVec, Opts};

/// Name of the unavailability gauge family
pub const UNAVAILABLE_GAUGE_NAME: &str = "aggregator_unavailable_apiservice";

/// Help text for the unavailability gauge (stability prefix is added at
/// descriptor construction)
pub const UNAVAILABLE_GAUGE_HELP: &str =
    "Gauge of APIServices which are marked as unavailable broken down by APIService name.";

/// Name of the unavailability transition counter family
pub const UNAVAILABLE_COUNTER_NAME: &str = "aggregator_unavailable_apiservice_total";

/// Help text for the unavailability transition counter
pub const UNAVAILABLE_COUNTER_HELP: &str =
    "Counter of APIServices which are marked as unavailable broken down by APIService name and reason.";

/// Stability classification of a metric family.
///
/// New metrics start at `Alpha`; promotion is an explicit commitment to
/// keep the schema stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityLevel {
    Alpha,
    Stable,
}

impl StabilityLevel {
    /// Prefix the help text with the stability annotation, following the
    /// exposition convention of the wider control plane
    pub fn annotate(&self, help: &str) -> String {
        match self {
            StabilityLevel::Alpha => format!("[ALPHA] {help}"),
            StabilityLevel::Stable => format!("[STABLE] {help}"),
        }
    }
}

lazy_static! {
    /// Counter of unavailability transitions by service name and reason.
    ///
    /// Incremented by the status controller when it marks a service
    /// unavailable; the collection path never touches it.
    pub static ref UNAVAILABLE_COUNTER: IntCounterVec = IntCounterVec::new(
        Opts::new(
            UNAVAILABLE_COUNTER_NAME,
            StabilityLevel::Alpha.annotate(UNAVAILABLE_COUNTER_HELP),
        ),
        &["name", "reason"],
    )
    .expect("Failed to create aggregator_unavailable_apiservice_total metric");
}

/// Record one unavailability transition for a service
pub fn record_unavailable(name: &str, reason: &str) {
    UNAVAILABLE_COUNTER.with_label_values(&[name, reason]).inc();
}
