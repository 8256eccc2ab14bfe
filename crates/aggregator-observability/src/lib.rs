//! Aggregator Observability
//!
//! Availability metrics for the API aggregation layer:
//!
//! - **Gauge** `aggregator_unavailable_apiservice{name}`: recomputed from
//!   the indexed service view on every scrape, one sample per registered
//!   service (`0` available, `1` unavailable)
//! - **Counter** `aggregator_unavailable_apiservice_total{name, reason}`:
//!   incremented by the status controller when a service transitions to
//!   unavailable
//!
//! Call [`metrics::register`] once at startup with a handle to the service
//! view. No exposition transport lives here; the embedding process owns the
//! scrape endpoint and text rendering.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod metrics;

pub use metrics::{
    record_unavailable, register, ApiServiceStatusCollector, StabilityLevel,
    UNAVAILABLE_COUNTER_NAME, UNAVAILABLE_GAUGE_NAME,
};
