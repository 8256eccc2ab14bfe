//! Aggregator Types - Core types for API service aggregation
//!
//! An API service is a named aggregation target whose availability is
//! tracked by the aggregation layer. Its status carries a set of typed
//! conditions; the `Available` condition is what the rest of the system
//! (status controller, metrics collector) keys off.
//!
//! ## Key Concepts
//!
//! - **ApiService**: a registered aggregation target, identified by name
//! - **ApiServiceCondition**: a typed, boolean-like status entry
//! - **ConditionStatus**: `True`, `False`, or `Unknown` - anything other
//!   than `True` counts as "not available"

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod apiservice;

// Re-export main types
pub use apiservice::{
    ApiService, ApiServiceCondition, ApiServiceConditionType, ApiServiceSpec, ApiServiceStatus,
    ConditionStatus,
};
