//! Aggregator Cache - indexed view over registered API services
//!
//! This crate provides the read surface the rest of the aggregation layer
//! consumes:
//!
//! - **ApiServiceLister**: read-only lookup of services by selector or name
//! - **Selector**: label selector used by list operations
//! - **InMemoryApiServiceCache**: concurrently-safe in-memory store
//!
//! The cache is kept current by an external synchronization process (watch
//! machinery); consumers such as the metrics collector only read from it.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod error;
pub mod lister;
pub mod memory;
pub mod selector;

// Re-exports
pub use error::{CacheError, Result};
pub use lister::ApiServiceLister;
pub use memory::InMemoryApiServiceCache;
pub use selector::Selector;
