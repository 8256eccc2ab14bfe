//! Read-only lister trait over the indexed service view
//!
//! Listing is a synchronous, lock-protected in-memory read: it is called
//! from inside synchronous scrape paths (metrics collection) and never
//! performs I/O.

use crate::error::Result;
use crate::selector::Selector;
use aggregator_types::ApiService;
use std::sync::Arc;

/// Read-only lookup of API services
pub trait ApiServiceLister: Send + Sync {
    /// List all services matching the selector
    fn list(&self, selector: &Selector) -> Result<Vec<Arc<ApiService>>>;

    /// Get a service by name
    fn get(&self, name: &str) -> Result<Arc<ApiService>>;
}
