//! In-memory implementation of the indexed service view
//!
//! Suitable as the backing store behind watch-driven synchronization: the
//! sync process owns all writes (`upsert`/`remove`), every other consumer
//! reads through the [`ApiServiceLister`] trait.

use crate::error::{CacheError, Result};
use crate::lister::ApiServiceLister;
use crate::selector::Selector;
use aggregator_types::ApiService;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory API service cache, indexed by name
pub struct InMemoryApiServiceCache {
    services: DashMap<String, Arc<ApiService>>,
}

impl InMemoryApiServiceCache {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Insert or replace a service snapshot
    pub fn upsert(&self, service: ApiService) {
        self.services
            .insert(service.name.clone(), Arc::new(service));
    }

    /// Remove a service by name
    pub fn remove(&self, name: &str) {
        self.services.remove(name);
    }

    /// Number of services currently cached
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for InMemoryApiServiceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiServiceLister for InMemoryApiServiceCache {
    fn list(&self, selector: &Selector) -> Result<Vec<Arc<ApiService>>> {
        Ok(self
            .services
            .iter()
            .filter(|entry| selector.matches(entry.value()))
            .map(|entry| Arc::clone(entry.value()))
            .collect())
    }

    fn get(&self, name: &str) -> Result<Arc<ApiService>> {
        self.services
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| CacheError::NotFound(name.to_string()))
    }
}
