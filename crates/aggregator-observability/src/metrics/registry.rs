//! One-time registration with the default registry

use crate::metrics::{ApiServiceStatusCollector, UNAVAILABLE_COUNTER};
use aggregator_cache::ApiServiceLister;
use std::sync::{Arc, Once};

static REGISTER_METRICS: Once = Once::new();

/// Register the status collector and the unavailability counter with the
/// process-wide default registry.
///
/// Idempotent under concurrency: only the first caller performs the
/// registration, later callers block until it completes and then return.
///
/// # Panics
///
/// Panics on a registration conflict (a duplicate family name already in
/// the default registry). That is a naming collision baked into the
/// build, not a runtime fault to recover from.
pub fn register(lister: Arc<dyn ApiServiceLister>) {
    REGISTER_METRICS.call_once(|| {
        let collector = ApiServiceStatusCollector::new(lister);
        prometheus::default_registry()
            .register(Box::new(collector))
            .expect("Failed to register aggregator_unavailable_apiservice collector");
        prometheus::default_registry()
            .register(Box::new(UNAVAILABLE_COUNTER.clone()))
            .expect("Failed to register aggregator_unavailable_apiservice_total counter");
        tracing::debug!("aggregator availability metrics registered");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{record_unavailable, UNAVAILABLE_COUNTER_NAME, UNAVAILABLE_GAUGE_NAME};
    use aggregator_cache::InMemoryApiServiceCache;
    use aggregator_types::{
        ApiService, ApiServiceCondition, ApiServiceConditionType, ApiServiceSpec, ConditionStatus,
    };

    #[test]
    fn test_register_is_idempotent_under_concurrency() {
        let cache = Arc::new(InMemoryApiServiceCache::new());
        let mut svc = ApiService::new("v1.apps.example.io", ApiServiceSpec::default());
        svc.set_condition(ApiServiceCondition::new(
            ApiServiceConditionType::Available,
            ConditionStatus::False,
            "FailedDiscoveryCheck",
            "no response from endpoint",
        ));
        cache.upsert(svc);

        // Duplicate registration would panic inside register; every caller
        // returning cleanly is the assertion here.
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lister = Arc::clone(&cache) as Arc<dyn ApiServiceLister>;
                std::thread::spawn(move || register(lister))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // A later sequential call is a no-op as well.
        register(Arc::clone(&cache) as Arc<dyn ApiServiceLister>);

        record_unavailable("v1.apps.example.io", "FailedDiscoveryCheck");

        let families = prometheus::default_registry().gather();
        let gauges = families
            .iter()
            .filter(|f| f.get_name() == UNAVAILABLE_GAUGE_NAME)
            .count();
        let counters = families
            .iter()
            .filter(|f| f.get_name() == UNAVAILABLE_COUNTER_NAME)
            .count();

        assert_eq!(gauges, 1);
        assert_eq!(counters, 1);
    }
}
