//! Pull-based availability collector
//!
//! The collector holds no metric state of its own: every scrape lists the
//! current service view and emits one freshly built gauge sample per
//! service. Services deleted from the view simply stop appearing in the
//! output, so the exposed series set always matches the current entity
//! set without any explicit clearing.

use crate::metrics::{StabilityLevel, UNAVAILABLE_GAUGE_HELP, UNAVAILABLE_GAUGE_NAME};
use aggregator_cache::{ApiServiceLister, Selector};
use aggregator_types::ApiServiceConditionType;
use prometheus::core::{Collector, Desc};
use prometheus::proto;
use std::collections::HashMap;
use std::sync::Arc;

/// Collector exposing one unavailability gauge sample per API service
pub struct ApiServiceStatusCollector {
    desc: Desc,
    lister: Arc<dyn ApiServiceLister>,
}

impl ApiServiceStatusCollector {
    /// Create a collector reading from the given service view
    pub fn new(lister: Arc<dyn ApiServiceLister>) -> Self {
        let desc = Desc::new(
            UNAVAILABLE_GAUGE_NAME.to_string(),
            StabilityLevel::Alpha.annotate(UNAVAILABLE_GAUGE_HELP),
            vec!["name".to_string()],
            HashMap::new(),
        )
        .expect("Failed to create aggregator_unavailable_apiservice descriptor");

        Self { desc, lister }
    }
}

impl Collector for ApiServiceStatusCollector {
    fn desc(&self) -> Vec<&Desc> {
        vec![&self.desc]
    }

    fn collect(&self) -> Vec<proto::MetricFamily> {
        // A failed list degrades to an empty pass; the view reads local
        // cache and the scrape path must never error out because of it.
        let services = match self.lister.list(&Selector::everything()) {
            Ok(services) => services,
            Err(err) => {
                tracing::warn!(error = %err, "listing API services failed, skipping collection pass");
                return Vec::new();
            }
        };

        let mut family = proto::MetricFamily::default();
        family.set_name(UNAVAILABLE_GAUGE_NAME.to_string());
        family.set_help(self.desc.help.clone());
        family.set_field_type(proto::MetricType::GAUGE);

        for service in services {
            // False, Unknown, and absent conditions all read as unavailable.
            let value = if service.is_condition_true(ApiServiceConditionType::Available) {
                0.0
            } else {
                1.0
            };

            let mut label = proto::LabelPair::default();
            label.set_name("name".to_string());
            label.set_value(service.name.clone());

            let mut gauge = proto::Gauge::default();
            gauge.set_value(value);

            let mut metric = proto::Metric::default();
            metric.mut_label().push(label);
            metric.set_gauge(gauge);
            family.mut_metric().push(metric);
        }

        vec![family]
    }
}
