use super::AnalyticsClient;
use std::collections::BTreeMap;
use tracing::info;

/// Emits analytics events into the diagnostic log under the `analytics`
/// target.
pub struct TracingAnalytics;

impl AnalyticsClient for TracingAnalytics {
    fn send(&self, event: &str, payload: BTreeMap<String, String>) {
        info!(target: "analytics", event, ?payload, "analytics event");
    }
}
