//! Shared handler state

use std::sync::Arc;

use crate::clock::TimeService;
use crate::observability::MetricsRegistry;

/// State cloned into every handler
///
/// Holds no per-request data: the time service is immutable and the metrics
/// are atomic counters.
#[derive(Debug, Clone)]
pub struct AppState {
    pub time: TimeService,
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new(time: TimeService) -> Self {
        Self {
            time,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }
}
