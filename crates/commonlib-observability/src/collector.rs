use std::sync::{Arc, OnceLock};
use std::time::Duration;

use metrics::{counter, histogram};
use tracing::Level;

use crate::event_logger::EventLogger;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Records event counts and timings on behalf of [`EventLogger`]s.
///
/// Cheap to clone; every logger created from one collector reports under the
/// same `service` label.
#[derive(Debug, Clone)]
pub struct CommonMetricsCollector {
    service: Arc<str>,
    enabled: bool,
}

impl CommonMetricsCollector {
    pub fn new(service: &str) -> Self {
        Self {
            service: Arc::from(service),
            enabled: is_observability_enabled(),
        }
    }

    /// Collector that never records; loggers built from it only emit log lines.
    pub fn disabled(service: &str) -> Self {
        Self {
            service: Arc::from(service),
            enabled: false,
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Hands out a logger bound to `component`.
    pub fn event_logger(&self, component: &'static str) -> EventLogger {
        EventLogger::new(component, self.clone())
    }

    pub fn count_event(&self, component: &'static str, event: &'static str, level: Level) {
        if !self.enabled {
            return;
        }
        counter!(
            "events_total",
            "service" => self.service.to_string(),
            "component" => component,
            "event" => event,
            "level" => level_label(level)
        )
        .increment(1);
    }

    pub fn record_duration(&self, component: &'static str, event: &'static str, elapsed: Duration) {
        if !self.enabled {
            return;
        }
        histogram!(
            "event_duration_seconds",
            "service" => self.service.to_string(),
            "component" => component,
            "event" => event
        )
        .record(elapsed.as_secs_f64());
    }
}

pub(crate) fn level_label(level: Level) -> &'static str {
    match level {
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        Level::TRACE => "trace",
    }
}

#[cfg(feature = "prometheus")]
pub use exporter::{init_metrics, metrics_app};

#[cfg(feature = "prometheus")]
mod exporter {
    use std::time::Duration;

    use anyhow::Context;
    use axum::{Router, routing::get};
    use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

    use super::is_observability_enabled;

    /// Initialize Prometheus metrics exporter with upkeep task.
    /// Returns `Ok(None)` if observability is disabled.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
        if !is_observability_enabled() {
            return Ok(None);
        }

        let handle = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full("event_duration_seconds".to_string()),
                &[
                    0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0,
                ],
            )
            .context("Failed to set buckets")?
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;

        // Spawn upkeep task to clean stale metrics
        let upkeep_handle = handle.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(5)).await;
                upkeep_handle.run_upkeep();
            }
        });

        Ok(Some(handle))
    }

    /// Router for metrics server
    pub fn metrics_app(handle: PrometheusHandle) -> Router {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    }
}
