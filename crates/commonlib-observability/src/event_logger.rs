use std::time::Duration;

use tracing::Level;

use crate::collector::CommonMetricsCollector;

/// Capability to emit a structured diagnostic.
///
/// `event` is a stable machine-readable name (used as a metric label),
/// `message` is free text for humans.
pub trait EventLog: Send + Sync {
    fn log(&self, level: Level, event: &'static str, message: &str);

    /// Records how long an operation took. Ignored unless the implementation tracks timings.
    fn timing(&self, _event: &'static str, _elapsed: Duration) {}
}

/// Logger that writes through `tracing` and counts every event it emits.
#[derive(Debug, Clone)]
pub struct EventLogger {
    component: &'static str,
    metrics: CommonMetricsCollector,
}

impl EventLogger {
    pub fn new(component: &'static str, metrics: CommonMetricsCollector) -> Self {
        Self { component, metrics }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn warn(&self, event: &'static str, message: &str) {
        self.log(Level::WARN, event, message);
    }

    pub fn info(&self, event: &'static str, message: &str) {
        self.log(Level::INFO, event, message);
    }

    pub fn error(&self, event: &'static str, message: &str) {
        self.log(Level::ERROR, event, message);
    }
}

impl EventLog for EventLogger {
    fn log(&self, level: Level, event: &'static str, message: &str) {
        let component = self.component;
        let service = self.metrics.service();

        // tracing needs the level at compile time
        match level {
            Level::ERROR => tracing::error!(service, component, event, "{message}"),
            Level::WARN => tracing::warn!(service, component, event, "{message}"),
            Level::INFO => tracing::info!(service, component, event, "{message}"),
            Level::DEBUG => tracing::debug!(service, component, event, "{message}"),
            Level::TRACE => tracing::trace!(service, component, event, "{message}"),
        }

        self.metrics.count_event(component, event, level);
    }

    fn timing(&self, event: &'static str, elapsed: Duration) {
        tracing::trace!(
            component = self.component,
            event,
            elapsed_us = elapsed.as_micros() as u64,
            "timing"
        );
        self.metrics.record_duration(self.component, event, elapsed);
    }
}
