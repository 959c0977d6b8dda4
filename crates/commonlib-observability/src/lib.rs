//! Commonlib Observability
//!
//! The logging/metrics wrapper handed to components that need structured
//! diagnostics:
//! - [`EventLog`]: the capability components depend on ("log at a level")
//! - [`EventLogger`]: `tracing` output plus event counters and timings
//! - [`CommonMetricsCollector`]: the factory that hands out loggers
//! - [`init_logging`]: console subscriber setup
//!
//! Loggers are passed explicitly from the composition root. There is no
//! registry or post-construction injection: whatever needs a logger takes one
//! in its constructor.
//!
//! # Features
//!
//! - `prometheus` (default): installs a Prometheus recorder and exposes `/metrics`
//!
//! # Examples
//!
//! ```no_run
//! use commonlib_observability::{CommonMetricsCollector, EventLog, init_logging};
//! use tracing::Level;
//!
//! init_logging();
//! let metrics = CommonMetricsCollector::new("orders-service");
//! let logger = metrics.event_logger("checkout");
//! logger.log(Level::INFO, "order_placed", "order accepted");
//! ```

pub mod collector;
pub mod event_logger;
pub mod logging;

pub use collector::{CommonMetricsCollector, is_observability_enabled};
pub use event_logger::{EventLog, EventLogger};
pub use logging::init_logging;

#[cfg(feature = "prometheus")]
pub use collector::{init_metrics, metrics_app};
#[cfg(feature = "prometheus")]
pub use metrics_exporter_prometheus::PrometheusHandle;
