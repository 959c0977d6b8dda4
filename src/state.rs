use std::sync::Arc;

use commonlib_auth::TokenCodec;
use commonlib_config::{ConfigError, JwtConfig};
use commonlib_observability::{CommonMetricsCollector, EventLog};

use crate::middleware::auth::{JWT_FILTER_COMPONENT, JwtAuthLayer};

/// Everything the HTTP stack needs, wired once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub codec: Arc<TokenCodec>,
    pub metrics: CommonMetricsCollector,
}

impl AppState {
    pub fn new(
        jwt_config: JwtConfig,
        metrics: CommonMetricsCollector,
    ) -> Result<Self, ConfigError> {
        let codec = Arc::new(TokenCodec::new(&jwt_config)?);

        Ok(Self {
            jwt_config,
            codec,
            metrics,
        })
    }

    /// Authentication layer with a logger bound to the filter component.
    pub fn auth_layer(&self) -> JwtAuthLayer {
        let logger: Arc<dyn EventLog> =
            Arc::new(self.metrics.event_logger(JWT_FILTER_COMPONENT));
        JwtAuthLayer::new(self.codec.clone(), logger)
    }
}

pub fn init_app_state(service: &str) -> Result<AppState, ConfigError> {
    AppState::new(JwtConfig::from_env()?, CommonMetricsCollector::new(service))
}
