use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info"), overridden by `RUST_LOG`
/// - **Format**: `LOG_FORMAT=json` for one JSON object per line, compact text otherwise
/// - **Filtering**: noisy dependencies pinned to warn
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let env_filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{},tower_http=warn,hyper=warn,h2=warn",
                log_level
            ))
        })
    };

    if json {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter());

        tracing_subscriber::registry().with(json_layer).init();
    } else {
        let console_layer = fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter());

        tracing_subscriber::registry().with(console_layer).init();
    }
}
