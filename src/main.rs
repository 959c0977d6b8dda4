use std::net::SocketAddr;

use commonlib::router::init_router;
use commonlib::state::init_app_state;
use commonlib_observability::init_logging;
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let state = match init_app_state(env!("CARGO_PKG_NAME")) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Invalid authentication configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(jwt = ?state.jwt_config, "Token verification configured");

    #[cfg(feature = "prometheus")]
    serve_metrics().await?;

    let app = init_router(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server running on http://{}", bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(feature = "prometheus")]
async fn serve_metrics() -> anyhow::Result<()> {
    let Some(handle) = commonlib_observability::init_metrics()? else {
        return Ok(());
    };

    let metrics_addr = std::env::var("METRICS_ADDR").unwrap_or_else(|_| "0.0.0.0:9090".to_string());
    let listener = tokio::net::TcpListener::bind(&metrics_addr).await?;
    tracing::info!("Metrics available at http://{}/metrics", metrics_addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, commonlib_observability::metrics_app(handle)).await {
            tracing::error!(error = %e, "Metrics server stopped");
        }
    });

    Ok(())
}
