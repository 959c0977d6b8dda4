use axum::{Json, Router, extract::Request, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::middleware::auth::{Authentication, RequestAttributes};
use crate::middleware::identity::Identity;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/whoami", get(whoami))
        .route("/me", get(me))
        .layer(state.auth_layer())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Reports what the authentication layer attached, for any caller.
async fn whoami(request: Request) -> Json<Value> {
    let attributes = request
        .extensions()
        .get::<RequestAttributes>()
        .cloned()
        .unwrap_or_default();
    let authenticated = request.extensions().get::<Authentication>().is_some();

    Json(json!({
        "id": attributes.id,
        "role": attributes.role,
        "authenticated": authenticated,
    }))
}

async fn me(identity: Identity) -> Json<Value> {
    Json(json!({
        "id": identity.id,
        "role": identity.role,
    }))
}
