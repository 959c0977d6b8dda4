use axum::{extract::FromRequestParts, http::request::Parts};

use commonlib_core::AppError;

use crate::middleware::auth::RequestAttributes;

/// Extractor for the caller's identity; rejects anonymous requests with 401.
///
/// Requires [`crate::middleware::auth::JwtAuthLayer`] in front of the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub role: String,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let attributes = parts.extensions.get::<RequestAttributes>().ok_or_else(|| {
            AppError::internal(anyhow::anyhow!(
                "RequestAttributes not found - authentication layer not configured"
            ))
        })?;

        match (attributes.id, attributes.role.as_ref()) {
            (Some(id), Some(role)) => Ok(Identity {
                id,
                role: role.clone(),
            }),
            _ => Err(AppError::unauthorized("Authentication required")),
        }
    }
}

/// Like [`Identity`] but never rejects; `None` for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeIdentity(
            Identity::from_request_parts(parts, state).await.ok(),
        ))
    }
}
