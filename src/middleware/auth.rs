//! Bearer token authentication layer.
//!
//! [`JwtAuthLayer`] runs once per request. It reads the `Authorization` header,
//! asks the [`TokenCodec`] for a verdict and records the result on the request
//! extensions:
//!
//! - [`RequestAttributes`] is always inserted, with `id`/`role` set only for a
//!   valid token
//! - [`Authentication`] is inserted for a valid token unless one is already present
//!
//! The layer never rejects. Bad, expired or missing tokens produce an anonymous
//! request plus a diagnostic on the injected [`EventLog`]; access decisions belong
//! to handlers and extractors further down (see [`crate::middleware::identity`]).

use std::net::SocketAddr;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request, header};
use tower::{Layer, Service};
use tracing::Level;

use commonlib_auth::{AuthOutcome, RejectReason, TokenCodec};
use commonlib_observability::EventLog;

/// Component name used for the layer's logger.
pub const JWT_FILTER_COMPONENT: &str = "jwt_filter";

const BEARER_PREFIX: &str = "Bearer ";

/// Identity attributes attached to every request that passed through the layer.
///
/// Both fields are `None` for anonymous requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestAttributes {
    pub id: Option<i64>,
    pub role: Option<String>,
}

impl RequestAttributes {
    pub fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }
}

/// Marker that the request carries an established identity.
///
/// Carries no principal; identity lives in [`RequestAttributes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    pub details: AuthenticationDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationDetails {
    pub remote_addr: Option<SocketAddr>,
}

impl AuthenticationDetails {
    fn from_request<B>(request: &Request<B>) -> Self {
        Self {
            remote_addr: request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr),
        }
    }
}

/// Set once the layer has handled a request so nested or repeated layers skip it.
#[derive(Debug, Clone, Copy)]
struct JwtFilterApplied;

/// Shape of the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationHeader<'a> {
    Absent,
    /// Present but not `Bearer <token>` (or not valid UTF-8).
    WrongScheme,
    Bearer(&'a str),
}

/// Classify the `Authorization` header. The prefix match is exact and case-sensitive.
pub fn authorization_header(headers: &HeaderMap) -> AuthorizationHeader<'_> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return AuthorizationHeader::Absent;
    };

    match value.to_str().ok().and_then(|v| v.strip_prefix(BEARER_PREFIX)) {
        Some(token) => AuthorizationHeader::Bearer(token),
        None => AuthorizationHeader::WrongScheme,
    }
}

struct JwtAuthState {
    codec: Arc<TokenCodec>,
    logger: Arc<dyn EventLog>,
}

impl JwtAuthState {
    fn filter<B>(&self, request: &mut Request<B>) {
        if request.extensions().get::<JwtFilterApplied>().is_some() {
            return;
        }
        request.extensions_mut().insert(JwtFilterApplied);

        let token = match authorization_header(request.headers()) {
            AuthorizationHeader::Bearer(token) => Some(token.to_owned()),
            AuthorizationHeader::WrongScheme | AuthorizationHeader::Absent => {
                self.logger.log(
                    Level::WARN,
                    "missing_bearer_scheme",
                    "JWT Token does not begin with Bearer String",
                );
                None
            }
        };

        let outcome = match token.as_deref() {
            Some(token) => {
                let started = Instant::now();
                let outcome = self.codec.authenticate(Some(token));
                self.logger.timing("token_verification", started.elapsed());
                outcome
            }
            None => AuthOutcome::Anonymous,
        };

        let attributes = match &outcome {
            AuthOutcome::Authenticated(claims) => {
                self.logger.log(
                    Level::DEBUG,
                    "authenticated",
                    &format!("token accepted for subject {}", claims.id),
                );
                RequestAttributes {
                    id: Some(claims.id),
                    role: Some(claims.role.clone()),
                }
            }
            AuthOutcome::Anonymous => RequestAttributes::default(),
            AuthOutcome::Rejected(RejectReason::Malformed) => {
                self.logger
                    .log(Level::INFO, "token_malformed", "Unable to get JWT Token");
                RequestAttributes::default()
            }
            AuthOutcome::Rejected(RejectReason::Expired) => {
                self.logger
                    .log(Level::INFO, "token_expired", "JWT Token has expired");
                RequestAttributes::default()
            }
        };
        request.extensions_mut().insert(attributes);

        if outcome.is_authenticated() && request.extensions().get::<Authentication>().is_none() {
            let details = AuthenticationDetails::from_request(request);
            request.extensions_mut().insert(Authentication { details });
        }
    }
}

/// Layer that attaches bearer-token identity to requests.
///
/// # Example
/// ```ignore
/// let logger = Arc::new(metrics.event_logger(JWT_FILTER_COMPONENT));
/// router = router.layer(JwtAuthLayer::new(codec, logger));
/// ```
#[derive(Clone)]
pub struct JwtAuthLayer {
    state: Arc<JwtAuthState>,
}

impl JwtAuthLayer {
    pub fn new(codec: Arc<TokenCodec>, logger: Arc<dyn EventLog>) -> Self {
        Self {
            state: Arc::new(JwtAuthState { codec, logger }),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService {
            inner,
            state: self.state.clone(),
        }
    }
}

/// Service produced by [`JwtAuthLayer`].
#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    state: Arc<JwtAuthState>,
}

impl<S, B> Service<Request<B>> for JwtAuthService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        // Verification is synchronous, so the inner future is returned as is.
        self.state.filter(&mut request);
        self.inner.call(request)
    }
}
