//! Middleware and extractors for request processing.
//!
//! # Modules
//!
//! - [`auth`]: bearer token layer that attaches identity to requests
//! - [`identity`]: extractors that read that identity in handlers
//!
//! # Authentication Flow
//!
//! 1. Client sends request, optionally with `Authorization: Bearer <token>`
//! 2. `JwtAuthLayer` verifies the token and inserts `RequestAttributes`
//!    (plus an `Authentication` marker for a valid token)
//! 3. The request is always forwarded
//! 4. Handlers decide: `Identity` rejects anonymous callers, `MaybeIdentity` does not
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::identity::Identity;
//!
//! async fn get_profile(identity: Identity) -> impl IntoResponse {
//!     format!("user {} with role {}", identity.id, identity.role)
//! }
//! ```

pub mod auth;
pub mod identity;
