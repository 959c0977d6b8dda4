//! # Commonlib Auth
//!
//! Decoding and validation of the bearer tokens presented by clients.
//!
//! This crate provides:
//!
//! - [`claims`]: the claim set carried by a token (subject id, role, expiry)
//! - [`codec`]: [`TokenCodec`], signature and expiry verification
//! - [`error`]: [`TokenError`], why a token could not be used
//! - [`outcome`]: [`AuthOutcome`], the per-request verdict consumed by middleware
//!
//! Token issuance is deliberately absent; tokens come from an external issuer
//! sharing the configured secret.
//!
//! # Example
//!
//! ```ignore
//! use commonlib_auth::{AuthOutcome, TokenCodec};
//! use commonlib_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env()?)?;
//!
//! match codec.authenticate(Some(token)) {
//!     AuthOutcome::Authenticated(claims) => println!("user {} ({})", claims.id, claims.role),
//!     AuthOutcome::Anonymous => println!("no token"),
//!     AuthOutcome::Rejected(reason) => println!("rejected: {}", reason),
//! }
//! ```

pub mod claims;
pub mod codec;
pub mod error;
pub mod outcome;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use codec::TokenCodec;
pub use error::TokenError;
pub use outcome::{AuthOutcome, RejectReason};
