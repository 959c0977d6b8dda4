//! # Commonlib Config
//!
//! Configuration structures loaded from environment variables.
//!
//! - [`jwt`]: token verification settings (secret, algorithm, leeway)
//! - [`error`]: [`ConfigError`], fatal at startup
//!
//! # Example
//!
//! ```ignore
//! use commonlib_config::JwtConfig;
//!
//! let jwt_config = JwtConfig::from_env()?;
//! ```

pub mod error;
pub mod jwt;

pub use error::ConfigError;
pub use jwt::JwtConfig;
