use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::error::ConfigError;

pub const JWT_SECRET: &str = "JWT_SECRET";
pub const JWT_ALGORITHM: &str = "JWT_ALGORITHM";
pub const JWT_LEEWAY_SECONDS: &str = "JWT_LEEWAY_SECONDS";

/// Settings used to verify bearer tokens.
///
/// # Environment Variables
///
/// - `JWT_SECRET`: shared HMAC secret (required)
/// - `JWT_ALGORITHM`: `HS256`, `HS384` or `HS512` (default: `HS256`)
/// - `JWT_LEEWAY_SECONDS`: clock skew tolerated on `exp` (default: `0`)
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub leeway_seconds: u64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtConfig")
            .field("algorithm", &self.algorithm)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish_non_exhaustive()
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            leeway_seconds: 0,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(JWT_SECRET).ok_or(ConfigError::Missing(JWT_SECRET))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::Empty(JWT_SECRET));
        }

        let algorithm = match lookup(JWT_ALGORITHM) {
            Some(raw) => parse_algorithm(&raw)?,
            None => Algorithm::HS256,
        };

        let leeway_seconds = match lookup(JWT_LEEWAY_SECONDS) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: JWT_LEEWAY_SECONDS,
                value: raw,
            })?,
            None => 0,
        };

        Ok(Self {
            secret,
            algorithm,
            leeway_seconds,
        })
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_leeway(mut self, leeway_seconds: u64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }
}

/// Only shared-secret algorithms are accepted since the key is a plain secret.
pub fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    let algorithm = Algorithm::from_str(raw.trim().to_ascii_uppercase().as_str())
        .map_err(|_| ConfigError::UnsupportedAlgorithm(raw.to_string()))?;

    ensure_hmac(algorithm)
}

pub fn ensure_hmac(algorithm: Algorithm) -> Result<Algorithm, ConfigError> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => Err(ConfigError::UnsupportedAlgorithm(format!("{other:?}"))),
    }
}
