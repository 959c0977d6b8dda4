/// Configuration problems detected while loading settings.
///
/// None of these are recoverable per request; the process should refuse to start.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("unsupported signature algorithm {0:?}, expected one of HS256, HS384, HS512")]
    UnsupportedAlgorithm(String),

    #[error("{var} has invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
