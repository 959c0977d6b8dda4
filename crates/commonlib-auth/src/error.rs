use jsonwebtoken::errors::{Error as JwtError, ErrorKind};

/// Why a bearer token could not be turned into claims.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Not a well-formed token: bad structure, bad signature, wrong algorithm
    /// or a claim set that does not match [`crate::Claims`].
    #[error("unable to parse token: {0}")]
    Malformed(#[source] JwtError),

    /// Signature verified but `exp` is in the past.
    #[error("token expired")]
    Expired,
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(err),
        }
    }
}

impl TokenError {
    pub fn is_expired(&self) -> bool {
        matches!(self, TokenError::Expired)
    }
}
