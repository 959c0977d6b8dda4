//! Claim set embedded in bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// # Fields
///
/// - `id`: numeric subject identifier
/// - `role`: role name assigned by the issuer, passed through unchanged
/// - `exp`: expiration timestamp (Unix seconds)
/// - `iat`: issued-at timestamp (Unix seconds), optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier
    pub id: i64,
    /// Role claim
    pub role: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}
