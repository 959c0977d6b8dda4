use std::fmt;

use crate::claims::Claims;
use crate::error::TokenError;

/// Result of checking the token presented with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(Claims),
    /// No token was presented.
    Anonymous,
    /// A token was presented but cannot be trusted.
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Malformed,
    Expired,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Malformed => "malformed",
            RejectReason::Expired => "expired",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&TokenError> for RejectReason {
    fn from(err: &TokenError) -> Self {
        match err {
            TokenError::Malformed(_) => RejectReason::Malformed,
            TokenError::Expired => RejectReason::Expired,
        }
    }
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated(_))
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            AuthOutcome::Authenticated(claims) => Some(claims),
            _ => None,
        }
    }

    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            AuthOutcome::Authenticated(_) => "authenticated",
            AuthOutcome::Anonymous => "anonymous",
            AuthOutcome::Rejected(reason) => reason.as_str(),
        }
    }
}
