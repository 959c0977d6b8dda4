//! Bearer token verification.
//!
//! [`TokenCodec`] holds the decoding key and validation rules built once from
//! [`JwtConfig`] at startup. It is immutable afterwards, so a single instance can
//! be shared across request handlers behind an `Arc` without locking.
//!
//! Verification order matters for diagnostics: the signature (and algorithm) is
//! checked first, so a tampered token is always reported as malformed even when
//! its `exp` is also in the past. Only a correctly signed token can be reported
//! as expired.

use jsonwebtoken::{DecodingKey, Validation, decode};

use commonlib_config::{ConfigError, JwtConfig, jwt::ensure_hmac};

use crate::claims::Claims;
use crate::error::TokenError;
use crate::outcome::{AuthOutcome, RejectReason};

#[derive(Clone)]
pub struct TokenCodec {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenCodec")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Builds a codec from verified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the secret is empty or the algorithm is not an
    /// HMAC algorithm. Callers should treat this as fatal.
    pub fn new(config: &JwtConfig) -> Result<Self, ConfigError> {
        if config.secret.trim().is_empty() {
            return Err(ConfigError::Empty(commonlib_config::jwt::JWT_SECRET));
        }
        // Configs built by hand skip the env parser's algorithm check.
        let algorithm = ensure_hmac(config.algorithm)?;

        let mut validation = Validation::new(algorithm);
        validation.leeway = config.leeway_seconds;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        })
    }

    /// Verifies the token and returns its claim set.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }

    /// Returns the subject identifier claim.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Malformed`] if the token cannot be parsed or its signature is invalid
    /// - [`TokenError::Expired`] if the token's expiry has passed
    pub fn extract_subject_id(&self, token: &str) -> Result<i64, TokenError> {
        self.decode(token).map(|claims| claims.id)
    }

    /// Returns the role claim. Same failure modes as [`Self::extract_subject_id`].
    pub fn extract_role(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token).map(|claims| claims.role)
    }

    /// True only for a present, correctly signed, unexpired token.
    ///
    /// `None` means no token was presented and yields `false`.
    pub fn validate(&self, token: Option<&str>) -> bool {
        token.is_some_and(|token| self.decode(token).is_ok())
    }

    /// Single-pass verdict for a (possibly absent) token.
    pub fn authenticate(&self, token: Option<&str>) -> AuthOutcome {
        let Some(token) = token else {
            return AuthOutcome::Anonymous;
        };

        match self.decode(token) {
            Ok(claims) => AuthOutcome::Authenticated(claims),
            Err(err) => AuthOutcome::Rejected(RejectReason::from(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    const SECRET: &str = "test-secret-key-at-least-32-characters-long";

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new(SECRET)
    }

    fn mint(claims: &Claims, secret: &str, algorithm: Algorithm) -> String {
        encode(
            &Header::new(algorithm),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_expiring_in(id: i64, role: &str, seconds: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            id,
            role: role.to_string(),
            exp: now + seconds,
            iat: Some(now),
        }
    }

    #[test]
    fn test_round_trip() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let claims = claims_expiring_in(42, "admin", 3600);
        let token = mint(&claims, SECRET, Algorithm::HS256);

        assert!(codec.validate(Some(&token)));
        assert_eq!(codec.extract_subject_id(&token).unwrap(), 42);
        assert_eq!(codec.extract_role(&token).unwrap(), "admin");
        assert_eq!(codec.decode(&token).unwrap(), claims);
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let token = mint(
            &claims_expiring_in(1, "user", 3600),
            "different-secret-key-at-least-32-characters",
            Algorithm::HS256,
        );

        assert!(!codec.validate(Some(&token)));
        assert!(matches!(
            codec.extract_subject_id(&token),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            codec.extract_role(&token),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let token = mint(
            &claims_expiring_in(1, "user", -3600),
            SECRET,
            Algorithm::HS256,
        );

        assert!(!codec.validate(Some(&token)));
        assert!(codec.extract_subject_id(&token).unwrap_err().is_expired());
        assert!(codec.extract_role(&token).unwrap_err().is_expired());
    }

    #[test]
    fn test_expired_with_bad_signature_is_malformed() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let token = mint(
            &claims_expiring_in(1, "user", -3600),
            "another-secret-entirely-unrelated-to-ours",
            Algorithm::HS256,
        );

        assert!(matches!(codec.decode(&token), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_leeway_accepts_recently_expired() {
        let codec = TokenCodec::new(&get_test_jwt_config().with_leeway(120)).unwrap();
        let token = mint(&claims_expiring_in(9, "user", -30), SECRET, Algorithm::HS256);

        assert!(codec.validate(Some(&token)));
    }

    #[test]
    fn test_validate_none_is_false() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        assert!(!codec.validate(None));
        assert_eq!(codec.authenticate(None), AuthOutcome::Anonymous);
    }

    #[test]
    fn test_pinned_algorithm() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let token = mint(&claims_expiring_in(3, "user", 3600), SECRET, Algorithm::HS512);

        assert!(!codec.validate(Some(&token)));
        assert_eq!(
            codec.authenticate(Some(&token)),
            AuthOutcome::Rejected(RejectReason::Malformed)
        );
    }

    #[test]
    fn test_hs384_configured() {
        let config = get_test_jwt_config().with_algorithm(Algorithm::HS384);
        let codec = TokenCodec::new(&config).unwrap();
        let token = mint(&claims_expiring_in(5, "user", 3600), SECRET, Algorithm::HS384);

        assert_eq!(codec.extract_subject_id(&token).unwrap(), 5);
    }

    #[test]
    fn test_malformed_strings() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let malformed_tokens = vec![
            "",
            "invalid-token",
            "not.enough.parts",
            "too.many.parts.here.extra",
            "!!!.invalid.chars",
            "header.payload.",
            ".payload.signature",
        ];

        for token in malformed_tokens {
            assert!(!codec.validate(Some(token)), "accepted {token:?}");
            assert_eq!(
                codec.authenticate(Some(token)),
                AuthOutcome::Rejected(RejectReason::Malformed)
            );
        }
    }

    #[test]
    fn test_missing_claims_is_malformed() {
        #[derive(serde::Serialize)]
        struct NoRole {
            id: i64,
            exp: i64,
        }

        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let token = encode(
            &Header::default(),
            &NoRole {
                id: 1,
                exp: Utc::now().timestamp() + 3600,
            },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(codec.decode(&token), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_authenticate_outcomes() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let valid = mint(&claims_expiring_in(11, "user", 3600), SECRET, Algorithm::HS256);
        let expired = mint(&claims_expiring_in(11, "user", -3600), SECRET, Algorithm::HS256);

        let outcome = codec.authenticate(Some(&valid));
        assert!(outcome.is_authenticated());
        assert_eq!(outcome.claims().map(|c| c.id), Some(11));
        assert_eq!(outcome.label(), "authenticated");

        let outcome = codec.authenticate(Some(&expired));
        assert_eq!(outcome, AuthOutcome::Rejected(RejectReason::Expired));
        assert_eq!(outcome.label(), "expired");
    }

    #[test]
    fn test_empty_secret_is_config_error() {
        let result = TokenCodec::new(&JwtConfig::new(""));
        assert!(matches!(result, Err(ConfigError::Empty(_))));
    }

    #[test]
    fn test_asymmetric_algorithm_is_config_error() {
        let config = get_test_jwt_config().with_algorithm(Algorithm::RS256);
        assert!(matches!(
            TokenCodec::new(&config),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let codec = TokenCodec::new(&get_test_jwt_config()).unwrap();
        let debug = format!("{:?}", codec);
        assert!(!debug.contains(SECRET));
    }
}
