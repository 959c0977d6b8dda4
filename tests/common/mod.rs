#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use commonlib::commonlib_auth::{Claims, TokenCodec};
use commonlib::commonlib_config::JwtConfig;
use commonlib::commonlib_observability::EventLog;
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::Level;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn get_test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn test_codec() -> Arc<TokenCodec> {
    Arc::new(TokenCodec::new(&get_test_jwt_config()).unwrap())
}

/// Signs a token the way an external issuer sharing `TEST_SECRET` would.
pub fn mint_token(id: i64, role: &str, expires_in_secs: i64) -> String {
    mint_token_with_secret(id, role, expires_in_secs, TEST_SECRET)
}

pub fn mint_token_with_secret(id: i64, role: &str, expires_in_secs: i64, secret: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        id,
        role: role.to_string(),
        exp: now + expires_in_secs,
        iat: Some(now),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedEvent {
    pub level: Level,
    pub event: &'static str,
    pub message: String,
}

/// `EventLog` that keeps every call for assertions.
#[derive(Default)]
pub struct RecordingLog {
    events: Mutex<Vec<LoggedEvent>>,
    timings: Mutex<Vec<&'static str>>,
}

impl RecordingLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<LoggedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events().into_iter().map(|e| e.event).collect()
    }

    pub fn timings(&self) -> Vec<&'static str> {
        self.timings.lock().unwrap().clone()
    }
}

impl EventLog for RecordingLog {
    fn log(&self, level: Level, event: &'static str, message: &str) {
        self.events.lock().unwrap().push(LoggedEvent {
            level,
            event,
            message: message.to_string(),
        });
    }

    fn timing(&self, event: &'static str, _elapsed: Duration) {
        self.timings.lock().unwrap().push(event);
    }
}
