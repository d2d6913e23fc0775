//! Token entities for JWT-based authentication.
//!
//! A token carries the claims `sub`, `email`, `jti`, `orig_iat`, `iss`,
//! `aud` and `exp`. `orig_iat` is written as a decimal string of unix
//! seconds and records when the login session started; it is copied
//! unchanged into every refreshed token.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Lifetime of a freshly issued token (60 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 60;

/// Maximum session age, measured from `orig_iat`, after which refresh is refused
pub const REFRESH_WINDOW_HOURS: i64 = 8;

/// How far a refresh extends the previous expiry
pub const REFRESH_EXTENSION_MINUTES: i64 = 1;

/// Name of the original-issued-at claim
pub const ORIG_IAT_CLAIM: &str = "orig_iat";

/// Number of leading characters of a token that may appear in logs
const FINGERPRINT_CHARS: usize = 12;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the user the token was issued to
    pub email: String,

    /// JWT ID, fresh on every issue and refresh
    pub jti: String,

    /// Start of the login session, unix seconds as a decimal string
    pub orig_iat: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims with a fresh `jti`
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        orig_iat: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.into(),
            email: email.into(),
            jti: Uuid::new_v4().to_string(),
            orig_iat: orig_iat.timestamp().to_string(),
            iss: issuer.into(),
            aud: audience.into(),
            exp: expires_at.timestamp(),
        }
    }

    /// Whether the claims are expired at `now`; a token is valid strictly before `exp`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Parses the session start time
    pub fn original_issued_at(&self) -> Result<DateTime<Utc>, OrigIatError> {
        parse_orig_iat(&Value::String(self.orig_iat.clone()))
    }
}

/// Why the `orig_iat` claim could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrigIatError {
    Missing,
    InvalidFormat,
}

/// Claims read from a token payload without any verification.
///
/// Unknown claims are kept so that re-signing preserves them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawClaims(Map<String, Value>);

impl RawClaims {
    pub fn new(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.0.get(claim)
    }

    /// The `sub` claim, if present as a non-empty string
    pub fn subject(&self) -> Option<&str> {
        self.string_claim("sub")
    }

    pub fn jti(&self) -> Option<&str> {
        self.string_claim("jti")
    }

    /// The `orig_iat` claim, accepted as a string or a number of unix seconds
    pub fn orig_iat(&self) -> Result<DateTime<Utc>, OrigIatError> {
        match self.0.get(ORIG_IAT_CLAIM) {
            None | Some(Value::Null) => Err(OrigIatError::Missing),
            Some(value) => parse_orig_iat(value),
        }
    }

    /// The `exp` claim, if it is a usable numeric timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.0.get("exp")?;
        let seconds = exp.as_i64().or_else(|| exp.as_f64().map(|f| f.floor() as i64))?;
        Utc.timestamp_opt(seconds, 0).single()
    }

    pub fn set_expires_at(&mut self, expires_at: DateTime<Utc>) {
        self.0
            .insert("exp".to_string(), Value::from(expires_at.timestamp()));
    }

    /// Replaces `jti` with a freshly generated identifier and returns it
    pub fn rotate_jti(&mut self) -> String {
        let jti = Uuid::new_v4().to_string();
        self.0.insert("jti".to_string(), Value::String(jti.clone()));
        jti
    }

    fn string_claim(&self, claim: &str) -> Option<&str> {
        self.0
            .get(claim)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl From<Map<String, Value>> for RawClaims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}

fn parse_orig_iat(value: &Value) -> Result<DateTime<Utc>, OrigIatError> {
    let seconds = match value {
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| OrigIatError::InvalidFormat)?,
        Value::Number(number) => number.as_i64().ok_or(OrigIatError::InvalidFormat)?,
        _ => return Err(OrigIatError::InvalidFormat),
    };
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or(OrigIatError::InvalidFormat)
}

/// Short prefix of a token, safe to write to logs
pub fn token_fingerprint(token: &str) -> &str {
    match token.char_indices().nth(FINGERPRINT_CHARS) {
        Some((index, _)) => &token[..index],
        None => token,
    }
}
