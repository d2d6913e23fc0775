//! Unit tests for token entities

use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Map, Value};

use crate::domain::entities::token::{token_fingerprint, Claims, OrigIatError, RawClaims};

fn raw(value: Value) -> RawClaims {
    match value {
        Value::Object(map) => RawClaims::new(map),
        _ => RawClaims::new(Map::new()),
    }
}

#[test]
fn test_claims_new_stamps_session_start_and_expiry() {
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let claims = Claims::new(
        "user-1",
        "ana@example.com",
        "issuer",
        "audience",
        start,
        start + Duration::minutes(60),
    );

    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.orig_iat, "1700000000");
    assert_eq!(claims.exp, 1_700_003_600);
    assert_eq!(claims.original_issued_at(), Ok(start));
    assert!(!claims.jti.is_empty());
}

#[test]
fn test_claims_jti_is_unique() {
    let now = Utc::now();
    let a = Claims::new("s", "e@x.io", "i", "a", now, now);
    let b = Claims::new("s", "e@x.io", "i", "a", now, now);
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_claims_expiry_boundary() {
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let claims = Claims::new("s", "e@x.io", "i", "a", start, start + Duration::seconds(10));

    assert!(!claims.is_expired_at(start + Duration::seconds(9)));
    assert!(claims.is_expired_at(start + Duration::seconds(10)));
    assert!(claims.is_expired_at(start + Duration::seconds(11)));
}

#[test]
fn test_raw_claims_orig_iat_accepts_string_and_number() {
    let expected = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    assert_eq!(raw(json!({"orig_iat": "1700000000"})).orig_iat(), Ok(expected));
    assert_eq!(raw(json!({"orig_iat": 1_700_000_000})).orig_iat(), Ok(expected));
}

#[test]
fn test_raw_claims_orig_iat_errors() {
    assert_eq!(raw(json!({"sub": "x"})).orig_iat(), Err(OrigIatError::Missing));
    assert_eq!(raw(json!({"orig_iat": null})).orig_iat(), Err(OrigIatError::Missing));
    assert_eq!(
        raw(json!({"orig_iat": "yesterday"})).orig_iat(),
        Err(OrigIatError::InvalidFormat)
    );
    assert_eq!(
        raw(json!({"orig_iat": true})).orig_iat(),
        Err(OrigIatError::InvalidFormat)
    );
}

#[test]
fn test_raw_claims_accessors() {
    let mut claims = raw(json!({"sub": "user-7", "jti": "abc", "exp": 1_700_000_060, "custom": 1}));
    assert_eq!(claims.subject(), Some("user-7"));
    assert_eq!(claims.jti(), Some("abc"));
    assert_eq!(
        claims.expires_at(),
        Some(Utc.timestamp_opt(1_700_000_060, 0).unwrap())
    );

    let new_jti = claims.rotate_jti();
    assert_eq!(claims.jti(), Some(new_jti.as_str()));
    assert_ne!(new_jti, "abc");

    claims.set_expires_at(Utc.timestamp_opt(1_700_000_120, 0).unwrap());
    assert_eq!(claims.get("exp"), Some(&json!(1_700_000_120)));
    assert_eq!(claims.get("custom"), Some(&json!(1)));
}

#[test]
fn test_raw_claims_empty_subject_is_absent() {
    assert_eq!(raw(json!({"sub": ""})).subject(), None);
    assert_eq!(raw(json!({"sub": 42})).subject(), None);
    assert_eq!(raw(json!({"exp": "soon"})).expires_at(), None);
}

#[test]
fn test_token_fingerprint() {
    assert_eq!(token_fingerprint("eyJhbGciOiJIUzI1NiJ9.payload.sig"), "eyJhbGciOiJI");
    assert_eq!(token_fingerprint("short"), "short");
    assert_eq!(token_fingerprint(""), "");
}
