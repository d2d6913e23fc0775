//! Unit tests for token service

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::user::{User, UserEmail, UserName};
use crate::domain::value_objects::RefreshRejection;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{BlacklistStore, InMemoryBlacklistStore};
use crate::services::clock::{Clock, ManualClock};
use crate::services::token::{decode_unverified, TokenService, TokenServiceConfig};

const SECRET: &str = "test-secret-key-for-unit-tests";
const T0: i64 = 1_700_000_000;

struct Fixture {
    service: TokenService<InMemoryBlacklistStore>,
    blacklist: Arc<InMemoryBlacklistStore>,
    clock: Arc<ManualClock>,
}

fn setup() -> Fixture {
    let clock = Arc::new(ManualClock::at_timestamp(T0));
    let blacklist = Arc::new(InMemoryBlacklistStore::with_clock(clock.clone()));
    let service = TokenService::with_clock(
        blacklist.clone(),
        TokenServiceConfig::new(SECRET),
        clock.clone(),
    )
    .unwrap();
    Fixture {
        service,
        blacklist,
        clock,
    }
}

fn test_user() -> User {
    User::new(
        UserName::parse("Ana Lopez").unwrap(),
        UserEmail::parse("ana@example.com").unwrap(),
        "hash".to_string(),
    )
}

fn at(offset: Duration) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(T0, 0).unwrap() + offset
}

#[test]
fn test_new_without_secret_fails() {
    let clock = Arc::new(ManualClock::at_timestamp(T0));
    let result = TokenService::with_clock(
        Arc::new(InMemoryBlacklistStore::new()),
        TokenServiceConfig::default(),
        clock,
    );
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Configuration { .. }))
    ));
}

#[tokio::test]
async fn test_issue_and_validate() {
    let fx = setup();
    let user = test_user();

    let token = fx.service.issue(&user).unwrap();

    assert!(fx.service.validate(&token).await);
    let result = fx.service.validate_with_subject(&token).await;
    assert!(result.is_valid());
    assert_eq!(result.subject(), Some(user.id.to_string().as_str()));

    let claims = decode_unverified(&token).unwrap();
    assert_eq!(claims.orig_iat(), Ok(at(Duration::zero())));
    assert_eq!(claims.expires_at(), Some(at(Duration::minutes(60))));
    assert_eq!(claims.get("email"), Some(&json!("ana@example.com")));
}

#[tokio::test]
async fn test_validate_rejects_expired_token() {
    let fx = setup();
    let token = fx.service.issue(&test_user()).unwrap();

    fx.clock.advance(Duration::minutes(59));
    assert!(fx.service.validate(&token).await);

    fx.clock.advance(Duration::minutes(1));
    assert!(!fx.service.validate(&token).await);
    assert!(matches!(
        fx.service.verify(&token).await,
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[tokio::test]
async fn test_validate_rejects_garbage_and_foreign_tokens() {
    let fx = setup();
    assert!(!fx.service.validate("").await);
    assert!(!fx.service.validate("definitely.not.a-token").await);

    let foreign = TokenService::with_clock(
        Arc::new(InMemoryBlacklistStore::new()),
        TokenServiceConfig::new("some-other-secret"),
        fx.clock.clone(),
    )
    .unwrap();
    let token = foreign.issue(&test_user()).unwrap();
    assert!(!fx.service.validate(&token).await);
    assert_eq!(fx.service.validate_with_subject(&token).await.subject(), None);
}

#[tokio::test]
async fn test_refresh_within_window() {
    let fx = setup();
    let old = fx.service.issue(&test_user()).unwrap();
    let old_claims = decode_unverified(&old).unwrap();

    fx.clock.advance(Duration::minutes(10));
    let refreshed = fx.service.refresh(&old).await.unwrap();

    let new_claims = decode_unverified(&refreshed.token).unwrap();
    assert_eq!(new_claims.orig_iat(), Ok(at(Duration::zero())));
    assert_eq!(new_claims.expires_at(), Some(at(Duration::minutes(61))));
    assert_eq!(refreshed.expires_at, at(Duration::minutes(61)));
    assert_ne!(new_claims.jti(), old_claims.jti());
    assert_eq!(new_claims.jti(), Some(refreshed.jti.as_str()));
    assert_eq!(new_claims.subject(), old_claims.subject());
    assert_eq!(new_claims.get("email"), old_claims.get("email"));

    assert!(fx.blacklist.contains(&old).await.unwrap());
    assert_eq!(fx.blacklist.expiry_of(&old), Some(at(Duration::minutes(60))));
    assert!(!fx.service.validate(&old).await);
    assert!(fx.service.validate(&refreshed.token).await);
}

#[tokio::test]
async fn test_refresh_accepts_expired_token_inside_window() {
    let fx = setup();
    let old = fx.service.issue(&test_user()).unwrap();

    fx.clock.advance(Duration::hours(2));
    assert!(!fx.service.validate(&old).await);

    let refreshed = fx.service.refresh(&old).await.unwrap();
    assert_eq!(refreshed.expires_at, at(Duration::minutes(61)));
}

#[tokio::test]
async fn test_refresh_window_boundary() {
    let fx = setup();
    let old = fx.service.issue(&test_user()).unwrap();

    fx.clock.advance(Duration::hours(8));
    assert!(fx.service.refresh(&old).await.is_ok());
}

#[tokio::test]
async fn test_refresh_window_exceeded() {
    let fx = setup();
    let old = fx.service.issue(&test_user()).unwrap();

    fx.clock.advance(Duration::hours(8) + Duration::minutes(1));
    let rejection = fx.service.refresh(&old).await.unwrap_err();

    assert_eq!(rejection, RefreshRejection::WindowExceeded);
    assert_eq!(
        rejection.message(),
        "The token can no longer be refreshed, the allowed period has been exceeded"
    );
    assert!(!fx.blacklist.contains(&old).await.unwrap());
}

#[tokio::test]
async fn test_refresh_of_revoked_token_fails() {
    let fx = setup();
    let token = fx.service.issue(&test_user()).unwrap();

    assert!(fx.service.revoke(&token).await);
    assert_eq!(
        fx.service.refresh(&token).await,
        Err(RefreshRejection::Revoked)
    );
}

#[tokio::test]
async fn test_refresh_same_token_twice_fails() {
    let fx = setup();
    let token = fx.service.issue(&test_user()).unwrap();

    assert!(fx.service.refresh(&token).await.is_ok());
    assert_eq!(
        fx.service.refresh(&token).await,
        Err(RefreshRejection::Revoked)
    );
}

/// Blacklist that yields to the scheduler before every operation, letting
/// concurrent callers interleave between lookup and insert.
struct YieldingBlacklistStore(InMemoryBlacklistStore);

#[async_trait]
impl BlacklistStore for YieldingBlacklistStore {
    async fn add(&self, token: &str, expires_at: DateTime<Utc>) -> Result<bool, DomainError> {
        tokio::task::yield_now().await;
        self.0.add(token, expires_at).await
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        tokio::task::yield_now().await;
        self.0.contains(token).await
    }

    async fn sweep(&self) -> Result<usize, DomainError> {
        self.0.sweep().await
    }

    async fn len(&self) -> Result<usize, DomainError> {
        self.0.len().await
    }
}

#[tokio::test]
async fn test_concurrent_refresh_of_same_token_succeeds_once() {
    let clock = Arc::new(ManualClock::at_timestamp(T0));
    let blacklist = Arc::new(YieldingBlacklistStore(
        InMemoryBlacklistStore::with_clock(clock.clone()),
    ));
    let service = TokenService::with_clock(
        blacklist.clone(),
        TokenServiceConfig::new(SECRET),
        clock.clone(),
    )
    .unwrap();
    let token = service.issue(&test_user()).unwrap();

    let (first, second) = tokio::join!(service.refresh(&token), service.refresh(&token));

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|r| *r == Err(RefreshRejection::Revoked)));
    assert_eq!(blacklist.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_orig_iat_preserved_across_refresh_chain() {
    let fx = setup();
    let mut token = fx.service.issue(&test_user()).unwrap();

    for step in 1..=6 {
        fx.clock.advance(Duration::minutes(30));
        let refreshed = fx.service.refresh(&token).await.unwrap();
        let claims = decode_unverified(&refreshed.token).unwrap();

        assert_eq!(claims.orig_iat(), Ok(at(Duration::zero())));
        assert_eq!(
            claims.expires_at(),
            Some(at(Duration::minutes(60 + step)))
        );
        token = refreshed.token;
    }

    assert_eq!(fx.blacklist.len().await.unwrap(), 6);
}

#[tokio::test]
async fn test_refresh_missing_orig_iat() {
    let fx = setup();
    let config = fx.service.config();
    let token = fx
        .service
        .codec()
        .sign(&json!({
            "sub": "user-1",
            "iss": config.issuer,
            "aud": config.audience,
            "exp": T0 + 3600,
        }))
        .unwrap();

    assert_eq!(
        fx.service.refresh(&token).await,
        Err(RefreshRejection::MissingOrigIat)
    );
}

#[tokio::test]
async fn test_refresh_invalid_time_format() {
    let fx = setup();
    let config = fx.service.config();
    let token = fx
        .service
        .codec()
        .sign(&json!({
            "sub": "user-1",
            "orig_iat": "last tuesday",
            "iss": config.issuer,
            "aud": config.audience,
            "exp": T0 + 3600,
        }))
        .unwrap();

    assert_eq!(
        fx.service.refresh(&token).await,
        Err(RefreshRejection::InvalidTimeFormat)
    );
}

#[tokio::test]
async fn test_refresh_missing_expiration() {
    let fx = setup();
    let config = fx.service.config();
    let token = fx
        .service
        .codec()
        .sign(&json!({
            "sub": "user-1",
            "orig_iat": T0.to_string(),
            "iss": config.issuer,
            "aud": config.audience,
        }))
        .unwrap();

    assert_eq!(
        fx.service.refresh(&token).await,
        Err(RefreshRejection::MissingExpiration)
    );
}

#[tokio::test]
async fn test_refresh_rejects_foreign_signature() {
    let fx = setup();
    let foreign = TokenService::with_clock(
        Arc::new(InMemoryBlacklistStore::new()),
        TokenServiceConfig::new("some-other-secret"),
        fx.clock.clone(),
    )
    .unwrap();
    let token = foreign.issue(&test_user()).unwrap();

    assert_eq!(
        fx.service.refresh(&token).await,
        Err(RefreshRejection::InvalidSignature)
    );
    assert!(fx.blacklist.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_refresh_malformed_token() {
    let fx = setup();
    assert!(matches!(
        fx.service.refresh("garbage").await,
        Err(RefreshRejection::Malformed { .. })
    ));
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let fx = setup();
    let token = fx.service.issue(&test_user()).unwrap();

    assert!(fx.service.revoke(&token).await);
    assert!(fx.service.revoke(&token).await);

    assert_eq!(fx.blacklist.len().await.unwrap(), 1);
    assert_eq!(fx.blacklist.expiry_of(&token), Some(at(Duration::minutes(60))));
    assert!(!fx.service.validate(&token).await);
    assert!(matches!(
        fx.service.verify(&token).await,
        Err(DomainError::Token(TokenError::Revoked))
    ));
}

#[tokio::test]
async fn test_revoke_rejects_unusable_tokens() {
    let fx = setup();
    assert!(!fx.service.revoke("not-a-token").await);

    let config = fx.service.config();
    let without_exp = fx
        .service
        .codec()
        .sign(&json!({"sub": "user-1", "iss": config.issuer, "aud": config.audience}))
        .unwrap();
    assert!(!fx.service.revoke(&without_exp).await);
    assert!(fx.blacklist.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_concurrent_revoke_of_same_token() {
    let fx = setup();
    let token = fx.service.issue(&test_user()).unwrap();
    let service = Arc::new(fx.service);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let token = token.clone();
            tokio::spawn(async move { service.revoke(&token).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }
    assert_eq!(fx.blacklist.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_sweep_after_revoked_token_expires() {
    let fx = setup();
    let token = fx.service.issue(&test_user()).unwrap();
    assert!(fx.service.revoke(&token).await);

    fx.clock.advance(Duration::minutes(30));
    assert_eq!(fx.service.sweep_blacklist().await.unwrap(), 0);

    fx.clock.advance(Duration::minutes(31));
    assert_eq!(fx.service.sweep_blacklist().await.unwrap(), 1);
    assert!(fx.blacklist.is_empty().await.unwrap());
    assert_eq!(fx.clock.now(), at(Duration::minutes(61)));
}
