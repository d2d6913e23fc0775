//! HS256 token codec: signing, verification and unverified payload reads.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::entities::token::{Claims, RawClaims};
use crate::errors::TokenError;
use crate::services::clock::Clock;

/// Signs and verifies tokens with one shared secret, issuer and audience.
///
/// Expiry is compared against the injected [`Clock`] rather than inside
/// `jsonwebtoken`, with zero leeway: a token is valid strictly before `exp`.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    issuer: String,
    audience: String,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Creates a codec
    ///
    /// # Errors
    /// `TokenError::Configuration` when the secret is empty or blank
    pub fn new(
        secret: &str,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::Configuration {
                message: "JWT signing secret is not configured".to_string(),
            });
        }
        let issuer = issuer.into();
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_audience(&[audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
            validation,
            issuer,
            audience,
            clock,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Issues a token for `subject` expiring `expiration` from now.
    ///
    /// `orig_iat` defaults to now, which starts a new login session.
    pub fn issue(
        &self,
        subject: &str,
        email: &str,
        expiration: Duration,
        orig_iat: Option<DateTime<Utc>>,
    ) -> Result<String, TokenError> {
        let now = self.clock.now();
        let claims = Claims::new(
            subject,
            email,
            &self.issuer,
            &self.audience,
            orig_iat.unwrap_or(now),
            now + expiration,
        );
        self.sign(&claims)
    }

    /// Signs an arbitrary claim set with the configured key
    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&self.header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            TokenError::GenerationFailed
        })
    }

    /// Re-signs claims read from another token, preserving every claim
    pub fn sign_raw(&self, claims: &RawClaims) -> Result<String, TokenError> {
        self.sign(claims.as_map())
    }

    /// Fully verifies a token: signature, issuer, audience and expiry
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.verify_ignoring_expiry(token)?;
        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Verifies signature, issuer and audience but accepts expired tokens
    pub fn verify_ignoring_expiry(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }

    /// Checks that the token was produced by this codec's key, issuer and
    /// audience without requiring the typed claim layout
    pub fn verify_provenance(&self, token: &str) -> Result<(), TokenError> {
        decode::<Map<String, Value>>(token, &self.decoding_key, &self.validation)
            .map(|_| ())
            .map_err(map_jwt_error)
    }

    /// Reads the payload without checking the signature or expiry
    pub fn read_unverified(&self, token: &str) -> Result<RawClaims, TokenError> {
        decode_unverified(token)
    }
}

/// Decodes the payload of a compact token without any verification
pub fn decode_unverified(token: &str) -> Result<RawClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;

    decode::<Map<String, Value>>(token.trim(), &DecodingKey::from_secret(&[]), &validation)
        .map(|data| RawClaims::new(data.claims))
        .map_err(|e| TokenError::Malformed {
            reason: e.to_string(),
        })
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> TokenError {
    match error.kind() {
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Utf8(_) => TokenError::Malformed {
            reason: error.to_string(),
        },
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
        ErrorKind::InvalidAudience => TokenError::InvalidAudience,
        ErrorKind::MissingRequiredClaim(claim) => TokenError::InvalidClaims {
            reason: format!("missing required claim {}", claim),
        },
        _ => TokenError::InvalidClaims {
            reason: error.to_string(),
        },
    }
}
