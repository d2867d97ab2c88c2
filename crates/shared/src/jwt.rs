//! JWT token generation and validation.
//!
//! Tokens are self-contained: verification needs only the shared signing
//! secret, no server-side session state.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::auth::{Claims, TokenType};
use crate::types::{CommunityId, MemberId};

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    pub access_token_expires_secs: i64,
    /// Refresh token expiration in days.
    pub refresh_token_expires_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            access_token_expires_secs: 3600,
            refresh_token_expires_days: 7,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generates an access token binding a member and their community.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_access_token(
        &self,
        member_id: MemberId,
        community_id: CommunityId,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.access_token_expires_secs);
        let claims = Claims::new(
            member_id,
            community_id,
            TokenType::Access,
            now.timestamp(),
            expires_at.timestamp(),
        );

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Generates a refresh token binding a member and their community.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_refresh_token(
        &self,
        member_id: MemberId,
        community_id: CommunityId,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expires_at = now + Duration::days(self.config.refresh_token_expires_days);
        let claims = Claims::new(
            member_id,
            community_id,
            TokenType::Refresh,
            now.timestamp(),
            expires_at.timestamp(),
        );

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates signature and expiry, then decodes the claims.
    ///
    /// The token type is deliberately NOT checked here; callers decide which
    /// kind they accept.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::DecodingError` if the token is malformed or the
    /// signature does not verify.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }

    /// Returns the access token expiration in seconds.
    #[must_use]
    pub const fn access_token_expires_in(&self) -> i64 {
        self.config.access_token_expires_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            access_token_expires_secs: 3600,
            refresh_token_expires_days: 7,
        })
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = create_test_service();

        let token = service
            .generate_access_token(MemberId::new(42), CommunityId::new(9))
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.member_id(), MemberId::new(42));
        assert_eq!(claims.community_id(), CommunityId::new(9));
        assert_eq!(claims.token_type, TokenType::Access);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let service = create_test_service();

        let token = service
            .generate_refresh_token(MemberId::new(42), CommunityId::new(9))
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.member_id(), MemberId::new(42));
        assert_eq!(claims.community_id(), CommunityId::new(9));
        assert_eq!(claims.token_type, TokenType::Refresh);
        assert_eq!(claims.exp - claims.iat, 7 * 86400);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingError(_))));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = create_test_service();
        let token = service
            .generate_access_token(MemberId::new(1), CommunityId::new(1))
            .unwrap();

        // Flip the last character of the signature segment.
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(service.validate_token(&tampered).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new(JwtConfig {
            secret: "a-completely-different-secret".to_string(),
            ..JwtConfig::default()
        });

        let token = service
            .generate_access_token(MemberId::new(1), CommunityId::new(1))
            .unwrap();

        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::DecodingError(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            access_token_expires_secs: -120,
            refresh_token_expires_days: 7,
        });

        let token = service
            .generate_access_token(MemberId::new(1), CommunityId::new(1))
            .unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::Expired)
        ));
    }
}
