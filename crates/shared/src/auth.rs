//! Authentication types for JWT claims and token pairs.

use serde::{Deserialize, Serialize};

use crate::types::{CommunityId, MemberId};

/// The kind of token a set of claims was minted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived credential authorizing protected API calls.
    Access,
    /// Long-lived credential usable only to mint a new token pair.
    Refresh,
}

/// JWT claims carried by both access and refresh tokens.
///
/// A fixed tagged structure rather than an open map, so downstream code
/// cannot read an absent field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (member ID).
    pub sub: i64,
    /// Community ID (tenant context).
    pub cid: i64,
    /// Token type.
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a member.
    #[must_use]
    pub fn new(
        member_id: MemberId,
        community_id: CommunityId,
        token_type: TokenType,
        issued_at: i64,
        expires_at: i64,
    ) -> Self {
        Self {
            sub: member_id.into_inner(),
            cid: community_id.into_inner(),
            token_type,
            iat: issued_at,
            exp: expires_at,
        }
    }

    /// Returns the member ID from claims.
    #[must_use]
    pub const fn member_id(&self) -> MemberId {
        MemberId::new(self.sub)
    }

    /// Returns the community ID from claims.
    #[must_use]
    pub const fn community_id(&self) -> CommunityId {
        CommunityId::new(self.cid)
    }
}

/// Token pair returned after successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Access token (short-lived).
    pub access_token: String,
    /// Refresh token (long-lived).
    pub refresh_token: String,
    /// Access token expiration in seconds.
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair.
    #[must_use]
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Member username.
    pub username: String,
    /// Member password.
    pub password: String,
}

/// Refresh token request.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token.
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_round_trip_ids() {
        let claims = Claims::new(
            MemberId::new(7),
            CommunityId::new(3),
            TokenType::Access,
            1_700_000_000,
            1_700_003_600,
        );

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.cid, 3);
        assert_eq!(claims.member_id(), MemberId::new(7));
        assert_eq!(claims.community_id(), CommunityId::new(3));
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_token_type_serializes_lowercase() {
        let claims = Claims::new(
            MemberId::new(1),
            CommunityId::new(1),
            TokenType::Refresh,
            0,
            100,
        );

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["type"], "refresh");
        assert_eq!(json["sub"], 1);
    }
}
