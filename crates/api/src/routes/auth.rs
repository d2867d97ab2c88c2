//! Authentication routes for login and token refresh.

use axum::{Json, Router, extract::State, routing::post};
use tracing::{info, warn};

use crate::{AppState, error::ApiError};
use cashpool_core::auth::verify_password;
use cashpool_db::MemberRepository;
use cashpool_shared::{
    AppError, TokenPair, TokenType,
    auth::{LoginRequest, RefreshRequest},
};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

/// POST /auth/login - Authenticate a member and return a token pair.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenPair>, ApiError> {
    if payload.username.is_empty() {
        return Err(AppError::Validation("Username is required".to_string()).into());
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()).into());
    }

    let members = MemberRepository::new((*state.db).clone());

    let Some(member) = members.find_by_username(&payload.username).await? else {
        info!(username = %payload.username, "Login attempt for unknown username");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()).into());
    };

    // A verification failure (bad hash or mismatch) reads the same as a
    // wrong password; nothing about the stored credential leaks.
    let password_ok = verify_password(&payload.password, &member.password_hash).unwrap_or_else(|e| {
        warn!(member_id = member.id, error = %e, "Password verification failed");
        false
    });

    if !password_ok {
        info!(member_id = member.id, "Failed login attempt");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()).into());
    }

    let pair = issue_token_pair(&state, member.id, member.community_id)?;

    info!(member_id = member.id, "Member logged in");

    Ok(Json(pair))
}

/// POST /auth/refresh - Exchange a refresh token for a fresh token pair.
async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<TokenPair>, ApiError> {
    if payload.refresh_token.is_empty() {
        return Err(AppError::Validation("Refresh token is required".to_string()).into());
    }

    let claims = state
        .jwt_service
        .validate_token(&payload.refresh_token)
        .map_err(|_| AppError::Unauthorized("Invalid or expired refresh token".to_string()))?;

    // An access token cannot be used to mint new tokens.
    if claims.token_type != TokenType::Refresh {
        return Err(AppError::Unauthorized("Invalid token type".to_string()).into());
    }

    let pair = issue_token_pair(&state, claims.sub, claims.cid)?;

    info!(member_id = claims.sub, "Token pair refreshed");

    Ok(Json(pair))
}

fn issue_token_pair(
    state: &AppState,
    member_id: i64,
    community_id: i64,
) -> Result<TokenPair, ApiError> {
    let access_token = state
        .jwt_service
        .generate_access_token(member_id.into(), community_id.into())
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let refresh_token = state
        .jwt_service
        .generate_refresh_token(member_id.into(), community_id.into())
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(TokenPair::new(
        access_token,
        refresh_token,
        state.jwt_service.access_token_expires_in(),
    ))
}
