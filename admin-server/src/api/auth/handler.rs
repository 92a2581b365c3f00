//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse, User};
use shared::{AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::auth::password::verify_password;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 300;

fn invalid_credentials() -> AppError {
    AppError::with_message(ErrorCode::InvalidCredentials, "Invalid account or password")
}

/// Login handler
///
/// Unknown account and wrong password produce the same error.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let account = req.account.trim().to_string();
    if account.is_empty() {
        return Err(AppError::required("account"));
    }
    if req.password.is_empty() {
        return Err(AppError::required("password"));
    }

    let credentials = user::find_credentials(&state.pool, &account).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(credentials) = credentials else {
        security_log!("WARN", "login_failed", account = account.clone(), reason = "unknown_account");
        return Err(invalid_credentials());
    };

    if !verify_password(&req.password, &credentials.password_hash) {
        security_log!("WARN", "login_failed", account = account.clone(), reason = "bad_password");
        return Err(invalid_credentials());
    }

    let user = credentials.user;
    if !user.status.is_active() {
        security_log!("WARN", "login_disabled", account = account.clone());
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let jwt = state.get_jwt_service();
    let token = jwt
        .generate_token(user.id, &user.account, &user.name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = user.id, account = %user.account, "User logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: jwt.expires_in(),
        user,
    }))
}

/// Current user, re-read so a disabled or deleted account is rejected
pub async fn verify(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<User>> {
    let user = user::find_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::invalid_token("Account no longer exists"))?;

    if !user.status.is_active() {
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }
    Ok(Json(user))
}
