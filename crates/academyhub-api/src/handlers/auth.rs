//! Auth handlers — register, login, logout, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use academyhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .account_service
        .register(&req.email, &req.password, &req.full_name)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from_register(&result))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .session_manager
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from_login(&result))))
}

/// POST /api/auth/logout
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// endpoint exists so clients have a uniform place to end a session.
pub async fn logout(_auth: AuthUser) -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}
