//! Academy handlers — create, list mine, switch.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use academyhub_core::error::AppError;
use academyhub_service::academy::NewAcademy;

use crate::dto::request::CreateAcademyRequest;
use crate::dto::response::{AcademyResponse, ApiResponse, SwitchResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/academies
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAcademyRequest>,
) -> Result<Json<ApiResponse<SwitchResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .academy_service
        .create(
            &auth,
            NewAcademy {
                name: req.name,
                address: req.address,
                contact_email: req.contact_email,
                contact_phone: req.contact_phone,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(SwitchResponse::from(&result))))
}

/// GET /api/academies/user
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<AcademyResponse>>>, ApiError> {
    let academies = state.academy_service.list_for_user(&auth).await?;
    let items = academies.iter().map(AcademyResponse::from).collect();
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/academies/switch/{academy_id}
pub async fn switch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(academy_id): Path<Uuid>,
) -> Result<Json<ApiResponse<SwitchResponse>>, ApiError> {
    let result = state
        .academy_switcher
        .switch(auth.user_id, academy_id)
        .await?;
    Ok(Json(ApiResponse::ok(SwitchResponse::from(&result))))
}
