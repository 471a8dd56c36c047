//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academyhub_auth::rbac::Permission;
use academyhub_auth::session::{LoginResult, SwitchResult};
use academyhub_entity::academy::Academy;
use academyhub_entity::user::User;
use academyhub_service::account::RegisterResult;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Global role.
    pub role: String,
    /// The academy the user is operating in, if any.
    pub active_academy_id: Option<Uuid>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role.to_string(),
            active_academy_id: user.active_academy_id,
            created_at: user.created_at,
        }
    }
}

/// Academy summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademyResponse {
    /// Academy ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Contact phone.
    pub contact_phone: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&Academy> for AcademyResponse {
    fn from(academy: &Academy) -> Self {
        Self {
            id: academy.id,
            name: academy.name.clone(),
            address: academy.address.clone(),
            contact_email: academy.contact_email.clone(),
            contact_phone: academy.contact_phone.clone(),
            status: academy.status.to_string(),
            created_at: academy.created_at,
        }
    }
}

/// Authentication response shared by register, login, and switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
    /// Academies the user belongs to, oldest membership first.
    pub academy_ids: Vec<Uuid>,
    /// The academy the session is scoped to, if any.
    pub active_academy_id: Option<Uuid>,
    /// Effective permission names, sorted.
    pub permissions: Vec<String>,
}

impl AuthResponse {
    /// Builds a response from a login result.
    pub fn from_login(result: &LoginResult) -> Self {
        Self {
            token: result.token.token.clone(),
            expires_at: result.token.expires_at,
            user: UserResponse::from(&result.user),
            academy_ids: result.academy_ids.clone(),
            active_academy_id: result.active_academy_id,
            permissions: sorted_permissions(result.permissions.iter()),
        }
    }

    /// Builds a response from a registration result.
    pub fn from_register(result: &RegisterResult) -> Self {
        Self {
            token: result.token.token.clone(),
            expires_at: result.token.expires_at,
            user: UserResponse::from(&result.user),
            academy_ids: Vec::new(),
            active_academy_id: None,
            permissions: sorted_permissions(result.permissions.iter()),
        }
    }
}

/// Academy switch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchResponse {
    /// Fresh bearer token scoped to the new academy.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The academy that is now active.
    pub academy: AcademyResponse,
    /// Academies the user belongs to, oldest membership first.
    pub academy_ids: Vec<Uuid>,
    /// Effective permission names, sorted.
    pub permissions: Vec<String>,
}

impl From<&SwitchResult> for SwitchResponse {
    fn from(result: &SwitchResult) -> Self {
        Self {
            token: result.token.token.clone(),
            expires_at: result.token.expires_at,
            academy: AcademyResponse::from(&result.academy),
            academy_ids: result.academy_ids.clone(),
            permissions: sorted_permissions(result.permissions.iter()),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

fn sorted_permissions<'a>(permissions: impl Iterator<Item = &'a Permission>) -> Vec<String> {
    let mut names: Vec<String> = permissions.map(|p| p.to_string()).collect();
    names.sort();
    names
}
