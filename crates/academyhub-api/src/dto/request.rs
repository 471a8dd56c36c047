//! Request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for POST /api/auth/register.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; policy is enforced server-side.
    #[validate(length(min = 1))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
}

/// Body for POST /api/auth/login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Body for POST /api/academies.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAcademyRequest {
    /// Academy display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Contact email.
    #[validate(email)]
    pub contact_email: Option<String>,
    /// Contact phone.
    pub contact_phone: Option<String>,
}
