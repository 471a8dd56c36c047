//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, and injects the session context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use academyhub_core::error::AppError;
use academyhub_service::context::SessionContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// A missing or bad token rejects here with 401; permission checks happen
/// later in the services and reject with 403.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionContext);

impl AuthUser {
    /// Returns the inner `SessionContext`.
    pub fn context(&self) -> &SessionContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = SessionContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.verify(token)?;

        Ok(AuthUser(SessionContext::from_claims(&claims)))
    }
}
