//! Request context carrying the authenticated user and academy scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academyhub_auth::jwt::Claims;
use academyhub_entity::user::Role;

/// Context for the current authenticated request.
///
/// Built by the API layer from verified JWT claims and passed into service
/// methods so every operation knows who is acting and in which academy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's email (convenience field from JWT claims).
    pub email: String,
    /// The user's global role at the time the JWT was issued.
    pub role: Role,
    /// Academies the user belonged to at issuance, oldest first.
    pub academy_ids: Vec<Uuid>,
    /// The academy the user is operating in, if any.
    pub active_academy_id: Option<Uuid>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl SessionContext {
    /// Builds a context from verified JWT claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email.clone(),
            role: claims.role,
            academy_ids: claims.academy_ids.clone(),
            active_academy_id: claims.active_academy_id,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the token context includes the given academy.
    pub fn is_member_of(&self, academy_id: Uuid) -> bool {
        self.academy_ids.contains(&academy_id)
    }

    /// Returns whether the user holds an elevated global role.
    pub fn is_elevated(&self) -> bool {
        self.role.is_elevated()
    }
}
