//! JWT claims structure embedded in every issued token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academyhub_entity::user::Role;

/// JWT claims payload.
///
/// The token is the single source of truth for the caller's identity and
/// academy context between requests; no server-side session record exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// User email at the time of issuance.
    pub email: String,
    /// Global role at the time of issuance.
    pub role: Role,
    /// All academies the user belonged to when the token was issued,
    /// oldest membership first.
    pub academy_ids: Vec<Uuid>,
    /// The academy the user is currently operating in, if any.
    pub active_academy_id: Option<Uuid>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token ID.
    pub jti: Uuid,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Checks whether the token context includes membership in the given academy.
    pub fn is_member_of(&self, academy_id: Uuid) -> bool {
        self.academy_ids.contains(&academy_id)
    }
}
