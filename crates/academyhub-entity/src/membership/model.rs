//! Membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::Role;

/// A user's membership in one academy, carrying the role the user holds
/// within that academy. The (user_id, academy_id) pair is unique; the set
/// of a user's memberships defines exactly which academy ids appear in
/// their token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// Unique membership identifier.
    pub id: Uuid,
    /// The member user.
    pub user_id: Uuid,
    /// The academy the user belongs to.
    pub academy_id: Uuid,
    /// Role scoped to this academy.
    pub role: Role,
    /// When the membership was granted. Membership listings are ordered by
    /// this field (oldest first) so "first academy" logic is deterministic.
    pub created_at: DateTime<Utc>,
}

/// Data required to grant a membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMembership {
    /// The member user.
    pub user_id: Uuid,
    /// The target academy.
    pub academy_id: Uuid,
    /// Role within the academy.
    pub role: Role,
}
