//! Membership repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use academyhub_core::error::{AppError, ErrorKind};
use academyhub_core::result::AppResult;
use academyhub_entity::membership::{CreateMembership, Membership};

/// Repository for the user ↔ academy membership join table.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Grant a membership. The (user_id, academy_id) pair is unique; a
    /// duplicate grant maps to Conflict.
    pub async fn create(&self, data: &CreateMembership) -> AppResult<Membership> {
        sqlx::query_as::<_, Membership>(
            "INSERT INTO academy_members (user_id, academy_id, role) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.academy_id)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("academy_members_user_id_academy_id_key") =>
            {
                AppError::conflict("User is already a member of this academy".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create membership", e),
        })
    }

    /// List a user's memberships, oldest first. "Pick the first academy"
    /// logic depends on this ordering being stable.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM academy_members WHERE user_id = $1 \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list memberships", e)
        })
    }

    /// Find the membership of a user in a specific academy, if any.
    pub async fn find(&self, user_id: Uuid, academy_id: Uuid) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM academy_members WHERE user_id = $1 AND academy_id = $2",
        )
        .bind(user_id)
        .bind(academy_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find membership", e))
    }
}
