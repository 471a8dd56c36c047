//! Academy repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use academyhub_core::error::{AppError, ErrorKind};
use academyhub_core::result::AppResult;
use academyhub_entity::academy::{Academy, CreateAcademy};

/// Repository for academy (tenant) records.
#[derive(Debug, Clone)]
pub struct AcademyRepository {
    pool: PgPool,
}

impl AcademyRepository {
    /// Create a new academy repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an academy by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Academy>> {
        sqlx::query_as::<_, Academy>("SELECT * FROM academies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find academy", e))
    }

    /// Create a new academy.
    pub async fn create(&self, data: &CreateAcademy) -> AppResult<Academy> {
        sqlx::query_as::<_, Academy>(
            "INSERT INTO academies (name, address, contact_email, contact_phone, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.contact_email)
        .bind(&data.contact_phone)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create academy", e))
    }

    /// List the academies a user belongs to, ordered by membership creation
    /// (oldest membership first).
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Academy>> {
        sqlx::query_as::<_, Academy>(
            "SELECT a.* FROM academies a \
             JOIN academy_members m ON m.academy_id = a.id \
             WHERE m.user_id = $1 \
             ORDER BY m.created_at ASC, m.id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user academies", e)
        })
    }
}
