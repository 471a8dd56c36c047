//! Academy entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Operational status of an academy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "academy_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AcademyStatus {
    /// Academy is operating normally.
    Active,
    /// Academy has been suspended by a platform administrator.
    Suspended,
}

impl AcademyStatus {
    /// Returns the canonical snake_case name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademyStatus::Active => "active",
            AcademyStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for AcademyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An academy — the tenant unit of AcademyHub. Each academy's data and
/// membership set is logically isolated from every other academy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Academy {
    /// Unique academy identifier.
    pub id: Uuid,
    /// Institution name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
    /// Operational status.
    pub status: AcademyStatus,
    /// The user who created this academy.
    pub created_by: Uuid,
    /// When the academy was created.
    pub created_at: DateTime<Utc>,
    /// When the academy was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new academy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAcademy {
    /// Institution name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
    /// Creating user's ID.
    pub created_by: Uuid,
}
