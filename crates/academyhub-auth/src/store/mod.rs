//! Persistence traits for users, academies, and memberships.
//!
//! Auth and session logic talks to these traits rather than to the database
//! crate directly; `postgres` backs production, `memory` backs tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use academyhub_core::error::AppError;
use academyhub_entity::academy::{Academy, CreateAcademy};
use academyhub_entity::membership::{CreateMembership, Membership};
use academyhub_entity::user::{CreateUser, User};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Storage operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Finds a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Creates a user; duplicate email is a Conflict error.
    async fn create(&self, data: &CreateUser) -> Result<User, AppError>;

    /// Persists the user's active academy pointer.
    async fn set_active_academy(
        &self,
        user_id: Uuid,
        academy_id: Option<Uuid>,
    ) -> Result<(), AppError>;
}

/// Storage operations for academies.
#[async_trait]
pub trait AcademyStore: Send + Sync {
    /// Finds an academy by primary key.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Academy>, AppError>;

    /// Creates an academy.
    async fn create(&self, data: &CreateAcademy) -> Result<Academy, AppError>;

    /// Lists a user's academies, oldest membership first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Academy>, AppError>;
}

/// Storage operations for academy memberships.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Grants a membership; a duplicate (user, academy) pair is a Conflict.
    async fn create(&self, data: &CreateMembership) -> Result<Membership, AppError>;

    /// Lists a user's memberships, oldest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Membership>, AppError>;

    /// Finds a user's membership in a specific academy.
    async fn find(&self, user_id: Uuid, academy_id: Uuid)
    -> Result<Option<Membership>, AppError>;
}
