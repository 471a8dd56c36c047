//! PostgreSQL-backed store delegating to the repository layer.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use academyhub_core::error::AppError;
use academyhub_database::repositories::academy::AcademyRepository;
use academyhub_database::repositories::membership::MembershipRepository;
use academyhub_database::repositories::user::UserRepository;
use academyhub_entity::academy::{Academy, CreateAcademy};
use academyhub_entity::membership::{CreateMembership, Membership};
use academyhub_entity::user::{CreateUser, User};

use super::{AcademyStore, MembershipStore, UserStore};

/// Production store backed by the PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    users: UserRepository,
    academies: AcademyRepository,
    memberships: MembershipRepository,
}

impl PostgresStore {
    /// Creates a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            academies: AcademyRepository::new(pool.clone()),
            memberships: MembershipRepository::new(pool),
        }
    }
}

#[async_trait]
impl UserStore for PostgresStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        self.users.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_email(email).await
    }

    async fn create(&self, data: &CreateUser) -> Result<User, AppError> {
        self.users.create(data).await
    }

    async fn set_active_academy(
        &self,
        user_id: Uuid,
        academy_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        self.users.set_active_academy(user_id, academy_id).await
    }
}

#[async_trait]
impl AcademyStore for PostgresStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Academy>, AppError> {
        self.academies.find_by_id(id).await
    }

    async fn create(&self, data: &CreateAcademy) -> Result<Academy, AppError> {
        self.academies.create(data).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Academy>, AppError> {
        self.academies.list_for_user(user_id).await
    }
}

#[async_trait]
impl MembershipStore for PostgresStore {
    async fn create(&self, data: &CreateMembership) -> Result<Membership, AppError> {
        self.memberships.create(data).await
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Membership>, AppError> {
        self.memberships.list_by_user(user_id).await
    }

    async fn find(
        &self,
        user_id: Uuid,
        academy_id: Uuid,
    ) -> Result<Option<Membership>, AppError> {
        self.memberships.find(user_id, academy_id).await
    }
}
