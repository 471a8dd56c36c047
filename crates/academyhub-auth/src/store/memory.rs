//! In-memory store using a Tokio mutex, for tests and single-node demos.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use academyhub_core::error::AppError;
use academyhub_entity::academy::{Academy, AcademyStatus, CreateAcademy};
use academyhub_entity::membership::{CreateMembership, Membership};
use academyhub_entity::user::{CreateUser, User};

use super::{AcademyStore, MembershipStore, UserStore};

/// Internal state for the memory store.
///
/// Vectors keep insertion order, which stands in for the `created_at`
/// ordering the database guarantees.
#[derive(Debug, Default)]
struct InnerState {
    users: Vec<User>,
    academies: Vec<Academy>,
    memberships: Vec<Membership>,
}

/// In-memory store with the same conflict and ordering semantics as the
/// PostgreSQL store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Protected inner state.
    state: Arc<Mutex<InnerState>>,
}

impl MemoryStore {
    /// Creates an empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> Result<User, AppError> {
        let mut state = self.state.lock().await;
        if state
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("Email already registered".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            full_name: data.full_name.clone(),
            role: data.role,
            active_academy_id: None,
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn set_active_academy(
        &self,
        user_id: Uuid,
        academy_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
        user.active_academy_id = academy_id;
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl AcademyStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Academy>, AppError> {
        let state = self.state.lock().await;
        Ok(state.academies.iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, data: &CreateAcademy) -> Result<Academy, AppError> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let academy = Academy {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            address: data.address.clone(),
            contact_email: data.contact_email.clone(),
            contact_phone: data.contact_phone.clone(),
            status: AcademyStatus::Active,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        };
        state.academies.push(academy.clone());
        Ok(academy)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Academy>, AppError> {
        let state = self.state.lock().await;
        // Memberships are stored in insertion order, so iterating them
        // yields the oldest-first ordering directly.
        let academies = state
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter_map(|m| state.academies.iter().find(|a| a.id == m.academy_id))
            .cloned()
            .collect();
        Ok(academies)
    }
}

#[async_trait]
impl MembershipStore for MemoryStore {
    async fn create(&self, data: &CreateMembership) -> Result<Membership, AppError> {
        let mut state = self.state.lock().await;
        if state
            .memberships
            .iter()
            .any(|m| m.user_id == data.user_id && m.academy_id == data.academy_id)
        {
            return Err(AppError::conflict(
                "User is already a member of this academy".to_string(),
            ));
        }

        let membership = Membership {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            academy_id: data.academy_id,
            role: data.role,
            created_at: Utc::now(),
        };
        state.memberships.push(membership.clone());
        Ok(membership)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Membership>, AppError> {
        let state = self.state.lock().await;
        Ok(state
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        user_id: Uuid,
        academy_id: Uuid,
    ) -> Result<Option<Membership>, AppError> {
        let state = self.state.lock().await;
        Ok(state
            .memberships
            .iter()
            .find(|m| m.user_id == user_id && m.academy_id == academy_id)
            .cloned())
    }
}
