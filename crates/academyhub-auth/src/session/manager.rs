//! Login flow: credential verification and token issuance with academy
//! context.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use academyhub_core::error::AppError;
use academyhub_entity::user::User;

use crate::jwt::{IssuedToken, JwtEncoder};
use crate::password::PasswordHasher;
use crate::rbac::{Permission, PermissionResolver};
use crate::store::{MembershipStore, UserStore};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The issued token and its expiry.
    pub token: IssuedToken,
    /// The authenticated user.
    pub user: User,
    /// The user's academies, oldest membership first.
    pub academy_ids: Vec<Uuid>,
    /// The academy the session starts in, if any.
    pub active_academy_id: Option<Uuid>,
    /// Effective permissions in the starting academy context.
    pub permissions: HashSet<Permission>,
}

/// Orchestrates the login flow.
#[derive(Clone)]
pub struct SessionManager {
    users: Arc<dyn UserStore>,
    memberships: Arc<dyn MembershipStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    resolver: PermissionResolver,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        users: Arc<dyn UserStore>,
        memberships: Arc<dyn MembershipStore>,
        hasher: PasswordHasher,
        encoder: JwtEncoder,
        resolver: PermissionResolver,
    ) -> Self {
        Self {
            users,
            memberships,
            hasher,
            encoder,
            resolver,
        }
    }

    /// Authenticates a user by email and password and issues a token.
    ///
    /// Unknown email and wrong password produce the same error so the login
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!(email = %email, "Login attempt for unknown email");
            return Err(AppError::unauthorized("Invalid credentials"));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let memberships = self.memberships.list_by_user(user.id).await?;
        let academy_ids: Vec<Uuid> = memberships.iter().map(|m| m.academy_id).collect();

        // The persisted pointer wins while it still names one of the user's
        // academies; otherwise fall back to the oldest membership. The
        // pointer is repaired in storage when it drifted.
        let active_academy_id = user
            .active_academy_id
            .filter(|id| academy_ids.contains(id))
            .or_else(|| academy_ids.first().copied());

        if active_academy_id != user.active_academy_id {
            self.users
                .set_active_academy(user.id, active_academy_id)
                .await?;
        }

        let academy_role = active_academy_id.and_then(|id| {
            memberships
                .iter()
                .find(|m| m.academy_id == id)
                .map(|m| m.role)
        });
        let permissions = self.resolver.resolve(user.role, academy_role);

        let token = self
            .encoder
            .issue(&user, academy_ids.clone(), active_academy_id)?;

        info!(
            user_id = %user.id,
            academies = academy_ids.len(),
            active = ?active_academy_id,
            "User logged in"
        );

        let user = User {
            active_academy_id,
            ..user
        };

        Ok(LoginResult {
            token,
            user,
            academy_ids,
            active_academy_id,
            permissions,
        })
    }
}
