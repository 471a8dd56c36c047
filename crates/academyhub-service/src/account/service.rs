//! Account registration and profile access.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use academyhub_auth::jwt::{IssuedToken, JwtEncoder};
use academyhub_auth::password::{PasswordHasher, PasswordValidator};
use academyhub_auth::rbac::{Permission, PermissionResolver};
use academyhub_auth::store::UserStore;
use academyhub_core::error::AppError;
use academyhub_entity::user::{CreateUser, Role, User};

use crate::context::SessionContext;

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisterResult {
    /// The issued token and its expiry.
    pub token: IssuedToken,
    /// The newly created user.
    pub user: User,
    /// Effective permissions of the fresh account (global role only; the
    /// account has no academies yet).
    pub permissions: HashSet<Permission>,
}

/// Handles account registration and profile access.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    encoder: JwtEncoder,
    resolver: PermissionResolver,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
        encoder: JwtEncoder,
        resolver: PermissionResolver,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
            resolver,
        }
    }

    /// Registers a new account and signs the user in.
    ///
    /// New accounts start with the Admin global role and no academies; the
    /// first academy they create becomes their active one. A duplicate email
    /// surfaces as Conflict from the store.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<RegisterResult, AppError> {
        let email = email.trim().to_lowercase();
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if full_name.trim().is_empty() {
            return Err(AppError::validation("Full name cannot be empty"));
        }
        self.validator.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email,
                password_hash,
                full_name: full_name.trim().to_string(),
                role: Role::Admin,
            })
            .await?;

        let token = self.encoder.issue(&user, Vec::new(), None)?;
        let permissions = self.resolver.resolve(user.role, None);

        info!(user_id = %user.id, "Account registered");

        Ok(RegisterResult {
            token,
            user,
            permissions,
        })
    }

    /// Gets the current user's profile.
    pub async fn profile(&self, ctx: &SessionContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use academyhub_auth::store::MemoryStore;
    use academyhub_core::config::AuthConfig;
    use academyhub_core::error::ErrorKind;

    use super::*;

    fn service() -> AccountService {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
        };
        AccountService::new(
            Arc::new(MemoryStore::new()),
            PasswordHasher::new(),
            PasswordValidator::new(&config),
            JwtEncoder::new(&config),
            PermissionResolver::new(),
        )
    }

    #[tokio::test]
    async fn register_normalizes_email_and_issues_token() {
        let svc = service();
        let result = svc
            .register("  Jane@Example.COM ", "Tr0ub4dour-and-Friends", "Jane Doe")
            .await
            .unwrap();

        assert_eq!(result.user.email, "jane@example.com");
        assert_eq!(result.user.role, Role::Admin);
        assert!(result.user.active_academy_id.is_none());
        assert!(!result.token.token.is_empty());
        assert!(result.permissions.contains(&Permission::AcademyCreate));
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let svc = service();
        svc.register("jane@example.com", "Tr0ub4dour-and-Friends", "Jane")
            .await
            .unwrap();
        let err = svc
            .register("JANE@example.com", "Tr0ub4dour-and-Friends", "Other Jane")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn weak_password_is_rejected_before_any_write() {
        let svc = service();
        let err = svc
            .register("jane@example.com", "password", "Jane")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
