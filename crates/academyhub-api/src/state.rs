//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use academyhub_auth::jwt::{JwtDecoder, JwtEncoder};
use academyhub_auth::password::{PasswordHasher, PasswordValidator};
use academyhub_auth::rbac::{PermissionGate, PermissionResolver};
use academyhub_auth::session::{AcademySwitcher, SessionManager};
use academyhub_auth::store::{AcademyStore, MembershipStore, PostgresStore, UserStore};
use academyhub_core::config::AppConfig;
use academyhub_service::{AcademyService, AccountService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Login flow orchestration.
    pub session_manager: Arc<SessionManager>,
    /// Active academy switching.
    pub academy_switcher: Arc<AcademySwitcher>,
    /// Account registration and profile access.
    pub account_service: Arc<AccountService>,
    /// Academy creation and listing.
    pub academy_service: Arc<AcademyService>,
}

impl AppState {
    /// Builds production state over a PostgreSQL pool.
    pub fn build(config: Arc<AppConfig>, pool: PgPool) -> Self {
        let store = Arc::new(PostgresStore::new(pool));
        Self::with_stores(config, store.clone(), store.clone(), store)
    }

    /// Builds state over explicit store implementations.
    ///
    /// Production passes the PostgreSQL store three times; tests pass the
    /// memory store.
    pub fn with_stores(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        academies: Arc<dyn AcademyStore>,
        memberships: Arc<dyn MembershipStore>,
    ) -> Self {
        let encoder = JwtEncoder::new(&config.auth);
        let decoder = JwtDecoder::new(&config.auth);
        let hasher = PasswordHasher::new();
        let validator = PasswordValidator::new(&config.auth);

        let session_manager = SessionManager::new(
            users.clone(),
            memberships.clone(),
            hasher.clone(),
            encoder.clone(),
            PermissionResolver::new(),
        );
        let academy_switcher = AcademySwitcher::new(
            users.clone(),
            academies.clone(),
            memberships.clone(),
            encoder.clone(),
            PermissionResolver::new(),
        );
        let account_service =
            AccountService::new(users, hasher, validator, encoder, PermissionResolver::new());
        let academy_service = AcademyService::new(
            academies,
            memberships,
            academy_switcher.clone(),
            PermissionGate::new(),
        );

        Self {
            config,
            jwt_decoder: Arc::new(decoder),
            session_manager: Arc::new(session_manager),
            academy_switcher: Arc::new(academy_switcher),
            account_service: Arc::new(account_service),
            academy_service: Arc::new(academy_service),
        }
    }
}
