//! Academy creation and listing, orchestrated around the switcher.

use std::sync::Arc;

use tracing::info;

use academyhub_auth::rbac::PermissionGate;
use academyhub_auth::session::{AcademySwitcher, SwitchResult};
use academyhub_auth::store::{AcademyStore, MembershipStore};
use academyhub_core::error::AppError;
use academyhub_entity::academy::{Academy, CreateAcademy};
use academyhub_entity::membership::CreateMembership;
use academyhub_entity::user::Role;

use crate::context::SessionContext;

/// Fields for creating a new academy.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewAcademy {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Contact phone.
    pub contact_phone: Option<String>,
}

/// Handles academy creation and listing.
#[derive(Clone)]
pub struct AcademyService {
    academies: Arc<dyn AcademyStore>,
    memberships: Arc<dyn MembershipStore>,
    switcher: AcademySwitcher,
    gate: PermissionGate,
}

impl AcademyService {
    /// Creates a new academy service.
    pub fn new(
        academies: Arc<dyn AcademyStore>,
        memberships: Arc<dyn MembershipStore>,
        switcher: AcademySwitcher,
        gate: PermissionGate,
    ) -> Self {
        Self {
            academies,
            memberships,
            switcher,
            gate,
        }
    }

    /// Creates an academy, enrolls the creator as its Admin, and switches
    /// them into it.
    ///
    /// The switch at the end means the response carries a token already
    /// scoped to the new academy; the client never assigns its own context.
    pub async fn create(
        &self,
        ctx: &SessionContext,
        data: NewAcademy,
    ) -> Result<SwitchResult, AppError> {
        // Elevated global role required; membership-granted permissions do
        // not apply here.
        self.gate.require_elevated(ctx.role)?;

        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Academy name cannot be empty"));
        }

        let academy = self
            .academies
            .create(&CreateAcademy {
                name: name.to_string(),
                address: data.address,
                contact_email: data.contact_email,
                contact_phone: data.contact_phone,
                created_by: ctx.user_id,
            })
            .await?;

        self.memberships
            .create(&CreateMembership {
                user_id: ctx.user_id,
                academy_id: academy.id,
                role: Role::Admin,
            })
            .await?;

        info!(
            academy_id = %academy.id,
            user_id = %ctx.user_id,
            "Academy created"
        );

        self.switcher.switch(ctx.user_id, academy.id).await
    }

    /// Lists the academies the current user belongs to, oldest membership
    /// first.
    pub async fn list_for_user(&self, ctx: &SessionContext) -> Result<Vec<Academy>, AppError> {
        self.academies.list_for_user(ctx.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use academyhub_auth::jwt::JwtEncoder;
    use academyhub_auth::password::PasswordHasher;
    use academyhub_auth::rbac::{Permission, PermissionResolver};
    use academyhub_auth::store::{MemoryStore, UserStore};
    use academyhub_core::config::AuthConfig;
    use academyhub_core::error::ErrorKind;
    use academyhub_entity::user::CreateUser;

    use super::*;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
        }
    }

    fn service(store: Arc<MemoryStore>) -> AcademyService {
        let encoder = JwtEncoder::new(&auth_config());
        let switcher = AcademySwitcher::new(
            store.clone(),
            store.clone(),
            store.clone(),
            encoder,
            PermissionResolver::new(),
        );
        AcademyService::new(store.clone(), store, switcher, PermissionGate::new())
    }

    async fn seed_user(store: &MemoryStore, role: Role) -> SessionContext {
        let hasher = PasswordHasher::new();
        let user = UserStore::create(
            store,
            &CreateUser {
                email: format!("{}@example.com", Uuid::new_v4()),
                password_hash: hasher.hash_password("Tr0ub4dour-and-Friends").unwrap(),
                full_name: "Test User".to_string(),
                role,
            },
        )
        .await
        .unwrap();
        SessionContext {
            user_id: user.id,
            email: user.email,
            role: user.role,
            academy_ids: vec![],
            active_academy_id: None,
            request_time: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_enrolls_creator_and_switches_context() {
        let store = Arc::new(MemoryStore::new());
        let svc = service(store.clone());
        let ctx = seed_user(&store, Role::Admin).await;

        let result = svc
            .create(
                &ctx,
                NewAcademy {
                    name: "North Campus".to_string(),
                    address: None,
                    contact_email: None,
                    contact_phone: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.academy.name, "North Campus");
        assert_eq!(result.academy_ids, vec![result.academy.id]);
        assert!(result.permissions.contains(&Permission::MemberManage));

        let stored = UserStore::find_by_id(store.as_ref(), ctx.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.active_academy_id, Some(result.academy.id));
    }

    #[tokio::test]
    async fn staff_cannot_create_academies() {
        let store = Arc::new(MemoryStore::new());
        let svc = service(store.clone());
        let ctx = seed_user(&store, Role::Staff).await;

        let err = svc
            .create(
                &ctx,
                NewAcademy {
                    name: "Shadow Campus".to_string(),
                    address: None,
                    contact_email: None,
                    contact_phone: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn creation_requires_an_elevated_role() {
        let store = Arc::new(MemoryStore::new());
        let svc = service(store.clone());
        let ctx = seed_user(&store, Role::Teacher).await;

        // Teachers hold catalog permissions but not an elevated role, so the
        // role gate alone must reject them.
        let err = svc
            .create(
                &ctx,
                NewAcademy {
                    name: "East Campus".to_string(),
                    address: None,
                    contact_email: None,
                    contact_phone: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert!(
            AcademyStore::list_for_user(store.as_ref(), ctx.user_id)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
