//! Academy context switching.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use academyhub_core::error::AppError;
use academyhub_entity::academy::Academy;

use crate::jwt::{IssuedToken, JwtEncoder};
use crate::rbac::{Permission, PermissionResolver};
use crate::store::{AcademyStore, MembershipStore, UserStore};

/// Result of a successful academy switch.
#[derive(Debug, Clone)]
pub struct SwitchResult {
    /// A fresh token scoped to the new academy.
    pub token: IssuedToken,
    /// The academy that is now active.
    pub academy: Academy,
    /// The user's academies, oldest membership first.
    pub academy_ids: Vec<Uuid>,
    /// Effective permissions in the new academy context.
    pub permissions: HashSet<Permission>,
}

/// Switches a user's active academy and re-issues their token.
#[derive(Clone)]
pub struct AcademySwitcher {
    users: Arc<dyn UserStore>,
    academies: Arc<dyn AcademyStore>,
    memberships: Arc<dyn MembershipStore>,
    encoder: JwtEncoder,
    resolver: PermissionResolver,
}

impl AcademySwitcher {
    /// Creates a new switcher.
    pub fn new(
        users: Arc<dyn UserStore>,
        academies: Arc<dyn AcademyStore>,
        memberships: Arc<dyn MembershipStore>,
        encoder: JwtEncoder,
        resolver: PermissionResolver,
    ) -> Self {
        Self {
            users,
            academies,
            memberships,
            encoder,
            resolver,
        }
    }

    /// Switches the user into the given academy.
    ///
    /// Validation happens before anything is persisted: a missing academy is
    /// NotFound, an academy the user does not belong to is Forbidden, and in
    /// both cases the stored pointer and the caller's current token remain
    /// untouched. The token is only issued after the pointer update succeeds.
    pub async fn switch(&self, user_id: Uuid, academy_id: Uuid) -> Result<SwitchResult, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        let academy = self
            .academies
            .find_by_id(academy_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Academy {academy_id} not found")))?;

        let Some(membership) = self.memberships.find(user_id, academy_id).await? else {
            return Err(AppError::forbidden(
                "You are not a member of this academy",
            ));
        };

        self.users
            .set_active_academy(user_id, Some(academy_id))
            .await?;

        let memberships = self.memberships.list_by_user(user_id).await?;
        let academy_ids: Vec<Uuid> = memberships.iter().map(|m| m.academy_id).collect();
        let permissions = self.resolver.resolve(user.role, Some(membership.role));

        let token = self
            .encoder
            .issue(&user, academy_ids.clone(), Some(academy_id))?;

        info!(
            user_id = %user_id,
            academy_id = %academy_id,
            "Active academy switched"
        );

        Ok(SwitchResult {
            token,
            academy,
            academy_ids,
            permissions,
        })
    }
}
