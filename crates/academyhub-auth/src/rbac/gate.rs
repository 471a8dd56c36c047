//! Permission enforcement for already-authenticated callers.

use std::str::FromStr;

use academyhub_core::error::AppError;
use academyhub_entity::user::Role;

use super::catalog::Permission;
use super::resolver::PermissionResolver;

/// Enforces permissions on authenticated requests.
///
/// The gate assumes authentication already happened: every denial it produces
/// is Forbidden (403), never Unauthorized (401).
#[derive(Debug, Clone, Default)]
pub struct PermissionGate {
    /// Effective permission resolution.
    resolver: PermissionResolver,
}

impl PermissionGate {
    /// Creates a gate with the default grant set.
    pub fn new() -> Self {
        Self {
            resolver: PermissionResolver::new(),
        }
    }

    /// Requires that the caller holds the given permission.
    pub fn require(
        &self,
        global_role: Role,
        academy_role: Option<Role>,
        permission: Permission,
    ) -> Result<(), AppError> {
        if self.resolver.allows(global_role, academy_role, permission) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Missing required permission '{permission}'"
            )))
        }
    }

    /// Requires a permission identified by its catalog name.
    ///
    /// An unknown name is a Forbidden denial, not a validation error: the
    /// caller certainly does not hold a permission that does not exist.
    pub fn require_named(
        &self,
        global_role: Role,
        academy_role: Option<Role>,
        permission_name: &str,
    ) -> Result<(), AppError> {
        match Permission::from_str(permission_name) {
            Ok(permission) => self.require(global_role, academy_role, permission),
            Err(_) => Err(AppError::forbidden(format!(
                "Missing required permission '{permission_name}'"
            ))),
        }
    }

    /// Requires that the caller holds an elevated global role
    /// (SuperAdmin or Admin).
    pub fn require_elevated(&self, global_role: Role) -> Result<(), AppError> {
        if global_role.is_elevated() {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "This operation requires an administrator role",
            ))
        }
    }

    /// Returns a reference to the underlying resolver.
    pub fn resolver(&self) -> &PermissionResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use academyhub_core::error::ErrorKind;

    use super::*;

    #[test]
    fn denial_is_forbidden_not_unauthorized() {
        let gate = PermissionGate::new();
        let err = gate
            .require(Role::Staff, None, Permission::MemberManage)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn unknown_permission_name_is_denied() {
        let gate = PermissionGate::new();
        let err = gate
            .require_named(Role::Admin, None, "launch_rockets")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn named_permission_checks_pass_for_granted_roles() {
        let gate = PermissionGate::new();
        assert!(gate.require_named(Role::Admin, None, "member_manage").is_ok());
        assert!(
            gate.require_named(Role::Teacher, Some(Role::Teacher), "course_manage")
                .is_ok()
        );
    }

    #[test]
    fn elevated_check_rejects_staff_and_teacher() {
        let gate = PermissionGate::new();
        assert!(gate.require_elevated(Role::SuperAdmin).is_ok());
        assert!(gate.require_elevated(Role::Admin).is_ok());
        assert!(gate.require_elevated(Role::Teacher).is_err());
        assert!(gate.require_elevated(Role::Staff).is_err());
    }
}
