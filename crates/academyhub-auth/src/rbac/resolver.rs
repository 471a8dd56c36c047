//! Effective permission resolution across global and per-academy roles.

use std::collections::HashSet;

use academyhub_entity::user::Role;

use super::catalog::{Permission, RolePermissions};

/// Resolves the effective permission set for a user in a given academy
/// context.
///
/// This is the single place where the superuser bypass lives: callers never
/// check `is_superuser()` themselves.
#[derive(Debug, Clone, Default)]
pub struct PermissionResolver {
    /// Role-to-permission grants.
    grants: RolePermissions,
}

impl PermissionResolver {
    /// Creates a resolver with the default grant set.
    pub fn new() -> Self {
        Self {
            grants: RolePermissions::new(),
        }
    }

    /// Resolves the effective permissions for a user.
    ///
    /// A superuser gets the full catalog regardless of academy role. For
    /// everyone else, the per-academy membership role wins when present;
    /// outside any academy, the global role applies.
    pub fn resolve(&self, global_role: Role, academy_role: Option<Role>) -> HashSet<Permission> {
        if global_role.is_superuser() {
            return Permission::catalog();
        }
        self.grants.for_role(academy_role.unwrap_or(global_role))
    }

    /// Checks a single permission for a user.
    pub fn allows(
        &self,
        global_role: Role,
        academy_role: Option<Role>,
        permission: Permission,
    ) -> bool {
        if global_role.is_superuser() {
            return true;
        }
        self.grants
            .has_permission(academy_role.unwrap_or(global_role), permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superuser_bypasses_academy_role() {
        let resolver = PermissionResolver::new();
        // Even with a restrictive academy role, a superuser keeps the full
        // catalog.
        let perms = resolver.resolve(Role::SuperAdmin, Some(Role::Staff));
        assert_eq!(perms, Permission::catalog());
        assert!(resolver.allows(Role::SuperAdmin, Some(Role::Staff), Permission::MemberManage));
    }

    #[test]
    fn academy_role_overrides_global_role() {
        let resolver = PermissionResolver::new();
        // A global Admin acting as Staff inside an academy gets Staff grants.
        let perms = resolver.resolve(Role::Admin, Some(Role::Staff));
        assert!(perms.contains(&Permission::StudentView));
        assert!(!perms.contains(&Permission::MemberManage));
    }

    #[test]
    fn global_role_applies_outside_any_academy() {
        let resolver = PermissionResolver::new();
        let perms = resolver.resolve(Role::Admin, None);
        assert!(perms.contains(&Permission::AcademyCreate));

        let perms = resolver.resolve(Role::Staff, None);
        assert!(!perms.contains(&Permission::AcademyCreate));
    }
}
