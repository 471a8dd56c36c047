//! Permission catalog and role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use academyhub_entity::user::Role;

/// A named permission in the platform catalog.
///
/// The catalog is closed: permissions are defined here, not in the database,
/// so an unknown permission name is a programming error surfaced at parse
/// time rather than a silent deny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Academy management
    /// Create new academies.
    AcademyCreate,
    /// View academy details.
    AcademyView,
    /// Update academy details and settings.
    AcademyManage,

    // Membership management
    /// Invite users into an academy.
    MemberInvite,
    /// View academy members.
    MemberView,
    /// Change member roles or remove members.
    MemberManage,

    // Student records
    /// Enroll new students.
    StudentCreate,
    /// View student records.
    StudentView,
    /// Update student records.
    StudentUpdate,
    /// Remove student records.
    StudentDelete,

    // Courses
    /// Create courses.
    CourseCreate,
    /// View courses.
    CourseView,
    /// Update or archive courses.
    CourseManage,

    // Reporting
    /// View academy reports.
    ReportView,
}

impl Permission {
    /// Returns every permission in the catalog.
    pub fn catalog() -> HashSet<Permission> {
        use Permission::*;
        HashSet::from([
            AcademyCreate,
            AcademyView,
            AcademyManage,
            MemberInvite,
            MemberView,
            MemberManage,
            StudentCreate,
            StudentView,
            StudentUpdate,
            StudentDelete,
            CourseCreate,
            CourseView,
            CourseManage,
            ReportView,
        ])
    }

    /// Returns the canonical snake_case name of this permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::AcademyCreate => "academy_create",
            Permission::AcademyView => "academy_view",
            Permission::AcademyManage => "academy_manage",
            Permission::MemberInvite => "member_invite",
            Permission::MemberView => "member_view",
            Permission::MemberManage => "member_manage",
            Permission::StudentCreate => "student_create",
            Permission::StudentView => "student_view",
            Permission::StudentUpdate => "student_update",
            Permission::StudentDelete => "student_delete",
            Permission::CourseCreate => "course_create",
            Permission::CourseView => "course_view",
            Permission::CourseManage => "course_manage",
            Permission::ReportView => "report_view",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "academy_create" => Ok(Permission::AcademyCreate),
            "academy_view" => Ok(Permission::AcademyView),
            "academy_manage" => Ok(Permission::AcademyManage),
            "member_invite" => Ok(Permission::MemberInvite),
            "member_view" => Ok(Permission::MemberView),
            "member_manage" => Ok(Permission::MemberManage),
            "student_create" => Ok(Permission::StudentCreate),
            "student_view" => Ok(Permission::StudentView),
            "student_update" => Ok(Permission::StudentUpdate),
            "student_delete" => Ok(Permission::StudentDelete),
            "course_create" => Ok(Permission::CourseCreate),
            "course_view" => Ok(Permission::CourseView),
            "course_manage" => Ok(Permission::CourseManage),
            "report_view" => Ok(Permission::ReportView),
            other => Err(format!("Unknown permission: {other}")),
        }
    }
}

/// Defines the mapping from each role to its set of permissions.
///
/// Every role has an entry, so lookups are total; a role without explicit
/// grants maps to the empty set rather than a missing key.
#[derive(Debug, Clone)]
pub struct RolePermissions {
    /// Role → set of permissions.
    grants: HashMap<Role, HashSet<Permission>>,
}

impl RolePermissions {
    /// Creates the default grant set.
    pub fn new() -> Self {
        use Permission::*;

        let admin = Permission::catalog();

        let teacher = HashSet::from([
            AcademyView,
            MemberView,
            StudentView,
            StudentUpdate,
            CourseCreate,
            CourseView,
            CourseManage,
            ReportView,
        ]);

        let staff = HashSet::from([
            AcademyView,
            MemberView,
            StudentCreate,
            StudentView,
            StudentUpdate,
            CourseView,
        ]);

        let mut grants = HashMap::new();
        // SuperAdmin is handled by the resolver bypass; the explicit entry
        // keeps the mapping total.
        grants.insert(Role::SuperAdmin, Permission::catalog());
        grants.insert(Role::Admin, admin);
        grants.insert(Role::Teacher, teacher);
        grants.insert(Role::Staff, staff);

        Self { grants }
    }

    /// Returns the permission set granted to a role.
    pub fn for_role(&self, role: Role) -> HashSet<Permission> {
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// Checks whether a role is granted a permission.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|set| set.contains(&permission))
    }
}

impl Default for RolePermissions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_an_entry() {
        let grants = RolePermissions::new();
        for role in [Role::SuperAdmin, Role::Admin, Role::Teacher, Role::Staff] {
            // Total mapping: no role panics or falls through to a missing key.
            let _ = grants.for_role(role);
        }
    }

    #[test]
    fn staff_cannot_manage_members() {
        let grants = RolePermissions::new();
        assert!(grants.has_permission(Role::Admin, Permission::MemberManage));
        assert!(!grants.has_permission(Role::Staff, Permission::MemberManage));
        assert!(!grants.has_permission(Role::Teacher, Permission::MemberManage));
    }

    #[test]
    fn permission_names_round_trip() {
        for permission in Permission::catalog() {
            let parsed: Permission = permission.as_str().parse().unwrap();
            assert_eq!(parsed, permission);
        }
        assert!("not_a_permission".parse::<Permission>().is_err());
        assert_eq!(
            "STUDENT_VIEW".parse::<Permission>().unwrap(),
            Permission::StudentView
        );
    }
}
