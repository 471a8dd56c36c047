//! Role enumeration.
//!
//! One canonical `Role` type is used both for the global role on the user
//! record and for the role carried by a membership within an academy.
//! Every elevated-role decision in the codebase goes through
//! [`Role::is_elevated`] or [`Role::is_superuser`] rather than ad hoc
//! string comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in AcademyHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform superuser; bypasses the permission catalog entirely.
    SuperAdmin,
    /// Academy administrator; may create academies and manage members.
    Admin,
    /// Teaching staff within an academy.
    Teacher,
    /// Administrative staff within an academy.
    Staff,
}

impl Role {
    /// The single superuser predicate. A superuser receives the full
    /// permission catalog regardless of tenant context.
    pub fn is_superuser(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// The single elevated-role predicate, used to gate catalog-independent
    /// privileged operations such as academy creation.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = academyhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "super_admin" | "superadmin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "staff" => Ok(Self::Staff),
            _ => Err(academyhub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: super_admin, admin, teacher, staff"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevated_predicate() {
        assert!(Role::SuperAdmin.is_elevated());
        assert!(Role::Admin.is_elevated());
        assert!(!Role::Teacher.is_elevated());
        assert!(!Role::Staff.is_elevated());
    }

    #[test]
    fn test_superuser_predicate() {
        assert!(Role::SuperAdmin.is_superuser());
        assert!(!Role::Admin.is_superuser());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("SuperAdmin".parse::<Role>().unwrap(), Role::SuperAdmin);
        assert_eq!("SUPER_ADMIN".parse::<Role>().unwrap(), Role::SuperAdmin);
        assert!("principal".parse::<Role>().is_err());
    }
}
