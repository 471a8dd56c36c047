//! # academyhub-auth
//!
//! Authentication, authorization, and academy context switching for the
//! AcademyHub platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `rbac` — Permission catalog and role-based access control
//! - `store` — Persistence traits for users, academies, and memberships
//! - `session` — Login flow and academy switch orchestration

pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;
pub mod store;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Permission, PermissionGate, PermissionResolver, RolePermissions};
pub use session::{AcademySwitcher, LoginResult, SessionManager, SwitchResult};
pub use store::{AcademyStore, MembershipStore, UserStore};
