//! Role-based access control: permission catalog, role mapping, and
//! enforcement.

pub mod catalog;
pub mod gate;
pub mod resolver;

pub use catalog::{Permission, RolePermissions};
pub use gate::PermissionGate;
pub use resolver::PermissionResolver;
