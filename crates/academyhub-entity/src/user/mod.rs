//! User entity and role enumeration.

pub mod model;
pub mod role;

pub use model::{CreateUser, User};
pub use role::Role;
