//! Membership join entity linking users to academies.

pub mod model;

pub use model::{CreateMembership, Membership};
