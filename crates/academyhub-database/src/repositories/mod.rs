//! Repository structs, one per persisted entity.

pub mod academy;
pub mod membership;
pub mod user;
