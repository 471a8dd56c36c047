//! # academyhub-entity
//!
//! Domain entity models shared across the AcademyHub crates: users with
//! their global roles, academies (tenants), and the membership join entity
//! linking the two.

pub mod academy;
pub mod membership;
pub mod user;
