//! # academyhub-service
//!
//! Business logic services for the AcademyHub platform.

pub mod academy;
pub mod account;
pub mod context;

pub use academy::AcademyService;
pub use account::AccountService;
pub use context::SessionContext;
