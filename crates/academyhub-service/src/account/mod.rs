//! Account registration and self-service operations.

pub mod service;

pub use service::{AccountService, RegisterResult};
