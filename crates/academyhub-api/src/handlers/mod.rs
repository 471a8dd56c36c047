//! HTTP request handlers.

pub mod academy;
pub mod auth;
pub mod health;
