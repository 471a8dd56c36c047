//! # academyhub-database
//!
//! PostgreSQL access layer: connection pool management, migration runner,
//! and one repository struct per persisted entity.

pub mod connection;
pub mod migration;
pub mod repositories;
