//! Academy creation and listing.

pub mod service;

pub use service::{AcademyService, NewAcademy};
