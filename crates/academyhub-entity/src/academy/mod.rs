//! Academy (tenant) entity.

pub mod model;

pub use model::{Academy, AcademyStatus, CreateAcademy};
