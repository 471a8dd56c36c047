//! Login flow and academy context switching.

pub mod manager;
pub mod switch;

pub use manager::{LoginResult, SessionManager};
pub use switch::{AcademySwitcher, SwitchResult};
