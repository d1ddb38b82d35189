//! Reporting and moderation routes

pub mod moderated_object;
pub mod report;

pub use moderated_object::*;
pub use report::*;
