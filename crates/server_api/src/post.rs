//! Post comment and reaction routes

pub mod comment;
pub mod reaction;

pub use comment::*;
pub use reaction::*;
