#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Data types for API and database.

pub use simple_backend_model::{SimpleDieselEnum, UnixTime};

pub mod common;
pub mod community;
pub mod emoji;
pub mod moderation;
pub mod pagination;
pub mod post;
pub mod user;

mod macros;
pub mod schema;

pub use common::*;
pub use community::*;
pub use emoji::*;
pub use moderation::*;
pub use pagination::*;
pub use post::*;
pub use user::*;

pub type Db = diesel::sqlite::Sqlite;

#[derive(thiserror::Error, Debug)]
pub enum EnumParsingError {
    #[error("ParsingFailed, value: {0}")]
    ParsingError(String),
}

#[cfg(test)]
mod tests {
    // Ignore unused dependency warning. Unit tests need this dependency.
    use serde_json as _;
}
