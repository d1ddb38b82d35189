#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Business logic of the backend. Database access happens through
//! [db_manager::RouterDatabaseReadHandle] and
//! [db_manager::RouterDatabaseWriteHandle].

pub mod access;
pub mod db_manager;
pub mod macros;
pub mod read;
pub mod result;
pub mod write;

use database::DieselDatabaseError;
use error_stack::{Context, Report};
use result::WrappedReport;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Diesel error")]
    Diesel,

    #[error("Database initialization error")]
    Init,
    #[error("Not found")]
    NotFound,
    #[error("Tried to do something that is not allowed")]
    NotAllowed,
    #[error("Invalid input")]
    InvalidInput,
    #[error("Referenced data not found")]
    ReferenceNotFound,
}

/// Convert to DataError
pub trait IntoDataError<Ok, Err: Context>: Sized {
    #[track_caller]
    fn into_error(self) -> std::result::Result<Ok, WrappedReport<Report<Err>>>;
}

impl<Ok> IntoDataError<Ok, DataError> for error_stack::Result<Ok, DieselDatabaseError> {
    #[track_caller]
    fn into_error(self) -> std::result::Result<Ok, WrappedReport<Report<DataError>>> {
        let value = self?;
        Ok(value)
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
