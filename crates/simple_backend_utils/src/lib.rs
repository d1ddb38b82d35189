#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

use std::fmt::Display;

use error_stack::{Context, Report, Result, ResultExt};

/// Convert errors which do not implement [std::error::Error]
/// (for example boxed errors from diesel_migrations) to
/// [error_stack::Report] by storing the error message as attachment.
pub trait IntoReportFromString {
    type Ok;
    type Err: Display;

    #[track_caller]
    fn into_error_string<C: Context>(self, context: C) -> Result<Self::Ok, C>;
}

impl<Ok, Err: Display> IntoReportFromString for std::result::Result<Ok, Err> {
    type Ok = Ok;
    type Err = Err;

    fn into_error_string<C: Context>(
        self,
        context: C,
    ) -> Result<<Self as IntoReportFromString>::Ok, C> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(context.report()).attach_printable(err.to_string()),
        }
    }
}

pub trait ContextExt: Context + Sized {
    #[track_caller]
    fn report(self) -> Report<Self> {
        error_stack::report!(self)
    }
}

impl<E: Context + Sized> ContextExt for E {}

pub fn current_unix_time() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug)]
    #[error("Test error")]
    struct TestError;

    #[test]
    fn error_string_is_attached_to_report() {
        let result: std::result::Result<(), String> = Err("boxed failure".to_string());
        let report = result.into_error_string(TestError).unwrap_err();
        let debug = format!("{report:?}");
        assert!(debug.contains("boxed failure"));
        assert!(debug.contains("Test error"));
    }

    #[test]
    fn ok_value_passes_through() {
        let result: std::result::Result<u8, String> = Ok(3);
        assert_eq!(result.into_error_string(TestError).unwrap(), 3);
    }

    #[test]
    fn current_unix_time_is_after_2020() {
        assert!(current_unix_time() > 1_577_836_800);
    }
}
