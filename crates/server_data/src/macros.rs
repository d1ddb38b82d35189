#[macro_export]
macro_rules! define_cmd_wrapper_read {
    ($struct_name:ident) => {
        pub struct $struct_name<'a>(&'a $crate::db_manager::RouterDatabaseReadHandle);

        impl<'a> $struct_name<'a> {
            pub fn new(c: &'a $crate::db_manager::RouterDatabaseReadHandle) -> Self {
                Self(c)
            }

            #[allow(dead_code)]
            fn config(&self) -> &config::Config {
                self.0.config()
            }

            pub async fn db_read<
                T: FnOnce(database::DbReadMode<'_>) -> error_stack::Result<R, database::DieselDatabaseError>
                    + Send
                    + 'static,
                R: Send + 'static,
            >(
                &self,
                cmd: T,
            ) -> error_stack::Result<R, database::DieselDatabaseError> {
                database::DbReader::new(self.0.read_handle())
                    .db_read(cmd)
                    .await
            }
        }
    };
}

#[macro_export]
macro_rules! define_cmd_wrapper_write {
    ($struct_name:ident) => {
        pub struct $struct_name<'a>(&'a $crate::db_manager::RouterDatabaseWriteHandle);

        impl<'a> $struct_name<'a> {
            pub fn new(c: &'a $crate::db_manager::RouterDatabaseWriteHandle) -> Self {
                Self(c)
            }

            #[allow(dead_code)]
            fn config(&self) -> &config::Config {
                self.0.config()
            }

            pub async fn db_transaction<
                T: FnOnce(database::DbWriteMode<'_>) -> error_stack::Result<R, database::DieselDatabaseError>
                    + Send
                    + 'static,
                R: Send + 'static,
            >(
                &self,
                cmd: T,
            ) -> error_stack::Result<R, database::DieselDatabaseError> {
                database::DbWriter::new(self.0.write_handle())
                    .db_transaction(cmd)
                    .await
            }
        }
    };
}

/// Macro for writing to current database with transaction.
/// Calls await automatically.
///
/// ```ignore
/// use server_data::{DataError, db_transaction, define_cmd_wrapper_write, result::Result};
///
/// define_cmd_wrapper_write!(WriteCommandsTest);
///
/// impl WriteCommandsTest<'_> {
///     pub async fn test(&self) -> Result<(), DataError> {
///         db_transaction!(self, move |mut cmds| {
///             Ok(())
///         })?;
///         Ok(())
///     }
/// }
/// ```
#[macro_export]
macro_rules! db_transaction {
    ($state:expr, move |mut $cmds:ident| $commands:expr) => {{
        $crate::IntoDataError::into_error($state.db_transaction(move |mut $cmds| ($commands)).await)
    }};
    ($state:expr, move |$cmds:ident| $commands:expr) => {{
        $crate::IntoDataError::into_error($state.db_transaction(move |$cmds| ($commands)).await)
    }};
}
