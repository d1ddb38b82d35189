#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod current;
pub mod db_macros;

use std::fmt::Debug;

pub use current::{read::DbReadMode, write::DbWriteMode};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};
use error_stack::{Report, Result, ResultExt};
pub use model::schema;
use simple_backend_config::RUNNING_IN_DEBUG_MODE;
pub use simple_backend_database::diesel_db::{DieselConnection, DieselDatabaseError};
use simple_backend_database::{
    DbReadHandle, DbWriteHandle,
    diesel_db::ObjectExtensions,
};

pub const DIESEL_MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub trait IntoDatabaseError: Sized {
    type Ok;

    /// Convert diesel error to [DieselDatabaseError::Execute] and attach
    /// `request_context` to the report. The context value is printed only
    /// in debug mode.
    #[track_caller]
    fn into_db_error<T: Debug>(self, request_context: T) -> Result<Self::Ok, DieselDatabaseError>;
}

impl<Ok> IntoDatabaseError for std::result::Result<Ok, diesel::result::Error> {
    type Ok = Ok;

    #[track_caller]
    fn into_db_error<T: Debug>(self, request_context: T) -> Result<Ok, DieselDatabaseError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => {
                let context = if RUNNING_IN_DEBUG_MODE.value() {
                    format!("{:#?}", request_context)
                } else {
                    std::any::type_name::<T>().to_string()
                };
                Err(error_stack::report!(e))
                    .change_context(DieselDatabaseError::Execute)
                    .attach_printable(context)
            }
        }
    }
}

// Workaround that it is not possible to implement From<diesel::result::Error>
// to error_stack::Report from here.
pub struct TransactionError(Report<DieselDatabaseError>);

impl From<Report<DieselDatabaseError>> for TransactionError {
    fn from(value: Report<DieselDatabaseError>) -> Self {
        Self(value)
    }
}

impl From<diesel::result::Error> for TransactionError {
    fn from(value: diesel::result::Error) -> Self {
        TransactionError(
            error_stack::report!(value)
                .change_context(DieselDatabaseError::FromDieselErrorToTransactionError),
        )
    }
}

impl From<TransactionError> for Report<DieselDatabaseError> {
    fn from(value: TransactionError) -> Self {
        value.0
    }
}

/// Run database reads in a blocking thread.
pub struct DbReader<'a> {
    handle: &'a DbReadHandle,
}

impl<'a> DbReader<'a> {
    pub fn new(handle: &'a DbReadHandle) -> Self {
        Self { handle }
    }

    pub async fn db_read<
        T: FnOnce(DbReadMode<'_>) -> Result<R, DieselDatabaseError> + Send + 'static,
        R: Send + 'static,
    >(
        &self,
        cmd: T,
    ) -> Result<R, DieselDatabaseError> {
        let conn = self
            .handle
            .diesel()
            .pool()
            .get()
            .await
            .change_context(DieselDatabaseError::GetConnection)?;

        conn.interact(move |conn| cmd(DbReadMode(conn))).await?
    }
}

/// Run database writes in a blocking thread. Every write is an
/// immediate transaction so writes are serialized.
pub struct DbWriter<'a> {
    handle: &'a DbWriteHandle,
}

impl<'a> DbWriter<'a> {
    pub fn new(handle: &'a DbWriteHandle) -> Self {
        Self { handle }
    }

    pub async fn db_transaction<
        T: FnOnce(DbWriteMode<'_>) -> Result<R, DieselDatabaseError> + Send + 'static,
        R: Send + 'static,
    >(
        &self,
        cmd: T,
    ) -> Result<R, DieselDatabaseError> {
        let conn = self
            .handle
            .diesel()
            .pool()
            .get()
            .await
            .change_context(DieselDatabaseError::GetConnection)?;

        conn.interact(move |conn| {
            conn.immediate_transaction(|conn| {
                cmd(DbWriteMode(conn)).map_err(TransactionError::from)
            })
            .map_err(Report::from)
        })
        .await?
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use diesel::{Connection, SqliteConnection, connection::SimpleConnection};
    use diesel_migrations::MigrationHarness;

    use crate::DIESEL_MIGRATIONS;

    /// Private in RAM database with migrations and test data.
    ///
    /// Users: 1 = regular, 2 = global moderator, 3 = moderator of
    /// community 1. Community 1 has post 1. Post 2 is a timeline post.
    pub fn test_connection() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        conn.run_pending_migrations(DIESEL_MIGRATIONS).unwrap();
        conn.batch_execute(
            r#"
            INSERT INTO user_account (id, username, access_token, global_moderator)
            VALUES
                (1, 'user', 'token-user', 0),
                (2, 'global', 'token-global', 1),
                (3, 'community-moderator', 'token-community-moderator', 0);
            INSERT INTO community (id, name, creator_id) VALUES (1, 'rust', 3);
            INSERT INTO community_membership (community_id, user_id, is_administrator, is_moderator)
            VALUES (1, 3, 0, 1), (1, 1, 0, 0);
            INSERT INTO post (id, creator_id, community_id, text, creation_unix_time)
            VALUES (1, 1, 1, 'community post', 0), (2, 1, NULL, 'timeline post', 0);
            INSERT INTO post_comment (id, post_id, commenter_id, text, creation_unix_time)
            VALUES (1, 1, 3, 'comment', 0);
            INSERT INTO moderation_category (id, name, title, description)
            VALUES (1, 'spam', 'Spam', ''), (2, 'abuse', 'Abuse', '');
            "#,
        )
        .unwrap();
        conn
    }
}
