use std::{fmt, path::PathBuf};

use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use error_stack::{Result, ResultExt};
use simple_backend_config::{SimpleBackendConfig, SqliteDatabase};
use simple_backend_utils::{ContextExt, IntoReportFromString};
use tracing::error;

pub type DieselConnection = diesel::SqliteConnection;
pub type DieselPool = deadpool::unmanaged::Pool<DieselConnection>;
pub type PoolObject = deadpool::unmanaged::Object<DieselConnection>;

mod sqlite_version {
    use diesel::define_sql_function;
    define_sql_function! { fn sqlite_version() -> Text }
}

#[derive(thiserror::Error, Debug)]
pub enum DieselDatabaseError {
    #[error("Connecting to SQLite database failed")]
    Connect,
    #[error("SQLite connection setup failed")]
    Setup,
    #[error("Executing SQL query failed")]
    Execute,
    #[error("Running diesel database migrations failed")]
    Migrate,

    #[error("Running an action failed")]
    RunAction,
    #[error("Add connection to pool failed")]
    AddConnection,
    #[error("Connection get failed from connection pool")]
    GetConnection,

    #[error("SQLite version query failed")]
    SqliteVersionQuery,

    #[error("Not found")]
    NotFound,

    #[error("Data format conversion failed")]
    DataFormatConversion,

    #[error("Transaction failed")]
    FromDieselErrorToTransactionError,
}

async fn close_connections(pool: &DieselPool, connections: usize) {
    for _ in 0..connections {
        let result = pool.remove().await;
        match result {
            Ok(conn) => drop(conn),
            Err(_) => error!("Failed to remove connection from pool"),
        }
    }
}

pub struct DieselWriteCloseHandle {
    pool: DieselPool,
    connections: usize,
}

impl DieselWriteCloseHandle {
    /// Call this before closing the server.
    pub async fn close(self) {
        close_connections(&self.pool, self.connections).await;
        self.pool.close()
    }
}

impl fmt::Debug for DieselWriteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DieselWriteHandle").finish()
    }
}

pub trait ObjectExtensions<T>: Sized {
    /// Run blocking database action in a thread pool thread.
    fn interact<F: FnOnce(&mut T) -> R + Send + 'static, R: Send + 'static>(
        self,
        action: F,
    ) -> impl std::future::Future<Output = Result<R, DieselDatabaseError>> + Send;
}

impl ObjectExtensions<SqliteConnection> for PoolObject {
    async fn interact<
        F: FnOnce(&mut SqliteConnection) -> R + Send + 'static,
        R: Send + 'static,
    >(
        mut self,
        action: F,
    ) -> Result<R, DieselDatabaseError> {
        let handle = tokio::task::spawn_blocking(move || {
            let conn: &mut SqliteConnection = &mut self;
            action(conn)
        });
        match handle.await {
            Ok(value) => Ok(value),
            Err(e) => Err(e.report()).change_context(DieselDatabaseError::RunAction),
        }
    }
}

fn connection_string(
    config: &SimpleBackendConfig,
    database_info: &SqliteDatabase,
    db_path: PathBuf,
) -> String {
    if config.sqlite_in_ram() {
        // In RAM databases are private to the pool which creates them.
        format!(
            "file:{}-{}?mode=memory&cache=shared",
            database_info.name,
            uuid::Uuid::new_v4().simple(),
        )
    } else {
        db_path.to_string_lossy().to_string()
    }
}

async fn create_pool(
    db_str: &str,
    connection_count: usize,
) -> Result<DieselPool, DieselDatabaseError> {
    let pool = deadpool::unmanaged::Pool::new(connection_count);
    for _ in 0..connection_count {
        let mut conn =
            SqliteConnection::establish(db_str).change_context(DieselDatabaseError::Connect)?;
        sqlite_setup_connection(&mut conn)?;
        pool.add(conn)
            .await
            .map_err(|(_, e)| e)
            .change_context(DieselDatabaseError::AddConnection)?;
    }

    Ok(pool)
}

#[derive(Clone)]
pub struct DieselWriteHandle {
    pool: DieselPool,
    db_str: String,
}

impl DieselWriteHandle {
    /// Create new connection pool with one connection and run migrations.
    ///
    /// pub const DIESEL_MIGRATIONS: EmbeddedMigrations = embed_migrations!();
    pub async fn new(
        config: &SimpleBackendConfig,
        database_info: &SqliteDatabase,
        db_path: PathBuf,
        migrations: EmbeddedMigrations,
    ) -> Result<(Self, DieselWriteCloseHandle), DieselDatabaseError> {
        let connections = 1;
        let db_str = connection_string(config, database_info, db_path);
        let pool = create_pool(&db_str, connections).await?;

        let conn = pool
            .get()
            .await
            .change_context(DieselDatabaseError::GetConnection)?;
        conn.interact(move |conn| conn.run_pending_migrations(migrations).map(|_| ()))
            .await?
            .into_error_string(DieselDatabaseError::Migrate)?;

        let write_handle = DieselWriteHandle {
            pool: pool.clone(),
            db_str,
        };

        let close_handle = DieselWriteCloseHandle {
            pool: pool.clone(),
            connections,
        };

        Ok((write_handle, close_handle))
    }

    pub fn pool(&self) -> &DieselPool {
        &self.pool
    }

    pub async fn sqlite_version(&self) -> Result<String, DieselDatabaseError> {
        let conn = self
            .pool
            .get()
            .await
            .change_context(DieselDatabaseError::GetConnection)?;

        let sqlite_version: Vec<String> = conn
            .interact(move |conn| diesel::select(sqlite_version::sqlite_version()).load(conn))
            .await?
            .change_context(DieselDatabaseError::Execute)?;

        sqlite_version
            .first()
            .ok_or(DieselDatabaseError::SqliteVersionQuery.report())
            .cloned()
    }

    /// Read handle which uses the write connection.
    pub fn to_read_handle(&self) -> DieselReadHandle {
        DieselReadHandle {
            pool: self.pool.clone(),
        }
    }
}

pub struct DieselReadCloseHandle {
    pool: DieselPool,
    connections: usize,
}

impl DieselReadCloseHandle {
    /// Call this before closing the server.
    pub async fn close(self) {
        if self.connections == 0 {
            // Write close handle owns the shared pool.
            return;
        }
        close_connections(&self.pool, self.connections).await;
        self.pool.close()
    }
}

pub fn sqlite_setup_connection(conn: &mut SqliteConnection) -> Result<(), DieselDatabaseError> {
    let pragmas = &[
        "PRAGMA journal_mode=WAL;",
        "PRAGMA synchronous=NORMAL;",
        "PRAGMA foreign_keys=ON;",
        "PRAGMA busy_timeout=5000;",
    ];

    for pragma_str in pragmas {
        diesel::sql_query(*pragma_str)
            .execute(conn)
            .change_context(DieselDatabaseError::Setup)?;
    }

    Ok(())
}

#[derive(Clone)]
pub struct DieselReadHandle {
    pool: DieselPool,
}

impl fmt::Debug for DieselReadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DieselReadHandle").finish()
    }
}

impl DieselReadHandle {
    /// Create connection pool with one connection per CPU.
    ///
    /// In RAM databases share the write pool instead.
    pub async fn new(
        config: &SimpleBackendConfig,
        write_handle: &DieselWriteHandle,
    ) -> Result<(Self, DieselReadCloseHandle), DieselDatabaseError> {
        let connections = if config.sqlite_in_ram() {
            0
        } else {
            num_cpus::get()
        };

        let pool = if connections == 0 {
            write_handle.pool.clone()
        } else {
            create_pool(&write_handle.db_str, connections).await?
        };

        let handle = DieselReadHandle { pool: pool.clone() };

        let close_handle = DieselReadCloseHandle { pool, connections };

        Ok((handle, close_handle))
    }

    pub fn pool(&self) -> &DieselPool {
        &self.pool
    }
}
