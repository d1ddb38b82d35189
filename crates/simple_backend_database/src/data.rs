use std::{fs, path::PathBuf};

use error_stack::{Result, ResultExt};
use simple_backend_config::{SimpleBackendConfig, SqliteDatabase};

use crate::SimpleDatabaseError;

pub const SQLITE_DIR_NAME: &str = "sqlite";

/// Returns path `DATA_DIR/sqlite/DB_NAME/DB_NAME.db`.
pub fn create_dirs_and_get_sqlite_database_file_path(
    config: &SimpleBackendConfig,
    database_info: &SqliteDatabase,
) -> Result<PathBuf, SimpleDatabaseError> {
    let db_dir = config
        .data_dir()
        .join(SQLITE_DIR_NAME)
        .join(database_info.name);

    if !config.sqlite_in_ram() && !db_dir.exists() {
        fs::create_dir_all(&db_dir).change_context(SimpleDatabaseError::FilePathCreationFailed)?;
    }

    Ok(db_dir.join(format!("{}.db", database_info.name)))
}
