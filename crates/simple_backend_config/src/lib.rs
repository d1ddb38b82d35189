#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod args;
pub mod file;

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use args::ServerModeArgs;
use error_stack::{Result, ResultExt};

use self::file::SimpleBackendConfigFile;

/// Config file debug mode status.
///
/// Parse the config file before reading this value.
pub static RUNNING_IN_DEBUG_MODE: GlobalDebugFlag = GlobalDebugFlag {
    debug: AtomicBool::new(false),
};

pub struct GlobalDebugFlag {
    debug: AtomicBool,
}

impl GlobalDebugFlag {
    pub fn value(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }
}

pub use self::file::ConfigFileError;

#[derive(thiserror::Error, Debug)]
pub enum GetConfigError {
    #[error("Get working directory error")]
    GetWorkingDir,
    #[error("File loading failed")]
    LoadFileError,
    #[error("SQLite in RAM mode is not allowed when debug mode is off")]
    SqliteInRamNotAllowed,
}

pub const CURRENT_DATABASE: SqliteDatabase = SqliteDatabase { name: "current" };

#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDatabase {
    pub name: &'static str,
}

#[derive(Debug, Clone)]
pub struct SimpleBackendConfig {
    file: SimpleBackendConfigFile,

    /// Semver version of the backend.
    backend_semver_version: String,

    data_dir: PathBuf,
    public_api: SocketAddr,
    sqlite_in_ram: bool,
}

impl SimpleBackendConfig {
    /// Config with debug mode and in RAM SQLite database. Config files
    /// are not read.
    pub fn with_in_ram_database() -> Result<Self, GetConfigError> {
        let mut file =
            SimpleBackendConfigFile::load_default().change_context(GetConfigError::LoadFileError)?;
        file.general.debug = Some(true);
        Ok(Self {
            data_dir: file.data.dir.clone(),
            public_api: file.socket.public_api,
            file,
            backend_semver_version: String::new(),
            sqlite_in_ram: true,
        })
    }

    /// Directory where SQLite databases are stored.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn current_database(&self) -> &SqliteDatabase {
        &CURRENT_DATABASE
    }

    pub fn public_api(&self) -> SocketAddr {
        self.public_api
    }

    pub fn sqlite_in_ram(&self) -> bool {
        self.sqlite_in_ram
    }

    /// Server should run in debug mode.
    ///
    /// Debug mode changes:
    /// * Swagger UI is enabled.
    /// * HTTP requests are traced.
    /// * SQLite in RAM mode is allowed.
    /// * Error responses contain more details.
    /// * Atomic boolean `RUNNING_IN_DEBUG_MODE` is set to `true`.
    pub fn debug_mode(&self) -> bool {
        self.file.general.debug.unwrap_or(false)
    }

    pub fn log_timestamp(&self) -> bool {
        self.file.general.log_timestamp.unwrap_or(true)
    }

    pub fn backend_semver_version(&self) -> &str {
        &self.backend_semver_version
    }

    pub fn parsed_file(&self) -> &SimpleBackendConfigFile {
        &self.file
    }
}

/// Read config file from current directory.
pub fn get_config(
    args_config: ServerModeArgs,
    backend_semver_version: String,
) -> Result<SimpleBackendConfig, GetConfigError> {
    let current_dir = std::env::current_dir().change_context(GetConfigError::GetWorkingDir)?;
    let file_config = file::SimpleBackendConfigFile::load(current_dir)
        .change_context(GetConfigError::LoadFileError)?;

    let data_dir = if let Some(dir) = args_config.data_dir {
        dir
    } else {
        file_config.data.dir.clone()
    };

    let public_api = args_config
        .public_api
        .unwrap_or(file_config.socket.public_api);

    let sqlite_in_ram = if args_config.sqlite_in_ram {
        if file_config.general.debug.unwrap_or_default() {
            true
        } else {
            return Err(GetConfigError::SqliteInRamNotAllowed)
                .attach_printable("SQLite in RAM mode is not allowed when debug mode is off");
        }
    } else {
        false
    };

    let config = SimpleBackendConfig {
        file: file_config,
        backend_semver_version,
        data_dir,
        public_api,
        sqlite_in_ram,
    };

    if config.debug_mode() {
        RUNNING_IN_DEBUG_MODE.debug.store(true, Ordering::Relaxed);
    }

    Ok(config)
}
