#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod args;
pub mod file;

use std::sync::Arc;

use args::ArgsConfig;
use error_stack::{Result, ResultExt};
use file::{ConfigFile, EmojiGroupConfig, LimitsConfig};
use model::ModerationCategory;
pub use simple_backend_config::RUNNING_IN_DEBUG_MODE;
use simple_backend_config::SimpleBackendConfig;

#[derive(thiserror::Error, Debug)]
pub enum GetConfigError {
    #[error("Simple backend error")]
    SimpleBackendError,

    #[error("Get working directory error")]
    GetWorkingDir,
    #[error("File loading failed")]
    LoadFileError,
}

#[derive(Debug)]
pub struct Config {
    file: ConfigFile,
    simple_backend_config: Arc<SimpleBackendConfig>,
}

impl Config {
    /// Debug mode config with in RAM SQLite database and the default
    /// server config file. Files are not read or written.
    pub fn with_in_ram_database() -> Result<Self, GetConfigError> {
        let simple_backend_config = SimpleBackendConfig::with_in_ram_database()
            .change_context(GetConfigError::SimpleBackendError)?;
        let file = ConfigFile::load_default().change_context(GetConfigError::LoadFileError)?;
        Ok(Self {
            file,
            simple_backend_config: simple_backend_config.into(),
        })
    }

    /// Server should run in debug mode.
    ///
    /// Check [SimpleBackendConfig::debug_mode] for the list of changes.
    pub fn debug_mode(&self) -> bool {
        self.simple_backend_config.debug_mode()
    }

    pub fn limits(&self) -> LimitsConfig {
        self.file.limits.clone().unwrap_or_default()
    }

    /// Moderation categories sorted by ID.
    pub fn moderation_categories(&self) -> &[ModerationCategory] {
        &self.file.moderation_categories
    }

    /// Reaction emoji groups sorted by ID.
    pub fn reaction_emoji_groups(&self) -> &[EmojiGroupConfig] {
        &self.file.reaction_emoji_groups
    }

    /// Emoji groups which are not reaction groups sorted by ID.
    pub fn emoji_groups(&self) -> &[EmojiGroupConfig] {
        &self.file.emoji_groups
    }

    pub fn simple_backend(&self) -> &SimpleBackendConfig {
        &self.simple_backend_config
    }

    pub fn simple_backend_arc(&self) -> Arc<SimpleBackendConfig> {
        self.simple_backend_config.clone()
    }
}

pub fn get_config(
    args_config: ArgsConfig,
    backend_semver_version: String,
) -> Result<Config, GetConfigError> {
    let simple_backend_config =
        simple_backend_config::get_config(args_config.server, backend_semver_version)
            .change_context(GetConfigError::SimpleBackendError)?;

    let current_dir = std::env::current_dir().change_context(GetConfigError::GetWorkingDir)?;
    let file_config =
        file::ConfigFile::load(&current_dir).change_context(GetConfigError::LoadFileError)?;

    let config = Config {
        simple_backend_config: simple_backend_config.into(),
        file: file_config,
    };

    Ok(config)
}
