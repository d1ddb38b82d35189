use std::sync::Arc;

use config::Config;
use simple_backend_database::{
    DatabaseHandleCreator, DbReadCloseHandle, DbReadHandle, DbWriteCloseHandle, DbWriteHandle,
};
use tracing::info;

use crate::{
    DataError,
    read::{
        emoji::ReadCommandsEmoji, moderation::ReadCommandsModeration, post::ReadCommandsPost,
        user::ReadCommandsUser,
    },
    result::Result,
    write::{
        moderation::WriteCommandsModeration, post::WriteCommandsPost,
        reference_data::WriteCommandsReferenceData,
    },
};

/// Handle SQLite database pools.
pub struct DatabaseManager {
    current_read_close: DbReadCloseHandle,
    current_write_close: DbWriteCloseHandle,
}

impl DatabaseManager {
    /// Runs also some blocking file system code.
    pub async fn new(
        config: Arc<Config>,
    ) -> Result<(Self, RouterDatabaseReadHandle, RouterDatabaseWriteHandle), DataError> {
        info!("Creating DatabaseManager");

        let (current_write, current_write_close) =
            DatabaseHandleCreator::create_write_handle_from_config(
                config.simple_backend(),
                config.simple_backend().current_database(),
                database::DIESEL_MIGRATIONS,
            )
            .await?;

        let diesel_sqlite = current_write.diesel().sqlite_version().await?;
        info!("Diesel SQLite version: {}", diesel_sqlite);

        let (current_read, current_read_close) =
            DatabaseHandleCreator::create_read_handle_from_config(
                config.simple_backend(),
                &current_write,
            )
            .await?;

        let router_write_handle = RouterDatabaseWriteHandle {
            config: config.clone(),
            current_write_handle: current_write,
        };

        let router_read_handle = RouterDatabaseReadHandle {
            config,
            current_read_handle: current_read,
        };

        let database_manager = DatabaseManager {
            current_read_close,
            current_write_close,
        };

        info!("DatabaseManager created");

        Ok((database_manager, router_read_handle, router_write_handle))
    }

    pub async fn close(self) {
        self.current_read_close.close().await;
        self.current_write_close.close().await;
    }
}

#[derive(Clone, Debug)]
pub struct RouterDatabaseReadHandle {
    config: Arc<Config>,
    current_read_handle: DbReadHandle,
}

impl RouterDatabaseReadHandle {
    pub fn user(&self) -> ReadCommandsUser<'_> {
        ReadCommandsUser::new(self)
    }

    pub fn moderation(&self) -> ReadCommandsModeration<'_> {
        ReadCommandsModeration::new(self)
    }

    pub fn post(&self) -> ReadCommandsPost<'_> {
        ReadCommandsPost::new(self)
    }

    pub fn emoji(&self) -> ReadCommandsEmoji<'_> {
        ReadCommandsEmoji::new(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn read_handle(&self) -> &DbReadHandle {
        &self.current_read_handle
    }
}

#[derive(Clone, Debug)]
pub struct RouterDatabaseWriteHandle {
    config: Arc<Config>,
    current_write_handle: DbWriteHandle,
}

impl RouterDatabaseWriteHandle {
    pub fn moderation(&self) -> WriteCommandsModeration<'_> {
        WriteCommandsModeration::new(self)
    }

    pub fn post(&self) -> WriteCommandsPost<'_> {
        WriteCommandsPost::new(self)
    }

    pub fn reference_data(&self) -> WriteCommandsReferenceData<'_> {
        WriteCommandsReferenceData::new(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn write_handle(&self) -> &DbWriteHandle {
        &self.current_write_handle
    }
}
