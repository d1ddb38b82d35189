use std::sync::Arc;

use config::Config;
use model::{AccessToken, User};
use server_data::db_manager::{RouterDatabaseReadHandle, RouterDatabaseWriteHandle};
use simple_backend::{
    app::{PerfCounterDataProvider, SimpleBackendAppState},
    perf::PerfCounterData,
};

use crate::utils::StatusCode;

/// State type for route handlers.
pub type S = AppState;

#[derive(Clone)]
pub struct AppState {
    database: Arc<RouterDatabaseReadHandle>,
    write: Arc<RouterDatabaseWriteHandle>,
    config: Arc<Config>,
    simple_backend_state: SimpleBackendAppState,
}

impl AppState {
    pub fn create_app_state(
        database_handle: RouterDatabaseReadHandle,
        write_handle: RouterDatabaseWriteHandle,
        config: Arc<Config>,
        simple_backend_state: SimpleBackendAppState,
    ) -> AppState {
        AppState {
            database: Arc::new(database_handle),
            write: Arc::new(write_handle),
            config,
            simple_backend_state,
        }
    }
}

pub trait ReadData {
    fn read(&self) -> &RouterDatabaseReadHandle;
}

pub trait WriteData {
    /// Handle which can be moved to a task which completes the write
    /// even if the HTTP connection closes.
    fn write_handle(&self) -> Arc<RouterDatabaseWriteHandle>;
}

pub trait GetConfig {
    fn config(&self) -> &Config;
}

pub trait GetAccessTokens {
    /// Database errors are logged and converted to status 500.
    fn access_token_exists(
        &self,
        token: &AccessToken,
    ) -> impl std::future::Future<Output = Result<Option<User>, StatusCode>> + Send;
}

impl ReadData for S {
    fn read(&self) -> &RouterDatabaseReadHandle {
        &self.database
    }
}

impl WriteData for S {
    fn write_handle(&self) -> Arc<RouterDatabaseWriteHandle> {
        self.write.clone()
    }
}

impl GetConfig for S {
    fn config(&self) -> &Config {
        &self.config
    }
}

impl GetAccessTokens for S {
    async fn access_token_exists(&self, token: &AccessToken) -> Result<Option<User>, StatusCode> {
        let user = self
            .database
            .user()
            .user_by_access_token(token.clone())
            .await?;
        Ok(user)
    }
}

impl PerfCounterDataProvider for S {
    fn perf_counter_data(&self) -> &PerfCounterData {
        &self.simple_backend_state.perf_data
    }
}
