#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod api_doc;
pub mod app;
pub mod perf;

use std::sync::Arc;

use api_doc::ApiDoc;
use app::PublicApp;
use axum::Router;
use config::Config;
use perf::ALL_COUNTERS;
use server_api::app::AppState;
use server_data::db_manager::DatabaseManager;
use simple_backend::{BusinessLogic, app::SimpleBackendAppState, perf::AllCounters};
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

pub struct SocialBackendServer {
    config: Arc<Config>,
}

impl SocialBackendServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: config.into(),
        }
    }

    pub async fn run(self) {
        let logic = SocialBackendBusinessLogic {
            config: self.config.clone(),
            database_manager: None,
        };
        let server = simple_backend::SimpleBackend::new(logic, self.config.simple_backend_arc());
        server.run().await;
    }
}

pub struct SocialBackendBusinessLogic {
    config: Arc<Config>,
    database_manager: Option<DatabaseManager>,
}

#[async_trait::async_trait]
impl BusinessLogic for SocialBackendBusinessLogic {
    type AppState = AppState;

    fn all_counters(&self) -> AllCounters {
        ALL_COUNTERS
    }

    fn public_api_router(&self, state: &Self::AppState) -> Router {
        PublicApp::new(state.clone()).create_router()
    }

    fn create_swagger_ui(&self) -> Option<SwaggerUi> {
        Some(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::all()))
    }

    async fn on_before_server_start(
        &mut self,
        simple_state: SimpleBackendAppState,
    ) -> Self::AppState {
        let (database_manager, router_database_handle, router_database_write_handle) =
            DatabaseManager::new(self.config.clone())
                .await
                .expect("Database init failed");

        router_database_write_handle
            .reference_data()
            .sync_config_to_database()
            .await
            .expect("Moderation categories and reaction emojis sync failed");

        let app_state = AppState::create_app_state(
            router_database_handle,
            router_database_write_handle,
            self.config.clone(),
            simple_state,
        );

        self.database_manager = Some(database_manager);
        app_state
    }

    async fn on_after_server_quit(self) {
        if let Some(database_manager) = self.database_manager {
            database_manager.close().await;
            info!("Databases closed");
        }
    }
}
