#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod app;
pub mod perf;

use std::{net::SocketAddr, sync::Arc};

use app::SimpleBackendAppState;
use async_trait::async_trait;
use axum::Router;
use perf::{AllCounters, PerfCounterData};
use simple_backend_config::SimpleBackendConfig;
use tokio::{
    net::TcpListener,
    signal::{
        self,
        unix::{Signal, SignalKind},
    },
    sync::broadcast,
    task::JoinHandle,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;
use utoipa_swagger_ui::SwaggerUi;

/// Drop this when quit starts
pub type ServerQuitHandle = broadcast::Sender<()>;

/// Use resubscribe() for cloning.
pub type ServerQuitWatcher = broadcast::Receiver<()>;

#[async_trait]
pub trait BusinessLogic: Sized + Send + Sync + 'static {
    type AppState: Clone + Send + Sync + 'static;

    /// Access performance counter list
    fn all_counters(&self) -> AllCounters {
        &[]
    }

    /// Create router for public API
    fn public_api_router(&self, state: &Self::AppState) -> Router;

    /// Swagger UI which is added to the public API router
    /// only if debug mode is enabled.
    fn create_swagger_ui(&self) -> Option<SwaggerUi> {
        None
    }

    /// Callback for doing something before server start
    ///
    /// For example databases can be opened here.
    async fn on_before_server_start(&mut self, state: SimpleBackendAppState) -> Self::AppState;

    /// Callback for doing something after server has been started
    async fn on_after_server_start(&mut self) {}

    /// Callback for doing something before server quit starts
    async fn on_before_server_quit(&mut self) {}

    /// Callback for doing something after server has quit
    ///
    /// For example databases can be closed here.
    async fn on_after_server_quit(self) {}
}

pub struct SimpleBackend<T: BusinessLogic> {
    logic: T,
    config: Arc<SimpleBackendConfig>,
}

impl<T: BusinessLogic> SimpleBackend<T> {
    pub fn new(logic: T, config: Arc<SimpleBackendConfig>) -> Self {
        Self { logic, config }
    }

    pub async fn run(mut self) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
        if self.config.log_timestamp() {
            subscriber.init();
        } else {
            subscriber.without_time().init();
        }

        info!("Backend version: {}", self.config.backend_semver_version());

        if self.config.debug_mode() {
            warn!("Debug mode is enabled");
        }

        let mut terminate_signal =
            signal::unix::signal(SignalKind::terminate()).expect("Terminate signal init failed");

        let (server_quit_handle, server_quit_watcher) = broadcast::channel(1);

        let perf_data = Arc::new(PerfCounterData::new(self.logic.all_counters()));
        let simple_state = SimpleBackendAppState::new(self.config.clone(), perf_data);

        let state = self.logic.on_before_server_start(simple_state).await;

        let server_task = self
            .create_public_api_server_task(server_quit_watcher.resubscribe(), &state)
            .await;

        self.logic.on_after_server_start().await;

        Self::wait_quit_signal(&mut terminate_signal).await;
        info!("Server quit signal received");

        self.logic.on_before_server_quit().await;

        info!("Server quit started");

        drop(server_quit_handle);
        drop(server_quit_watcher);

        // Wait until all tasks quit
        server_task
            .await
            .expect("Public API server task panic detected");

        drop(state);
        self.logic.on_after_server_quit().await;

        info!("Server quit done");
    }

    pub async fn wait_quit_signal(terminate_signal: &mut Signal) {
        tokio::select! {
            _ = terminate_signal.recv() => {}
            result = signal::ctrl_c() => {
                match result {
                    Ok(()) => (),
                    Err(e) => error!("Failed to listen CTRL+C. Error: {}", e),
                }
            }
        }
    }

    /// Public API. This can have WAN access.
    pub async fn create_public_api_server_task(
        &self,
        quit_notification: ServerQuitWatcher,
        state: &T::AppState,
    ) -> JoinHandle<()> {
        let router = self.logic.public_api_router(state);
        let router = if self.config.debug_mode() {
            let router = if let Some(swagger) = self.logic.create_swagger_ui() {
                router.merge(swagger)
            } else {
                router
            };
            router.route_layer(TraceLayer::new_for_http())
        } else {
            router
        };

        let addr = self.config.public_api();
        info!("Public API is available on {}", addr);

        self.create_server_task_no_tls(router, addr, "Public API", quit_notification)
            .await
    }

    pub async fn create_server_task_no_tls(
        &self,
        router: Router,
        addr: SocketAddr,
        name_for_log_message: &'static str,
        mut quit_notification: ServerQuitWatcher,
    ) -> JoinHandle<()> {
        let listener = TcpListener::bind(addr)
            .await
            .expect("Address not available");

        tokio::spawn(async move {
            let server = axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async move {
                let _ = quit_notification.recv().await;
            });

            match server.await {
                Ok(()) => {
                    info!("{name_for_log_message} server future returned Ok()");
                }
                Err(e) => {
                    error!("{name_for_log_message} server future returned error: {}", e);
                }
            }
        })
    }
}
