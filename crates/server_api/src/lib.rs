#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! HTTP API types and request handlers.

use utoipa::OpenApi;

use self::utils::SecurityApiAccessTokenDefault;

// Routes
pub mod common;
pub mod common_admin;
pub mod emoji;
pub mod moderation;
pub mod post;

pub mod app;
pub mod utils;

pub use app::S;
pub use server_data::{DataError, result};

// API docs

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        simple_backend_model::UnixTime,
    )),
    modifiers(&SecurityApiAccessTokenDefault),
)]
pub struct ApiDocCommon;

/// Macro for writing data with different code style.
/// Makes "async move" and "await" keywords unnecessary.
/// The macro "closure" should work like a real closure.
///
/// This macro will guarantee that contents of the closure will run
/// completely even if HTTP connection fails when closure is running.
///
/// Converts crate::DataError to crate::utils::StatusCode.
///
/// Example usage:
///
/// ```ignore
/// pub async fn axum_route_handler(
///     state: S,
///     user: User,
///     id: ModeratedObjectId,
/// ) -> std::result::Result<(), StatusCode> {
///     db_write!(state, move |cmds| cmds.moderation().decide(user, id, ModerationDecision::Approve))?;
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! db_write {
    ($state:expr, move |$cmds:ident| $commands:expr) => {{
        let handle = $crate::app::WriteData::write_handle(&$state);
        let task = tokio::spawn(async move {
            let $cmds = &*handle;
            let r: $crate::result::Result<_, $crate::DataError> = ($commands).await;
            r
        });

        use $crate::utils::ConvertDataErrorToStatusCode;
        match task.await {
            Ok(r) => r.convert_data_error_to_status_code(),
            Err(e) => {
                tracing::error!("Database write task failed: {}", e);
                Err($crate::utils::StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }};
}

/// Create function which returns [utoipa_axum::router::OpenApiRouter]
/// containing the listed route handlers.
#[macro_export]
macro_rules! create_open_api_router {
    (
        fn $fn_name:ident,
        $(
            $path:ident,
        )*
    ) => {
        pub fn $fn_name(state: $crate::S) -> utoipa_axum::router::OpenApiRouter {
            utoipa_axum::router::OpenApiRouter::new()
            $(
                .merge(utoipa_axum::router::OpenApiRouter::new().routes(utoipa_axum::routes!($path)))
            )*
            .with_state(state)
        }
    };
}
