use axum::{Extension, extract::State};
use model::User;
use simple_backend::{app::PerfCounterDataProvider, create_counters};
use simple_backend_model::PerfCounterQueryResult;
use tracing::warn;

use crate::{
    S, create_open_api_router,
    utils::{Json, StatusCode},
};

const PATH_GET_PERF_COUNTERS: &str = "/perf/counters";

/// Get request counters of all route handlers
///
/// # Access
/// Only global moderators.
#[utoipa::path(
    get,
    path = PATH_GET_PERF_COUNTERS,
    responses(
        (status = 200, description = "Get was successfull.", body = PerfCounterQueryResult),
        (status = 401, description = "Unauthorized."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_perf_counters(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
) -> Result<Json<PerfCounterQueryResult>, StatusCode> {
    COMMON_ADMIN.get_perf_counters.incr();
    if api_caller.global_moderator {
        Ok(state.perf_counter_data().query().into())
    } else {
        warn!("Perf counter access denied, user: {}", api_caller.id);
        Err(StatusCode::UNAUTHORIZED)
    }
}

create_open_api_router!(fn router_perf, get_perf_counters,);

create_counters!(
    CommonAdminCounters,
    COMMON_ADMIN,
    COMMON_ADMIN_COUNTERS_LIST,
    get_perf_counters,
);
