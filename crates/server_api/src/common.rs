//! Common routes

use model::HealthStatus;
use simple_backend::create_counters;

use crate::{create_open_api_router, utils::Json};

pub const PATH_GET_HEALTH: &str = "/health";

/// Check that the server is running.
#[utoipa::path(
    get,
    path = PATH_GET_HEALTH,
    security(),
    responses(
        (status = 200, description = "Server is running.", body = HealthStatus),
    )
)]
pub async fn get_health() -> Json<HealthStatus> {
    COMMON.get_health.incr();
    HealthStatus::ok().into()
}

create_open_api_router!(fn router_common, get_health,);

create_counters!(CommonCounters, COMMON, COMMON_COUNTERS_LIST, get_health,);
