use axum::{Extension, extract::State};
use model::{ModerationCategoryList, NewReport, ReportResult, User};
use simple_backend::create_counters;

use crate::{
    S,
    app::ReadData,
    create_open_api_router, db_write,
    utils::{Json, StatusCode},
};

const PATH_POST_REPORT: &str = "/moderation/reports";

/// Report user, community, post or post comment.
///
/// The first report of a target creates a pending moderated object for
/// the target. If the API caller has already reported the target,
/// the earlier report is returned and `already_reported` is true.
#[utoipa::path(
    post,
    path = PATH_POST_REPORT,
    request_body = NewReport,
    responses(
        (status = 200, description = "Successfull.", body = ReportResult),
        (status = 400, description = "Target or category does not exist or the report is invalid."),
        (status = 401, description = "Unauthorized."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn post_report(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Json(report): Json<NewReport>,
) -> Result<Json<ReportResult>, StatusCode> {
    MODERATION_REPORT.post_report.incr();

    let result = db_write!(state, move |cmds| cmds
        .moderation()
        .report(api_caller, report))?;

    Ok(result.into())
}

const PATH_GET_MODERATION_CATEGORIES: &str = "/moderation/categories";

#[utoipa::path(
    get,
    path = PATH_GET_MODERATION_CATEGORIES,
    responses(
        (status = 200, description = "Successfull.", body = ModerationCategoryList),
        (status = 401, description = "Unauthorized."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_moderation_categories(
    State(state): State<S>,
) -> Result<Json<ModerationCategoryList>, StatusCode> {
    MODERATION_REPORT.get_moderation_categories.incr();
    let categories = state.read().moderation().categories().await?;
    Ok(categories.into())
}

create_open_api_router!(
    fn router_report,
    post_report,
    get_moderation_categories,
);

create_counters!(
    ModerationReportCounters,
    MODERATION_REPORT,
    MODERATION_REPORT_COUNTERS_LIST,
    post_report,
    get_moderation_categories,
);
