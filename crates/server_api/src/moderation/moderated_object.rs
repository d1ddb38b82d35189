use axum::{
    Extension,
    extract::{Path, Query, State},
};
use model::{
    ChangeLogList, ModeratedObject, ModeratedObjectId, ModeratedObjectList, ModeratedObjectsQuery,
    ModerationDecision, ReportList, UpdateModeratedObject, User,
};
use simple_backend::create_counters;

use crate::{
    S,
    app::ReadData,
    create_open_api_router, db_write,
    utils::{Json, StatusCode},
};

const PATH_GET_MODERATED_OBJECTS: &str = "/moderated-objects";

/// Get moderated objects from newest to oldest
///
/// # Access
/// Only global moderators.
#[utoipa::path(
    get,
    path = PATH_GET_MODERATED_OBJECTS,
    params(ModeratedObjectsQuery),
    responses(
        (status = 200, description = "Successfull.", body = ModeratedObjectList),
        (status = 400, description = "Not a global moderator or invalid page."),
        (status = 401, description = "Unauthorized."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_moderated_objects(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Query(query): Query<ModeratedObjectsQuery>,
) -> Result<Json<ModeratedObjectList>, StatusCode> {
    MODERATED_OBJECT.get_moderated_objects.incr();
    let objects = state.read().moderation().list(api_caller, query).await?;
    Ok(objects.into())
}

const PATH_GET_MODERATED_OBJECT: &str = "/moderated-objects/{id}";

#[utoipa::path(
    get,
    path = PATH_GET_MODERATED_OBJECT,
    params(("id" = i64, Path, description = "Moderated object ID")),
    responses(
        (status = 200, description = "Successfull.", body = ModeratedObject),
        (status = 400, description = "API caller can not moderate the object."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Moderated object does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_moderated_object(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(id): Path<ModeratedObjectId>,
) -> Result<Json<ModeratedObject>, StatusCode> {
    MODERATED_OBJECT.get_moderated_object.incr();
    let object = state
        .read()
        .moderation()
        .moderated_object(api_caller, id)
        .await?;
    Ok(object.into())
}

const PATH_PATCH_MODERATED_OBJECT: &str = "/moderated-objects/{id}";

/// Update moderated object category and description.
///
/// Every changed value is recorded to the change log of the object.
/// Values which equal the current values are ignored.
///
/// # Access
/// Global moderators can update all objects. Community moderators and
/// administrators can update objects which target their community or
/// its posts and comments.
#[utoipa::path(
    patch,
    path = PATH_PATCH_MODERATED_OBJECT,
    params(("id" = i64, Path, description = "Moderated object ID")),
    request_body = UpdateModeratedObject,
    responses(
        (status = 200, description = "Successfull.", body = ModeratedObject),
        (status = 400, description = "API caller can not moderate the object or the category does not exist."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Moderated object does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn patch_moderated_object(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(id): Path<ModeratedObjectId>,
    Json(update): Json<UpdateModeratedObject>,
) -> Result<Json<ModeratedObject>, StatusCode> {
    MODERATED_OBJECT.patch_moderated_object.incr();
    let object = db_write!(state, move |cmds| cmds
        .moderation()
        .update(api_caller, id, update))?;
    Ok(object.into())
}

const PATH_GET_MODERATED_OBJECT_REPORTS: &str = "/moderated-objects/{id}/reports";

/// Get reports of the moderated object's target from newest to oldest.
#[utoipa::path(
    get,
    path = PATH_GET_MODERATED_OBJECT_REPORTS,
    params(("id" = i64, Path, description = "Moderated object ID")),
    responses(
        (status = 200, description = "Successfull.", body = ReportList),
        (status = 400, description = "API caller can not moderate the object."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Moderated object does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_moderated_object_reports(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(id): Path<ModeratedObjectId>,
) -> Result<Json<ReportList>, StatusCode> {
    MODERATED_OBJECT.get_moderated_object_reports.incr();
    let reports = state.read().moderation().reports(api_caller, id).await?;
    Ok(reports.into())
}

const PATH_GET_MODERATED_OBJECT_LOGS: &str = "/moderated-objects/{id}/logs";

/// Get change log of the moderated object from oldest to newest.
#[utoipa::path(
    get,
    path = PATH_GET_MODERATED_OBJECT_LOGS,
    params(("id" = i64, Path, description = "Moderated object ID")),
    responses(
        (status = 200, description = "Successfull.", body = ChangeLogList),
        (status = 400, description = "API caller can not moderate the object."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Moderated object does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_moderated_object_logs(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(id): Path<ModeratedObjectId>,
) -> Result<Json<ChangeLogList>, StatusCode> {
    MODERATED_OBJECT.get_moderated_object_logs.incr();
    let logs = state.read().moderation().change_log(api_caller, id).await?;
    Ok(logs.into())
}

const PATH_POST_APPROVE_MODERATED_OBJECT: &str = "/moderated-objects/{id}/approve";

/// Approve pending moderated object.
#[utoipa::path(
    post,
    path = PATH_POST_APPROVE_MODERATED_OBJECT,
    params(("id" = i64, Path, description = "Moderated object ID")),
    responses(
        (status = 200, description = "Successfull.", body = ModeratedObject),
        (status = 400, description = "API caller can not moderate the object or the object is not pending."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Moderated object does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn post_approve_moderated_object(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(id): Path<ModeratedObjectId>,
) -> Result<Json<ModeratedObject>, StatusCode> {
    MODERATED_OBJECT.post_approve_moderated_object.incr();
    let object = db_write!(state, move |cmds| cmds.moderation().decide(
        api_caller,
        id,
        ModerationDecision::Approve
    ))?;
    Ok(object.into())
}

const PATH_POST_REJECT_MODERATED_OBJECT: &str = "/moderated-objects/{id}/reject";

/// Reject pending moderated object.
#[utoipa::path(
    post,
    path = PATH_POST_REJECT_MODERATED_OBJECT,
    params(("id" = i64, Path, description = "Moderated object ID")),
    responses(
        (status = 200, description = "Successfull.", body = ModeratedObject),
        (status = 400, description = "API caller can not moderate the object or the object is not pending."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Moderated object does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn post_reject_moderated_object(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(id): Path<ModeratedObjectId>,
) -> Result<Json<ModeratedObject>, StatusCode> {
    MODERATED_OBJECT.post_reject_moderated_object.incr();
    let object = db_write!(state, move |cmds| cmds.moderation().decide(
        api_caller,
        id,
        ModerationDecision::Reject
    ))?;
    Ok(object.into())
}

create_open_api_router!(
    fn router_moderated_object,
    get_moderated_objects,
    get_moderated_object,
    patch_moderated_object,
    get_moderated_object_reports,
    get_moderated_object_logs,
    post_approve_moderated_object,
    post_reject_moderated_object,
);

create_counters!(
    ModeratedObjectCounters,
    MODERATED_OBJECT,
    MODERATED_OBJECT_COUNTERS_LIST,
    get_moderated_objects,
    get_moderated_object,
    patch_moderated_object,
    get_moderated_object_reports,
    get_moderated_object_logs,
    post_approve_moderated_object,
    post_reject_moderated_object,
);
