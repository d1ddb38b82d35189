use axum::{
    Extension,
    extract::{Path, Query, State},
};
use model::{NewPostComment, PageQuery, PostComment, PostCommentId, PostCommentList, PostId, User};
use simple_backend::create_counters;

use crate::{
    S,
    app::ReadData,
    create_open_api_router, db_write,
    utils::{Json, StatusCode},
};

const PATH_GET_POST_COMMENTS: &str = "/posts/{post_id}/comments";

/// Get post comments from newest to oldest.
///
/// Commenter info contains the commenter's community role if the post
/// is a community post.
#[utoipa::path(
    get,
    path = PATH_GET_POST_COMMENTS,
    params(("post_id" = i64, Path, description = "Post ID"), PageQuery),
    responses(
        (status = 200, description = "Successfull.", body = PostCommentList),
        (status = 400, description = "Invalid page."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Post does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_post_comments(
    State(state): State<S>,
    Path(post_id): Path<PostId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PostCommentList>, StatusCode> {
    POST_COMMENT.get_post_comments.incr();
    let comments = state.read().post().comments(post_id, query).await?;
    Ok(comments.into())
}

const PATH_POST_POST_COMMENT: &str = "/posts/{post_id}/comments";

#[utoipa::path(
    post,
    path = PATH_POST_POST_COMMENT,
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body = NewPostComment,
    responses(
        (status = 200, description = "Successfull.", body = PostComment),
        (status = 400, description = "Comment text is empty or too long."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Post does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn post_post_comment(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(post_id): Path<PostId>,
    Json(comment): Json<NewPostComment>,
) -> Result<Json<PostComment>, StatusCode> {
    POST_COMMENT.post_post_comment.incr();
    let comment = db_write!(state, move |cmds| cmds
        .post()
        .comment(api_caller, post_id, comment))?;
    Ok(comment.into())
}

const PATH_DELETE_POST_COMMENT: &str = "/posts/{post_id}/comments/{comment_id}";

/// Delete post comment.
///
/// # Access
/// Commenter and post creator.
#[utoipa::path(
    delete,
    path = PATH_DELETE_POST_COMMENT,
    params(
        ("post_id" = i64, Path, description = "Post ID"),
        ("comment_id" = i64, Path, description = "Comment ID"),
    ),
    responses(
        (status = 200, description = "Successfull."),
        (status = 400, description = "API caller can not delete the comment."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Post or comment does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn delete_post_comment(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path((post_id, comment_id)): Path<(PostId, PostCommentId)>,
) -> Result<(), StatusCode> {
    POST_COMMENT.delete_post_comment.incr();
    db_write!(state, move |cmds| cmds
        .post()
        .delete_comment(api_caller, post_id, comment_id))?;
    Ok(())
}

create_open_api_router!(
    fn router_post_comment,
    get_post_comments,
    post_post_comment,
    delete_post_comment,
);

create_counters!(
    PostCommentCounters,
    POST_COMMENT,
    POST_COMMENT_COUNTERS_LIST,
    get_post_comments,
    post_post_comment,
    delete_post_comment,
);
