use axum::{
    Extension,
    extract::{Path, Query, State},
};
use model::{
    EmojiCountList, NewPostReaction, PostId, PostReaction, PostReactionId, PostReactionList,
    PostReactionsQuery, User,
};
use simple_backend::create_counters;

use crate::{
    S,
    app::ReadData,
    create_open_api_router, db_write,
    utils::{Json, StatusCode},
};

const PATH_GET_POST_REACTIONS: &str = "/posts/{post_id}/reactions";

/// Get post reactions from newest to oldest.
#[utoipa::path(
    get,
    path = PATH_GET_POST_REACTIONS,
    params(("post_id" = i64, Path, description = "Post ID"), PostReactionsQuery),
    responses(
        (status = 200, description = "Successfull.", body = PostReactionList),
        (status = 400, description = "Invalid page or unknown emoji."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Post does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_post_reactions(
    State(state): State<S>,
    Path(post_id): Path<PostId>,
    Query(query): Query<PostReactionsQuery>,
) -> Result<Json<PostReactionList>, StatusCode> {
    POST_REACTION.get_post_reactions.incr();
    let reactions = state.read().post().reactions(post_id, query).await?;
    Ok(reactions.into())
}

const PATH_PUT_POST_REACTION: &str = "/posts/{post_id}/reactions";

/// React to a post. A user has at most one reaction per post, so
/// the new reaction replaces the previous one.
#[utoipa::path(
    put,
    path = PATH_PUT_POST_REACTION,
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body = NewPostReaction,
    responses(
        (status = 200, description = "Successfull.", body = PostReaction),
        (status = 400, description = "Emoji is not a reaction emoji of the group."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Post does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn put_post_reaction(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path(post_id): Path<PostId>,
    Json(reaction): Json<NewPostReaction>,
) -> Result<Json<PostReaction>, StatusCode> {
    POST_REACTION.put_post_reaction.incr();
    let reaction = db_write!(state, move |cmds| cmds
        .post()
        .react(api_caller, post_id, reaction))?;
    Ok(reaction.into())
}

const PATH_DELETE_POST_REACTION: &str = "/posts/{post_id}/reactions/{reaction_id}";

/// Delete own post reaction.
#[utoipa::path(
    delete,
    path = PATH_DELETE_POST_REACTION,
    params(
        ("post_id" = i64, Path, description = "Post ID"),
        ("reaction_id" = i64, Path, description = "Reaction ID"),
    ),
    responses(
        (status = 200, description = "Successfull."),
        (status = 400, description = "Reaction is not API caller's reaction."),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Post or reaction does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn delete_post_reaction(
    State(state): State<S>,
    Extension(api_caller): Extension<User>,
    Path((post_id, reaction_id)): Path<(PostId, PostReactionId)>,
) -> Result<(), StatusCode> {
    POST_REACTION.delete_post_reaction.incr();
    db_write!(state, move |cmds| cmds
        .post()
        .delete_reaction(api_caller, post_id, reaction_id))?;
    Ok(())
}

const PATH_GET_POST_EMOJI_COUNTS: &str = "/posts/{post_id}/reactions/emoji-counts";

#[utoipa::path(
    get,
    path = PATH_GET_POST_EMOJI_COUNTS,
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Successfull.", body = EmojiCountList),
        (status = 401, description = "Unauthorized."),
        (status = 404, description = "Post does not exist."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_post_emoji_counts(
    State(state): State<S>,
    Path(post_id): Path<PostId>,
) -> Result<Json<EmojiCountList>, StatusCode> {
    POST_REACTION.get_post_emoji_counts.incr();
    let counts = state.read().post().emoji_counts(post_id).await?;
    Ok(counts.into())
}

create_open_api_router!(
    fn router_post_reaction,
    get_post_reactions,
    put_post_reaction,
    delete_post_reaction,
    get_post_emoji_counts,
);

create_counters!(
    PostReactionCounters,
    POST_REACTION,
    POST_REACTION_COUNTERS_LIST,
    get_post_reactions,
    put_post_reaction,
    delete_post_reaction,
    get_post_emoji_counts,
);
