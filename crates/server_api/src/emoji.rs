//! Emoji routes

use axum::extract::State;
use model::{EmojiGroupList, ReactionEmojiGroupList};
use simple_backend::create_counters;

use crate::{
    S,
    app::ReadData,
    create_open_api_router,
    utils::{Json, StatusCode},
};

const PATH_GET_EMOJI_GROUPS: &str = "/emoji-groups";

/// Get emoji groups which are not post reaction groups.
#[utoipa::path(
    get,
    path = PATH_GET_EMOJI_GROUPS,
    responses(
        (status = 200, description = "Successfull.", body = EmojiGroupList),
        (status = 401, description = "Unauthorized."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_emoji_groups(
    State(state): State<S>,
) -> Result<Json<EmojiGroupList>, StatusCode> {
    EMOJI.get_emoji_groups.incr();
    let groups = state.read().emoji().emoji_groups().await?;
    Ok(groups.into())
}

const PATH_GET_REACTION_EMOJI_GROUPS: &str = "/emoji-groups/reactions";

/// Get emoji groups which emojis can be used as post reactions.
#[utoipa::path(
    get,
    path = PATH_GET_REACTION_EMOJI_GROUPS,
    responses(
        (status = 200, description = "Successfull.", body = ReactionEmojiGroupList),
        (status = 401, description = "Unauthorized."),
        (status = 500, description = "Internal server error."),
    ),
    security(("access_token" = [])),
)]
pub async fn get_reaction_emoji_groups(
    State(state): State<S>,
) -> Result<Json<ReactionEmojiGroupList>, StatusCode> {
    EMOJI.get_reaction_emoji_groups.incr();
    let groups = state.read().emoji().reaction_emoji_groups().await?;
    Ok(groups.into())
}

create_open_api_router!(fn router_emoji, get_emoji_groups, get_reaction_emoji_groups,);

create_counters!(
    EmojiCounters,
    EMOJI,
    EMOJI_COUNTERS_LIST,
    get_emoji_groups,
    get_reaction_emoji_groups,
);
