use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    CommunityId, CommunityRole, Emoji, EmojiGroupId, EmojiId, PageQuery, UnixTime, UserId,
    UserSummary, macros::define_db_id,
};

define_db_id!(PostId);
define_db_id!(PostCommentId);
define_db_id!(PostReactionId);

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::post)]
#[diesel(check_for_backend(crate::Db))]
pub struct Post {
    pub id: PostId,
    pub creator_id: UserId,
    /// Posts without community are timeline posts.
    pub community_id: Option<CommunityId>,
    pub text: Option<String>,
    pub creation_unix_time: UnixTime,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::post_comment)]
#[diesel(check_for_backend(crate::Db))]
pub struct PostCommentRaw {
    pub id: PostCommentId,
    pub post_id: PostId,
    pub commenter_id: UserId,
    pub text: String,
    pub creation_unix_time: UnixTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PostCommenter {
    pub id: UserId,
    pub username: String,
    pub avatar: Option<String>,
    /// Commenter's staff flags in the post's community. Missing for
    /// timeline posts and for commenters who are not members.
    pub community_membership: Option<CommunityRole>,
}

impl PostCommenter {
    pub fn new(user: UserSummary, community_membership: Option<CommunityRole>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            avatar: user.avatar,
            community_membership,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PostComment {
    pub id: PostCommentId,
    pub text: String,
    pub created: UnixTime,
    pub commenter: PostCommenter,
}

impl PostComment {
    pub fn new(raw: PostCommentRaw, commenter: PostCommenter) -> Self {
        Self {
            id: raw.id,
            text: raw.text,
            created: raw.creation_unix_time,
            commenter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PostCommentList {
    /// Comments from newest to oldest.
    pub comments: Vec<PostComment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct NewPostComment {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::post_reaction)]
#[diesel(check_for_backend(crate::Db))]
pub struct PostReactionRaw {
    pub id: PostReactionId,
    pub post_id: PostId,
    pub reactor_id: UserId,
    pub emoji_id: EmojiId,
    pub creation_unix_time: UnixTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PostReaction {
    pub id: PostReactionId,
    pub created: UnixTime,
    pub emoji: Emoji,
    pub reactor: UserSummary,
}

impl PostReaction {
    pub fn new(raw: PostReactionRaw, emoji: Emoji, reactor: UserSummary) -> Self {
        Self {
            id: raw.id,
            created: raw.creation_unix_time,
            emoji,
            reactor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PostReactionList {
    /// Reactions from newest to oldest.
    pub reactions: Vec<PostReaction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct NewPostReaction {
    pub emoji_id: EmojiId,
    /// Reaction emoji group which contains the emoji.
    pub group_id: EmojiGroupId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize, IntoParams)]
pub struct PostReactionsQuery {
    /// Return only reactions with ID smaller than this.
    pub max_id: Option<i64>,
    /// Maximum reaction count. Default is 10.
    pub count: Option<i64>,
    /// Return only reactions with this emoji.
    pub emoji_id: Option<i64>,
}

impl PostReactionsQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery::new(self.max_id, self.count)
    }

    pub fn emoji(&self) -> Option<EmojiId> {
        self.emoji_id.map(EmojiId::new)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EmojiCount {
    pub emoji: Emoji,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EmojiCountList {
    /// Counts in descending order. Emojis without reactions are not
    /// included.
    pub counts: Vec<EmojiCount>,
}
