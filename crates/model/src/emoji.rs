use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::macros::define_db_id;

define_db_id!(EmojiGroupId);
define_db_id!(EmojiId);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema, Queryable, Selectable)]
#[diesel(table_name = crate::schema::emoji)]
#[diesel(check_for_backend(crate::Db))]
pub struct Emoji {
    pub id: EmojiId,
    pub keyword: String,
    /// Image URL
    pub image: String,
    #[diesel(column_name = emoji_order)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::emoji_group)]
#[diesel(check_for_backend(crate::Db))]
pub struct EmojiGroupRaw {
    pub id: EmojiGroupId,
    pub keyword: String,
    pub color: String,
    #[diesel(column_name = group_order)]
    pub order: i32,
    pub is_reaction_group: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EmojiGroup {
    pub id: EmojiGroupId,
    pub keyword: String,
    pub color: String,
    pub order: i32,
    /// Emojis in ascending `order`.
    pub emojis: Vec<Emoji>,
}

impl EmojiGroup {
    pub fn new(raw: EmojiGroupRaw, emojis: Vec<Emoji>) -> Self {
        Self {
            id: raw.id,
            keyword: raw.keyword,
            color: raw.color,
            order: raw.order,
            emojis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ReactionEmojiGroupList {
    pub groups: Vec<EmojiGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EmojiGroupList {
    pub groups: Vec<EmojiGroup>,
}
