use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::macros::define_db_id;

define_db_id!(ModerationCategoryId);

#[derive(
    Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema, Queryable, Selectable, Insertable, AsChangeset,
)]
#[diesel(table_name = crate::schema::moderation_category)]
#[diesel(check_for_backend(crate::Db))]
pub struct ModerationCategory {
    pub id: ModerationCategoryId,
    pub name: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ModerationCategoryList {
    pub categories: Vec<ModerationCategory>,
}
