use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::macros::define_db_id;

define_db_id!(UserId);

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::user_account)]
#[diesel(check_for_backend(crate::Db))]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub global_moderator: bool,
    pub avatar: Option<String>,
}

/// Public user info which is included in comments and reactions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema, Queryable, Selectable)]
#[diesel(table_name = crate::schema::user_account)]
#[diesel(check_for_backend(crate::Db))]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub avatar: Option<String>,
}

/// Value of the `x-access-token` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    pub const HEADER_NAME: &'static str = "x-access-token";

    pub fn new(token: String) -> Self {
        Self { token }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}
