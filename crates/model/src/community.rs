use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{UserId, macros::define_db_id};

define_db_id!(CommunityId);

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::community)]
#[diesel(check_for_backend(crate::Db))]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub creator_id: UserId,
}

/// Staff flags of a community member.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema, Queryable, Selectable,
)]
#[diesel(table_name = crate::schema::community_membership)]
#[diesel(check_for_backend(crate::Db))]
pub struct CommunityRole {
    pub is_administrator: bool,
    pub is_moderator: bool,
}

impl CommunityRole {
    pub const MEMBER: Self = Self {
        is_administrator: false,
        is_moderator: false,
    };

    pub const MODERATOR: Self = Self {
        is_administrator: false,
        is_moderator: true,
    };

    pub const ADMINISTRATOR: Self = Self {
        is_administrator: true,
        is_moderator: false,
    };

    /// Administrators and moderators are community staff.
    pub fn is_staff(&self) -> bool {
        self.is_administrator || self.is_moderator
    }
}
