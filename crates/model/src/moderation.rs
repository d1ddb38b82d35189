use diesel::{deserialize::FromSqlRow, expression::AsExpression, sql_types::SmallInt};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use simple_backend_model::SimpleDieselEnum;
use utoipa::ToSchema;

use crate::{CommunityId, PostCommentId, PostId, UserId};

mod authorization;
mod category;
mod change_log;
mod moderated_object;
mod report;

pub use authorization::*;
pub use category::*;
pub use change_log::*;
pub use moderated_object::*;
pub use report::*;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    ToSchema,
    TryFromPrimitive,
    SimpleDieselEnum,
    FromSqlRow,
    AsExpression,
)]
#[diesel(sql_type = SmallInt)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum TargetKind {
    User = 0,
    Community = 1,
    Post = 2,
    Comment = 3,
}

/// Reference to something which can be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: i64,
}

impl TargetRef {
    pub fn new(kind: TargetKind, id: i64) -> Self {
        Self { kind, id }
    }

    pub fn user(id: UserId) -> Self {
        Self::new(TargetKind::User, id.0)
    }

    pub fn community(id: CommunityId) -> Self {
        Self::new(TargetKind::Community, id.0)
    }

    pub fn post(id: PostId) -> Self {
        Self::new(TargetKind::Post, id.0)
    }

    pub fn comment(id: PostCommentId) -> Self {
        Self::new(TargetKind::Comment, id.0)
    }
}
