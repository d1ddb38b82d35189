use std::{fmt, str::FromStr};

use diesel::{
    deserialize::FromSqlRow, expression::AsExpression, prelude::*, sql_types::SmallInt,
};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use simple_backend_model::SimpleDieselEnum;
use utoipa::{IntoParams, ToSchema};

use crate::{
    EnumParsingError, FieldChange, ModerationCategoryId, PageQuery, TargetKind, TargetRef,
    UnixTime, macros::define_db_id,
};

define_db_id!(ModeratedObjectId);

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
pub enum ModeratedObjectStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl ModeratedObjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ModeratedObjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeratedObjectStatus {
    type Err = EnumParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(EnumParsingError::ParsingError(other.to_string())),
        }
    }
}

/// Moderation decision for pending moderated object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    pub fn new_status(&self) -> ModeratedObjectStatus {
        match self {
            Self::Approve => ModeratedObjectStatus::Approved,
            Self::Reject => ModeratedObjectStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::moderated_object)]
#[diesel(check_for_backend(crate::Db))]
pub struct ModeratedObjectRaw {
    pub id: ModeratedObjectId,
    pub target_kind: TargetKind,
    pub target_id: i64,
    pub category_id: ModerationCategoryId,
    pub description: Option<String>,
    pub status: ModeratedObjectStatus,
    pub creation_unix_time: UnixTime,
}

/// Moderation state of one reported target. There is at most one
/// moderated object per target.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ModeratedObject {
    pub id: ModeratedObjectId,
    pub target: TargetRef,
    pub category_id: ModerationCategoryId,
    pub description: Option<String>,
    pub status: ModeratedObjectStatus,
    pub created: UnixTime,
}

impl From<ModeratedObjectRaw> for ModeratedObject {
    fn from(value: ModeratedObjectRaw) -> Self {
        Self {
            id: value.id,
            target: TargetRef::new(value.target_kind, value.target_id),
            category_id: value.category_id,
            description: value.description,
            status: value.status,
            created: value.creation_unix_time,
        }
    }
}

impl ModeratedObject {
    /// Field changes which applying `update` would cause. Fields which
    /// are missing from `update` or equal to the current value do not
    /// produce a change.
    pub fn changes(&self, update: &UpdateModeratedObject) -> Vec<FieldChange> {
        let mut changes = vec![];

        if let Some(new) = update.category_id {
            if new != self.category_id {
                changes.push(FieldChange::Category {
                    from: self.category_id,
                    to: new,
                });
            }
        }

        if let Some(new) = &update.description {
            if self.description.as_ref() != Some(new) {
                changes.push(FieldChange::Description {
                    from: self.description.clone(),
                    to: new.clone(),
                });
            }
        }

        changes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct UpdateModeratedObject {
    pub description: Option<String>,
    pub category_id: Option<ModerationCategoryId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize, IntoParams)]
pub struct ModeratedObjectsQuery {
    /// Return only objects with this status.
    pub status: Option<ModeratedObjectStatus>,
    /// Return only objects with ID smaller than this.
    pub max_id: Option<i64>,
    /// Maximum object count. Default is 10.
    pub count: Option<i64>,
}

impl ModeratedObjectsQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery::new(self.max_id, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ModeratedObjectList {
    /// Objects from newest to oldest.
    pub objects: Vec<ModeratedObject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object() -> ModeratedObject {
        ModeratedObject {
            id: ModeratedObjectId::new(1),
            target: TargetRef::new(TargetKind::User, 10),
            category_id: ModerationCategoryId::new(1),
            description: None,
            status: ModeratedObjectStatus::Pending,
            created: UnixTime::new(0),
        }
    }

    #[test]
    fn empty_update_has_no_changes() {
        assert!(object().changes(&UpdateModeratedObject::default()).is_empty());
    }

    #[test]
    fn equal_values_have_no_changes() {
        let mut current = object();
        current.description = Some("spam".to_string());
        let update = UpdateModeratedObject {
            description: Some("spam".to_string()),
            category_id: Some(ModerationCategoryId::new(1)),
        };
        assert!(current.changes(&update).is_empty());
    }

    #[test]
    fn unset_description_change_starts_from_none() {
        let update = UpdateModeratedObject {
            description: Some("new".to_string()),
            category_id: None,
        };
        assert_eq!(
            object().changes(&update),
            vec![FieldChange::Description {
                from: None,
                to: "new".to_string()
            }]
        );
    }

    #[test]
    fn both_fields_change() {
        let update = UpdateModeratedObject {
            description: Some("d".to_string()),
            category_id: Some(ModerationCategoryId::new(2)),
        };
        let changes = object().changes(&update);
        assert_eq!(changes.len(), 2);
        assert_eq!(
            changes[0],
            FieldChange::Category {
                from: ModerationCategoryId::new(1),
                to: ModerationCategoryId::new(2),
            }
        );
    }

    #[test]
    fn status_string_conversion() {
        for status in [
            ModeratedObjectStatus::Pending,
            ModeratedObjectStatus::Approved,
            ModeratedObjectStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ModeratedObjectStatus>().unwrap(), status);
        }
        assert!("unknown".parse::<ModeratedObjectStatus>().is_err());
    }
}
