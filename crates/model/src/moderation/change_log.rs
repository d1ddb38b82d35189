use diesel::{
    deserialize::FromSqlRow, expression::AsExpression, prelude::*, sql_types::SmallInt,
};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use simple_backend_model::SimpleDieselEnum;
use utoipa::ToSchema;

use crate::{
    EnumParsingError, ModeratedObjectId, ModeratedObjectStatus, ModerationCategoryId, UnixTime,
    UserId, macros::define_db_id,
};

define_db_id!(ChangeLogEntryId);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    TryFromPrimitive,
    SimpleDieselEnum,
    FromSqlRow,
    AsExpression,
)]
#[diesel(sql_type = SmallInt)]
#[repr(i16)]
pub enum ChangedField {
    Category = 0,
    Description = 1,
    Status = 2,
}

/// One changed field of a moderated object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FieldChange {
    Category {
        from: ModerationCategoryId,
        to: ModerationCategoryId,
    },
    Description {
        /// Missing when the description was not set.
        from: Option<String>,
        to: String,
    },
    Status {
        from: ModeratedObjectStatus,
        to: ModeratedObjectStatus,
    },
}

impl FieldChange {
    pub fn field(&self) -> ChangedField {
        match self {
            Self::Category { .. } => ChangedField::Category,
            Self::Description { .. } => ChangedField::Description,
            Self::Status { .. } => ChangedField::Status,
        }
    }

    /// Values for database columns `changed_from` and `changed_to`.
    pub fn to_db_values(&self) -> (Option<String>, Option<String>) {
        match self {
            Self::Category { from, to } => (Some(from.to_string()), Some(to.to_string())),
            Self::Description { from, to } => (from.clone(), Some(to.clone())),
            Self::Status { from, to } => {
                (Some(from.as_str().to_string()), Some(to.as_str().to_string()))
            }
        }
    }

    pub fn from_db_values(
        field: ChangedField,
        changed_from: Option<String>,
        changed_to: Option<String>,
    ) -> Result<Self, EnumParsingError> {
        fn required(value: Option<String>) -> Result<String, EnumParsingError> {
            value.ok_or_else(|| EnumParsingError::ParsingError("missing value".to_string()))
        }

        fn category(value: Option<String>) -> Result<ModerationCategoryId, EnumParsingError> {
            let value = required(value)?;
            value
                .parse::<i64>()
                .map(ModerationCategoryId::new)
                .map_err(|_| EnumParsingError::ParsingError(value))
        }

        fn status(value: Option<String>) -> Result<ModeratedObjectStatus, EnumParsingError> {
            required(value)?.parse()
        }

        let change = match field {
            ChangedField::Category => Self::Category {
                from: category(changed_from)?,
                to: category(changed_to)?,
            },
            ChangedField::Description => Self::Description {
                from: changed_from,
                to: required(changed_to)?,
            },
            ChangedField::Status => Self::Status {
                from: status(changed_from)?,
                to: status(changed_to)?,
            },
        };

        Ok(change)
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::moderated_object_change_log)]
#[diesel(check_for_backend(crate::Db))]
pub struct ChangeLogEntryRaw {
    pub id: ChangeLogEntryId,
    pub moderated_object_id: ModeratedObjectId,
    pub actor_id: UserId,
    pub field: ChangedField,
    pub changed_from: Option<String>,
    pub changed_to: Option<String>,
    pub creation_unix_time: UnixTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ChangeLogEntry {
    pub id: ChangeLogEntryId,
    pub moderated_object_id: ModeratedObjectId,
    pub actor_id: UserId,
    pub change: FieldChange,
    pub created: UnixTime,
}

impl TryFrom<ChangeLogEntryRaw> for ChangeLogEntry {
    type Error = EnumParsingError;

    fn try_from(value: ChangeLogEntryRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            moderated_object_id: value.moderated_object_id,
            actor_id: value.actor_id,
            change: FieldChange::from_db_values(
                value.field,
                value.changed_from,
                value.changed_to,
            )?,
            created: value.creation_unix_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ChangeLogList {
    /// Log entries from oldest to newest.
    pub entries: Vec<ChangeLogEntry>,
}
