use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{ModerationCategoryId, TargetKind, TargetRef, UnixTime, UserId, macros::define_db_id};

define_db_id!(ReportId);

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::moderation_report)]
#[diesel(check_for_backend(crate::Db))]
pub struct ReportRaw {
    pub id: ReportId,
    pub reporter_id: UserId,
    pub target_kind: TargetKind,
    pub target_id: i64,
    pub category_id: ModerationCategoryId,
    pub description: Option<String>,
    pub creation_unix_time: UnixTime,
}

/// One user's report about some target.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Report {
    pub id: ReportId,
    pub reporter_id: UserId,
    pub target: TargetRef,
    pub category_id: ModerationCategoryId,
    pub description: Option<String>,
    pub created: UnixTime,
}

impl From<ReportRaw> for Report {
    fn from(value: ReportRaw) -> Self {
        Self {
            id: value.id,
            reporter_id: value.reporter_id,
            target: TargetRef::new(value.target_kind, value.target_id),
            category_id: value.category_id,
            description: value.description,
            created: value.creation_unix_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct NewReport {
    pub target: TargetRef,
    pub category_id: ModerationCategoryId,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ReportResult {
    pub report: Report,
    /// The reporter had already reported the target. The returned
    /// report is the earlier report.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    #[schema(default = false)]
    pub already_reported: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ReportList {
    /// Reports from newest to oldest.
    pub reports: Vec<Report>,
}
