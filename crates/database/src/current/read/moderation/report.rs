use diesel::prelude::*;
use error_stack::Result;
use model::{Report, ReportRaw, TargetRef, UserId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadModerationReport);

impl CurrentReadModerationReport<'_> {
    pub fn report_from_reporter(
        &mut self,
        reporter: UserId,
        target: TargetRef,
    ) -> Result<Option<Report>, DieselDatabaseError> {
        use crate::schema::moderation_report::dsl::*;

        let report: Option<ReportRaw> = moderation_report
            .filter(reporter_id.eq(reporter))
            .filter(target_kind.eq(target.kind))
            .filter(target_id.eq(target.id))
            .select(ReportRaw::as_select())
            .first(self.conn())
            .optional()
            .into_db_error((reporter, target))?;

        Ok(report.map(Report::from))
    }

    /// Reports from newest to oldest.
    pub fn reports_for_target(
        &mut self,
        target: TargetRef,
    ) -> Result<Vec<Report>, DieselDatabaseError> {
        use crate::schema::moderation_report::dsl::*;

        let reports: Vec<ReportRaw> = moderation_report
            .filter(target_kind.eq(target.kind))
            .filter(target_id.eq(target.id))
            .select(ReportRaw::as_select())
            .order(id.desc())
            .load(self.conn())
            .into_db_error(target)?;

        Ok(reports.into_iter().map(Report::from).collect())
    }
}
