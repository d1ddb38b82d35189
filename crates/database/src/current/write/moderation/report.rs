use diesel::{insert_into, prelude::*};
use error_stack::Result;
use model::{NewReport, Report, ReportRaw, UnixTime, UserId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_write_commands};

define_current_write_commands!(CurrentWriteModerationReport);

impl CurrentWriteModerationReport<'_> {
    pub fn insert_report(
        &mut self,
        reporter: UserId,
        report: NewReport,
    ) -> Result<Report, DieselDatabaseError> {
        use model::schema::moderation_report::dsl::*;

        let time = UnixTime::current_time();
        let target = report.target;

        let report: ReportRaw = insert_into(moderation_report)
            .values((
                reporter_id.eq(reporter),
                target_kind.eq(target.kind),
                target_id.eq(target.id),
                category_id.eq(report.category_id),
                description.eq(report.description),
                creation_unix_time.eq(time),
            ))
            .returning(ReportRaw::as_returning())
            .get_result(self.conn())
            .into_db_error((reporter, target))?;

        Ok(report.into())
    }
}
