use diesel::prelude::*;
use error_stack::{Result, ResultExt};
use model::{ChangeLogEntry, ChangeLogEntryRaw, ModeratedObjectId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadModerationChangeLog);

impl CurrentReadModerationChangeLog<'_> {
    /// Log entries from oldest to newest.
    pub fn change_log(
        &mut self,
        object: ModeratedObjectId,
    ) -> Result<Vec<ChangeLogEntry>, DieselDatabaseError> {
        use crate::schema::moderated_object_change_log::dsl::*;

        let entries: Vec<ChangeLogEntryRaw> = moderated_object_change_log
            .filter(moderated_object_id.eq(object))
            .select(ChangeLogEntryRaw::as_select())
            .order(id.asc())
            .load(self.conn())
            .into_db_error(object)?;

        entries
            .into_iter()
            .map(|e| {
                ChangeLogEntry::try_from(e).change_context(DieselDatabaseError::DataFormatConversion)
            })
            .collect()
    }
}
