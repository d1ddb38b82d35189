use diesel::{insert_into, prelude::*};
use error_stack::Result;
use model::{FieldChange, ModeratedObjectId, UnixTime, UserId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_write_commands};

define_current_write_commands!(CurrentWriteModerationChangeLog);

impl CurrentWriteModerationChangeLog<'_> {
    pub fn insert_change(
        &mut self,
        object: ModeratedObjectId,
        actor: UserId,
        change: &FieldChange,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::moderated_object_change_log::dsl::*;

        let time = UnixTime::current_time();
        let (from, to) = change.to_db_values();

        insert_into(moderated_object_change_log)
            .values((
                moderated_object_id.eq(object),
                actor_id.eq(actor),
                field.eq(change.field()),
                changed_from.eq(from),
                changed_to.eq(to),
                creation_unix_time.eq(time),
            ))
            .execute(self.conn())
            .into_db_error((object, actor, change.field()))?;

        Ok(())
    }
}
