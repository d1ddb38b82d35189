use diesel::{insert_into, prelude::*, update};
use error_stack::{Result, ResultExt};
use model::{
    ModeratedObject, ModeratedObjectId, ModeratedObjectStatus, ModerationCategoryId, TargetRef,
    UnixTime,
};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_write_commands};

define_current_write_commands!(CurrentWriteModeratedObject);

impl CurrentWriteModeratedObject<'_> {
    /// Return the moderated object of the target. If it does not exist,
    /// create it with pending status and `category`. The `category` is
    /// ignored for existing objects.
    pub fn get_or_create(
        &mut self,
        target: TargetRef,
        category: ModerationCategoryId,
    ) -> Result<ModeratedObject, DieselDatabaseError> {
        {
            use model::schema::moderated_object::dsl::*;

            let time = UnixTime::current_time();

            insert_into(moderated_object)
                .values((
                    target_kind.eq(target.kind),
                    target_id.eq(target.id),
                    category_id.eq(category),
                    status.eq(ModeratedObjectStatus::Pending),
                    creation_unix_time.eq(time),
                ))
                .on_conflict((target_kind, target_id))
                .do_nothing()
                .execute(self.conn())
                .into_db_error((target, category))?;
        }

        self.read()
            .moderation()
            .moderated_object()
            .moderated_object_for_target(target)?
            .ok_or_else(|| error_stack::report!(DieselDatabaseError::NotFound))
            .attach_printable_lazy(|| format!("{:?}", target))
    }

    pub fn update_category(
        &mut self,
        object: ModeratedObjectId,
        category: ModerationCategoryId,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::moderated_object::dsl::*;

        update(moderated_object.find(object))
            .set(category_id.eq(category))
            .execute(self.conn())
            .into_db_error((object, category))?;

        Ok(())
    }

    pub fn update_description(
        &mut self,
        object: ModeratedObjectId,
        new_description: String,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::moderated_object::dsl::*;

        update(moderated_object.find(object))
            .set(description.eq(new_description))
            .execute(self.conn())
            .into_db_error(object)?;

        Ok(())
    }

    pub fn update_status(
        &mut self,
        object: ModeratedObjectId,
        new_status: ModeratedObjectStatus,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::moderated_object::dsl::*;

        update(moderated_object.find(object))
            .set(status.eq(new_status))
            .execute(self.conn())
            .into_db_error((object, new_status))?;

        Ok(())
    }
}
