use diesel::{insert_into, prelude::*};
use error_stack::Result;
use model::ModerationCategory;

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_write_commands};

define_current_write_commands!(CurrentWriteModerationCategory);

impl CurrentWriteModerationCategory<'_> {
    pub fn upsert_category(
        &mut self,
        category: &ModerationCategory,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::moderation_category::dsl::*;

        insert_into(moderation_category)
            .values(category)
            .on_conflict(id)
            .do_update()
            .set(category)
            .execute(self.conn())
            .into_db_error(category.id)?;

        Ok(())
    }
}
