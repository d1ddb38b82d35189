use diesel::prelude::*;
use error_stack::Result;
use model::{ModerationCategory, ModerationCategoryId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadModerationCategory);

impl CurrentReadModerationCategory<'_> {
    pub fn categories(&mut self) -> Result<Vec<ModerationCategory>, DieselDatabaseError> {
        use crate::schema::moderation_category::dsl::*;

        moderation_category
            .select(ModerationCategory::as_select())
            .order(id.asc())
            .load(self.conn())
            .into_db_error(())
    }

    pub fn category_exists(
        &mut self,
        category: ModerationCategoryId,
    ) -> Result<bool, DieselDatabaseError> {
        use crate::schema::moderation_category::dsl::*;

        moderation_category
            .filter(id.eq(category))
            .select(id)
            .first::<ModerationCategoryId>(self.conn())
            .optional()
            .map(|v| v.is_some())
            .into_db_error(category)
    }
}
