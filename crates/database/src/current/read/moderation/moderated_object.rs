use diesel::prelude::*;
use error_stack::Result;
use model::{
    ModeratedObject, ModeratedObjectId, ModeratedObjectRaw, ModeratedObjectStatus, Page,
    TargetRef,
};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadModeratedObject);

impl CurrentReadModeratedObject<'_> {
    pub fn moderated_object(
        &mut self,
        object_id: ModeratedObjectId,
    ) -> Result<Option<ModeratedObject>, DieselDatabaseError> {
        use crate::schema::moderated_object::dsl::*;

        let object: Option<ModeratedObjectRaw> = moderated_object
            .filter(id.eq(object_id))
            .select(ModeratedObjectRaw::as_select())
            .first(self.conn())
            .optional()
            .into_db_error(object_id)?;

        Ok(object.map(ModeratedObject::from))
    }

    pub fn moderated_object_for_target(
        &mut self,
        target: TargetRef,
    ) -> Result<Option<ModeratedObject>, DieselDatabaseError> {
        use crate::schema::moderated_object::dsl::*;

        let object: Option<ModeratedObjectRaw> = moderated_object
            .filter(target_kind.eq(target.kind))
            .filter(target_id.eq(target.id))
            .select(ModeratedObjectRaw::as_select())
            .first(self.conn())
            .optional()
            .into_db_error(target)?;

        Ok(object.map(ModeratedObject::from))
    }

    /// Moderated objects from newest to oldest.
    pub fn moderated_objects_page(
        &mut self,
        only_status: Option<ModeratedObjectStatus>,
        page: Page,
    ) -> Result<Vec<ModeratedObject>, DieselDatabaseError> {
        use crate::schema::moderated_object::dsl::*;

        let mut query = moderated_object
            .select(ModeratedObjectRaw::as_select())
            .order(id.desc())
            .limit(page.count)
            .into_boxed();

        if let Some(only_status) = only_status {
            query = query.filter(status.eq(only_status));
        }

        if let Some(max_id) = page.max_id {
            query = query.filter(id.lt(max_id));
        }

        let objects: Vec<ModeratedObjectRaw> =
            query.load(self.conn()).into_db_error((only_status, page))?;

        Ok(objects.into_iter().map(ModeratedObject::from).collect())
    }
}
