use model::{
    ChangeLogList, ModeratedObject, ModeratedObjectId, ModeratedObjectList, ModeratedObjectsQuery,
    ModerationCategoryList, ReportList, User,
};
use tracing::warn;

use crate::{
    DataError, IntoDataError, access::ObjectAccess, define_cmd_wrapper_read,
    result::{Result, WrappedContextExt},
};

define_cmd_wrapper_read!(ReadCommandsModeration);

impl ReadCommandsModeration<'_> {
    pub async fn moderated_object(
        &self,
        actor: User,
        id: ModeratedObjectId,
    ) -> Result<ModeratedObject, DataError> {
        let actor_id = actor.id;
        self.db_read(move |mut cmds| ObjectAccess::check(&mut cmds, &actor, id))
            .await
            .into_error()?
            .into_object(actor_id, id)
    }

    /// Reports of the moderated object's target from newest to oldest.
    pub async fn reports(
        &self,
        actor: User,
        id: ModeratedObjectId,
    ) -> Result<ReportList, DataError> {
        let object = self.moderated_object(actor, id).await?;
        let reports = self
            .db_read(move |mut cmds| {
                cmds.moderation()
                    .report()
                    .reports_for_target(object.target)
            })
            .await
            .into_error()?;
        Ok(ReportList { reports })
    }

    /// Change log of the moderated object from oldest to newest.
    pub async fn change_log(
        &self,
        actor: User,
        id: ModeratedObjectId,
    ) -> Result<ChangeLogList, DataError> {
        let object = self.moderated_object(actor, id).await?;
        let entries = self
            .db_read(move |mut cmds| cmds.moderation().change_log().change_log(object.id))
            .await
            .into_error()?;
        Ok(ChangeLogList { entries })
    }

    /// List moderated objects from newest to oldest. Only global
    /// moderators can list moderated objects.
    pub async fn list(
        &self,
        actor: User,
        query: ModeratedObjectsQuery,
    ) -> Result<ModeratedObjectList, DataError> {
        if !actor.global_moderator {
            warn!("Moderated object listing denied, user: {}", actor.id);
            return Err(DataError::NotAllowed.report());
        }

        let page = query
            .page_query()
            .validate(self.config().limits().max_page_size)
            .map_err(|e| DataError::InvalidInput.report().attach_printable(e))?;

        let objects = self
            .db_read(move |mut cmds| {
                cmds.moderation()
                    .moderated_object()
                    .moderated_objects_page(query.status, page)
            })
            .await
            .into_error()?;
        Ok(ModeratedObjectList { objects })
    }

    pub async fn categories(&self) -> Result<ModerationCategoryList, DataError> {
        let categories = self
            .db_read(move |mut cmds| cmds.moderation().category().categories())
            .await
            .into_error()?;
        Ok(ModerationCategoryList { categories })
    }
}

#[cfg(test)]
mod tests {
    use model::{
        ModeratedObjectStatus, ModeratedObjectsQuery, ModerationCategoryId, ModerationDecision,
        NewReport, PostId, TargetRef,
    };

    use crate::{
        DataError,
        test_utils::{COMMUNITY_MODERATOR, GLOBAL_MODERATOR, USER, test_context, user},
    };

    async fn report_posts(c: &crate::test_utils::TestContext) {
        for post in [1, 2, 3] {
            c.write
                .moderation()
                .report(
                    user(USER),
                    NewReport {
                        target: TargetRef::post(PostId::new(post)),
                        category_id: ModerationCategoryId::new(1),
                        description: Some("spam".to_string()),
                    },
                )
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn only_global_moderator_can_list() {
        let c = test_context().await;
        report_posts(&c).await;

        let error = c
            .read
            .moderation()
            .list(user(COMMUNITY_MODERATOR), ModeratedObjectsQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotAllowed));

        let objects = c
            .read
            .moderation()
            .list(user(GLOBAL_MODERATOR), ModeratedObjectsQuery::default())
            .await
            .unwrap()
            .objects;
        assert_eq!(objects.len(), 3);
        assert!(objects[0].id.as_i64() > objects[1].id.as_i64());
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let c = test_context().await;
        report_posts(&c).await;
        let all = c
            .read
            .moderation()
            .list(user(GLOBAL_MODERATOR), ModeratedObjectsQuery::default())
            .await
            .unwrap()
            .objects;
        c.write
            .moderation()
            .decide(user(GLOBAL_MODERATOR), all[0].id, ModerationDecision::Approve)
            .await
            .unwrap();

        let pending = c
            .read
            .moderation()
            .list(
                user(GLOBAL_MODERATOR),
                ModeratedObjectsQuery {
                    status: Some(ModeratedObjectStatus::Pending),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .objects;
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|o| o.id != all[0].id));
    }

    #[tokio::test]
    async fn community_moderator_reads_only_own_community_objects() {
        let c = test_context().await;
        report_posts(&c).await;
        let all = c
            .read
            .moderation()
            .list(user(GLOBAL_MODERATOR), ModeratedObjectsQuery::default())
            .await
            .unwrap()
            .objects;
        let own = all
            .iter()
            .find(|o| o.target == TargetRef::post(PostId::new(1)))
            .unwrap();
        let timeline = all
            .iter()
            .find(|o| o.target == TargetRef::post(PostId::new(2)))
            .unwrap();

        let object = c
            .read
            .moderation()
            .moderated_object(user(COMMUNITY_MODERATOR), own.id)
            .await
            .unwrap();
        assert_eq!(object.description.as_deref(), None);
        let reports = c
            .read
            .moderation()
            .reports(user(COMMUNITY_MODERATOR), own.id)
            .await
            .unwrap()
            .reports;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].description.as_deref(), Some("spam"));

        let error = c
            .read
            .moderation()
            .moderated_object(user(COMMUNITY_MODERATOR), timeline.id)
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotAllowed));

        let error = c
            .read
            .moderation()
            .change_log(user(USER), own.id)
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotAllowed));
    }

    #[tokio::test]
    async fn categories_come_from_config() {
        let c = test_context().await;
        let categories = c.read.moderation().categories().await.unwrap().categories;
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["spam", "abuse", "other"]);
    }
}
