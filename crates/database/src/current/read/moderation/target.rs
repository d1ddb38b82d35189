use diesel::prelude::*;
use error_stack::Result;
use model::{CommunityId, ResolvedTarget, TargetKind, TargetRef, UserId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadModerationTarget);

impl CurrentReadModerationTarget<'_> {
    /// Find the community which owns the target. Returns `None` if the
    /// target does not exist.
    pub fn resolve_target(
        &mut self,
        target: TargetRef,
    ) -> Result<Option<ResolvedTarget>, DieselDatabaseError> {
        use crate::schema::{community, post, post_comment, user_account};

        let owning_community: Option<Option<CommunityId>> = match target.kind {
            TargetKind::User => user_account::table
                .filter(user_account::id.eq(target.id))
                .select(user_account::id)
                .first::<UserId>(self.conn())
                .optional()
                .into_db_error(target)?
                .map(|_| None),
            TargetKind::Community => community::table
                .filter(community::id.eq(target.id))
                .select(community::id)
                .first::<CommunityId>(self.conn())
                .optional()
                .into_db_error(target)?
                .map(Some),
            TargetKind::Post => post::table
                .filter(post::id.eq(target.id))
                .select(post::community_id)
                .first::<Option<CommunityId>>(self.conn())
                .optional()
                .into_db_error(target)?,
            TargetKind::Comment => post_comment::table
                .inner_join(post::table)
                .filter(post_comment::id.eq(target.id))
                .select(post::community_id)
                .first::<Option<CommunityId>>(self.conn())
                .optional()
                .into_db_error(target)?,
        };

        Ok(owning_community.map(|owning_community| ResolvedTarget {
            target,
            owning_community,
        }))
    }
}

#[cfg(test)]
mod tests {
    use model::{CommunityId, TargetKind, TargetRef};

    use crate::{DbReadMode, test_utils::test_connection};

    fn owner(kind: TargetKind, id: i64) -> Option<Option<CommunityId>> {
        let mut conn = test_connection();
        DbReadMode(&mut conn)
            .moderation()
            .target()
            .resolve_target(TargetRef::new(kind, id))
            .unwrap()
            .map(|t| t.owning_community)
    }

    #[test]
    fn user_target_has_no_community() {
        assert_eq!(owner(TargetKind::User, 1), Some(None));
    }

    #[test]
    fn community_target_owns_itself() {
        assert_eq!(owner(TargetKind::Community, 1), Some(Some(CommunityId::new(1))));
    }

    #[test]
    fn post_target_is_owned_by_post_community() {
        assert_eq!(owner(TargetKind::Post, 1), Some(Some(CommunityId::new(1))));
        assert_eq!(owner(TargetKind::Post, 2), Some(None));
    }

    #[test]
    fn comment_target_is_owned_by_post_community() {
        assert_eq!(owner(TargetKind::Comment, 1), Some(Some(CommunityId::new(1))));
    }

    #[test]
    fn missing_target_is_not_resolved() {
        assert_eq!(owner(TargetKind::User, 99), None);
        assert_eq!(owner(TargetKind::Community, 99), None);
        assert_eq!(owner(TargetKind::Post, 99), None);
        assert_eq!(owner(TargetKind::Comment, 99), None);
    }
}
