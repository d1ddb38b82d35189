use diesel::prelude::*;
use error_stack::Result;
use model::{CommunityId, CommunityRole, UserId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadCommunity);

impl CurrentReadCommunity<'_> {
    /// Communities where the user is a moderator or an administrator.
    pub fn staff_communities(
        &mut self,
        user: UserId,
    ) -> Result<Vec<CommunityId>, DieselDatabaseError> {
        use crate::schema::community_membership::dsl::*;

        community_membership
            .filter(user_id.eq(user))
            .filter(is_moderator.eq(true).or(is_administrator.eq(true)))
            .select(community_id)
            .order(community_id.asc())
            .load(self.conn())
            .into_db_error(user)
    }

    pub fn membership(
        &mut self,
        community: CommunityId,
        user: UserId,
    ) -> Result<Option<CommunityRole>, DieselDatabaseError> {
        use crate::schema::community_membership::dsl::*;

        community_membership
            .filter(community_id.eq(community))
            .filter(user_id.eq(user))
            .select(CommunityRole::as_select())
            .first(self.conn())
            .optional()
            .into_db_error((community, user))
    }
}

