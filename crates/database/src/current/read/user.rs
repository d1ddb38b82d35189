use diesel::prelude::*;
use error_stack::Result;
use model::{AccessToken, User, UserId, UserSummary};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadUser);

impl CurrentReadUser<'_> {
    pub fn user_by_access_token(
        &mut self,
        token: &AccessToken,
    ) -> Result<Option<User>, DieselDatabaseError> {
        use crate::schema::user_account::dsl::*;

        user_account
            .filter(access_token.eq(token.as_str()))
            .select(User::as_select())
            .first(self.conn())
            .optional()
            .into_db_error(())
    }

    pub fn user_summary(&mut self, user: UserId) -> Result<UserSummary, DieselDatabaseError> {
        use crate::schema::user_account::dsl::*;

        user_account
            .filter(id.eq(user))
            .select(UserSummary::as_select())
            .first(self.conn())
            .into_db_error(user)
    }
}

#[cfg(test)]
mod tests {
    use model::{AccessToken, UserId};

    use crate::{DbReadMode, test_utils::test_connection};

    #[test]
    fn user_is_found_with_access_token() {
        let mut conn = test_connection();
        let user = DbReadMode(&mut conn)
            .user()
            .user_by_access_token(&AccessToken::new("token-global".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(user.id, UserId::new(2));
        assert!(user.global_moderator);
    }

    #[test]
    fn unknown_access_token_returns_none() {
        let mut conn = test_connection();
        let user = DbReadMode(&mut conn)
            .user()
            .user_by_access_token(&AccessToken::new("wrong".to_string()))
            .unwrap();
        assert!(user.is_none());
    }
}
