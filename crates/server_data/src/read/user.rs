use model::{AccessToken, User};

use crate::{DataError, IntoDataError, define_cmd_wrapper_read, result::Result};

define_cmd_wrapper_read!(ReadCommandsUser);

impl ReadCommandsUser<'_> {
    pub async fn user_by_access_token(&self, token: AccessToken) -> Result<Option<User>, DataError> {
        self.db_read(move |mut cmds| cmds.user().user_by_access_token(&token))
            .await
            .into_error()
    }
}
