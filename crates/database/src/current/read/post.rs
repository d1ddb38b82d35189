use diesel::prelude::*;
use error_stack::Result;
use model::{Post, PostId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

mod comment;
mod reaction;

define_current_read_commands!(CurrentReadPost);

impl<'a> CurrentReadPost<'a> {
    pub fn comment(self) -> comment::CurrentReadPostComment<'a> {
        comment::CurrentReadPostComment::new(self.cmds)
    }

    pub fn reaction(self) -> reaction::CurrentReadPostReaction<'a> {
        reaction::CurrentReadPostReaction::new(self.cmds)
    }
}

impl CurrentReadPost<'_> {
    pub fn post(&mut self, post_id: PostId) -> Result<Option<Post>, DieselDatabaseError> {
        use crate::schema::post::dsl::*;

        post.filter(id.eq(post_id))
            .select(Post::as_select())
            .first(self.conn())
            .optional()
            .into_db_error(post_id)
    }
}
