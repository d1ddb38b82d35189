use diesel::{delete, insert_into, prelude::*};
use error_stack::Result;
use model::{PostCommentId, PostCommentRaw, PostId, UnixTime, UserId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_write_commands};

define_current_write_commands!(CurrentWritePostComment);

impl CurrentWritePostComment<'_> {
    pub fn insert_comment(
        &mut self,
        post: PostId,
        commenter: UserId,
        comment_text: String,
    ) -> Result<PostCommentRaw, DieselDatabaseError> {
        use model::schema::post_comment::dsl::*;

        let time = UnixTime::current_time();

        insert_into(post_comment)
            .values((
                post_id.eq(post),
                commenter_id.eq(commenter),
                text.eq(comment_text),
                creation_unix_time.eq(time),
            ))
            .returning(PostCommentRaw::as_returning())
            .get_result(self.conn())
            .into_db_error((post, commenter))
    }

    pub fn delete_comment(&mut self, comment_id: PostCommentId) -> Result<(), DieselDatabaseError> {
        use model::schema::post_comment::dsl::*;

        delete(post_comment.filter(id.eq(comment_id)))
            .execute(self.conn())
            .into_db_error(comment_id)?;

        Ok(())
    }
}
