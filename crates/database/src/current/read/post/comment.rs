use diesel::prelude::*;
use error_stack::Result;
use model::{Page, PostCommentId, PostCommentRaw, PostId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadPostComment);

impl CurrentReadPostComment<'_> {
    pub fn comment(
        &mut self,
        comment_id: PostCommentId,
    ) -> Result<Option<PostCommentRaw>, DieselDatabaseError> {
        use crate::schema::post_comment::dsl::*;

        post_comment
            .filter(id.eq(comment_id))
            .select(PostCommentRaw::as_select())
            .first(self.conn())
            .optional()
            .into_db_error(comment_id)
    }

    /// Comments from newest to oldest.
    pub fn comments_page(
        &mut self,
        post: PostId,
        page: Page,
    ) -> Result<Vec<PostCommentRaw>, DieselDatabaseError> {
        use crate::schema::post_comment::dsl::*;

        let mut query = post_comment
            .filter(post_id.eq(post))
            .select(PostCommentRaw::as_select())
            .order(id.desc())
            .limit(page.count)
            .into_boxed();

        if let Some(max_id) = page.max_id {
            query = query.filter(id.lt(max_id));
        }

        query.load(self.conn()).into_db_error((post, page))
    }
}

#[cfg(test)]
mod tests {
    use diesel::connection::SimpleConnection;
    use model::{Page, PostCommentId, PostId};

    use crate::{DbReadMode, test_utils::test_connection};

    #[test]
    fn comments_are_paged_from_newest_to_oldest() {
        let mut conn = test_connection();
        conn.batch_execute(
            r#"
            INSERT INTO post_comment (id, post_id, commenter_id, text, creation_unix_time)
            VALUES (2, 1, 1, 'a', 1), (3, 1, 1, 'b', 2), (4, 2, 1, 'other post', 3), (5, 1, 1, 'c', 4);
            "#,
        )
        .unwrap();

        let first = DbReadMode(&mut conn)
            .post()
            .comment()
            .comments_page(PostId::new(1), Page { max_id: None, count: 2 })
            .unwrap();
        let ids: Vec<PostCommentId> = first.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![PostCommentId::new(5), PostCommentId::new(3)]);

        let second = DbReadMode(&mut conn)
            .post()
            .comment()
            .comments_page(PostId::new(1), Page { max_id: Some(3), count: 10 })
            .unwrap();
        let ids: Vec<PostCommentId> = second.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![PostCommentId::new(2), PostCommentId::new(1)]);
    }
}
