use diesel::{dsl::count_star, prelude::*};
use error_stack::Result;
use model::{Emoji, EmojiId, Page, PostId, PostReactionId, PostReactionRaw, UserSummary};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadPostReaction);

impl CurrentReadPostReaction<'_> {
    pub fn reaction(
        &mut self,
        reaction_id: PostReactionId,
    ) -> Result<Option<PostReactionRaw>, DieselDatabaseError> {
        use crate::schema::post_reaction::dsl::*;

        post_reaction
            .filter(id.eq(reaction_id))
            .select(PostReactionRaw::as_select())
            .first(self.conn())
            .optional()
            .into_db_error(reaction_id)
    }

    /// Reactions from newest to oldest with the emoji and the reactor.
    pub fn reactions_page(
        &mut self,
        post: PostId,
        page: Page,
        only_emoji: Option<EmojiId>,
    ) -> Result<Vec<(PostReactionRaw, Emoji, UserSummary)>, DieselDatabaseError> {
        use crate::schema::{emoji, post_reaction, user_account};

        let mut query = post_reaction::table
            .inner_join(emoji::table)
            .inner_join(user_account::table)
            .filter(post_reaction::post_id.eq(post))
            .select((
                PostReactionRaw::as_select(),
                Emoji::as_select(),
                UserSummary::as_select(),
            ))
            .order(post_reaction::id.desc())
            .limit(page.count)
            .into_boxed();

        if let Some(max_id) = page.max_id {
            query = query.filter(post_reaction::id.lt(max_id));
        }

        if let Some(only_emoji) = only_emoji {
            query = query.filter(post_reaction::emoji_id.eq(only_emoji));
        }

        query
            .load(self.conn())
            .into_db_error((post, page, only_emoji))
    }

    /// Reaction count for every emoji used in the post's reactions.
    /// The most used emoji is first.
    pub fn emoji_counts(&mut self, post: PostId) -> Result<Vec<(Emoji, i64)>, DieselDatabaseError> {
        use crate::schema::{emoji, post_reaction};

        post_reaction::table
            .inner_join(emoji::table)
            .filter(post_reaction::post_id.eq(post))
            .group_by(emoji::id)
            .select((Emoji::as_select(), count_star()))
            .order((count_star().desc(), emoji::emoji_order.asc()))
            .load(self.conn())
            .into_db_error(post)
    }
}

#[cfg(test)]
mod tests {
    use diesel::connection::SimpleConnection;
    use model::{EmojiId, Page, PostId, PostReactionId};

    use crate::{DbReadMode, test_utils::test_connection};

    fn connection_with_reactions() -> diesel::SqliteConnection {
        let mut conn = test_connection();
        conn.batch_execute(
            r#"
            INSERT INTO emoji_group (id, keyword, color, group_order, is_reaction_group)
            VALUES (1, 'reactions', '#ffffff', 1, 1);
            INSERT INTO emoji (id, group_id, keyword, image, emoji_order)
            VALUES (1, 1, 'like', 'like.png', 1), (2, 1, 'sad', 'sad.png', 2);
            INSERT INTO post_reaction (id, post_id, reactor_id, emoji_id, creation_unix_time)
            VALUES (1, 1, 1, 2, 0), (2, 1, 2, 1, 0), (3, 1, 3, 1, 0), (4, 2, 1, 2, 0);
            "#,
        )
        .unwrap();
        conn
    }

    #[test]
    fn reactions_can_be_filtered_with_emoji() {
        let mut conn = connection_with_reactions();
        let reactions = DbReadMode(&mut conn)
            .post()
            .reaction()
            .reactions_page(
                PostId::new(1),
                Page { max_id: None, count: 10 },
                Some(EmojiId::new(1)),
            )
            .unwrap();
        let ids: Vec<PostReactionId> = reactions.iter().map(|(r, _, _)| r.id).collect();
        assert_eq!(ids, vec![PostReactionId::new(3), PostReactionId::new(2)]);
        assert!(reactions.iter().all(|(_, e, _)| e.keyword == "like"));
    }

    #[test]
    fn emoji_counts_are_in_descending_order() {
        let mut conn = connection_with_reactions();
        let counts = DbReadMode(&mut conn)
            .post()
            .reaction()
            .emoji_counts(PostId::new(1))
            .unwrap();
        let counts: Vec<(EmojiId, i64)> = counts.into_iter().map(|(e, c)| (e.id, c)).collect();
        assert_eq!(counts, vec![(EmojiId::new(1), 2), (EmojiId::new(2), 1)]);
    }
}
