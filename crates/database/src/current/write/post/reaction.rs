use diesel::{delete, insert_into, prelude::*, upsert::excluded};
use error_stack::Result;
use model::{EmojiId, PostId, PostReactionId, PostReactionRaw, UnixTime, UserId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_write_commands};

define_current_write_commands!(CurrentWritePostReaction);

impl CurrentWritePostReaction<'_> {
    /// Insert reaction or replace the reactor's previous reaction
    /// to the post.
    pub fn upsert_reaction(
        &mut self,
        post: PostId,
        reactor: UserId,
        emoji: EmojiId,
    ) -> Result<PostReactionRaw, DieselDatabaseError> {
        use model::schema::post_reaction::dsl::*;

        let time = UnixTime::current_time();

        insert_into(post_reaction)
            .values((
                post_id.eq(post),
                reactor_id.eq(reactor),
                emoji_id.eq(emoji),
                creation_unix_time.eq(time),
            ))
            .on_conflict((post_id, reactor_id))
            .do_update()
            .set((
                emoji_id.eq(excluded(emoji_id)),
                creation_unix_time.eq(excluded(creation_unix_time)),
            ))
            .returning(PostReactionRaw::as_returning())
            .get_result(self.conn())
            .into_db_error((post, reactor, emoji))
    }

    pub fn delete_reaction(
        &mut self,
        reaction_id: PostReactionId,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::post_reaction::dsl::*;

        delete(post_reaction.filter(id.eq(reaction_id)))
            .execute(self.conn())
            .into_db_error(reaction_id)?;

        Ok(())
    }
}
