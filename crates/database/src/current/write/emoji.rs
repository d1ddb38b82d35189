use diesel::{insert_into, prelude::*, update, upsert::excluded};
use error_stack::Result;
use model::{Emoji, EmojiGroupId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_write_commands};

define_current_write_commands!(CurrentWriteEmoji);

impl CurrentWriteEmoji<'_> {
    /// Insert or update emoji group.
    pub fn upsert_group(
        &mut self,
        group: EmojiGroupId,
        group_keyword: &str,
        group_color: &str,
        order: i32,
        reaction_group: bool,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::emoji_group::dsl::*;

        insert_into(emoji_group)
            .values((
                id.eq(group),
                keyword.eq(group_keyword),
                color.eq(group_color),
                group_order.eq(order),
                is_reaction_group.eq(reaction_group),
            ))
            .on_conflict(id)
            .do_update()
            .set((
                keyword.eq(excluded(keyword)),
                color.eq(excluded(color)),
                group_order.eq(excluded(group_order)),
                is_reaction_group.eq(excluded(is_reaction_group)),
            ))
            .execute(self.conn())
            .into_db_error(group)?;

        Ok(())
    }

    pub fn upsert_emoji(
        &mut self,
        group: EmojiGroupId,
        value: &Emoji,
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::emoji::dsl::*;

        insert_into(emoji)
            .values((
                id.eq(value.id),
                group_id.eq(group),
                keyword.eq(&value.keyword),
                image.eq(&value.image),
                emoji_order.eq(value.order),
            ))
            .on_conflict(id)
            .do_update()
            .set((
                group_id.eq(excluded(group_id)),
                keyword.eq(excluded(keyword)),
                image.eq(excluded(image)),
                emoji_order.eq(excluded(emoji_order)),
            ))
            .execute(self.conn())
            .into_db_error((group, value.id))?;

        Ok(())
    }

    /// Groups which are not in `keep` stop being reaction groups. Existing
    /// reactions are not removed.
    pub fn disable_other_reaction_groups(
        &mut self,
        keep: &[EmojiGroupId],
    ) -> Result<(), DieselDatabaseError> {
        use model::schema::emoji_group::dsl::*;

        update(emoji_group.filter(id.ne_all(keep)))
            .set(is_reaction_group.eq(false))
            .execute(self.conn())
            .into_db_error(keep)?;

        Ok(())
    }
}
