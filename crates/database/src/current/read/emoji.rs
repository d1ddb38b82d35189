use diesel::prelude::*;
use error_stack::Result;
use model::{Emoji, EmojiGroup, EmojiGroupId, EmojiGroupRaw, EmojiId};

use crate::{DieselDatabaseError, IntoDatabaseError, define_current_read_commands};

define_current_read_commands!(CurrentReadEmoji);

impl CurrentReadEmoji<'_> {
    /// Reaction emoji groups and their emojis in ascending order.
    pub fn reaction_emoji_groups(&mut self) -> Result<Vec<EmojiGroup>, DieselDatabaseError> {
        self.groups(true)
    }

    /// Emoji groups which are not reaction groups and their emojis in
    /// ascending order.
    pub fn emoji_groups(&mut self) -> Result<Vec<EmojiGroup>, DieselDatabaseError> {
        self.groups(false)
    }

    fn groups(&mut self, reaction_group: bool) -> Result<Vec<EmojiGroup>, DieselDatabaseError> {
        use crate::schema::{emoji, emoji_group};

        let groups: Vec<EmojiGroupRaw> = emoji_group::table
            .filter(emoji_group::is_reaction_group.eq(reaction_group))
            .select(EmojiGroupRaw::as_select())
            .order((emoji_group::group_order.asc(), emoji_group::id.asc()))
            .load(self.conn())
            .into_db_error(reaction_group)?;

        let mut result = vec![];
        for g in groups {
            let emojis: Vec<Emoji> = emoji::table
                .filter(emoji::group_id.eq(g.id))
                .select(Emoji::as_select())
                .order((emoji::emoji_order.asc(), emoji::id.asc()))
                .load(self.conn())
                .into_db_error(g.id)?;
            result.push(EmojiGroup::new(g, emojis));
        }

        Ok(result)
    }

    pub fn emoji_exists(&mut self, emoji_id: EmojiId) -> Result<bool, DieselDatabaseError> {
        use crate::schema::emoji;

        emoji::table
            .filter(emoji::id.eq(emoji_id))
            .select(emoji::id)
            .first::<EmojiId>(self.conn())
            .optional()
            .map(|v| v.is_some())
            .into_db_error(emoji_id)
    }

    /// Emoji if it belongs to the group and the group is a reaction group.
    pub fn reaction_emoji(
        &mut self,
        group: EmojiGroupId,
        emoji_id: EmojiId,
    ) -> Result<Option<Emoji>, DieselDatabaseError> {
        use crate::schema::{emoji, emoji_group};

        emoji::table
            .inner_join(emoji_group::table)
            .filter(emoji::id.eq(emoji_id))
            .filter(emoji::group_id.eq(group))
            .filter(emoji_group::is_reaction_group.eq(true))
            .select(Emoji::as_select())
            .first(self.conn())
            .optional()
            .into_db_error((group, emoji_id))
    }
}
