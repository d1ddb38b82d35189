use tracing::info;

use crate::{DataError, db_transaction, define_cmd_wrapper_write, result::Result};

define_cmd_wrapper_write!(WriteCommandsReferenceData);

impl WriteCommandsReferenceData<'_> {
    /// Write moderation categories and emoji groups from server config
    /// to the database. Emoji groups which are no longer in the reaction
    /// group list stop being reaction groups.
    pub async fn sync_config_to_database(&self) -> Result<(), DataError> {
        let categories = self.config().moderation_categories().to_vec();
        let groups = self.config().reaction_emoji_groups().to_vec();
        let other_groups = self.config().emoji_groups().to_vec();
        let category_count = categories.len();
        let group_count = groups.len();
        let other_group_count = other_groups.len();

        db_transaction!(self, move |mut cmds| {
            for c in &categories {
                cmds.moderation().category().upsert_category(c)?;
            }

            let all_groups = other_groups
                .iter()
                .map(|g| (g, false))
                .chain(groups.iter().map(|g| (g, true)));
            for (g, reaction_group) in all_groups {
                cmds.emoji()
                    .upsert_group(g.id, &g.keyword, &g.color, g.order, reaction_group)?;
                for e in &g.emojis {
                    cmds.emoji().upsert_emoji(g.id, e)?;
                }
            }

            let keep: Vec<_> = groups.iter().map(|g| g.id).collect();
            cmds.emoji().disable_other_reaction_groups(&keep)
        })?;

        info!(
            "Reference data synced, moderation categories: {}, reaction emoji groups: {}, other emoji groups: {}",
            category_count, group_count, other_group_count
        );

        Ok(())
    }
}
