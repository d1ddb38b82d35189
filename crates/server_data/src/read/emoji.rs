use model::{EmojiGroupList, ReactionEmojiGroupList};

use crate::{DataError, IntoDataError, define_cmd_wrapper_read, result::Result};

define_cmd_wrapper_read!(ReadCommandsEmoji);

impl ReadCommandsEmoji<'_> {
    pub async fn reaction_emoji_groups(&self) -> Result<ReactionEmojiGroupList, DataError> {
        let groups = self
            .db_read(move |mut cmds| cmds.emoji().reaction_emoji_groups())
            .await
            .into_error()?;
        Ok(ReactionEmojiGroupList { groups })
    }

    pub async fn emoji_groups(&self) -> Result<EmojiGroupList, DataError> {
        let groups = self
            .db_read(move |mut cmds| cmds.emoji().emoji_groups())
            .await
            .into_error()?;
        Ok(EmojiGroupList { groups })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::test_context;

    #[tokio::test]
    async fn reaction_emoji_groups_come_from_config() {
        let c = test_context().await;
        let groups = c.read.emoji().reaction_emoji_groups().await.unwrap().groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].keyword, "reactions");
        let keywords: Vec<&str> = groups[0].emojis.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["like", "laugh", "sad"]);
    }

    #[tokio::test]
    async fn other_emoji_groups_come_from_config() {
        let c = test_context().await;
        let groups = c.read.emoji().emoji_groups().await.unwrap().groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].keyword, "symbols");
        let keywords: Vec<&str> = groups[0].emojis.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["heart", "star"]);
    }
}
