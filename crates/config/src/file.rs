use std::{collections::HashSet, path::Path};

use error_stack::{Result, ResultExt};
use model::{Emoji, EmojiGroupId, ModerationCategory};
use serde::{Deserialize, Serialize};
use simple_backend_config::file::ConfigFileUtils;
use simple_backend_utils::IntoReportFromString;

pub const CONFIG_FILE_NAME: &str = "server_config.toml";

pub const DEFAULT_CONFIG_FILE_TEXT: &str = r##"

# [limits]
# post_comment_max_length = 1500
# moderation_description_max_length = 1000
# max_page_size = 20

[[moderation_categories]]
id = 1
name = "spam"
title = "Spam"
description = "Unwanted commercial content or repeated messages."

[[moderation_categories]]
id = 2
name = "abuse"
title = "Abuse"
description = "Harassment, threats or hate speech."

[[moderation_categories]]
id = 3
name = "other"
title = "Other"
description = "Something else that breaks the community guidelines."

[[reaction_emoji_groups]]
id = 1
keyword = "reactions"
color = "#ffffff"
order = 1
emojis = [
    { id = 1, keyword = "like", image = "/emoji/like.png", order = 1 },
    { id = 2, keyword = "laugh", image = "/emoji/laugh.png", order = 2 },
    { id = 3, keyword = "sad", image = "/emoji/sad.png", order = 3 },
]

[[emoji_groups]]
id = 2
keyword = "symbols"
color = "#000000"
order = 2
emojis = [
    { id = 4, keyword = "heart", image = "/emoji/heart.png", order = 1 },
    { id = 5, keyword = "star", image = "/emoji/star.png", order = 2 },
]

"##;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Simple backend error")]
    SimpleBackendError,

    #[error("Load config file")]
    LoadConfig,

    #[error("Invalid config")]
    InvalidConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigFile {
    pub limits: Option<LimitsConfig>,
    #[serde(default)]
    pub moderation_categories: Vec<ModerationCategory>,
    #[serde(default)]
    pub reaction_emoji_groups: Vec<EmojiGroupConfig>,
    /// Emoji groups which are not available for post reactions.
    #[serde(default)]
    pub emoji_groups: Vec<EmojiGroupConfig>,
}

impl ConfigFile {
    pub fn load(dir: impl AsRef<Path>) -> Result<ConfigFile, ConfigFileError> {
        let config_string =
            ConfigFileUtils::load_string(dir, CONFIG_FILE_NAME, DEFAULT_CONFIG_FILE_TEXT)
                .change_context(ConfigFileError::SimpleBackendError)?;
        Self::parse(&config_string)
    }

    /// Parse the default config file without touching the file system.
    pub fn load_default() -> Result<ConfigFile, ConfigFileError> {
        Self::parse(DEFAULT_CONFIG_FILE_TEXT)
    }

    fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        let mut file: ConfigFile =
            toml::from_str(text).change_context(ConfigFileError::LoadConfig)?;
        file.validate_and_sort_by_id()
            .into_error_string(ConfigFileError::InvalidConfig)?;
        Ok(file)
    }

    pub fn validate_and_sort_by_id(&mut self) -> std::result::Result<(), String> {
        let mut category_ids = HashSet::new();
        let mut category_names = HashSet::new();
        for c in &self.moderation_categories {
            if !category_ids.insert(c.id) {
                return Err(format!("Duplicate moderation category id {}", c.id));
            }
            if !category_names.insert(c.name.as_str()) {
                return Err(format!("Duplicate moderation category name {}", c.name));
            }
        }

        let mut group_ids = HashSet::new();
        let mut emoji_ids = HashSet::new();
        for g in self.reaction_emoji_groups.iter().chain(&self.emoji_groups) {
            if !group_ids.insert(g.id) {
                return Err(format!("Duplicate emoji group id {}", g.id));
            }
            for e in &g.emojis {
                if !emoji_ids.insert(e.id) {
                    return Err(format!("Duplicate emoji id {}", e.id));
                }
            }
        }

        self.moderation_categories.sort_by_key(|c| c.id);
        self.reaction_emoji_groups.sort_by_key(|g| g.id);
        self.emoji_groups.sort_by_key(|g| g.id);

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max character count for post comment text.
    pub post_comment_max_length: usize,
    /// Max character count for report and moderated object descriptions.
    pub moderation_description_max_length: usize,
    /// Max item count for one page of a paged list.
    pub max_page_size: i64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            post_comment_max_length: 1500,
            moderation_description_max_length: 1000,
            max_page_size: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmojiGroupConfig {
    pub id: EmojiGroupId,
    pub keyword: String,
    pub color: String,
    pub order: i32,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_is_valid() {
        let file = ConfigFile::load_default().unwrap();
        assert!(file.limits.is_none());
        assert_eq!(file.moderation_categories.len(), 3);
        assert_eq!(file.reaction_emoji_groups.len(), 1);
        assert_eq!(file.reaction_emoji_groups[0].emojis.len(), 3);
        assert_eq!(file.emoji_groups.len(), 1);
        assert_eq!(file.emoji_groups[0].keyword, "symbols");
    }

    #[test]
    fn missing_limit_values_use_defaults() {
        let file = ConfigFile::parse(
            r#"
            [limits]
            max_page_size = 50
            "#,
        )
        .unwrap();
        let limits = file.limits.unwrap();
        assert_eq!(limits.max_page_size, 50);
        assert_eq!(limits.post_comment_max_length, 1500);
    }

    #[test]
    fn categories_are_sorted_by_id() {
        let file = ConfigFile::parse(
            r#"
            [[moderation_categories]]
            id = 5
            name = "b"
            title = "B"
            description = ""

            [[moderation_categories]]
            id = 2
            name = "a"
            title = "A"
            description = ""
            "#,
        )
        .unwrap();
        let ids: Vec<i64> = file
            .moderation_categories
            .iter()
            .map(|c| *c.id.as_i64())
            .collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn duplicate_category_id_is_rejected() {
        let result = ConfigFile::parse(
            r#"
            [[moderation_categories]]
            id = 1
            name = "a"
            title = "A"
            description = ""

            [[moderation_categories]]
            id = 1
            name = "b"
            title = "B"
            description = ""
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_emoji_id_between_groups_is_rejected() {
        let result = ConfigFile::parse(
            r##"
            [[reaction_emoji_groups]]
            id = 1
            keyword = "a"
            color = "#000000"
            order = 1
            emojis = [{ id = 1, keyword = "x", image = "x.png", order = 1 }]

            [[reaction_emoji_groups]]
            id = 2
            keyword = "b"
            color = "#000000"
            order = 2
            emojis = [{ id = 1, keyword = "y", image = "y.png", order = 1 }]
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn group_id_shared_by_reaction_and_other_group_is_rejected() {
        let result = ConfigFile::parse(
            r##"
            [[reaction_emoji_groups]]
            id = 1
            keyword = "a"
            color = "#000000"
            order = 1

            [[emoji_groups]]
            id = 1
            keyword = "b"
            color = "#ffffff"
            order = 2
            "##,
        );
        assert!(result.is_err());
    }
}
