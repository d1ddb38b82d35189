use database::{DbReadMode, DieselDatabaseError};
use model::{
    EmojiCount, EmojiCountList, Page, PageQuery, Post, PostComment, PostCommentList,
    PostCommenter, PostId, PostReaction, PostReactionList, PostReactionsQuery, UserId,
};

use crate::{
    DataError, IntoDataError, define_cmd_wrapper_read,
    result::{Result, WrappedContextExt},
};

define_cmd_wrapper_read!(ReadCommandsPost);

impl ReadCommandsPost<'_> {
    /// Comments from newest to oldest.
    pub async fn comments(
        &self,
        post_id: PostId,
        query: PageQuery,
    ) -> Result<PostCommentList, DataError> {
        let page = self.validate_page(query)?;
        let comments = self
            .db_read(move |mut cmds| {
                let Some(post) = cmds.post().post(post_id)? else {
                    return Ok(None);
                };
                let raw_comments = cmds.post().comment().comments_page(post.id, page)?;
                let mut comments = vec![];
                for raw in raw_comments {
                    let commenter = commenter(&mut cmds, &post, raw.commenter_id)?;
                    comments.push(PostComment::new(raw, commenter));
                }
                Ok(Some(comments))
            })
            .await
            .into_error()?;

        match comments {
            Some(comments) => Ok(PostCommentList { comments }),
            None => Err(DataError::NotFound.report().attach_printable(post_id)),
        }
    }

    /// Reactions from newest to oldest.
    pub async fn reactions(
        &self,
        post_id: PostId,
        query: PostReactionsQuery,
    ) -> Result<PostReactionList, DataError> {
        let page = self.validate_page(query.page_query())?;
        if let Some(emoji) = query.emoji() {
            let exists = self
                .db_read(move |mut cmds| cmds.emoji().emoji_exists(emoji))
                .await
                .into_error()?;
            if !exists {
                return Err(DataError::ReferenceNotFound.report().attach_printable(emoji));
            }
        }
        let reactions = self
            .db_read(move |mut cmds| {
                if cmds.post().post(post_id)?.is_none() {
                    return Ok(None);
                }
                let reactions = cmds
                    .post()
                    .reaction()
                    .reactions_page(post_id, page, query.emoji())?
                    .into_iter()
                    .map(|(raw, emoji, reactor)| PostReaction::new(raw, emoji, reactor))
                    .collect();
                Ok(Some(reactions))
            })
            .await
            .into_error()?;

        match reactions {
            Some(reactions) => Ok(PostReactionList { reactions }),
            None => Err(DataError::NotFound.report().attach_printable(post_id)),
        }
    }

    pub async fn emoji_counts(&self, post_id: PostId) -> Result<EmojiCountList, DataError> {
        let counts = self
            .db_read(move |mut cmds| {
                if cmds.post().post(post_id)?.is_none() {
                    return Ok(None);
                }
                cmds.post().reaction().emoji_counts(post_id).map(Some)
            })
            .await
            .into_error()?;

        match counts {
            Some(counts) => Ok(EmojiCountList {
                counts: counts
                    .into_iter()
                    .map(|(emoji, count)| EmojiCount { emoji, count })
                    .collect(),
            }),
            None => Err(DataError::NotFound.report().attach_printable(post_id)),
        }
    }

    fn validate_page(&self, query: PageQuery) -> Result<Page, DataError> {
        query
            .validate(self.config().limits().max_page_size)
            .map_err(|e| DataError::InvalidInput.report().attach_printable(e))
    }
}

fn commenter(
    cmds: &mut DbReadMode<'_>,
    post: &Post,
    user: UserId,
) -> error_stack::Result<PostCommenter, DieselDatabaseError> {
    let summary = cmds.user().user_summary(user)?;
    let membership = match post.community_id {
        Some(community) => cmds.community().membership(community, user)?,
        None => None,
    };
    Ok(PostCommenter::new(summary, membership))
}

#[cfg(test)]
mod tests {
    use model::{
        EmojiGroupId, EmojiId, NewPostComment, NewPostReaction, PageQuery, PostId,
        PostReactionsQuery,
    };

    use crate::{
        DataError,
        test_utils::{COMMUNITY_MODERATOR, GLOBAL_MODERATOR, POST_CREATOR, USER, test_context, user},
    };

    #[tokio::test]
    async fn comments_are_paged_from_newest_to_oldest() {
        let c = test_context().await;
        let post = PostId::new(2);
        for i in 0..5 {
            c.write
                .post()
                .comment(
                    user(USER),
                    post,
                    NewPostComment {
                        text: format!("comment {}", i),
                    },
                )
                .await
                .unwrap();
        }

        let first_page = c
            .read
            .post()
            .comments(post, PageQuery::new(None, Some(2)))
            .await
            .unwrap()
            .comments;
        let texts: Vec<&str> = first_page.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["comment 4", "comment 3"]);

        let next_page = c
            .read
            .post()
            .comments(post, PageQuery::new(Some(*first_page[1].id.as_i64()), Some(20)))
            .await
            .unwrap()
            .comments;
        let texts: Vec<&str> = next_page.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["comment 2", "comment 1", "comment 0"]);
    }

    #[tokio::test]
    async fn too_large_page_is_rejected() {
        let c = test_context().await;
        let error = c
            .read
            .post()
            .comments(PostId::new(1), PageQuery::new(None, Some(21)))
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::InvalidInput));
    }

    #[tokio::test]
    async fn comments_of_missing_post_is_not_found() {
        let c = test_context().await;
        let error = c
            .read
            .post()
            .comments(PostId::new(100), PageQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotFound));
    }

    #[tokio::test]
    async fn moderator_comment_has_staff_membership() {
        let c = test_context().await;
        let comments = c
            .read
            .post()
            .comments(PostId::new(1), PageQuery::default())
            .await
            .unwrap()
            .comments;
        assert_eq!(comments.len(), 1);
        let membership = comments[0].commenter.community_membership.unwrap();
        assert!(membership.is_moderator);
    }

    #[tokio::test]
    async fn reactions_are_filtered_and_counted() {
        let c = test_context().await;
        let post = PostId::new(1);
        for (reactor, emoji) in [
            (USER, 1),
            (GLOBAL_MODERATOR, 2),
            (COMMUNITY_MODERATOR, 2),
            (POST_CREATOR, 3),
        ] {
            c.write
                .post()
                .react(
                    user(reactor),
                    post,
                    NewPostReaction {
                        emoji_id: EmojiId::new(emoji),
                        group_id: EmojiGroupId::new(1),
                    },
                )
                .await
                .unwrap();
        }

        let filtered = c
            .read
            .post()
            .reactions(
                post,
                PostReactionsQuery {
                    emoji_id: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .reactions;
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.emoji.id == EmojiId::new(2)));
        assert!(filtered[0].id.as_i64() > filtered[1].id.as_i64());

        let counts = c.read.post().emoji_counts(post).await.unwrap().counts;
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].emoji.id, EmojiId::new(2));
        assert_eq!(counts[0].count, 2);
        assert!(counts.iter().all(|c| c.count > 0));
    }

    #[tokio::test]
    async fn reactions_filtered_with_unknown_emoji_are_rejected() {
        let c = test_context().await;
        let error = c
            .read
            .post()
            .reactions(
                PostId::new(1),
                PostReactionsQuery {
                    emoji_id: Some(100),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::ReferenceNotFound));
    }
}
