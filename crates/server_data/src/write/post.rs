use model::{
    NewPostComment, NewPostReaction, PostComment, PostCommentId, PostCommenter, PostId,
    PostReaction, PostReactionId, User, UserId,
};
use tracing::warn;

use crate::{
    DataError, db_transaction, define_cmd_wrapper_write,
    result::{Result, WrappedContextExt},
};

enum PostWriteOutcome<T> {
    PostNotFound,
    ItemNotFound,
    EmojiNotFound,
    NotAllowed,
    Done(T),
}

impl<T> PostWriteOutcome<T> {
    fn into_result(self, user: UserId, post: PostId) -> Result<T, DataError> {
        match self {
            Self::Done(value) => Ok(value),
            Self::PostNotFound => Err(DataError::NotFound
                .report()
                .attach_printable(format!("Post not found: {}", post))),
            Self::ItemNotFound => Err(DataError::NotFound
                .report()
                .attach_printable(format!("Post {} does not contain the item", post))),
            Self::EmojiNotFound => Err(DataError::ReferenceNotFound
                .report()
                .attach_printable("Reaction emoji not found")),
            Self::NotAllowed => {
                warn!("Post item deletion denied, user: {}, post: {}", user, post);
                Err(DataError::NotAllowed.report())
            }
        }
    }
}

define_cmd_wrapper_write!(WriteCommandsPost);

impl WriteCommandsPost<'_> {
    pub async fn comment(
        &self,
        commenter: User,
        post_id: PostId,
        comment: NewPostComment,
    ) -> Result<PostComment, DataError> {
        let max = self.config().limits().post_comment_max_length;
        if comment.text.trim().is_empty() {
            return Err(DataError::InvalidInput
                .report()
                .attach_printable("Comment text is empty"));
        }
        if comment.text.chars().count() > max {
            return Err(DataError::InvalidInput
                .report()
                .attach_printable(format!("Comment text is longer than {} characters", max)));
        }

        let user = commenter.id;
        db_transaction!(self, move |mut cmds| {
            let Some(post) = cmds.read().post().post(post_id)? else {
                return Ok(PostWriteOutcome::PostNotFound);
            };
            let raw = cmds
                .post()
                .comment()
                .insert_comment(post.id, user, comment.text)?;
            let summary = cmds.read().user().user_summary(user)?;
            let membership = match post.community_id {
                Some(community) => cmds.read().community().membership(community, user)?,
                None => None,
            };
            Ok(PostWriteOutcome::Done(PostComment::new(
                raw,
                PostCommenter::new(summary, membership),
            )))
        })?
        .into_result(user, post_id)
    }

    /// Commenter and post creator can delete the comment.
    pub async fn delete_comment(
        &self,
        user: User,
        post_id: PostId,
        comment_id: PostCommentId,
    ) -> Result<(), DataError> {
        let user = user.id;
        db_transaction!(self, move |mut cmds| {
            let Some(post) = cmds.read().post().post(post_id)? else {
                return Ok(PostWriteOutcome::PostNotFound);
            };
            let comment = match cmds.read().post().comment().comment(comment_id)? {
                Some(comment) if comment.post_id == post.id => comment,
                _ => return Ok(PostWriteOutcome::ItemNotFound),
            };
            if comment.commenter_id != user && post.creator_id != user {
                return Ok(PostWriteOutcome::NotAllowed);
            }
            cmds.post().comment().delete_comment(comment.id)?;
            Ok(PostWriteOutcome::Done(()))
        })?
        .into_result(user, post_id)
    }

    /// Add reaction to the post. Reacting again replaces the earlier
    /// reaction.
    pub async fn react(
        &self,
        reactor: User,
        post_id: PostId,
        reaction: NewPostReaction,
    ) -> Result<PostReaction, DataError> {
        let user = reactor.id;
        db_transaction!(self, move |mut cmds| {
            if cmds.read().post().post(post_id)?.is_none() {
                return Ok(PostWriteOutcome::PostNotFound);
            }
            let Some(emoji) = cmds
                .read()
                .emoji()
                .reaction_emoji(reaction.group_id, reaction.emoji_id)?
            else {
                return Ok(PostWriteOutcome::EmojiNotFound);
            };
            let raw = cmds
                .post()
                .reaction()
                .upsert_reaction(post_id, user, emoji.id)?;
            let summary = cmds.read().user().user_summary(user)?;
            Ok(PostWriteOutcome::Done(PostReaction::new(raw, emoji, summary)))
        })?
        .into_result(user, post_id)
    }

    /// Only the reactor can delete the reaction.
    pub async fn delete_reaction(
        &self,
        user: User,
        post_id: PostId,
        reaction_id: PostReactionId,
    ) -> Result<(), DataError> {
        let user = user.id;
        db_transaction!(self, move |mut cmds| {
            if cmds.read().post().post(post_id)?.is_none() {
                return Ok(PostWriteOutcome::PostNotFound);
            }
            let reaction = match cmds.read().post().reaction().reaction(reaction_id)? {
                Some(reaction) if reaction.post_id == post_id => reaction,
                _ => return Ok(PostWriteOutcome::ItemNotFound),
            };
            if reaction.reactor_id != user {
                return Ok(PostWriteOutcome::NotAllowed);
            }
            cmds.post().reaction().delete_reaction(reaction.id)?;
            Ok(PostWriteOutcome::Done(()))
        })?
        .into_result(user, post_id)
    }
}

#[cfg(test)]
mod tests {
    use model::{
        EmojiGroupId, EmojiId, NewPostComment, NewPostReaction, PageQuery, PostCommentId, PostId,
        PostReactionsQuery,
    };

    use crate::{
        DataError,
        test_utils::{COMMUNITY_MODERATOR, POST_CREATOR, USER, test_context, user},
    };

    fn text(value: &str) -> NewPostComment {
        NewPostComment {
            text: value.to_string(),
        }
    }

    fn reaction(emoji: i64) -> NewPostReaction {
        NewPostReaction {
            emoji_id: EmojiId::new(emoji),
            group_id: EmojiGroupId::new(1),
        }
    }

    #[tokio::test]
    async fn comment_contains_commenter_membership() {
        let c = test_context().await;
        let comment = c
            .write
            .post()
            .comment(user(USER), PostId::new(1), text("hello"))
            .await
            .unwrap();
        assert_eq!(comment.text, "hello");
        let membership = comment.commenter.community_membership.unwrap();
        assert!(!membership.is_staff());

        let timeline_comment = c
            .write
            .post()
            .comment(user(USER), PostId::new(2), text("hello"))
            .await
            .unwrap();
        assert!(timeline_comment.commenter.community_membership.is_none());
    }

    #[tokio::test]
    async fn blank_or_too_long_comment_is_rejected() {
        let c = test_context().await;

        let error = c
            .write
            .post()
            .comment(user(USER), PostId::new(1), text("  \n "))
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::InvalidInput));

        let error = c
            .write
            .post()
            .comment(user(USER), PostId::new(1), text(&"a".repeat(1501)))
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::InvalidInput));

        c.write
            .post()
            .comment(user(USER), PostId::new(1), text(&"ä".repeat(1500)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn comment_to_missing_post_is_not_found() {
        let c = test_context().await;
        let error = c
            .write
            .post()
            .comment(user(USER), PostId::new(100), text("hello"))
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotFound));
    }

    #[tokio::test]
    async fn commenter_and_post_creator_can_delete_comment() {
        let c = test_context().await;
        let post = PostId::new(1);

        let error = c
            .write
            .post()
            .delete_comment(user(USER), post, PostCommentId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotAllowed));

        let error = c
            .write
            .post()
            .delete_comment(user(COMMUNITY_MODERATOR), PostId::new(2), PostCommentId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotFound));

        c.write
            .post()
            .delete_comment(user(POST_CREATOR), post, PostCommentId::new(1))
            .await
            .unwrap();

        let own = c
            .write
            .post()
            .comment(user(USER), post, text("mine"))
            .await
            .unwrap();
        c.write
            .post()
            .delete_comment(user(USER), post, own.id)
            .await
            .unwrap();

        let comments = c
            .read
            .post()
            .comments(post, PageQuery::default())
            .await
            .unwrap()
            .comments;
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn reacting_again_replaces_reaction() {
        let c = test_context().await;
        let post = PostId::new(1);

        let first = c
            .write
            .post()
            .react(user(USER), post, reaction(1))
            .await
            .unwrap();
        let second = c
            .write
            .post()
            .react(user(USER), post, reaction(2))
            .await
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.emoji.id, EmojiId::new(2));

        let reactions = c
            .read
            .post()
            .reactions(post, PostReactionsQuery::default())
            .await
            .unwrap()
            .reactions;
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].emoji.id, EmojiId::new(2));
    }

    #[tokio::test]
    async fn reaction_emoji_must_be_in_reaction_group() {
        let c = test_context().await;
        let wrong_group = NewPostReaction {
            emoji_id: EmojiId::new(1),
            group_id: EmojiGroupId::new(2),
        };
        let error = c
            .write
            .post()
            .react(user(USER), PostId::new(1), wrong_group)
            .await
            .unwrap_err();
        assert!(matches!(
            error.current_context(),
            DataError::ReferenceNotFound
        ));

        let error = c
            .write
            .post()
            .react(user(USER), PostId::new(1), reaction(100))
            .await
            .unwrap_err();
        assert!(matches!(
            error.current_context(),
            DataError::ReferenceNotFound
        ));
    }

    #[tokio::test]
    async fn only_reactor_can_delete_reaction() {
        let c = test_context().await;
        let post = PostId::new(1);
        let r = c
            .write
            .post()
            .react(user(USER), post, reaction(1))
            .await
            .unwrap();

        let error = c
            .write
            .post()
            .delete_reaction(user(POST_CREATOR), post, r.id)
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotAllowed));

        c.write
            .post()
            .delete_reaction(user(USER), post, r.id)
            .await
            .unwrap();

        let error = c
            .write
            .post()
            .delete_reaction(user(USER), post, r.id)
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), DataError::NotFound));
    }
}
