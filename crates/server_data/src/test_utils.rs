use std::sync::Arc;

use config::Config;
use database::{DbWriter, IntoDatabaseError};
use diesel::connection::SimpleConnection;
use model::{User, UserId};

use crate::db_manager::{DatabaseManager, RouterDatabaseReadHandle, RouterDatabaseWriteHandle};

pub const USER: i64 = 1;
pub const GLOBAL_MODERATOR: i64 = 2;
/// Moderator of community 1.
pub const COMMUNITY_MODERATOR: i64 = 3;
/// Creator of post 1.
pub const POST_CREATOR: i64 = 4;

const TEST_DATA: &str = r#"
INSERT INTO user_account (id, username, access_token, global_moderator)
VALUES
    (1, 'user', 'token-user', 0),
    (2, 'global', 'token-global', 1),
    (3, 'community-moderator', 'token-community-moderator', 0),
    (4, 'post-creator', 'token-post-creator', 0);
INSERT INTO community (id, name, creator_id) VALUES (1, 'rust', 3), (2, 'other', 4);
INSERT INTO community_membership (community_id, user_id, is_administrator, is_moderator)
VALUES (1, 3, 0, 1), (1, 1, 0, 0), (2, 4, 1, 0);
INSERT INTO post (id, creator_id, community_id, text, creation_unix_time)
VALUES (1, 4, 1, 'community post', 0), (2, 1, NULL, 'timeline post', 0), (3, 4, 2, 'other post', 0);
INSERT INTO post_comment (id, post_id, commenter_id, text, creation_unix_time)
VALUES (1, 1, 3, 'comment', 0);
"#;

pub struct TestContext {
    _manager: DatabaseManager,
    pub read: RouterDatabaseReadHandle,
    pub write: RouterDatabaseWriteHandle,
}

/// In RAM database with reference data from the default server config
/// and test users, communities, posts and comments.
pub async fn test_context() -> TestContext {
    let config = Arc::new(Config::with_in_ram_database().unwrap());
    let (manager, read, write) = DatabaseManager::new(config).await.unwrap();

    write
        .reference_data()
        .sync_config_to_database()
        .await
        .unwrap();

    DbWriter::new(write.write_handle())
        .db_transaction(|mut cmds| cmds.0.batch_execute(TEST_DATA).into_db_error(()))
        .await
        .unwrap();

    TestContext {
        _manager: manager,
        read,
        write,
    }
}

pub fn user(id: i64) -> User {
    User {
        id: UserId::new(id),
        username: format!("user-{}", id),
        global_moderator: id == GLOBAL_MODERATOR,
        avatar: None,
    }
}
