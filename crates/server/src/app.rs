use axum::{Router, middleware};
use server_api::{S, common, common_admin, emoji, moderation, post, utils};

/// Routes of the public API.
pub struct PublicApp {
    state: S,
}

impl PublicApp {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn create_router(&self) -> Router {
        Router::new()
            .merge(common::router_common(self.state.clone()))
            .merge(self.private_router())
    }

    /// Routes which require `x-access-token` header.
    fn private_router(&self) -> Router {
        let private = Router::new()
            .merge(common_admin::router_perf(self.state.clone()))
            .merge(moderation::router_report(self.state.clone()))
            .merge(moderation::router_moderated_object(self.state.clone()))
            .merge(post::router_post_comment(self.state.clone()))
            .merge(post::router_post_reaction(self.state.clone()))
            .merge(emoji::router_emoji(self.state.clone()));

        private.route_layer({
            middleware::from_fn_with_state(
                self.state.clone(),
                utils::authenticate_with_access_token::<S>,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use config::Config;
    use database::{DbWriter, IntoDatabaseError};
    use diesel::connection::SimpleConnection;
    use http::{Request, StatusCode};
    use serde_json::{Value, json};
    use server_api::app::AppState;
    use server_data::db_manager::DatabaseManager;
    use simple_backend::{app::SimpleBackendAppState, perf::PerfCounterData};
    use tower::ServiceExt;

    use super::*;
    use crate::perf::ALL_COUNTERS;

    const USER: &str = "token-user";
    const GLOBAL_MODERATOR: &str = "token-global";
    const COMMUNITY_MODERATOR: &str = "token-community-moderator";

    const TEST_DATA: &str = r#"
    INSERT INTO user_account (id, username, access_token, global_moderator)
    VALUES
        (1, 'user', 'token-user', 0),
        (2, 'global', 'token-global', 1),
        (3, 'community-moderator', 'token-community-moderator', 0),
        (4, 'post-creator', 'token-post-creator', 0);
    INSERT INTO community (id, name, creator_id) VALUES (1, 'rust', 3);
    INSERT INTO community_membership (community_id, user_id, is_administrator, is_moderator)
    VALUES (1, 3, 0, 1), (1, 1, 0, 0), (1, 4, 0, 0);
    INSERT INTO post (id, creator_id, community_id, text, creation_unix_time)
    VALUES (1, 4, 1, 'community post', 0);
    "#;

    struct TestServer {
        _manager: DatabaseManager,
        router: Router,
    }

    impl TestServer {
        async fn new() -> Self {
            let config = Arc::new(Config::with_in_ram_database().unwrap());
            let (manager, read, write) = DatabaseManager::new(config.clone()).await.unwrap();
            write
                .reference_data()
                .sync_config_to_database()
                .await
                .unwrap();
            DbWriter::new(write.write_handle())
                .db_transaction(|mut cmds| cmds.0.batch_execute(TEST_DATA).into_db_error(()))
                .await
                .unwrap();

            let simple_state = SimpleBackendAppState::new(
                config.simple_backend_arc(),
                Arc::new(PerfCounterData::new(ALL_COUNTERS)),
            );
            let state = AppState::create_app_state(read, write, config, simple_state);

            Self {
                _manager: manager,
                router: PublicApp::new(state).create_router(),
            }
        }

        async fn request(
            &self,
            method: &str,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header(utils::ACCESS_TOKEN_HEADER_STR, token);
            }
            let request = match body {
                Some(body) => builder
                    .header(http::header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string())),
                None => builder.body(Body::empty()),
            }
            .unwrap();

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let json = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, json)
        }

        async fn report_user_4(&self) -> Value {
            let (status, body) = self
                .request(
                    "POST",
                    "/moderation/reports",
                    Some(USER),
                    Some(json!({"target": {"kind": "user", "id": 4}, "category_id": 1})),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
            body
        }
    }

    #[tokio::test]
    async fn health_does_not_require_access_token() {
        let server = TestServer::new().await;
        let (status, body) = server.request("GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "hello"}));
    }

    #[tokio::test]
    async fn private_routes_require_known_access_token() {
        let server = TestServer::new().await;
        let (status, _) = server
            .request("GET", "/moderation/categories", None, None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = server
            .request("GET", "/moderation/categories", Some("unknown"), None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = server
            .request("GET", "/moderation/categories", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn global_moderator_changes_category_and_log_is_written() {
        let server = TestServer::new().await;
        server.report_user_4().await;

        let (status, body) = server
            .request("GET", "/moderated-objects?status=pending", Some(GLOBAL_MODERATOR), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let objects = body["objects"].as_array().unwrap();
        assert_eq!(objects.len(), 1);
        let id = objects[0]["id"].as_i64().unwrap();

        let (status, body) = server
            .request(
                "PATCH",
                &format!("/moderated-objects/{id}"),
                Some(GLOBAL_MODERATOR),
                Some(json!({"category_id": 2})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category_id"], 2);
        assert_eq!(body["status"], "pending");

        let (status, body) = server
            .request(
                "GET",
                &format!("/moderated-objects/{id}/logs"),
                Some(GLOBAL_MODERATOR),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["actor_id"], 2);
        assert_eq!(
            entries[0]["change"],
            json!({"field": "category", "from": 1, "to": 2})
        );
    }

    #[tokio::test]
    async fn community_moderator_can_not_update_user_target() {
        let server = TestServer::new().await;
        let report = server.report_user_4().await;
        assert_eq!(report["report"]["reporter_id"], 1);

        let (status, body) = server
            .request("GET", "/moderated-objects", Some(GLOBAL_MODERATOR), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["objects"][0]["id"].as_i64().unwrap();

        let (status, _) = server
            .request(
                "PATCH",
                &format!("/moderated-objects/{id}"),
                Some(COMMUNITY_MODERATOR),
                Some(json!({"category_id": 2, "description": "changed"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, object) = server
            .request(
                "GET",
                &format!("/moderated-objects/{id}"),
                Some(GLOBAL_MODERATOR),
                None,
            )
            .await;
        assert_eq!(object["category_id"], 1);
        assert!(object.get("description").map(Value::is_null).unwrap_or(true));

        let (_, logs) = server
            .request(
                "GET",
                &format!("/moderated-objects/{id}/logs"),
                Some(GLOBAL_MODERATOR),
                None,
            )
            .await;
        assert!(logs["entries"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_moderated_object_and_category() {
        let server = TestServer::new().await;
        let (status, _) = server
            .request(
                "PATCH",
                "/moderated-objects/100",
                Some(GLOBAL_MODERATOR),
                Some(json!({"category_id": 2})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        server.report_user_4().await;
        let (_, body) = server
            .request("GET", "/moderated-objects", Some(GLOBAL_MODERATOR), None)
            .await;
        let id = body["objects"][0]["id"].as_i64().unwrap();
        let (status, _) = server
            .request(
                "PATCH",
                &format!("/moderated-objects/{id}"),
                Some(GLOBAL_MODERATOR),
                Some(json!({"category_id": 100})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn second_report_returns_earlier_report() {
        let server = TestServer::new().await;
        let first = server.report_user_4().await;
        assert!(first.get("already_reported").is_none());
        let second = server.report_user_4().await;
        assert_eq!(second["already_reported"], true);
        assert_eq!(second["report"]["id"], first["report"]["id"]);
    }

    #[tokio::test]
    async fn approve_is_possible_only_once() {
        let server = TestServer::new().await;
        server.report_user_4().await;
        let (_, body) = server
            .request("GET", "/moderated-objects", Some(GLOBAL_MODERATOR), None)
            .await;
        let id = body["objects"][0]["id"].as_i64().unwrap();

        let uri = format!("/moderated-objects/{id}/approve");
        let (status, body) = server
            .request("POST", &uri, Some(GLOBAL_MODERATOR), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "approved");

        let (status, _) = server
            .request("POST", &format!("/moderated-objects/{id}/reject"), Some(GLOBAL_MODERATOR), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn comment_create_list_and_page_size_limit() {
        let server = TestServer::new().await;
        let (status, body) = server
            .request(
                "POST",
                "/posts/1/comments",
                Some(USER),
                Some(json!({"text": "hello"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["commenter"]["id"], 1);

        let (status, body) = server
            .request("GET", "/posts/1/comments?count=1", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["comments"].as_array().unwrap().len(), 1);

        let (status, _) = server
            .request("GET", "/posts/1/comments?count=21", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = server
            .request("GET", "/posts/100/comments", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reacting_again_replaces_reaction() {
        let server = TestServer::new().await;
        for emoji_id in [1, 2] {
            let (status, _) = server
                .request(
                    "PUT",
                    "/posts/1/reactions",
                    Some(USER),
                    Some(json!({"emoji_id": emoji_id, "group_id": 1})),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = server
            .request("GET", "/posts/1/reactions/emoji-counts", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let counts = body["counts"].as_array().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0]["emoji"]["id"], 2);
        assert_eq!(counts[0]["count"], 1);

        let (status, _) = server
            .request(
                "PUT",
                "/posts/1/reactions",
                Some(USER),
                Some(json!({"emoji_id": 100, "group_id": 1})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = server
            .request("GET", "/posts/1/reactions?emoji_id=2", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reactions"].as_array().unwrap().len(), 1);

        let (status, _) = server
            .request("GET", "/posts/1/reactions?emoji_id=100", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn emoji_groups_do_not_contain_reaction_groups() {
        let server = TestServer::new().await;
        let (status, body) = server
            .request("GET", "/emoji-groups", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2]);

        let (status, body) = server
            .request("GET", "/emoji-groups/reactions", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn perf_counters_are_visible_only_for_global_moderators() {
        let server = TestServer::new().await;
        let (status, _) = server
            .request("GET", "/perf/counters", Some(USER), None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = server
            .request("GET", "/perf/counters", Some(GLOBAL_MODERATOR), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body["categories"]
                .as_array()
                .unwrap()
                .iter()
                .any(|c| c["category"] == "moderated_object")
        );
    }
}
