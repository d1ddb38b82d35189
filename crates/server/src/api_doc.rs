use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "social-backend",
        description = "Social network moderation, comment and reaction API",
        version = "0.1.0",
        license(name = "", url = "https://example.com"),
    ),
    paths(
        // Common
        server_api::common::get_health,
        server_api::common_admin::get_perf_counters,
        // Moderation
        server_api::moderation::post_report,
        server_api::moderation::get_moderation_categories,
        server_api::moderation::get_moderated_objects,
        server_api::moderation::get_moderated_object,
        server_api::moderation::patch_moderated_object,
        server_api::moderation::get_moderated_object_reports,
        server_api::moderation::get_moderated_object_logs,
        server_api::moderation::post_approve_moderated_object,
        server_api::moderation::post_reject_moderated_object,
        // Post
        server_api::post::get_post_comments,
        server_api::post::post_post_comment,
        server_api::post::delete_post_comment,
        server_api::post::get_post_reactions,
        server_api::post::put_post_reaction,
        server_api::post::delete_post_reaction,
        server_api::post::get_post_emoji_counts,
        // Emoji
        server_api::emoji::get_emoji_groups,
        server_api::emoji::get_reaction_emoji_groups,
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn all() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(server_api::ApiDocCommon::openapi());
        doc
    }

    pub fn open_api_json_string() -> Result<String, serde_json::Error> {
        Self::all().to_pretty_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_doc_contains_routes_and_security_scheme() {
        let doc = ApiDoc::all();
        assert!(doc.paths.paths.contains_key("/moderated-objects/{id}"));
        assert!(doc.paths.paths.contains_key("/posts/{post_id}/reactions/emoji-counts"));
        assert!(doc.paths.paths.contains_key("/emoji-groups"));
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("access_token"));
        assert!(components.schemas.contains_key("ModeratedObject"));
    }
}
