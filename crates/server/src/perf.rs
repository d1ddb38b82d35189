//! Server performance info

use server_api::{
    common::COMMON_COUNTERS_LIST,
    common_admin::COMMON_ADMIN_COUNTERS_LIST,
    emoji::EMOJI_COUNTERS_LIST,
    moderation::{MODERATED_OBJECT_COUNTERS_LIST, MODERATION_REPORT_COUNTERS_LIST},
    post::{POST_COMMENT_COUNTERS_LIST, POST_REACTION_COUNTERS_LIST},
};
use simple_backend::perf::{AllCounters, CounterCategory};

pub static ALL_COUNTERS: AllCounters = &[
    &CounterCategory::new("common", COMMON_COUNTERS_LIST),
    &CounterCategory::new("common_admin", COMMON_ADMIN_COUNTERS_LIST),
    // Moderation
    &CounterCategory::new("moderation_report", MODERATION_REPORT_COUNTERS_LIST),
    &CounterCategory::new("moderated_object", MODERATED_OBJECT_COUNTERS_LIST),
    // Post
    &CounterCategory::new("post_comment", POST_COMMENT_COUNTERS_LIST),
    &CounterCategory::new("post_reaction", POST_REACTION_COUNTERS_LIST),
    &CounterCategory::new("emoji", EMOJI_COUNTERS_LIST),
];
