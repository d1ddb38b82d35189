pub mod emoji;
pub mod moderation;
pub mod post;
pub mod user;
