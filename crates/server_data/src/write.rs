pub mod moderation;
pub mod post;
pub mod reference_data;
