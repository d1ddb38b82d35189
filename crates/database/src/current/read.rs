use crate::DieselConnection;

pub mod community;
pub mod emoji;
pub mod moderation;
pub mod post;
pub mod user;

/// Read commands for the current database.
pub struct DbReadMode<'a>(pub &'a mut DieselConnection);

impl DbReadMode<'_> {
    pub fn user(&mut self) -> user::CurrentReadUser<'_> {
        user::CurrentReadUser::new(self.0)
    }

    pub fn community(&mut self) -> community::CurrentReadCommunity<'_> {
        community::CurrentReadCommunity::new(self.0)
    }

    pub fn post(&mut self) -> post::CurrentReadPost<'_> {
        post::CurrentReadPost::new(self.0)
    }

    pub fn emoji(&mut self) -> emoji::CurrentReadEmoji<'_> {
        emoji::CurrentReadEmoji::new(self.0)
    }

    pub fn moderation(&mut self) -> moderation::CurrentReadModeration<'_> {
        moderation::CurrentReadModeration::new(self.0)
    }
}
