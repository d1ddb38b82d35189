use crate::{DbReadMode, DieselConnection};

pub mod emoji;
pub mod moderation;
pub mod post;

/// Write commands for the current database. Create with
/// [crate::DbWriter] so that the commands run inside a transaction.
pub struct DbWriteMode<'a>(pub &'a mut DieselConnection);

impl DbWriteMode<'_> {
    pub fn read(&mut self) -> DbReadMode<'_> {
        DbReadMode(self.0)
    }

    pub fn post(&mut self) -> post::CurrentWritePost<'_> {
        post::CurrentWritePost::new(self.0)
    }

    pub fn emoji(&mut self) -> emoji::CurrentWriteEmoji<'_> {
        emoji::CurrentWriteEmoji::new(self.0)
    }

    pub fn moderation(&mut self) -> moderation::CurrentWriteModeration<'_> {
        moderation::CurrentWriteModeration::new(self.0)
    }
}
