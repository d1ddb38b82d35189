use crate::define_current_write_commands;

mod comment;
mod reaction;

define_current_write_commands!(CurrentWritePost);

impl<'a> CurrentWritePost<'a> {
    pub fn comment(self) -> comment::CurrentWritePostComment<'a> {
        comment::CurrentWritePostComment::new(self.cmds)
    }

    pub fn reaction(self) -> reaction::CurrentWritePostReaction<'a> {
        reaction::CurrentWritePostReaction::new(self.cmds)
    }
}
