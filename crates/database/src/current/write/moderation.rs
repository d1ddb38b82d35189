use crate::define_current_write_commands;

mod category;
mod change_log;
mod moderated_object;
mod report;

define_current_write_commands!(CurrentWriteModeration);

impl<'a> CurrentWriteModeration<'a> {
    pub fn category(self) -> category::CurrentWriteModerationCategory<'a> {
        category::CurrentWriteModerationCategory::new(self.cmds)
    }

    pub fn report(self) -> report::CurrentWriteModerationReport<'a> {
        report::CurrentWriteModerationReport::new(self.cmds)
    }

    pub fn moderated_object(self) -> moderated_object::CurrentWriteModeratedObject<'a> {
        moderated_object::CurrentWriteModeratedObject::new(self.cmds)
    }

    pub fn change_log(self) -> change_log::CurrentWriteModerationChangeLog<'a> {
        change_log::CurrentWriteModerationChangeLog::new(self.cmds)
    }
}
