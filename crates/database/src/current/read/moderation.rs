use crate::define_current_read_commands;

mod category;
mod change_log;
mod moderated_object;
mod report;
mod target;

define_current_read_commands!(CurrentReadModeration);

impl<'a> CurrentReadModeration<'a> {
    pub fn category(self) -> category::CurrentReadModerationCategory<'a> {
        category::CurrentReadModerationCategory::new(self.cmds)
    }

    pub fn report(self) -> report::CurrentReadModerationReport<'a> {
        report::CurrentReadModerationReport::new(self.cmds)
    }

    pub fn moderated_object(self) -> moderated_object::CurrentReadModeratedObject<'a> {
        moderated_object::CurrentReadModeratedObject::new(self.cmds)
    }

    pub fn change_log(self) -> change_log::CurrentReadModerationChangeLog<'a> {
        change_log::CurrentReadModerationChangeLog::new(self.cmds)
    }

    pub fn target(self) -> target::CurrentReadModerationTarget<'a> {
        target::CurrentReadModerationTarget::new(self.cmds)
    }
}
