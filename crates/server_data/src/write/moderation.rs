use database::{DbWriteMode, DieselDatabaseError};
use model::{
    FieldChange, ModeratedObject, ModeratedObjectId, ModeratedObjectStatus, ModerationDecision,
    NewReport, Report, ReportResult, TargetRef, UpdateModeratedObject, User,
};
use tracing::{info, warn};

use crate::{
    DataError, access::ObjectAccess, db_transaction, define_cmd_wrapper_write,
    result::{Result, WrappedContextExt},
};

enum ReportOutcome {
    TargetNotFound,
    CategoryNotFound,
    AlreadyReported(Report),
    Created(Report, ModeratedObjectId),
}

enum UpdateOutcome {
    Access(ObjectAccess),
    CategoryNotFound,
    Updated(ModeratedObject, usize),
}

enum DecisionOutcome {
    Access(ObjectAccess),
    NotPending(ModeratedObjectStatus),
    Decided(ModeratedObject),
}

define_cmd_wrapper_write!(WriteCommandsModeration);

impl WriteCommandsModeration<'_> {
    /// Record report and create the moderated object of the target if
    /// it does not exist yet.
    ///
    /// Reporting the same target again returns the earlier report.
    pub async fn report(
        &self,
        reporter: User,
        report: NewReport,
    ) -> Result<ReportResult, DataError> {
        self.validate_description(report.description.as_deref())?;

        if report.target == TargetRef::user(reporter.id) {
            return Err(DataError::NotAllowed
                .report()
                .attach_printable("Reporting yourself is not allowed"));
        }

        let reporter_id = reporter.id;
        let target = report.target;
        let outcome = db_transaction!(self, move |mut cmds| {
            if cmds
                .read()
                .moderation()
                .target()
                .resolve_target(report.target)?
                .is_none()
            {
                return Ok(ReportOutcome::TargetNotFound);
            }

            if !cmds
                .read()
                .moderation()
                .category()
                .category_exists(report.category_id)?
            {
                return Ok(ReportOutcome::CategoryNotFound);
            }

            if let Some(existing) = cmds
                .read()
                .moderation()
                .report()
                .report_from_reporter(reporter_id, report.target)?
            {
                return Ok(ReportOutcome::AlreadyReported(existing));
            }

            let new = cmds.moderation().report().insert_report(reporter_id, report)?;
            let object = cmds
                .moderation()
                .moderated_object()
                .get_or_create(new.target, new.category_id)?;

            Ok(ReportOutcome::Created(new, object.id))
        })?;

        match outcome {
            ReportOutcome::TargetNotFound => Err(DataError::ReferenceNotFound
                .report()
                .attach_printable(format!("Target not found: {:?}", target))),
            ReportOutcome::CategoryNotFound => Err(DataError::ReferenceNotFound
                .report()
                .attach_printable("Moderation category not found")),
            ReportOutcome::AlreadyReported(report) => Ok(ReportResult {
                report,
                already_reported: true,
            }),
            ReportOutcome::Created(report, object) => {
                info!(
                    "Report created, reporter: {}, target: {:?}, moderated object: {}",
                    reporter_id, target, object
                );
                Ok(ReportResult {
                    report,
                    already_reported: false,
                })
            }
        }
    }

    /// Update category and description. Every changed field is written
    /// to the change log in the same transaction. Status is not
    /// changed.
    pub async fn update(
        &self,
        actor: User,
        id: ModeratedObjectId,
        update: UpdateModeratedObject,
    ) -> Result<ModeratedObject, DataError> {
        self.validate_description(update.description.as_deref())?;

        let actor_id = actor.id;
        let outcome = db_transaction!(self, move |mut cmds| {
            let object = match ObjectAccess::check(&mut cmds.read(), &actor, id)? {
                ObjectAccess::Allowed(object) => object,
                access => return Ok(UpdateOutcome::Access(access)),
            };

            if let Some(category) = update.category_id {
                if !cmds.read().moderation().category().category_exists(category)? {
                    return Ok(UpdateOutcome::CategoryNotFound);
                }
            }

            let changes = object.changes(&update);
            for change in &changes {
                match change {
                    FieldChange::Category { to, .. } => cmds
                        .moderation()
                        .moderated_object()
                        .update_category(object.id, *to)?,
                    FieldChange::Description { to, .. } => cmds
                        .moderation()
                        .moderated_object()
                        .update_description(object.id, to.clone())?,
                    FieldChange::Status { .. } => (),
                }
                cmds.moderation()
                    .change_log()
                    .insert_change(object.id, actor_id, change)?;
            }

            let updated = if changes.is_empty() {
                object
            } else {
                moderated_object_after_write(&mut cmds, object.id)?
            };

            Ok(UpdateOutcome::Updated(updated, changes.len()))
        })?;

        match outcome {
            UpdateOutcome::Access(access) => access.into_object(actor_id, id),
            UpdateOutcome::CategoryNotFound => Err(DataError::ReferenceNotFound
                .report()
                .attach_printable("Moderation category not found")),
            UpdateOutcome::Updated(object, change_count) => {
                if change_count > 0 {
                    info!(
                        "Moderated object updated, object: {}, actor: {}, changes: {}",
                        id, actor_id, change_count
                    );
                }
                Ok(object)
            }
        }
    }

    /// Approve or reject pending moderated object.
    pub async fn decide(
        &self,
        actor: User,
        id: ModeratedObjectId,
        decision: ModerationDecision,
    ) -> Result<ModeratedObject, DataError> {
        let actor_id = actor.id;
        let outcome = db_transaction!(self, move |mut cmds| {
            let object = match ObjectAccess::check(&mut cmds.read(), &actor, id)? {
                ObjectAccess::Allowed(object) => object,
                access => return Ok(DecisionOutcome::Access(access)),
            };

            if object.status != ModeratedObjectStatus::Pending {
                return Ok(DecisionOutcome::NotPending(object.status));
            }

            let change = FieldChange::Status {
                from: object.status,
                to: decision.new_status(),
            };
            cmds.moderation()
                .moderated_object()
                .update_status(object.id, decision.new_status())?;
            cmds.moderation()
                .change_log()
                .insert_change(object.id, actor_id, &change)?;

            Ok(DecisionOutcome::Decided(moderated_object_after_write(
                &mut cmds, object.id,
            )?))
        })?;

        match outcome {
            DecisionOutcome::Access(access) => access.into_object(actor_id, id),
            DecisionOutcome::NotPending(status) => {
                warn!(
                    "Moderation decision for non-pending object, object: {}, status: {}",
                    id, status
                );
                Err(DataError::NotAllowed
                    .report()
                    .attach_printable(format!("Status is {}", status)))
            }
            DecisionOutcome::Decided(object) => {
                info!(
                    "Moderated object {}, object: {}, actor: {}",
                    object.status, id, actor_id
                );
                Ok(object)
            }
        }
    }

    fn validate_description(&self, description: Option<&str>) -> Result<(), DataError> {
        let max = self.config().limits().moderation_description_max_length;
        match description {
            Some(d) if d.chars().count() > max => Err(DataError::InvalidInput
                .report()
                .attach_printable(format!("Description is longer than {} characters", max))),
            _ => Ok(()),
        }
    }
}

fn moderated_object_after_write(
    cmds: &mut DbWriteMode<'_>,
    id: ModeratedObjectId,
) -> error_stack::Result<ModeratedObject, DieselDatabaseError> {
    cmds.read()
        .moderation()
        .moderated_object()
        .moderated_object(id)?
        .ok_or_else(|| error_stack::report!(DieselDatabaseError::NotFound))
}
