//! Moderation access checks which are shared between reads and writes.

use database::{DbReadMode, DieselDatabaseError};
use error_stack::Result;
use model::{
    ActorRoles, AuthorizationResolver, ModeratedObject, ModeratedObjectId, ResolvedTarget, User,
    UserId,
};
use tracing::warn;

use crate::{DataError, result::WrappedContextExt};

pub fn actor_roles(
    cmds: &mut DbReadMode<'_>,
    actor: &User,
) -> Result<ActorRoles, DieselDatabaseError> {
    let staff_communities = if actor.global_moderator {
        vec![]
    } else {
        cmds.community().staff_communities(actor.id)?
    };

    Ok(ActorRoles {
        global_moderator: actor.global_moderator,
        staff_communities,
    })
}

pub enum ObjectAccess {
    NotFound,
    Denied,
    Allowed(ModeratedObject),
}

impl ObjectAccess {
    /// Load moderated object if `actor` can update it.
    pub fn check(
        cmds: &mut DbReadMode<'_>,
        actor: &User,
        id: ModeratedObjectId,
    ) -> Result<Self, DieselDatabaseError> {
        let Some(object) = cmds.moderation().moderated_object().moderated_object(id)? else {
            return Ok(Self::NotFound);
        };

        let roles = actor_roles(cmds, actor)?;
        // Deleted targets have no owner, so only global moderators
        // can access those.
        let target = cmds
            .moderation()
            .target()
            .resolve_target(object.target)?
            .unwrap_or(ResolvedTarget {
                target: object.target,
                owning_community: None,
            });

        if AuthorizationResolver::can_update(&roles, &target) {
            Ok(Self::Allowed(object))
        } else {
            Ok(Self::Denied)
        }
    }

    pub fn into_object(
        self,
        actor: UserId,
        id: ModeratedObjectId,
    ) -> crate::result::Result<ModeratedObject, DataError> {
        match self {
            Self::Allowed(object) => Ok(object),
            Self::NotFound => Err(DataError::NotFound.report().attach_printable(id)),
            Self::Denied => {
                warn!(
                    "Moderated object access denied, user: {}, object: {}",
                    actor, id
                );
                Err(DataError::NotAllowed.report().attach_printable(id))
            }
        }
    }
}
