use crate::{CommunityId, TargetKind, TargetRef};

/// Moderation roles of the acting user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorRoles {
    pub global_moderator: bool,
    /// Communities where the actor is a moderator or an administrator.
    pub staff_communities: Vec<CommunityId>,
}

impl ActorRoles {
    pub fn is_staff_of(&self, community: CommunityId) -> bool {
        self.staff_communities.contains(&community)
    }
}

/// Target and the community which owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub target: TargetRef,
    /// Community target owns itself, posts and comments are owned by the
    /// post's community. Users and timeline posts do not have a
    /// community.
    pub owning_community: Option<CommunityId>,
}

pub struct AuthorizationResolver;

impl AuthorizationResolver {
    /// Global moderators can update every moderated object. Community
    /// staff can update objects owned by their community except
    /// user targets.
    pub fn can_update(actor: &ActorRoles, target: &ResolvedTarget) -> bool {
        if actor.global_moderator {
            return true;
        }

        if target.target.kind == TargetKind::User {
            return false;
        }

        match target.owning_community {
            Some(community) => actor.is_staff_of(community),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMUNITY: CommunityId = CommunityId(5);
    const OTHER_COMMUNITY: CommunityId = CommunityId(6);

    fn global_moderator() -> ActorRoles {
        ActorRoles {
            global_moderator: true,
            staff_communities: vec![],
        }
    }

    fn community_moderator() -> ActorRoles {
        ActorRoles {
            global_moderator: false,
            staff_communities: vec![COMMUNITY],
        }
    }

    fn resolved(kind: TargetKind, owning_community: Option<CommunityId>) -> ResolvedTarget {
        ResolvedTarget {
            target: TargetRef::new(kind, 1),
            owning_community,
        }
    }

    #[test]
    fn global_moderator_can_update_all_targets() {
        let actor = global_moderator();
        for target in [
            resolved(TargetKind::User, None),
            resolved(TargetKind::Community, Some(COMMUNITY)),
            resolved(TargetKind::Post, Some(OTHER_COMMUNITY)),
            resolved(TargetKind::Post, None),
            resolved(TargetKind::Comment, Some(COMMUNITY)),
        ] {
            assert!(AuthorizationResolver::can_update(&actor, &target));
        }
    }

    #[test]
    fn community_moderator_can_update_own_community_content() {
        let actor = community_moderator();
        assert!(AuthorizationResolver::can_update(
            &actor,
            &resolved(TargetKind::Community, Some(COMMUNITY))
        ));
        assert!(AuthorizationResolver::can_update(
            &actor,
            &resolved(TargetKind::Post, Some(COMMUNITY))
        ));
        assert!(AuthorizationResolver::can_update(
            &actor,
            &resolved(TargetKind::Comment, Some(COMMUNITY))
        ));
    }

    #[test]
    fn community_moderator_cannot_update_other_community_content() {
        let actor = community_moderator();
        assert!(!AuthorizationResolver::can_update(
            &actor,
            &resolved(TargetKind::Post, Some(OTHER_COMMUNITY))
        ));
        assert!(!AuthorizationResolver::can_update(
            &actor,
            &resolved(TargetKind::Post, None)
        ));
    }

    #[test]
    fn community_moderator_cannot_update_user_target() {
        let actor = community_moderator();
        assert!(!AuthorizationResolver::can_update(
            &actor,
            &resolved(TargetKind::User, Some(COMMUNITY))
        ));
    }

    #[test]
    fn regular_user_cannot_update() {
        let actor = ActorRoles::default();
        assert!(!AuthorizationResolver::can_update(
            &actor,
            &resolved(TargetKind::Comment, Some(COMMUNITY))
        ));
    }
}
