//! Release permission strategy: the standard matrix with the ECC write
//! threshold lowered to ECC admins.

use std::collections::BTreeSet;

use crate::permissions::{
    DocumentPermissions, RoleGrants, attachment_content_ids, extend_identities, insert_identity,
    roles, standard_permissions, user_in_owner_group,
};
use crate::types::{Release, RequestedAction, User, UserGroup};

#[derive(Debug)]
pub struct ReleasePermissions<'a> {
    document: &'a Release,
    user: Option<&'a User>,
    grants: RoleGrants,
    in_owner_group: bool,
}

impl<'a> ReleasePermissions<'a> {
    #[must_use]
    pub fn new(document: &'a Release, user: Option<&'a User>) -> Self {
        let mut moderators = BTreeSet::new();
        insert_identity(&mut moderators, &document.created_by);
        extend_identities(&mut moderators, &document.moderators);
        let mut contributors = moderators.clone();
        extend_identities(&mut contributors, &document.contributors);
        let grants = RoleGrants {
            moderators,
            contributors,
            attachment_content_ids: attachment_content_ids(&document.attachments),
        };
        let in_owner_group = user_in_owner_group(&document.business_unit, user);
        Self {
            document,
            user,
            grants,
            in_owner_group,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Release {
        self.document
    }
}

impl DocumentPermissions for ReleasePermissions<'_> {
    fn is_action_allowed(&self, action: RequestedAction) -> bool {
        // ECC data on releases is maintained by the ECC admins themselves,
        // not only portal admins.
        if action == RequestedAction::WriteEcc {
            return roles::is_user_at_least(UserGroup::EccAdmin, self.user);
        }
        standard_permissions(action, self.user, &self.grants, self.in_owner_group)
    }

    fn moderators(&self) -> &BTreeSet<String> {
        &self.grants.moderators
    }

    fn contributors(&self) -> &BTreeSet<String> {
        &self.grants.contributors
    }

    fn attachment_content_ids(&self) -> &BTreeSet<String> {
        &self.grants.attachment_content_ids
    }
}
