//! License permission strategy. Licenses are shared reference data: anyone
//! may read and edit the texts, but clearing-relevant operations stay with
//! the clearing admins and everything else is denied outright.

use std::collections::BTreeSet;

use crate::permissions::{DocumentPermissions, RoleGrants, roles};
use crate::types::{License, RequestedAction, User, UserGroup};

#[derive(Debug)]
pub struct LicensePermissions<'a> {
    document: &'a License,
    user: Option<&'a User>,
    grants: RoleGrants,
}

impl<'a> LicensePermissions<'a> {
    #[must_use]
    pub fn new(document: &'a License, user: Option<&'a User>) -> Self {
        Self {
            document,
            user,
            grants: RoleGrants::default(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &License {
        self.document
    }
}

impl DocumentPermissions for LicensePermissions<'_> {
    fn is_action_allowed(&self, action: RequestedAction) -> bool {
        match action {
            RequestedAction::Read | RequestedAction::Write => true,
            RequestedAction::Clearing | RequestedAction::Delete => {
                roles::is_user_at_least(UserGroup::ClearingAdmin, self.user)
            }
            RequestedAction::WriteEcc | RequestedAction::Attachments | RequestedAction::Users => {
                false
            }
        }
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
