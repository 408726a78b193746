//! Account-record permission strategy: accounts are readable catalogue
//! documents; managing them is admin territory.

use std::collections::BTreeSet;

use crate::permissions::{DocumentPermissions, RoleGrants, standard_permissions};
use crate::types::{RequestedAction, User};

#[derive(Debug)]
pub struct UserPermissions<'a> {
    document: &'a User,
    user: Option<&'a User>,
    grants: RoleGrants,
}

impl<'a> UserPermissions<'a> {
    #[must_use]
    pub fn new(document: &'a User, user: Option<&'a User>) -> Self {
        Self {
            document,
            user,
            grants: RoleGrants::default(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &User {
        self.document
    }
}

impl DocumentPermissions for UserPermissions<'_> {
    fn is_action_allowed(&self, action: RequestedAction) -> bool {
        standard_permissions(action, self.user, &self.grants, false)
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
