//! Vulnerability permission strategy: standard matrix over empty role sets.

use std::collections::BTreeSet;

use crate::permissions::{DocumentPermissions, RoleGrants, standard_permissions};
use crate::types::{RequestedAction, User, Vulnerability};

#[derive(Debug)]
pub struct VulnerabilityPermissions<'a> {
    document: &'a Vulnerability,
    user: Option<&'a User>,
    grants: RoleGrants,
}

impl<'a> VulnerabilityPermissions<'a> {
    #[must_use]
    pub fn new(document: &'a Vulnerability, user: Option<&'a User>) -> Self {
        Self {
            document,
            user,
            grants: RoleGrants::default(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Vulnerability {
        self.document
    }
}

impl DocumentPermissions for VulnerabilityPermissions<'_> {
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
