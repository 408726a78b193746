//! Vendor permission strategy: the standard matrix over empty role sets.
//! Vendors carry no moderators, so mutation reduces to the admin tiers.

use std::collections::BTreeSet;

use crate::permissions::{DocumentPermissions, RoleGrants, standard_permissions};
use crate::types::{RequestedAction, User, Vendor};

#[derive(Debug)]
pub struct VendorPermissions<'a> {
    document: &'a Vendor,
    user: Option<&'a User>,
    grants: RoleGrants,
}

impl<'a> VendorPermissions<'a> {
    #[must_use]
    pub fn new(document: &'a Vendor, user: Option<&'a User>) -> Self {
        Self {
            document,
            user,
            grants: RoleGrants::default(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Vendor {
        self.document
    }
}

impl DocumentPermissions for VendorPermissions<'_> {
    fn is_action_allowed(&self, action: RequestedAction) -> bool {
        // Vendors have no business unit, so the owner-group branch of the
        // matrix can never fire.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserGroup;

    #[test]
    fn only_admins_may_mutate() {
        let vendor = Vendor {
            id: "v1".into(),
            shortname: "ACME".into(),
            ..Vendor::default()
        };
        let clearing = User::new("ca@catalogue.test", "CT BE").with_group(UserGroup::ClearingAdmin);
        let admin = User::new("admin@catalogue.test", "CT BE").with_group(UserGroup::Admin);
        let evaluator = VendorPermissions::new(&vendor, Some(&clearing));
        assert!(evaluator.is_action_allowed(RequestedAction::Read));
        assert!(!evaluator.is_action_allowed(RequestedAction::Write));
        assert!(!evaluator.is_action_allowed(RequestedAction::Delete));
        let evaluator = VendorPermissions::new(&vendor, Some(&admin));
        assert!(evaluator.is_action_allowed(RequestedAction::Write));
        assert!(evaluator.is_action_allowed(RequestedAction::Delete));
    }
}
