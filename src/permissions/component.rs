//! Component permission strategy: the standard matrix, with moderators and
//! contributors collapsed into one set.

use std::collections::BTreeSet;

use crate::permissions::{
    DocumentPermissions, RoleGrants, attachment_content_ids, extend_identities, insert_identity,
    standard_permissions, user_in_owner_group,
};
use crate::types::{Component, RequestedAction, User};

#[derive(Debug)]
pub struct ComponentPermissions<'a> {
    document: &'a Component,
    user: Option<&'a User>,
    grants: RoleGrants,
    in_owner_group: bool,
}

impl<'a> ComponentPermissions<'a> {
    #[must_use]
    pub fn new(document: &'a Component, user: Option<&'a User>) -> Self {
        let mut moderators = BTreeSet::new();
        insert_identity(&mut moderators, &document.created_by);
        extend_identities(&mut moderators, &document.moderators);
        let grants = RoleGrants {
            contributors: moderators.clone(),
            moderators,
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
    pub fn document(&self) -> &Component {
        self.document
    }
}

impl DocumentPermissions for ComponentPermissions<'_> {
    fn is_action_allowed(&self, action: RequestedAction) -> bool {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserGroup;

    fn component() -> Component {
        Component {
            id: "c1".into(),
            name: "zlib".into(),
            created_by: "creator@catalogue.test".into(),
            business_unit: "CT BE".into(),
            ..Component::default()
        }
    }

    #[test]
    fn contributors_equal_moderators() {
        let mut document = component();
        document.moderators.insert("mod@catalogue.test".into());
        let evaluator = ComponentPermissions::new(&document, None);
        assert_eq!(evaluator.moderators(), evaluator.contributors());
        assert!(evaluator.moderators().contains("creator@catalogue.test"));
    }

    #[test]
    fn read_is_open_write_is_not() {
        let document = component();
        let stranger = User::new("s@catalogue.test", "OT TH ER").with_group(UserGroup::User);
        let evaluator = ComponentPermissions::new(&document, Some(&stranger));
        assert!(evaluator.is_action_allowed(RequestedAction::Read));
        assert!(!evaluator.is_action_allowed(RequestedAction::Write));
    }

    #[test]
    fn owner_group_uses_raw_department_strings() {
        let document = component();
        // Primary department matches the unit verbatim.
        let exact = User::new("ca@catalogue.test", "CT BE").with_group(UserGroup::ClearingAdmin);
        let evaluator = ComponentPermissions::new(&document, Some(&exact));
        assert!(evaluator.is_action_allowed(RequestedAction::Write));
        // A department inside the unit does NOT match: no normalization here.
        let nested =
            User::new("ca@catalogue.test", "CT BE OSS").with_group(UserGroup::ClearingAdmin);
        let evaluator = ComponentPermissions::new(&document, Some(&nested));
        assert!(!evaluator.is_action_allowed(RequestedAction::Write));
    }
}
