//! SPDX document permission strategies.
//!
//! SPDX documents are derived artifacts with no role sets of their own;
//! package information records keep their creator as the single moderator.

use std::collections::BTreeSet;

use crate::permissions::{
    DocumentPermissions, RoleGrants, insert_identity, standard_permissions,
};
use crate::types::{RequestedAction, SpdxDocument, SpdxPackageInfo, User};

#[derive(Debug)]
pub struct SpdxDocumentPermissions<'a> {
    document: &'a SpdxDocument,
    user: Option<&'a User>,
    grants: RoleGrants,
}

impl<'a> SpdxDocumentPermissions<'a> {
    #[must_use]
    pub fn new(document: &'a SpdxDocument, user: Option<&'a User>) -> Self {
        Self {
            document,
            user,
            grants: RoleGrants::default(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &SpdxDocument {
        self.document
    }
}

impl DocumentPermissions for SpdxDocumentPermissions<'_> {
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

#[derive(Debug)]
pub struct SpdxPackageInfoPermissions<'a> {
    document: &'a SpdxPackageInfo,
    user: Option<&'a User>,
    grants: RoleGrants,
}

impl<'a> SpdxPackageInfoPermissions<'a> {
    #[must_use]
    pub fn new(document: &'a SpdxPackageInfo, user: Option<&'a User>) -> Self {
        let mut moderators = BTreeSet::new();
        insert_identity(&mut moderators, &document.created_by);
        let grants = RoleGrants {
            contributors: moderators.clone(),
            moderators,
            attachment_content_ids: BTreeSet::new(),
        };
        Self {
            document,
            user,
            grants,
        }
    }

    #[must_use]
    pub fn document(&self) -> &SpdxPackageInfo {
        self.document
    }
}

impl DocumentPermissions for SpdxPackageInfoPermissions<'_> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserGroup;

    #[test]
    fn package_info_creator_is_the_single_moderator() {
        let package = SpdxPackageInfo {
            id: "pi1".into(),
            name: Some("zlib".into()),
            created_by: "creator@catalogue.test".into(),
        };
        let creator = User::new("creator@catalogue.test", "CT BE").with_group(UserGroup::User);
        let evaluator = SpdxPackageInfoPermissions::new(&package, Some(&creator));
        assert_eq!(evaluator.moderators().len(), 1);
        assert!(evaluator.is_action_allowed(RequestedAction::Delete));
        assert!(evaluator.is_action_allowed(RequestedAction::Write));
    }

    #[test]
    fn spdx_document_grants_nothing_to_its_creator() {
        let spdx = SpdxDocument {
            id: "s1".into(),
            created_by: Some("creator@catalogue.test".into()),
        };
        let creator = User::new("creator@catalogue.test", "CT BE").with_group(UserGroup::User);
        let evaluator = SpdxDocumentPermissions::new(&spdx, Some(&creator));
        assert!(evaluator.moderators().is_empty());
        assert!(evaluator.is_action_allowed(RequestedAction::Read));
        assert!(!evaluator.is_action_allowed(RequestedAction::Write));
    }
}
