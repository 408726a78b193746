//! Per-document-kind permission evaluation.
//!
//! Every document kind pairs a role-grant computation with a matrix of
//! action thresholds. Evaluators are transient: built from a document
//! snapshot and a requester, queried, and dropped. Nothing is cached across
//! evaluations, so a re-check always sees the current document state.

mod component;
mod license;
mod project;
mod release;
pub mod roles;
mod spdx;
mod user;
mod vendor;
pub mod visibility;
mod vulnerability;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{Attachment, Document, EvaluationConfig, RequestedAction, User, UserGroup};

pub use component::ComponentPermissions;
pub use license::LicensePermissions;
pub use project::ProjectPermissions;
pub use release::ReleasePermissions;
pub use spdx::{SpdxDocumentPermissions, SpdxPackageInfoPermissions};
pub use user::UserPermissions;
pub use vendor::VendorPermissions;
pub use visibility::{is_user_equivalent_to_moderator, is_visible};
pub use vulnerability::VulnerabilityPermissions;

/// The three role sets a document carries, computed once per evaluation.
///
/// Moderators always include the creator by construction. Contributors are a
/// superset of moderators for kinds that distinguish the two. The attachment
/// set is empty, never absent.
#[derive(Debug, Clone, Default)]
pub(crate) struct RoleGrants {
    pub moderators: BTreeSet<String>,
    pub contributors: BTreeSet<String>,
    pub attachment_content_ids: BTreeSet<String>,
}

impl RoleGrants {
    pub(crate) fn is_moderator(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| self.moderators.contains(&u.email))
    }

    pub(crate) fn is_contributor(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| self.contributors.contains(&u.email))
    }
}

/// Inserts an identity unless it is the empty string. Unset identity fields
/// must never grant anything to a user with an empty email.
pub(crate) fn insert_identity(set: &mut BTreeSet<String>, identity: &str) {
    if !identity.is_empty() {
        set.insert(identity.to_string());
    }
}

pub(crate) fn extend_identities<'a>(
    set: &mut BTreeSet<String>,
    identities: impl IntoIterator<Item = &'a String>,
) {
    for identity in identities {
        insert_identity(set, identity);
    }
}

pub(crate) fn attachment_content_ids(attachments: &[Attachment]) -> BTreeSet<String> {
    attachments
        .iter()
        .filter(|attachment| !attachment.attachment_content_id.is_empty())
        .map(|attachment| attachment.attachment_content_id.clone())
        .collect()
}

/// Raw-department owner-group check used by the standard matrix: the user is
/// in the document's owner group when one of their department strings equals
/// the document's business unit, with no unit normalization. Project
/// evaluation overrides this with the normalized comparison; the asymmetry
/// is intentional.
pub(crate) fn user_in_owner_group(business_unit: &str, user: Option<&User>) -> bool {
    !business_unit.is_empty() && user.is_some_and(|u| u.departments().contains(business_unit))
}

/// Shared action matrix for kinds without an override.
pub(crate) fn standard_permissions(
    action: RequestedAction,
    user: Option<&User>,
    grants: &RoleGrants,
    in_equivalent_owner_group: bool,
) -> bool {
    match action {
        RequestedAction::Read => true,
        RequestedAction::Write | RequestedAction::Attachments => {
            (roles::is_user_at_least(UserGroup::ClearingAdmin, user) && in_equivalent_owner_group)
                || roles::is_user_at_least(UserGroup::Admin, user)
                || grants.is_contributor(user)
        }
        RequestedAction::Delete | RequestedAction::Users | RequestedAction::Clearing => {
            roles::is_admin(user) || grants.is_moderator(user)
        }
        RequestedAction::WriteEcc => roles::is_admin(user),
    }
}

/// Fine-grained authorization over a single document snapshot.
pub trait DocumentPermissions {
    /// Whether the requester may perform `action`. Pure, fail-closed.
    fn is_action_allowed(&self, action: RequestedAction) -> bool;

    /// Moderator identities of the document, creator included.
    fn moderators(&self) -> &BTreeSet<String>;

    /// Contributor identities; a superset of moderators where the kind
    /// distinguishes the two.
    fn contributors(&self) -> &BTreeSet<String>;

    /// Attachment content ids referenced by the document.
    fn attachment_content_ids(&self) -> &BTreeSet<String>;

    /// Decision for every defined action. Always complete, never partial.
    fn permission_map(&self) -> BTreeMap<RequestedAction, bool> {
        RequestedAction::ALL
            .iter()
            .map(|&action| (action, self.is_action_allowed(action)))
            .collect()
    }

    /// An attachment may be downloaded when its content id belongs to the
    /// document AND the requester may READ it — including kind-specific READ
    /// overrides such as project visibility.
    fn is_allowed_to_download(&self, attachment_content_id: &str) -> bool {
        self.attachment_content_ids().contains(attachment_content_id)
            && self.is_action_allowed(RequestedAction::Read)
    }
}

/// Evaluator for any document kind, dispatched over the closed union.
#[derive(Debug)]
pub enum Permissions<'a> {
    Project(ProjectPermissions<'a>),
    Component(ComponentPermissions<'a>),
    Release(ReleasePermissions<'a>),
    License(LicensePermissions<'a>),
    Vendor(VendorPermissions<'a>),
    User(UserPermissions<'a>),
    SpdxDocument(SpdxDocumentPermissions<'a>),
    SpdxPackageInfo(SpdxPackageInfoPermissions<'a>),
    Vulnerability(VulnerabilityPermissions<'a>),
}

macro_rules! dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            Permissions::Project($inner) => $body,
            Permissions::Component($inner) => $body,
            Permissions::Release($inner) => $body,
            Permissions::License($inner) => $body,
            Permissions::Vendor($inner) => $body,
            Permissions::User($inner) => $body,
            Permissions::SpdxDocument($inner) => $body,
            Permissions::SpdxPackageInfo($inner) => $body,
            Permissions::Vulnerability($inner) => $body,
        }
    };
}

impl DocumentPermissions for Permissions<'_> {
    fn is_action_allowed(&self, action: RequestedAction) -> bool {
        dispatch!(self, inner => inner.is_action_allowed(action))
    }

    fn moderators(&self) -> &BTreeSet<String> {
        dispatch!(self, inner => inner.moderators())
    }

    fn contributors(&self) -> &BTreeSet<String> {
        dispatch!(self, inner => inner.contributors())
    }

    fn attachment_content_ids(&self) -> &BTreeSet<String> {
        dispatch!(self, inner => inner.attachment_content_ids())
    }
}

/// Builds the evaluator matching the document's kind, with default
/// configuration.
#[must_use]
pub fn permissions_for<'a>(document: &'a Document, user: Option<&'a User>) -> Permissions<'a> {
    permissions_for_with_config(document, user, EvaluationConfig::default())
}

/// Builds the evaluator matching the document's kind.
#[must_use]
pub fn permissions_for_with_config<'a>(
    document: &'a Document,
    user: Option<&'a User>,
    config: EvaluationConfig,
) -> Permissions<'a> {
    match document {
        Document::Project(project) => {
            Permissions::Project(ProjectPermissions::new(project, user).with_config(config))
        }
        Document::Component(component) => {
            Permissions::Component(ComponentPermissions::new(component, user))
        }
        Document::Release(release) => Permissions::Release(ReleasePermissions::new(release, user)),
        Document::License(license) => Permissions::License(LicensePermissions::new(license, user)),
        Document::Vendor(vendor) => Permissions::Vendor(VendorPermissions::new(vendor, user)),
        Document::User(account) => Permissions::User(UserPermissions::new(account, user)),
        Document::SpdxDocument(spdx) => {
            Permissions::SpdxDocument(SpdxDocumentPermissions::new(spdx, user))
        }
        Document::SpdxPackageInfo(package) => {
            Permissions::SpdxPackageInfo(SpdxPackageInfoPermissions::new(package, user))
        }
        Document::Vulnerability(vulnerability) => {
            Permissions::Vulnerability(VulnerabilityPermissions::new(vulnerability, user))
        }
    }
}

/// Decision for every defined action on the given document.
#[must_use]
pub fn permission_map(
    document: &Document,
    user: Option<&User>,
) -> BTreeMap<RequestedAction, bool> {
    permissions_for(document, user).permission_map()
}

/// A document together with its computed permission map, ready for
/// serialization towards a client.
///
/// This replaces in-place annotation of the document: the borrowed document
/// stays untouched and the pairing is explicit, so concurrent evaluations
/// for different requesters can share one snapshot.
#[derive(Debug, Serialize)]
pub struct Permissioned<'a, T: Serialize> {
    #[serde(flatten)]
    document: &'a T,
    permissions: BTreeMap<RequestedAction, bool>,
}

impl<'a, T: Serialize> Permissioned<'a, T> {
    #[must_use]
    pub fn new(document: &'a T, permissions: BTreeMap<RequestedAction, bool>) -> Self {
        Self {
            document,
            permissions,
        }
    }

    #[must_use]
    pub fn document(&self) -> &T {
        self.document
    }

    #[must_use]
    pub fn permissions(&self) -> &BTreeMap<RequestedAction, bool> {
        &self.permissions
    }

    /// Lookup into the computed map. The map is complete over
    /// [`RequestedAction::ALL`], so a miss can only mean a foreign map was
    /// injected; deny in that case.
    #[must_use]
    pub fn is_allowed(&self, action: RequestedAction) -> bool {
        self.permissions.get(&action).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn into_permissions(self) -> BTreeMap<RequestedAction, bool> {
        self.permissions
    }
}

/// Evaluates and pairs the document with its permission map.
#[must_use]
pub fn with_permissions<'a>(
    document: &'a Document,
    user: Option<&User>,
) -> Permissioned<'a, Document> {
    Permissioned::new(document, permission_map(document, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Component, License, Project, Release, SpdxPackageInfo, Vendor};

    fn stranger() -> User {
        User::new("stranger@catalogue.test", "OT TH ER").with_group(UserGroup::User)
    }

    fn all_kinds() -> Vec<Document> {
        vec![
            Document::Project(Project {
                id: "p1".into(),
                created_by: "owner@catalogue.test".into(),
                ..Project::default()
            }),
            Document::Component(Component {
                id: "c1".into(),
                created_by: "owner@catalogue.test".into(),
                ..Component::default()
            }),
            Document::Release(Release {
                id: "r1".into(),
                created_by: "owner@catalogue.test".into(),
                ..Release::default()
            }),
            Document::License(License {
                id: "l1".into(),
                ..License::default()
            }),
            Document::Vendor(Vendor {
                id: "v1".into(),
                ..Vendor::default()
            }),
            Document::User(User::new("account@catalogue.test", "CT BE")),
            Document::SpdxDocument(crate::types::SpdxDocument {
                id: "s1".into(),
                created_by: None,
            }),
            Document::SpdxPackageInfo(SpdxPackageInfo {
                id: "pi1".into(),
                created_by: "owner@catalogue.test".into(),
                ..SpdxPackageInfo::default()
            }),
            Document::Vulnerability(crate::types::Vulnerability {
                id: "vu1".into(),
                ..crate::types::Vulnerability::default()
            }),
        ]
    }

    #[test]
    fn permission_map_is_complete_for_every_kind() {
        let user = stranger();
        for document in all_kinds() {
            let map = permission_map(&document, Some(&user));
            assert_eq!(map.len(), RequestedAction::ALL.len(), "{document:?}");
            for action in RequestedAction::ALL {
                assert!(map.contains_key(&action));
            }
        }
    }

    #[test]
    fn permission_map_is_complete_without_a_user() {
        for document in all_kinds() {
            let map = permission_map(&document, None);
            assert_eq!(map.len(), RequestedAction::ALL.len());
        }
    }

    #[test]
    fn permissioned_view_serializes_document_and_map_together() {
        let document = Document::Component(Component {
            id: "c1".into(),
            name: "zlib".into(),
            created_by: "owner@catalogue.test".into(),
            ..Component::default()
        });
        let view = with_permissions(&document, Some(&stranger()));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "component");
        assert_eq!(json["name"], "zlib");
        assert_eq!(json["permissions"]["READ"], true);
        assert_eq!(json["permissions"]["WRITE"], false);
    }

    #[test]
    fn empty_identities_never_match() {
        let component = Component {
            id: "c1".into(),
            created_by: String::new(),
            ..Component::default()
        };
        let anonymous = User::new("", "");
        let evaluator = ComponentPermissions::new(&component, Some(&anonymous));
        assert!(!evaluator
            .moderators()
            .contains(""));
        assert!(!evaluator.is_action_allowed(RequestedAction::Write));
    }
}
