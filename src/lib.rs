#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Strategic lint exceptions, allowed project-wide:
//
// Documentation lints: internal/self-documenting functions don't need
// extensive docs; public APIs should still carry proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Pattern matching: these pedantic lints often suggest changes that reduce
// clarity in the matrix code.
#![allow(clippy::match_same_arms)]
#![allow(clippy::manual_let_else)]
// e.g., project_id, release_id, parent_node_id are intentionally similar
#![allow(clippy::similar_names)]
//
// Builder patterns don't need must_use on every method.
#![allow(clippy::return_self_not_must_use)]

/// The catena-core crate version (matches `Cargo.toml`).
pub const CATENA_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod error;
pub mod graph;
pub mod organisation;
pub mod permissions;
pub mod types;

pub use constants::*;
pub use error::{CatenaError, Result};
pub use graph::{InMemorySource, LinkSource, LinkWalker, ReleaseUsage, flatten_project_links};
pub use organisation::{
    bu_from_organisation, filter_bu_set, is_organisation_in_bu, matching_bu_department,
    organisation_equals_bu,
};
// Per-kind evaluators plus the kind-dispatching entry points
pub use permissions::{
    ComponentPermissions, DocumentPermissions, LicensePermissions, Permissioned, Permissions,
    ProjectPermissions, ReleasePermissions, SpdxDocumentPermissions, SpdxPackageInfoPermissions,
    UserPermissions, VendorPermissions, VulnerabilityPermissions, permission_map, permissions_for,
    permissions_for_with_config, with_permissions,
};
// Visibility predicate, exported on its own: callers gate list views on it
// without building a full evaluator
pub use permissions::{is_user_equivalent_to_moderator, is_visible};
// Group-threshold helpers, usable without a document at hand
pub use permissions::roles::{
    is_admin, is_clearing_admin, is_clearing_expert, is_ecc_admin, is_normal_user,
    is_security_admin, is_security_user, is_user_at_least, is_user_at_least_in_roles,
    satisfying_groups,
};
pub use types::{
    Attachment, ClearingState, Component, Document, EvaluationConfig, License, MainlineState,
    Project, ProjectClearingState, ProjectLink, ProjectReleaseRelationship, ProjectRelationship,
    Release, ReleaseLink, ReleaseRelationship, RequestedAction, SpdxDocument, SpdxPackageInfo,
    User, UserGroup, Vendor, Visibility, Vulnerability,
};
