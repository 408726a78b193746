//! Public types exposed by the `catena-core` crate.

pub mod document;
pub mod link;
pub mod options;
pub mod user;

pub use document::{
    Attachment, ClearingState, Component, Document, License, Project, ProjectClearingState,
    Release, SpdxDocument, SpdxPackageInfo, Vendor, Visibility, Vulnerability,
};
pub use link::{
    MainlineState, ProjectLink, ProjectReleaseRelationship, ProjectRelationship, ReleaseLink,
    ReleaseRelationship,
};
pub use options::EvaluationConfig;
pub use user::{RequestedAction, User, UserGroup};
