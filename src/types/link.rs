//! Link-graph node and relationship types.
//!
//! A traversal materializes `ProjectLink` / `ReleaseLink` trees from the
//! relation maps stored on documents. Nodes closing a cycle or pointing at a
//! document the requester cannot resolve are kept in the tree and flagged
//! instead of silently dropped, so renderers can warn in place.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::document::{ClearingState, ProjectClearingState};

/// How one project relates to a linked project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectRelationship {
    Contained,
    Referred,
    Duplicate,
    #[default]
    Unknown,
}

/// How one release relates to a linked release.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseRelationship {
    Contained,
    Referred,
    #[default]
    Unknown,
    DynamicallyLinked,
    StaticallyLinked,
    SideBySide,
    Standalone,
    InternalUse,
    Optional,
    ToBeReplaced,
    CodeSnippet,
}

/// Mainline decision recorded on a project's usage of a release.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MainlineState {
    #[default]
    Open,
    Mainline,
    Specific,
    Phaseout,
    Denied,
}

/// Relationship metadata a project stores per used release.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct ProjectReleaseRelationship {
    pub release_relation: ReleaseRelationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mainline_state: Option<MainlineState>,
}

impl ProjectReleaseRelationship {
    #[must_use]
    pub fn new(release_relation: ReleaseRelationship) -> Self {
        Self {
            release_relation,
            mainline_state: None,
        }
    }

    #[must_use]
    pub fn with_mainline_state(mut self, state: MainlineState) -> Self {
        self.mainline_state = Some(state);
        self
    }
}

/// One node of a project link tree.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct ProjectLink {
    /// Document id of the linked project.
    pub id: String,
    /// Display name; falls back to the id for unresolvable targets.
    pub name: String,
    /// Unique per-traversal node id (`<doc-id>_<uuid>`): the same project may
    /// legitimately appear in several branches.
    pub node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_node_id: Option<String>,
    pub relation: ProjectRelationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearing_state: Option<ProjectClearingState>,
    /// Depth of this node; the traversal root is level 0.
    pub tree_level: usize,
    /// Releases the project uses directly, one level only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_releases: Vec<ReleaseLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subprojects: Vec<ProjectLink>,
    /// The target was already on the path from the root to this node.
    #[serde(default)]
    pub cyclic: bool,
    /// The target is missing, deleted, or not readable by the requester.
    #[serde(default)]
    pub unresolved: bool,
}

/// One node of a release link tree (or a release row on a project node).
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct ReleaseLink {
    pub id: String,
    pub name: String,
    pub node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_node_id: Option<String>,
    pub relation: ReleaseRelationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mainline_state: Option<MainlineState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearing_state: Option<ClearingState>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub license_ids: BTreeSet<String>,
    /// Depth of this node; the traversal root is level 0. Release rows on
    /// project nodes inherit their project's level.
    #[serde(default)]
    pub tree_level: usize,
    /// Whether the release links further releases of its own. Release rows on
    /// project nodes carry the flag instead of expanded children.
    #[serde(default)]
    pub has_subreleases: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subreleases: Vec<ReleaseLink>,
    #[serde(default)]
    pub cyclic: bool,
    #[serde(default)]
    pub unresolved: bool,
}
