//! Reference-graph traversal over project and release links.
//!
//! Link graphs are directed and may contain cycles, either by user error or
//! through legitimately shared sub-releases. Every walk in this module
//! carries its path state by value, so concurrent traversals cannot
//! interfere, and a repeated id on the current path terminates that branch
//! instead of recursing forever.

mod cycles;
mod links;
mod network;

use std::collections::BTreeMap;

use crate::permissions::{DocumentPermissions, ProjectPermissions, ReleasePermissions};
use crate::types::{EvaluationConfig, Project, Release, RequestedAction, User};

pub use links::flatten_project_links;
pub use network::ReleaseUsage;

/// Resolves link targets by id. Loading documents is the persistence
/// layer's job; the walker only asks for one target at a time and accepts
/// `None` for anything missing or deleted.
pub trait LinkSource {
    fn project(&self, id: &str) -> Option<&Project>;
    fn release(&self, id: &str) -> Option<&Release>;
}

/// Map-backed [`LinkSource`] over documents preloaded by the caller.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    projects: BTreeMap<String, Project>,
    releases: BTreeMap<String, Release>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_project(mut self, project: Project) -> Self {
        self.insert_project(project);
        self
    }

    #[must_use]
    pub fn with_release(mut self, release: Release) -> Self {
        self.insert_release(release);
        self
    }

    pub fn insert_project(&mut self, project: Project) {
        self.projects.insert(project.id.clone(), project);
    }

    pub fn insert_release(&mut self, release: Release) {
        self.releases.insert(release.id.clone(), release);
    }
}

impl LinkSource for InMemorySource {
    fn project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    fn release(&self, id: &str) -> Option<&Release> {
        self.releases.get(id)
    }
}

/// One traversal context: a source, the requesting user and the evaluation
/// config. Produces link trees, cycle reports and usage networks; every
/// resolved node is re-checked against the requester's READ permission so
/// restricted documents do not leak through transitive links.
#[derive(Debug)]
pub struct LinkWalker<'a, S: LinkSource> {
    source: &'a S,
    user: Option<&'a User>,
    config: EvaluationConfig,
    deep: bool,
}

impl<'a, S: LinkSource> LinkWalker<'a, S> {
    #[must_use]
    pub fn new(source: &'a S, user: Option<&'a User>) -> Self {
        Self {
            source,
            user,
            config: EvaluationConfig::default(),
            deep: true,
        }
    }

    /// Expand only one level of relations. A breadth cutoff for overview
    /// pages, independent of cycle handling.
    #[must_use]
    pub fn shallow(mut self) -> Self {
        self.deep = false;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    pub(crate) fn expand_at(&self, level: usize) -> bool {
        self.deep || level + 1 < crate::constants::SHALLOW_LINK_DEPTH
    }

    /// Fetches a project the requester may read; anything else resolves to
    /// `None` and is treated like a missing document.
    pub(crate) fn readable_project(&self, id: &str) -> Option<&'a Project> {
        let project = self.source.project(id)?;
        let readable = ProjectPermissions::new(project, self.user)
            .with_config(self.config)
            .is_action_allowed(RequestedAction::Read);
        readable.then_some(project)
    }

    pub(crate) fn readable_release(&self, id: &str) -> Option<&'a Release> {
        let release = self.source.release(id)?;
        let readable = ReleasePermissions::new(release, self.user)
            .is_action_allowed(RequestedAction::Read);
        readable.then_some(release)
    }
}

/// Per-traversal display-node id. The same document gets a fresh node id in
/// every branch it appears in.
pub(crate) fn node_id_for(document_id: &str) -> String {
    format!("{document_id}_{}", uuid::Uuid::new_v4())
}
