//! Transitive release-usage aggregation: which projects in a sub-tree pull
//! in which releases, and how.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{LinkSource, LinkWalker};
use crate::types::{Project, ProjectReleaseRelationship};

/// One project's direct usage of a release.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct ReleaseUsage {
    pub project_id: String,
    pub project_name: String,
    pub relation: ProjectReleaseRelationship,
}

impl<S: LinkSource> LinkWalker<'_, S> {
    /// Aggregates release usage across `root` and every project transitively
    /// linked below it that the requester may read: release id → the
    /// projects using it. Reachability bookkeeping keeps each project's
    /// usages counted once, however many link paths lead to it.
    #[must_use]
    pub fn release_usage_network(&self, root: &Project) -> BTreeMap<String, Vec<ReleaseUsage>> {
        let mut visited: BTreeSet<String> = BTreeSet::new();
        let mut network: BTreeMap<String, Vec<ReleaseUsage>> = BTreeMap::new();
        self.collect_release_usages(root, &mut visited, &mut network);
        network
    }

    fn collect_release_usages(
        &self,
        project: &Project,
        visited: &mut BTreeSet<String>,
        network: &mut BTreeMap<String, Vec<ReleaseUsage>>,
    ) {
        if !visited.insert(project.id.clone()) {
            return;
        }
        for (release_id, relation) in &project.release_id_to_usage {
            network
                .entry(release_id.clone())
                .or_default()
                .push(ReleaseUsage {
                    project_id: project.id.clone(),
                    project_name: project.display_name().to_string(),
                    relation: *relation,
                });
        }
        for linked_id in project.linked_projects.keys() {
            if visited.contains(linked_id) {
                continue;
            }
            let Some(linked) = self.readable_project(linked_id) else {
                continue;
            };
            self.collect_release_usages(linked, visited, network);
        }
    }
}
