//! First-cycle reporting over link graphs.
//!
//! Callers use the reported path to warn the user before saving a relation
//! that would close a loop; exhaustive cycle enumeration is not the goal,
//! the first offending path wins.

use std::collections::BTreeMap;

use tracing::debug;

use super::{LinkSource, LinkWalker};
use crate::constants::CYCLE_PATH_SEPARATOR;
use crate::types::{Project, ProjectRelationship, Release, ReleaseRelationship};

/// Ordered id → display-name pairs from the traversal root to the current
/// node. Stack-disciplined: entries are removed on backtrack, so a document
/// reached on two independent branches is not a cycle.
type Path = Vec<(String, String)>;

fn joined_path(path: &Path, repeated: &str) -> String {
    let names: Vec<&str> = path.iter().map(|(_, name)| name.as_str()).collect();
    let mut out = names.join(CYCLE_PATH_SEPARATOR);
    out.push_str(CYCLE_PATH_SEPARATOR);
    out.push_str(repeated);
    out
}

impl<S: LinkSource> LinkWalker<'_, S> {
    /// Walks the project link graph from `root` and reports the first cycle
    /// as a display-name path, the repeated project appended. `None` when
    /// the reachable graph is acyclic. A project listing itself is a
    /// one-step cycle; unresolvable targets are skipped and the walk
    /// continues.
    #[must_use]
    pub fn cyclic_project_path(&self, root: &Project) -> Option<String> {
        let mut path: Path = vec![(root.id.clone(), root.display_name().to_string())];
        self.walk_cyclic_projects(&root.linked_projects, &mut path)
    }

    fn walk_cyclic_projects(
        &self,
        relations: &BTreeMap<String, ProjectRelationship>,
        path: &mut Path,
    ) -> Option<String> {
        for id in relations.keys() {
            if let Some((_, repeated)) = path.iter().find(|(seen, _)| seen == id) {
                let report = joined_path(path, repeated);
                debug!(path = %report, "cyclic project link detected");
                return Some(report);
            }
            let Some(project) = self.readable_project(id) else {
                continue;
            };
            path.push((id.clone(), project.display_name().to_string()));
            if let Some(report) = self.walk_cyclic_projects(&project.linked_projects, path) {
                return Some(report);
            }
            path.pop();
        }
        None
    }

    /// Release-side counterpart of [`LinkWalker::cyclic_project_path`].
    #[must_use]
    pub fn cyclic_release_path(&self, root: &Release) -> Option<String> {
        let mut path: Path = vec![(root.id.clone(), root.display_name())];
        self.walk_cyclic_releases(&root.release_id_to_relationship, &mut path)
    }

    fn walk_cyclic_releases(
        &self,
        relations: &BTreeMap<String, ReleaseRelationship>,
        path: &mut Path,
    ) -> Option<String> {
        for id in relations.keys() {
            if let Some((_, repeated)) = path.iter().find(|(seen, _)| seen == id) {
                let report = joined_path(path, repeated);
                debug!(path = %report, "cyclic release link detected");
                return Some(report);
            }
            let Some(release) = self.readable_release(id) else {
                continue;
            };
            path.push((id.clone(), release.display_name()));
            if let Some(report) =
                self.walk_cyclic_releases(&release.release_id_to_relationship, path)
            {
                return Some(report);
            }
            path.pop();
        }
        None
    }
}
