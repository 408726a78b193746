//! Link-tree materialization for projects and releases.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::{LinkSource, LinkWalker, node_id_for};
use crate::types::{
    Project, ProjectLink, ProjectReleaseRelationship, ProjectRelationship, Release, ReleaseLink,
    ReleaseRelationship,
};

impl<S: LinkSource> LinkWalker<'_, S> {
    /// Builds the link tree rooted at an already-loaded project. The root is
    /// taken as given (the caller authorized it); linked targets are fetched
    /// through the source and permission-filtered per node.
    #[must_use]
    pub fn linked_projects(&self, root: &Project) -> ProjectLink {
        let node_id = node_id_for(&root.id);
        let mut path: Vec<String> = vec![root.id.clone()];
        let mut link = ProjectLink {
            id: root.id.clone(),
            name: root.display_name().to_string(),
            node_id: node_id.clone(),
            parent_node_id: None,
            relation: ProjectRelationship::Unknown,
            version: root.version.clone(),
            clearing_state: root.clearing_state,
            tree_level: 0,
            ..ProjectLink::default()
        };
        link.linked_releases = self.release_rows(&root.release_id_to_usage, &node_id);
        link.subprojects =
            self.walk_project_relations(&root.linked_projects, Some(&node_id), 1, &mut path);
        link
    }

    /// Builds link nodes for a pre-resolved relation map, e.g. the edited but
    /// unsaved relations of a form.
    #[must_use]
    pub fn linked_projects_of(
        &self,
        relations: &BTreeMap<String, ProjectRelationship>,
    ) -> Vec<ProjectLink> {
        let mut path = Vec::new();
        self.walk_project_relations(relations, None, 0, &mut path)
    }

    fn walk_project_relations(
        &self,
        relations: &BTreeMap<String, ProjectRelationship>,
        parent_node_id: Option<&str>,
        level: usize,
        path: &mut Vec<String>,
    ) -> Vec<ProjectLink> {
        let mut out: Vec<ProjectLink> = relations
            .iter()
            .map(|(id, relation)| self.project_link(id, *relation, parent_node_id, level, path))
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        out
    }

    fn project_link(
        &self,
        id: &str,
        relation: ProjectRelationship,
        parent_node_id: Option<&str>,
        level: usize,
        path: &mut Vec<String>,
    ) -> ProjectLink {
        let node_id = node_id_for(id);
        let mut link = ProjectLink {
            id: id.to_string(),
            name: id.to_string(),
            node_id: node_id.clone(),
            parent_node_id: parent_node_id.map(str::to_string),
            relation,
            tree_level: level,
            ..ProjectLink::default()
        };

        if path.iter().any(|seen| seen == id) {
            debug!(target_id = id, "project link closes a cycle");
            link.cyclic = true;
            if let Some(project) = self.readable_project(id) {
                link.name = project.display_name().to_string();
            }
            return link;
        }

        let Some(project) = self.readable_project(id) else {
            warn!(
                target_id = id,
                parent = parent_node_id.unwrap_or("<root>"),
                "broken project link: target is missing or not visible"
            );
            link.unresolved = true;
            return link;
        };

        link.name = project.display_name().to_string();
        link.version = project.version.clone();
        link.clearing_state = project.clearing_state;
        if self.expand_at(level) {
            link.linked_releases = self.release_rows(&project.release_id_to_usage, &node_id);
            path.push(id.to_string());
            link.subprojects = self.walk_project_relations(
                &project.linked_projects,
                Some(&node_id),
                level + 1,
                path,
            );
            path.pop();
        }
        link
    }

    /// One level of release rows for a project node. Rows never recurse, so
    /// no path bookkeeping is needed here.
    fn release_rows(
        &self,
        usage: &BTreeMap<String, ProjectReleaseRelationship>,
        parent_node_id: &str,
    ) -> Vec<ReleaseLink> {
        let mut out: Vec<ReleaseLink> = usage
            .iter()
            .map(|(id, relationship)| self.release_row(id, *relationship, parent_node_id))
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        out
    }

    fn release_row(
        &self,
        id: &str,
        relationship: ProjectReleaseRelationship,
        parent_node_id: &str,
    ) -> ReleaseLink {
        let mut row = ReleaseLink {
            id: id.to_string(),
            name: id.to_string(),
            node_id: node_id_for(id),
            parent_node_id: Some(parent_node_id.to_string()),
            relation: relationship.release_relation,
            mainline_state: relationship.mainline_state,
            ..ReleaseLink::default()
        };
        let Some(release) = self.readable_release(id) else {
            warn!(
                target_id = id,
                parent = parent_node_id,
                "broken release link: target is missing or not visible"
            );
            row.unresolved = true;
            return row;
        };
        row.name = release.display_name();
        row.clearing_state = release.clearing_state;
        row.license_ids = release.main_license_ids.clone();
        row.has_subreleases = !release.release_id_to_relationship.is_empty();
        row
    }

    /// Builds the release-to-release link tree rooted at an already-loaded
    /// release, under the same path discipline as project trees.
    #[must_use]
    pub fn linked_releases(&self, root: &Release) -> ReleaseLink {
        let node_id = node_id_for(&root.id);
        let mut path: Vec<String> = vec![root.id.clone()];
        let mut link = ReleaseLink {
            id: root.id.clone(),
            name: root.display_name(),
            node_id: node_id.clone(),
            parent_node_id: None,
            relation: ReleaseRelationship::Unknown,
            clearing_state: root.clearing_state,
            license_ids: root.main_license_ids.clone(),
            has_subreleases: !root.release_id_to_relationship.is_empty(),
            tree_level: 0,
            ..ReleaseLink::default()
        };
        link.subreleases = self.walk_release_relations(
            &root.release_id_to_relationship,
            Some(&node_id),
            1,
            &mut path,
        );
        link
    }

    fn walk_release_relations(
        &self,
        relations: &BTreeMap<String, ReleaseRelationship>,
        parent_node_id: Option<&str>,
        level: usize,
        path: &mut Vec<String>,
    ) -> Vec<ReleaseLink> {
        let mut out: Vec<ReleaseLink> = relations
            .iter()
            .map(|(id, relation)| self.release_link(id, *relation, parent_node_id, level, path))
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        out
    }

    fn release_link(
        &self,
        id: &str,
        relation: ReleaseRelationship,
        parent_node_id: Option<&str>,
        level: usize,
        path: &mut Vec<String>,
    ) -> ReleaseLink {
        let node_id = node_id_for(id);
        let mut link = ReleaseLink {
            id: id.to_string(),
            name: id.to_string(),
            node_id: node_id.clone(),
            parent_node_id: parent_node_id.map(str::to_string),
            relation,
            tree_level: level,
            ..ReleaseLink::default()
        };

        if path.iter().any(|seen| seen == id) {
            debug!(target_id = id, "release link closes a cycle");
            link.cyclic = true;
            if let Some(release) = self.readable_release(id) {
                link.name = release.display_name();
            }
            return link;
        }

        let Some(release) = self.readable_release(id) else {
            warn!(
                target_id = id,
                parent = parent_node_id.unwrap_or("<root>"),
                "broken release link: target is missing or not visible"
            );
            link.unresolved = true;
            return link;
        };

        link.name = release.display_name();
        link.clearing_state = release.clearing_state;
        link.license_ids = release.main_license_ids.clone();
        link.has_subreleases = !release.release_id_to_relationship.is_empty();
        if self.expand_at(level) {
            path.push(id.to_string());
            link.subreleases = self.walk_release_relations(
                &release.release_id_to_relationship,
                Some(&node_id),
                level + 1,
                path,
            );
            path.pop();
        }
        link
    }
}

/// Flattens a project link tree to a preorder list, the shape table views
/// render from. Sub-trees stay attached to their nodes.
#[must_use]
pub fn flatten_project_links(root: &ProjectLink) -> Vec<&ProjectLink> {
    let mut out = Vec::new();
    push_flat(root, &mut out);
    out
}

fn push_flat<'a>(link: &'a ProjectLink, out: &mut Vec<&'a ProjectLink>) {
    out.push(link);
    for child in &link.subprojects {
        push_flat(child, out);
    }
}
