//! Project permission strategy: visibility-gated READ, closed-clearing
//! escalation, and the normalized owner-group comparison.

use std::collections::BTreeSet;

use crate::organisation::{bu_from_organisation, is_organisation_in_bu, organisation_equals_bu};
use crate::permissions::{
    DocumentPermissions, RoleGrants, attachment_content_ids, extend_identities, insert_identity,
    roles, standard_permissions, visibility,
};
use crate::types::{
    EvaluationConfig, Project, ProjectClearingState, RequestedAction, User, UserGroup,
};

#[derive(Debug)]
pub struct ProjectPermissions<'a> {
    document: &'a Project,
    user: Option<&'a User>,
    config: EvaluationConfig,
    grants: RoleGrants,
    in_owner_group: bool,
}

impl<'a> ProjectPermissions<'a> {
    #[must_use]
    pub fn new(document: &'a Project, user: Option<&'a User>) -> Self {
        let mut moderators = BTreeSet::new();
        insert_identity(&mut moderators, &document.created_by);
        if let Some(responsible) = document.project_responsible.as_deref() {
            insert_identity(&mut moderators, responsible);
        }
        extend_identities(&mut moderators, &document.moderators);

        let mut contributors = moderators.clone();
        extend_identities(&mut contributors, &document.contributors);
        if let Some(lead_architect) = document.lead_architect.as_deref() {
            insert_identity(&mut contributors, lead_architect);
        }

        let grants = RoleGrants {
            moderators,
            contributors,
            attachment_content_ids: attachment_content_ids(&document.attachments),
        };
        let in_owner_group = normalized_owner_group_match(document, user);
        Self {
            document,
            user,
            config: EvaluationConfig::default(),
            grants,
            in_owner_group,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn document(&self) -> &Project {
        self.document
    }

    /// Whether the requester holds at least `required` in a department that
    /// owns this project's business unit. The primary department counts via
    /// the loose unit-prefix comparator with the primary group as the held
    /// role; secondary departments count via the exact-equality comparator
    /// with their recorded role sets.
    fn has_own_group_role(&self, required: UserGroup) -> bool {
        let Some(user) = self.user else {
            return false;
        };
        let business_unit = &self.document.business_unit;
        if business_unit.is_empty() {
            return false;
        }
        if is_organisation_in_bu(business_unit, &user.department) {
            if let Some(group) = user.user_group {
                if roles::satisfying_groups(required).contains(&group) {
                    return true;
                }
            }
        }
        user.secondary_departments_and_roles
            .iter()
            .any(|(department, held)| {
                organisation_equals_bu(business_unit, department)
                    && roles::is_user_at_least_in_roles(required, held)
            })
    }
}

/// Project owner-group comparison: some department of the user, normalized
/// to its business unit, equals the project's business unit exactly.
fn normalized_owner_group_match(document: &Project, user: Option<&User>) -> bool {
    let business_unit = &document.business_unit;
    if business_unit.is_empty() {
        return false;
    }
    user.is_some_and(|u| {
        u.departments()
            .iter()
            .any(|department| bu_from_organisation(department) == *business_unit)
    })
}

impl DocumentPermissions for ProjectPermissions<'_> {
    fn is_action_allowed(&self, action: RequestedAction) -> bool {
        if action == RequestedAction::Read {
            return visibility::is_visible(self.document, self.user, self.config);
        }
        if self.document.clearing_state == Some(ProjectClearingState::Closed) {
            // Once clearing is closed, moderatorship alone no longer carries
            // any mutating action.
            return match action {
                RequestedAction::Write | RequestedAction::Attachments => {
                    roles::is_user_at_least(UserGroup::Admin, self.user)
                        || self.has_own_group_role(UserGroup::ClearingAdmin)
                        || self.has_own_group_role(UserGroup::Sw360Admin)
                }
                _ => {
                    roles::is_admin(self.user) || self.has_own_group_role(UserGroup::Sw360Admin)
                }
            };
        }
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
