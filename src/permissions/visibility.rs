//! Project visibility: the READ-side policy evaluated in place of the
//! standard matrix.

use std::collections::BTreeSet;

use crate::organisation::{is_organisation_in_bu, matching_bu_department};
use crate::permissions::roles;
use crate::types::{EvaluationConfig, Project, User, UserGroup, Visibility};

/// Whether the requester may see the project at all.
///
/// Evaluated only for READ; every other action goes through the permission
/// matrix. An absent requester only sees EVERYONE projects.
#[must_use]
pub fn is_visible(project: &Project, user: Option<&User>, config: EvaluationConfig) -> bool {
    let admin_override = config.admin_private_access && roles::is_admin(user);
    match project.visibility() {
        Visibility::Private => {
            user.is_some_and(|u| !u.email.is_empty() && u.email == project.created_by)
                || admin_override
        }
        Visibility::MeAndModerators => {
            is_user_equivalent_to_moderator(project, user) || admin_override
        }
        Visibility::BuisnessunitAndModerators => {
            let by_primary_criteria = user
                .is_some_and(|u| is_organisation_in_bu(&project.business_unit, &u.department))
                || is_user_equivalent_to_moderator(project, user)
                || roles::is_user_at_least(UserGroup::ClearingAdmin, user);
            if by_primary_criteria {
                return true;
            }
            // Secondary departments are consulted only as a fallback, and
            // against the exact-equality comparator.
            user.is_some_and(|u| {
                matching_bu_department(
                    &project.business_unit,
                    u.secondary_departments_and_roles.keys().map(String::as_str),
                )
                .is_some()
            })
        }
        Visibility::Everyone => true,
    }
}

/// Whether the requester belongs to the project's widest moderator-equivalent
/// circle: creator, lead architect, project responsible, moderators and
/// contributors. Business-unit membership deliberately does not count here.
#[must_use]
pub fn is_user_equivalent_to_moderator(project: &Project, user: Option<&User>) -> bool {
    let Some(user) = user else {
        return false;
    };
    if user.email.is_empty() {
        return false;
    }
    let mut allowed: BTreeSet<&str> = BTreeSet::new();
    if !project.created_by.is_empty() {
        allowed.insert(project.created_by.as_str());
    }
    if let Some(lead_architect) = project.lead_architect.as_deref() {
        allowed.insert(lead_architect);
    }
    if let Some(responsible) = project.project_responsible.as_deref() {
        allowed.insert(responsible);
    }
    allowed.extend(project.moderators.iter().map(String::as_str));
    allowed.extend(project.contributors.iter().map(String::as_str));
    allowed.contains(user.email.as_str())
}
