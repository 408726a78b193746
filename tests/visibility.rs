//! Integration tests for project visibility.
//! The grids mirror the portal's long-standing acceptance tables: group and
//! department first, then the moderator-class overrides.

use catena_core::{EvaluationConfig, Project, User, UserGroup, Visibility, is_visible};

const THE_BU: &str = "DE PA RT";
const THE_DEP: &str = "DE PA RT ME NT";
const THE_OTHER_DEP: &str = "OT TH ER DE";
const THE_USER: &str = "user1";
const THE_OTHER_USER: &str = "anotherUser";

fn project(visibility: Visibility, business_unit: &str) -> Project {
    Project {
        id: "p1".into(),
        name: "catalogue-portal".into(),
        created_by: "creator@catalogue.test".into(),
        business_unit: business_unit.into(),
        visibility: Some(visibility),
        ..Project::default()
    }
}

fn viewer(department: &str, group: UserGroup) -> User {
    User::new("viewer@catalogue.test", department).with_group(group)
}

#[test]
fn visibility_by_group_and_department() {
    use UserGroup::{Admin, ClearingAdmin, User as Normal};
    use Visibility::{BuisnessunitAndModerators, Everyone, MeAndModerators, Private};

    // (visibility, business unit, department, group, expected)
    let table = [
        // other department
        (Private, THE_BU, THE_OTHER_DEP, Normal, false),
        (MeAndModerators, THE_BU, THE_OTHER_DEP, Normal, false),
        (BuisnessunitAndModerators, THE_BU, THE_OTHER_DEP, Normal, false),
        (Everyone, THE_BU, THE_OTHER_DEP, Normal, true),
        (Private, THE_BU, THE_OTHER_DEP, ClearingAdmin, false),
        (MeAndModerators, THE_BU, THE_OTHER_DEP, ClearingAdmin, false),
        (BuisnessunitAndModerators, THE_BU, THE_OTHER_DEP, ClearingAdmin, true),
        (Everyone, THE_BU, THE_OTHER_DEP, ClearingAdmin, true),
        (Private, THE_BU, THE_OTHER_DEP, Admin, false),
        (MeAndModerators, THE_BU, THE_OTHER_DEP, Admin, false),
        (BuisnessunitAndModerators, THE_BU, THE_OTHER_DEP, Admin, true),
        (Everyone, THE_BU, THE_OTHER_DEP, Admin, true),
        // same department (two levels below the unit)
        (Private, THE_BU, THE_DEP, Normal, false),
        (MeAndModerators, THE_BU, THE_DEP, Normal, false),
        (BuisnessunitAndModerators, THE_BU, THE_DEP, Normal, true),
        (Everyone, THE_BU, THE_DEP, Normal, true),
        (Private, THE_BU, THE_DEP, ClearingAdmin, false),
        (MeAndModerators, THE_BU, THE_DEP, ClearingAdmin, false),
        (BuisnessunitAndModerators, THE_BU, THE_DEP, ClearingAdmin, true),
        (Everyone, THE_BU, THE_DEP, ClearingAdmin, true),
        (Private, THE_BU, THE_DEP, Admin, false),
        (MeAndModerators, THE_BU, THE_DEP, Admin, false),
        (BuisnessunitAndModerators, THE_BU, THE_DEP, Admin, true),
        (Everyone, THE_BU, THE_DEP, Admin, true),
    ];

    for (visibility, business_unit, department, group, expected) in table {
        let doc = project(visibility, business_unit);
        let user = viewer(department, group);
        assert_eq!(
            is_visible(&doc, Some(&user), EvaluationConfig::default()),
            expected,
            "{visibility:?} bu={business_unit} dept={department} group={group:?}"
        );
    }
}

#[test]
fn admin_private_access_changes_only_the_admin_rows() {
    use Visibility::{BuisnessunitAndModerators, Everyone, MeAndModerators, Private};

    let config = EvaluationConfig::new().admin_private_access(true);
    let admin = viewer(THE_OTHER_DEP, UserGroup::Admin);
    let normal = viewer(THE_OTHER_DEP, UserGroup::User);

    for visibility in [Private, MeAndModerators, BuisnessunitAndModerators, Everyone] {
        let doc = project(visibility, THE_BU);
        assert!(
            is_visible(&doc, Some(&admin), config),
            "admin with private access should see {visibility:?}"
        );
    }
    // Non-admins are unaffected by the switch.
    assert!(!is_visible(&project(Private, THE_BU), Some(&normal), config));
}

/// Which project field the tested identity is assigned to.
#[derive(Debug, Clone, Copy)]
enum ProjectRole {
    CreatedBy,
    LeadArchitect,
    Moderator,
    Contributor,
    ProjectResponsible,
}

fn project_with_role(role: ProjectRole, identity: &str, visibility: Visibility) -> Project {
    let mut doc = Project {
        id: "p1".into(),
        name: "catalogue-portal".into(),
        business_unit: THE_BU.into(),
        visibility: Some(visibility),
        ..Project::default()
    };
    match role {
        ProjectRole::CreatedBy => doc.created_by = identity.into(),
        ProjectRole::LeadArchitect => doc.lead_architect = Some(identity.into()),
        ProjectRole::Moderator => {
            doc.moderators.insert(identity.into());
        }
        ProjectRole::Contributor => {
            doc.contributors.insert(identity.into());
        }
        ProjectRole::ProjectResponsible => doc.project_responsible = Some(identity.into()),
    }
    doc
}

#[test]
fn visibility_by_moderator_class() {
    use ProjectRole::{Contributor, CreatedBy, LeadArchitect, Moderator, ProjectResponsible};
    use Visibility::{BuisnessunitAndModerators, Everyone, MeAndModerators, Private};

    // (visibility, role, assigned identity, viewing identity, expected)
    let table = [
        // created by
        (Private, CreatedBy, THE_USER, THE_USER, true),
        (MeAndModerators, CreatedBy, THE_USER, THE_USER, true),
        (BuisnessunitAndModerators, CreatedBy, THE_USER, THE_USER, true),
        (Everyone, CreatedBy, THE_USER, THE_USER, true),
        (Private, CreatedBy, THE_USER, THE_OTHER_USER, false),
        (MeAndModerators, CreatedBy, THE_USER, THE_OTHER_USER, false),
        (BuisnessunitAndModerators, CreatedBy, THE_USER, THE_OTHER_USER, false),
        (Everyone, CreatedBy, THE_USER, THE_OTHER_USER, true),
        // lead architect: moderator-equivalent, but not the creator
        (Private, LeadArchitect, THE_USER, THE_USER, false),
        (MeAndModerators, LeadArchitect, THE_USER, THE_USER, true),
        (BuisnessunitAndModerators, LeadArchitect, THE_USER, THE_USER, true),
        (Everyone, LeadArchitect, THE_USER, THE_USER, true),
        (Private, LeadArchitect, THE_USER, THE_OTHER_USER, false),
        (MeAndModerators, LeadArchitect, THE_USER, THE_OTHER_USER, false),
        (BuisnessunitAndModerators, LeadArchitect, THE_USER, THE_OTHER_USER, false),
        (Everyone, LeadArchitect, THE_USER, THE_OTHER_USER, true),
        // moderator
        (Private, Moderator, THE_USER, THE_USER, false),
        (MeAndModerators, Moderator, THE_USER, THE_USER, true),
        (BuisnessunitAndModerators, Moderator, THE_USER, THE_USER, true),
        (Everyone, Moderator, THE_USER, THE_USER, true),
        (Private, Moderator, THE_USER, THE_OTHER_USER, false),
        (MeAndModerators, Moderator, THE_USER, THE_OTHER_USER, false),
        (BuisnessunitAndModerators, Moderator, THE_USER, THE_OTHER_USER, false),
        (Everyone, Moderator, THE_USER, THE_OTHER_USER, true),
        // contributor
        (Private, Contributor, THE_USER, THE_USER, false),
        (MeAndModerators, Contributor, THE_USER, THE_USER, true),
        (BuisnessunitAndModerators, Contributor, THE_USER, THE_USER, true),
        (Everyone, Contributor, THE_USER, THE_USER, true),
        (Private, Contributor, THE_USER, THE_OTHER_USER, false),
        (MeAndModerators, Contributor, THE_USER, THE_OTHER_USER, false),
        (BuisnessunitAndModerators, Contributor, THE_USER, THE_OTHER_USER, false),
        (Everyone, Contributor, THE_USER, THE_OTHER_USER, true),
        // project responsible
        (Private, ProjectResponsible, THE_USER, THE_USER, false),
        (MeAndModerators, ProjectResponsible, THE_USER, THE_USER, true),
        (BuisnessunitAndModerators, ProjectResponsible, THE_USER, THE_USER, true),
        (Everyone, ProjectResponsible, THE_USER, THE_USER, true),
        (Private, ProjectResponsible, THE_USER, THE_OTHER_USER, false),
        (MeAndModerators, ProjectResponsible, THE_USER, THE_OTHER_USER, false),
        (BuisnessunitAndModerators, ProjectResponsible, THE_USER, THE_OTHER_USER, false),
        (Everyone, ProjectResponsible, THE_USER, THE_OTHER_USER, true),
    ];

    for (visibility, role, assigned, viewing, expected) in table {
        let doc = project_with_role(role, assigned, visibility);
        // Wrong department on purpose: only the moderator class may grant.
        let user = User::new(viewing, "WR ONG DEP").with_group(UserGroup::User);
        assert_eq!(
            is_visible(&doc, Some(&user), EvaluationConfig::default()),
            expected,
            "{visibility:?} {role:?} assigned={assigned} viewing={viewing}"
        );
    }
}

#[test]
fn everyone_project_is_visible_to_a_blank_user() {
    let doc = project(Visibility::Everyone, THE_BU);
    let blank = User::default();
    assert!(is_visible(&doc, Some(&blank), EvaluationConfig::default()));
    assert!(is_visible(&doc, None, EvaluationConfig::default()));
}

#[test]
fn unset_visibility_behaves_like_business_unit_and_moderators() {
    let mut doc = project(Visibility::Everyone, THE_BU);
    doc.visibility = None;
    let insider = viewer(THE_DEP, UserGroup::User);
    let outsider = viewer(THE_OTHER_DEP, UserGroup::User);
    assert!(is_visible(&doc, Some(&insider), EvaluationConfig::default()));
    assert!(!is_visible(&doc, Some(&outsider), EvaluationConfig::default()));
}

#[test]
fn secondary_department_grants_visibility_as_fallback() {
    let doc = project(Visibility::BuisnessunitAndModerators, THE_BU);
    let user = User::new("viewer@catalogue.test", THE_OTHER_DEP)
        .with_group(UserGroup::User)
        .with_secondary_roles(THE_DEP, [UserGroup::User]);
    assert!(is_visible(&doc, Some(&user), EvaluationConfig::default()));
}
