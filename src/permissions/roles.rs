//! Group thresholds: which held group satisfies which required group.
//!
//! The hierarchy is not ordinal. Admin-tier groups satisfy every functional
//! threshold, but the functional groups (clearing, ECC, security) do not
//! satisfy each other, and SECURITY_USER is satisfied by nobody else — not
//! even admins.

use std::collections::BTreeSet;

use crate::types::{User, UserGroup};

/// The exact set of held groups that satisfies an "at least" check for the
/// required group.
#[must_use]
pub const fn satisfying_groups(required: UserGroup) -> &'static [UserGroup] {
    use UserGroup::{
        Admin, ClearingAdmin, ClearingExpert, EccAdmin, SecurityAdmin, SecurityUser, Sw360Admin,
        User,
    };
    match required {
        User => &[
            User,
            ClearingAdmin,
            ClearingExpert,
            EccAdmin,
            SecurityAdmin,
            SecurityUser,
            Sw360Admin,
            Admin,
        ],
        ClearingAdmin => &[ClearingAdmin, ClearingExpert, Sw360Admin, Admin],
        ClearingExpert => &[ClearingExpert, Sw360Admin, Admin],
        EccAdmin => &[EccAdmin, Sw360Admin, Admin],
        SecurityAdmin => &[SecurityAdmin, Sw360Admin, Admin],
        SecurityUser => &[SecurityUser],
        Sw360Admin | Admin => &[Sw360Admin, Admin],
    }
}

fn group_of(user: Option<&User>) -> Option<UserGroup> {
    user.and_then(|u| u.user_group)
}

fn is_in_group(user: Option<&User>, group: UserGroup) -> bool {
    group_of(user) == Some(group)
}

/// "At least" check against a possibly absent user. An absent user, or a
/// user without a group, satisfies nothing.
#[must_use]
pub fn is_user_at_least(required: UserGroup, user: Option<&User>) -> bool {
    group_of(user).is_some_and(|held| satisfying_groups(required).contains(&held))
}

/// "At least" check against a set of roles held in a secondary department.
#[must_use]
pub fn is_user_at_least_in_roles(required: UserGroup, roles: &BTreeSet<UserGroup>) -> bool {
    satisfying_groups(required)
        .iter()
        .any(|group| roles.contains(group))
}

#[must_use]
pub fn is_normal_user(user: Option<&User>) -> bool {
    is_in_group(user, UserGroup::User)
}

/// Exact admin-tier membership. `is_user_at_least(Admin, user)` is the same
/// predicate by construction.
#[must_use]
pub fn is_admin(user: Option<&User>) -> bool {
    is_in_group(user, UserGroup::Sw360Admin) || is_in_group(user, UserGroup::Admin)
}

/// Clearing-side membership: clearing admins and clearing experts.
#[must_use]
pub fn is_clearing_admin(user: Option<&User>) -> bool {
    is_in_group(user, UserGroup::ClearingAdmin) || is_in_group(user, UserGroup::ClearingExpert)
}

#[must_use]
pub fn is_clearing_expert(user: Option<&User>) -> bool {
    is_in_group(user, UserGroup::ClearingExpert)
}

#[must_use]
pub fn is_ecc_admin(user: Option<&User>) -> bool {
    is_in_group(user, UserGroup::EccAdmin)
}

#[must_use]
pub fn is_security_admin(user: Option<&User>) -> bool {
    is_in_group(user, UserGroup::SecurityAdmin)
}

#[must_use]
pub fn is_security_user(user: Option<&User>) -> bool {
    is_in_group(user, UserGroup::SecurityUser)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(group: UserGroup) -> User {
        User::new("someone@catalogue.test", "CT BE").with_group(group)
    }

    #[test]
    fn every_group_satisfies_the_baseline() {
        for group in [
            UserGroup::User,
            UserGroup::ClearingAdmin,
            UserGroup::ClearingExpert,
            UserGroup::EccAdmin,
            UserGroup::SecurityAdmin,
            UserGroup::SecurityUser,
            UserGroup::Sw360Admin,
            UserGroup::Admin,
        ] {
            assert!(
                is_user_at_least(UserGroup::User, Some(&user_with(group))),
                "{group} should satisfy the USER baseline"
            );
        }
    }

    #[test]
    fn clearing_admin_threshold_excludes_ecc() {
        assert!(is_user_at_least(
            UserGroup::ClearingAdmin,
            Some(&user_with(UserGroup::ClearingExpert))
        ));
        assert!(!is_user_at_least(
            UserGroup::EccAdmin,
            Some(&user_with(UserGroup::ClearingAdmin))
        ));
    }

    #[test]
    fn admin_threshold_is_exactly_is_admin() {
        for group in satisfying_groups(UserGroup::User) {
            let user = user_with(*group);
            assert_eq!(
                is_user_at_least(UserGroup::Admin, Some(&user)),
                is_admin(Some(&user))
            );
        }
    }

    #[test]
    fn security_user_is_not_satisfied_by_admins() {
        assert!(!is_user_at_least(
            UserGroup::SecurityUser,
            Some(&user_with(UserGroup::Admin))
        ));
        assert!(is_user_at_least(
            UserGroup::SecurityUser,
            Some(&user_with(UserGroup::SecurityUser))
        ));
    }

    #[test]
    fn absent_or_groupless_users_satisfy_nothing() {
        let groupless = User::new("nobody@catalogue.test", "CT BE");
        assert!(!is_user_at_least(UserGroup::User, Some(&groupless)));
        assert!(!is_user_at_least(UserGroup::User, None));
        assert!(!is_admin(None));
    }

    #[test]
    fn secondary_roles_follow_the_same_table() {
        let roles: BTreeSet<UserGroup> = [UserGroup::Sw360Admin].into();
        assert!(is_user_at_least_in_roles(UserGroup::ClearingAdmin, &roles));
        assert!(is_user_at_least_in_roles(UserGroup::Sw360Admin, &roles));
        assert!(!is_user_at_least_in_roles(
            UserGroup::SecurityUser,
            &roles
        ));
    }
}
