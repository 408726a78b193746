//! Requester identity types: users, groups and requested actions.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatenaError;

/// Ordered-looking but table-driven group hierarchy.
///
/// "At least" comparisons are NOT ordinal: each group has its own satisfying
/// set (see [`crate::permissions::roles::satisfying_groups`]). `SW360_ADMIN`
/// is the legacy name of the portal-wide admin tier and is kept for wire
/// compatibility with existing catalogue data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserGroup {
    User,
    ClearingAdmin,
    ClearingExpert,
    EccAdmin,
    SecurityAdmin,
    SecurityUser,
    Sw360Admin,
    Admin,
}

impl UserGroup {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::ClearingAdmin => "CLEARING_ADMIN",
            Self::ClearingExpert => "CLEARING_EXPERT",
            Self::EccAdmin => "ECC_ADMIN",
            Self::SecurityAdmin => "SECURITY_ADMIN",
            Self::SecurityUser => "SECURITY_USER",
            Self::Sw360Admin => "SW360_ADMIN",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserGroup {
    type Err = CatenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "CLEARING_ADMIN" => Ok(Self::ClearingAdmin),
            "CLEARING_EXPERT" => Ok(Self::ClearingExpert),
            "ECC_ADMIN" => Ok(Self::EccAdmin),
            "SECURITY_ADMIN" => Ok(Self::SecurityAdmin),
            "SECURITY_USER" => Ok(Self::SecurityUser),
            "SW360_ADMIN" => Ok(Self::Sw360Admin),
            "ADMIN" => Ok(Self::Admin),
            other => Err(CatenaError::UnknownUserGroup {
                name: other.to_string(),
            }),
        }
    }
}

/// Action a caller wants to perform on a document.
///
/// Distinct actions carry distinct role thresholds; the matrix lives in
/// [`crate::permissions`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestedAction {
    Read,
    Write,
    WriteEcc,
    Attachments,
    Delete,
    Users,
    Clearing,
}

impl RequestedAction {
    /// Every defined action, in canonical order. Permission maps are built
    /// over this list and therefore never partial.
    pub const ALL: [RequestedAction; 7] = [
        Self::Read,
        Self::Write,
        Self::WriteEcc,
        Self::Attachments,
        Self::Delete,
        Self::Users,
        Self::Clearing,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::WriteEcc => "WRITE_ECC",
            Self::Attachments => "ATTACHMENTS",
            Self::Delete => "DELETE",
            Self::Users => "USERS",
            Self::Clearing => "CLEARING",
        }
    }
}

impl fmt::Display for RequestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestedAction {
    type Err = CatenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            "WRITE_ECC" => Ok(Self::WriteEcc),
            "ATTACHMENTS" => Ok(Self::Attachments),
            "DELETE" => Ok(Self::Delete),
            "USERS" => Ok(Self::Users),
            "CLEARING" => Ok(Self::Clearing),
            other => Err(CatenaError::UnknownAction {
                name: other.to_string(),
            }),
        }
    }
}

/// Resolved requester record handed in by the account layer.
///
/// The email is the primary identity used for all role-membership checks.
/// `secondary_departments_and_roles` maps department strings to the elevated
/// roles the user holds there, outside their primary department.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_group: Option<UserGroup>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secondary_departments_and_roles: BTreeMap<String, BTreeSet<UserGroup>>,
}

impl User {
    /// Convenience constructor for the common email + department case.
    #[must_use]
    pub fn new<E: Into<String>, D: Into<String>>(email: E, department: D) -> Self {
        Self {
            email: email.into(),
            department: department.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: UserGroup) -> Self {
        self.user_group = Some(group);
        self
    }

    #[must_use]
    pub fn with_secondary_roles<D: Into<String>>(
        mut self,
        department: D,
        roles: impl IntoIterator<Item = UserGroup>,
    ) -> Self {
        self.secondary_departments_and_roles
            .entry(department.into())
            .or_default()
            .extend(roles);
        self
    }

    /// All departments the user is associated with: primary first, then the
    /// secondary ones. Empty strings are skipped.
    #[must_use]
    pub fn departments(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        if !self.department.is_empty() {
            out.insert(self.department.clone());
        }
        for department in self.secondary_departments_and_roles.keys() {
            if !department.is_empty() {
                out.insert(department.clone());
            }
        }
        out
    }
}
