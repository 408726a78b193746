//! Catalogue document records as loaded by the persistence layer.
//!
//! These are plain snapshots: the engine never mutates them and never caches
//! anything derived from them across evaluations. Linked-document maps are
//! `BTreeMap`s so traversal order is reproducible.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::link::{ProjectReleaseRelationship, ProjectRelationship, ReleaseRelationship};
use super::user::User;
use crate::error::CatenaError;

/// Visibility policy of a project. The misspelled business-unit variant is
/// the historical wire name and must stay as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Private,
    MeAndModerators,
    #[default]
    BuisnessunitAndModerators,
    Everyone,
}

impl Visibility {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "PRIVATE",
            Self::MeAndModerators => "ME_AND_MODERATORS",
            Self::BuisnessunitAndModerators => "BUISNESSUNIT_AND_MODERATORS",
            Self::Everyone => "EVERYONE",
        }
    }
}

impl std::str::FromStr for Visibility {
    type Err = CatenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRIVATE" => Ok(Self::Private),
            "ME_AND_MODERATORS" => Ok(Self::MeAndModerators),
            "BUISNESSUNIT_AND_MODERATORS" => Ok(Self::BuisnessunitAndModerators),
            "EVERYONE" => Ok(Self::Everyone),
            other => Err(CatenaError::UnknownVisibility {
                name: other.to_string(),
            }),
        }
    }
}

/// Clearing workflow state of a project. `Closed` escalates the role
/// thresholds for every mutating action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectClearingState {
    Open,
    InProgress,
    Closed,
}

/// Clearing workflow state of a release, carried on release links for
/// display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearingState {
    NewClearing,
    SentToClearingTool,
    UnderClearing,
    ReportAvailable,
    Approved,
}

/// Reference to an uploaded attachment. Download checks go through the
/// content id, never the filename.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Attachment {
    pub attachment_content_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Attachment {
    #[must_use]
    pub fn new<S: Into<String>>(attachment_content_id: S) -> Self {
        Self {
            attachment_content_id: attachment_content_id.into(),
            filename: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub business_unit: String,
    /// Unset means the business-unit default; use [`Project::visibility`]
    /// rather than reading the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_responsible: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_architect: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub moderators: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub contributors: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearing_state: Option<ProjectClearingState>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub linked_projects: BTreeMap<String, ProjectRelationship>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub release_id_to_usage: BTreeMap<String, ProjectReleaseRelationship>,
}

impl Project {
    /// Effective visibility: the stored value, or the business-unit default
    /// when unset.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility.unwrap_or_default()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Component {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub business_unit: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub moderators: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Release {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub business_unit: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub moderators: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub contributors: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearing_state: Option<ClearingState>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub release_id_to_relationship: BTreeMap<String, ReleaseRelationship>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub main_license_ids: BTreeSet<String>,
}

impl Release {
    /// "name version" as shown in link trees and cycle paths.
    #[must_use]
    pub fn display_name(&self) -> String {
        let base = if self.name.is_empty() { self.id.as_str() } else { self.name.as_str() };
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => format!("{base} {version}"),
            _ => base.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct License {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Vendor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub shortname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct SpdxDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct SpdxPackageInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub created_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Vulnerability {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Closed union over every document kind the engine evaluates.
///
/// New kinds are added here and get their own permission strategy; the
/// compiler keeps the dispatcher exhaustive.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    Project(Project),
    Component(Component),
    Release(Release),
    License(License),
    Vendor(Vendor),
    User(User),
    SpdxDocument(SpdxDocument),
    SpdxPackageInfo(SpdxPackageInfo),
    Vulnerability(Vulnerability),
}

impl Document {
    /// Opaque identity of the wrapped record.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Project(d) => &d.id,
            Self::Component(d) => &d.id,
            Self::Release(d) => &d.id,
            Self::License(d) => &d.id,
            Self::Vendor(d) => &d.id,
            Self::User(d) => &d.email,
            Self::SpdxDocument(d) => &d.id,
            Self::SpdxPackageInfo(d) => &d.id,
            Self::Vulnerability(d) => &d.id,
        }
    }
}
