//! Business-unit normalization for organisation hierarchy strings.
//!
//! Organisations are space-separated hierarchy paths like `"CT BE OSS NE"`:
//! the first tokens name the business unit, trailing tokens are regional
//! refinements. Matching a user's department against a document's owning
//! unit therefore normalizes the department down to its unit prefix first.
//!
//! Two comparators exist on purpose and must not be unified: the prefix
//! (`starts_with`) form answers the loose "is this user somewhere inside the
//! unit" question, the exact-equality form locates the one department that
//! owns a document. Callers pick the one their check is specified against.

use std::collections::BTreeSet;

/// Maximum number of organisation tokens that make up a business unit.
const BU_TOKEN_COUNT: usize = 3;

/// Normalizes an organisation string to its business unit: the first three
/// whitespace-separated tokens, uppercased.
///
/// `"CT BE OSS NE"` → `"CT BE OSS"`, `"CT BE"` → `"CT BE"`. The empty string
/// normalizes to the empty string, which never matches a non-empty unit.
#[must_use]
pub fn bu_from_organisation(organisation: &str) -> String {
    let parts: Vec<&str> = organisation.split_whitespace().collect();
    if parts.is_empty() {
        return String::new();
    }
    let cut = parts.len().min(BU_TOKEN_COUNT);
    parts[..cut].join(" ").to_uppercase()
}

/// Loose membership check: does the document's business unit start with the
/// normalized organisation? Empty inputs never match.
#[must_use]
pub fn is_organisation_in_bu(business_unit: &str, organisation: &str) -> bool {
    if organisation.is_empty() {
        return false;
    }
    let normalized = bu_from_organisation(organisation);
    !normalized.is_empty() && business_unit.starts_with(&normalized)
}

/// Strict membership check: the organisation's normalized business unit
/// equals the document's business unit exactly. Empty inputs never match.
#[must_use]
pub fn organisation_equals_bu(business_unit: &str, organisation: &str) -> bool {
    if business_unit.is_empty() {
        return false;
    }
    let normalized = bu_from_organisation(organisation);
    !normalized.is_empty() && normalized == business_unit
}

/// Finds the first department whose normalized business unit equals the
/// document's business unit exactly. Used to locate the secondary department
/// that grants access, not just to answer yes/no.
#[must_use]
pub fn matching_bu_department<'a, I>(business_unit: &str, departments: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    departments
        .into_iter()
        .find(|department| organisation_equals_bu(business_unit, department))
}

/// Keeps the departments whose normalized unit equals the given
/// organisation's unit.
#[must_use]
pub fn filter_bu_set(organisation: &str, departments: &BTreeSet<String>) -> BTreeSet<String> {
    let bu = bu_from_organisation(organisation);
    if bu.is_empty() {
        return BTreeSet::new();
    }
    departments
        .iter()
        .filter(|department| bu_from_organisation(department) == bu)
        .cloned()
        .collect()
}
