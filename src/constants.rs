//! Shared constants used across the permission and graph modules.

use crate::types::UserGroup;

/// Separator between document names in a reported cycle path.
pub const CYCLE_PATH_SEPARATOR: &str = " -> ";

/// Group assumed for accounts created without an explicit one.
pub const DEFAULT_USER_GROUP: UserGroup = UserGroup::User;

/// Levels materialized by a shallow link traversal: the root and its direct
/// children, nothing below.
pub const SHALLOW_LINK_DEPTH: usize = 2;
