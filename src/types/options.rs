//! Deployment-level switches that tune permission evaluation.

use serde::{Deserialize, Serialize};

/// Evaluation switches loaded from deployment configuration.
///
/// Every switch defaults to the restrictive setting; a zero-config
/// evaluation matches the strict behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct EvaluationConfig {
    /// When enabled, admins can read PRIVATE and ME_AND_MODERATORS projects
    /// they are otherwise not associated with. Some deployments require this
    /// for support tooling; default off.
    #[serde(default)]
    pub admin_private_access: bool,
}

impl EvaluationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn admin_private_access(mut self, enabled: bool) -> Self {
        self.admin_private_access = enabled;
        self
    }
}
