use serde::{Deserialize, Serialize};

/// A team to generate work items for, as configured in the settings file.
///
/// The area path doubles as half of the idempotency key: an item "belongs" to
/// the generator when its area path falls under one of the configured teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Team name, used to select the team's slice of the content catalog.
    pub name: String,
    /// Area path every generated item for this team is created under,
    /// e.g. "ProjDemo\\Frontend".
    pub area_path: String,
    /// The team's backlog iteration path, e.g. "ProjDemo".
    pub iteration_path: String,
}
