//! Seed records produced by content providers.
//!
//! These are ephemeral value objects: a provider emits them, the synchronizer
//! turns each into at most one creation request, and they are dropped. They
//! never round-trip back out of the store.

/// Desired epic, the root of one generated subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct EpicSeed {
    pub title: String,
    pub description: String,
    pub state: String,
}

impl EpicSeed {
    pub fn new(title: &str, description: &str, state: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            state: state.to_string(),
        }
    }
}

/// Desired feature under an epic.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSeed {
    pub title: String,
    pub description: String,
    pub state: String,
}

impl FeatureSeed {
    pub fn new(title: &str, description: &str, state: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            state: state.to_string(),
        }
    }
}

/// Desired backlog-level item under a feature. The only level that carries an
/// effort estimate; the field it lands in depends on the process template.
#[derive(Debug, Clone, PartialEq)]
pub struct BacklogItemSeed {
    pub title: String,
    pub description: String,
    pub effort: u32,
    pub state: String,
}

impl BacklogItemSeed {
    pub fn new(title: &str, description: &str, effort: u32, state: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            effort,
            state: state.to_string(),
        }
    }
}

/// Desired task under a backlog item.
///
/// The title here is the template text only; the synchronizer prefixes the
/// parent backlog item's title to keep the idempotency key unique when the
/// same task template recurs under one area path.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSeed {
    pub title: String,
    pub description: String,
    pub remaining_work: u32,
    pub state: String,
}

impl TaskSeed {
    pub fn new(title: &str, description: &str, remaining_work: u32, state: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            remaining_work,
            state: state.to_string(),
        }
    }
}
