//! Bulk cleanup of generated work items.
//!
//! Cleanup runs in two phases. [`CleanupEngine::survey`] finds everything
//! under the configured team areas and orders it for deletion;
//! [`CleanupEngine::execute`] deletes a surveyed plan. The split lets the
//! CLI describe exactly what would be removed and ask for confirmation in
//! between. Deletions are recoverable: items land in the recycle bin.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{deletion_rank, TeamConfig, WorkItemSummary};
use crate::remote::{ClientError, TrackingStore, MAX_BATCH_GET};

/// Errors during the survey phase. Execution has no error type of its own,
/// per-item failures are counted in the report instead.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("work item discovery failed: {0}")]
    Discovery(#[source] ClientError),

    #[error("loading work item details failed: {0}")]
    Fetch(#[source] ClientError),
}

/// Everything the survey found, already in deletion order.
#[derive(Debug, Clone)]
pub struct CleanupPlan {
    items: Vec<WorkItemSummary>,
}

impl CleanupPlan {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[WorkItemSummary] {
        &self.items
    }

    /// How many items of each type the plan holds, sorted by type name.
    pub fn counts_by_type(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.type_name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// What an execution run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub deleted: usize,
    pub failed: usize,
}

/// Finds and deletes demo work items for one project.
pub struct CleanupEngine<'a, S: TrackingStore> {
    store: &'a S,
    project: String,
}

impl<'a, S: TrackingStore> CleanupEngine<'a, S> {
    pub fn new(store: &'a S, project: impl Into<String>) -> Self {
        Self {
            store,
            project: project.into(),
        }
    }

    /// Find every work item under the teams' area paths and load the
    /// details needed to describe and order them.
    pub async fn survey(&self, teams: &[TeamConfig]) -> Result<CleanupPlan, CleanupError> {
        let areas: Vec<String> = teams.iter().map(|t| t.area_path.clone()).collect();
        info!("searching in areas: {}", areas.join(", "));

        let ids = self
            .store
            .query_under_areas(&self.project, &areas)
            .await
            .map_err(CleanupError::Discovery)?;
        if ids.is_empty() {
            return Ok(CleanupPlan { items: Vec::new() });
        }

        info!("found {} work items to process", ids.len());

        let mut items = Vec::with_capacity(ids.len());
        for (batch_index, chunk) in ids.chunks(MAX_BATCH_GET).enumerate() {
            let batch = self
                .store
                .fetch_items(chunk)
                .await
                .map_err(CleanupError::Fetch)?;
            info!("loaded batch {}: {} items", batch_index + 1, batch.len());
            items.extend(batch);
        }

        order_for_deletion(&mut items);
        Ok(CleanupPlan { items })
    }

    /// Delete everything in the plan, children before parents. A failure on
    /// one item is logged and counted while the rest still go through.
    pub async fn execute(&self, plan: &CleanupPlan) -> CleanupReport {
        let mut report = CleanupReport::default();
        for item in &plan.items {
            match self.store.delete_item(item.id, false).await {
                Ok(()) => {
                    report.deleted += 1;
                    info!("deleted {} {}: {}", item.type_name, item.id, item.title);
                }
                Err(err) => {
                    report.failed += 1;
                    warn!("failed to delete work item {}: {}", item.id, err);
                }
            }
        }
        report
    }
}

/// Sort children before parents: tasks first, then backlog items, features,
/// epics. Newer items go first within a type.
fn order_for_deletion(items: &mut [WorkItemSummary]) {
    items.sort_by(|a, b| {
        deletion_rank(&b.type_name)
            .cmp(&deletion_rank(&a.type_name))
            .then_with(|| b.id.cmp(&a.id))
    });
}
