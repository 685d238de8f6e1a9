//! Remote tracking store access.
//!
//! [`TrackingStore`] is the seam between generation logic and the hosted
//! service: everything the synchronizer and cleanup engine need, and nothing
//! more. [`AzdoClient`] is the production implementation speaking the Azure
//! DevOps work item tracking REST API; tests provide in-memory stores.

mod client;
mod types;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use client::{AzdoClient, ClientError};
pub use types::{
    BatchGetRequest, BatchGetResult, IterationDates, IterationNode, PatchOp, WiqlQuery,
    WiqlResult, WorkItemDto, WorkItemRef,
};

use crate::models::{FieldUpdate, NewWorkItem, WorkItemId, WorkItemSummary};

/// Most work items one batch get may request, an API limit.
pub const MAX_BATCH_GET: usize = 200;

/// Whether [`TrackingStore::ensure_iteration`] found the node or made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationOutcome {
    Created,
    Updated,
}

/// Operations the generator needs from a work item tracking store.
#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Create a work item and return its assigned id. The item starts in
    /// the type's default state; use [`update_item`](Self::update_item) to
    /// move it elsewhere.
    async fn create_item(
        &self,
        project: &str,
        item: &NewWorkItem,
    ) -> Result<WorkItemId, ClientError>;

    /// Apply field updates to an existing work item.
    async fn update_item(
        &self,
        id: WorkItemId,
        updates: &[FieldUpdate],
    ) -> Result<(), ClientError>;

    /// Find a work item by exact title within an area path. Returns the
    /// first match, which is how duplicates from earlier runs are detected.
    async fn find_by_title_and_area(
        &self,
        project: &str,
        title: &str,
        area_path: &str,
    ) -> Result<Option<WorkItemId>, ClientError>;

    /// Ids of every work item under any of the given area paths, newest
    /// first.
    async fn query_under_areas(
        &self,
        project: &str,
        area_paths: &[String],
    ) -> Result<Vec<WorkItemId>, ClientError>;

    /// Fetch title and type for up to [`MAX_BATCH_GET`] ids.
    async fn fetch_items(
        &self,
        ids: &[WorkItemId],
    ) -> Result<Vec<WorkItemSummary>, ClientError>;

    /// Delete a work item. With `destroy` false the item goes to the
    /// recycle bin and can be restored.
    async fn delete_item(&self, id: WorkItemId, destroy: bool) -> Result<(), ClientError>;

    /// Attach `child` under `parent` with a hierarchy link.
    async fn link_parent(
        &self,
        child: WorkItemId,
        parent: WorkItemId,
    ) -> Result<(), ClientError>;

    /// Create an iteration node with the given dates, or re-date it if it
    /// already exists.
    async fn ensure_iteration(
        &self,
        project: &str,
        name: &str,
        start: DateTime<Utc>,
        finish: DateTime<Utc>,
    ) -> Result<IterationOutcome, ClientError>;
}
