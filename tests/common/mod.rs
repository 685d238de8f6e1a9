//! Shared in-memory tracking store for integration tests.
//!
//! `FakeStore` implements the full store contract against a map behind a
//! mutex, records every call that matters for assertions (creates,
//! deletions, batch sizes), and can be told to fail specific operations.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use boardseed::models::{field, FieldUpdate, NewWorkItem, WorkItemId, WorkItemSummary};
use boardseed::remote::{ClientError, IterationOutcome, TrackingStore, MAX_BATCH_GET};

/// A work item as the fake store keeps it. `state` and `iteration_path`
/// stay `None` until something explicitly updates them, so tests can tell
/// "left in the default state" apart from "set to a value".
#[derive(Debug, Clone)]
pub struct StoredItem {
    pub id: u64,
    pub type_name: String,
    pub title: String,
    pub description: String,
    pub area_path: String,
    pub state: Option<String>,
    pub iteration_path: Option<String>,
    pub parent: Option<u64>,
    pub effort_field: Option<String>,
    pub effort: Option<u32>,
    pub remaining_work: Option<u32>,
    pub recycled: bool,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    items: HashMap<u64, StoredItem>,
    iterations: HashMap<String, (DateTime<Utc>, DateTime<Utc>)>,
    created_titles: Vec<String>,
    deletions: Vec<u64>,
    batch_sizes: Vec<usize>,
    fail_creates: HashSet<String>,
    fail_deletes: HashSet<u64>,
    fail_iterations: HashSet<String>,
}

#[derive(Clone, Default)]
pub struct FakeStore {
    inner: Arc<Mutex<Inner>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an item directly, bypassing the synchronizer.
    pub fn insert_item(&self, type_name: &str, title: &str, area_path: &str) -> WorkItemId {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.items.insert(
            id,
            StoredItem {
                id,
                type_name: type_name.to_string(),
                title: title.to_string(),
                description: String::new(),
                area_path: area_path.to_string(),
                state: None,
                iteration_path: None,
                parent: None,
                effort_field: None,
                effort: None,
                remaining_work: None,
                recycled: false,
            },
        );
        WorkItemId(id)
    }

    pub fn fail_create_of(&self, title: &str) {
        self.inner
            .lock()
            .unwrap()
            .fail_creates
            .insert(title.to_string());
    }

    pub fn fail_delete_of(&self, id: WorkItemId) {
        self.inner.lock().unwrap().fail_deletes.insert(id.0);
    }

    pub fn fail_iteration(&self, name: &str) {
        self.inner
            .lock()
            .unwrap()
            .fail_iterations
            .insert(name.to_string());
    }

    pub fn item_by_title(&self, title: &str) -> Option<StoredItem> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<&StoredItem> = inner
            .items
            .values()
            .filter(|item| item.title == title)
            .collect();
        items.sort_by_key(|item| item.id);
        items.first().map(|item| (*item).clone())
    }

    pub fn children_of(&self, parent: WorkItemId) -> Vec<StoredItem> {
        let inner = self.inner.lock().unwrap();
        let mut children: Vec<StoredItem> = inner
            .items
            .values()
            .filter(|item| item.parent == Some(parent.0))
            .cloned()
            .collect();
        children.sort_by_key(|item| item.id);
        children
    }

    pub fn live_items(&self) -> Vec<StoredItem> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<StoredItem> = inner
            .items
            .values()
            .filter(|item| !item.recycled)
            .cloned()
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn live_count(&self) -> usize {
        self.live_items().len()
    }

    pub fn recycled_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.items.values().filter(|item| item.recycled).count()
    }

    /// Titles passed to create, in call order.
    pub fn created_titles(&self) -> Vec<String> {
        self.inner.lock().unwrap().created_titles.clone()
    }

    /// Ids passed to delete, in call order, including failed attempts.
    pub fn deletion_order(&self) -> Vec<u64> {
        self.inner.lock().unwrap().deletions.clone()
    }

    /// Sizes of every batch fetch, in call order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.inner.lock().unwrap().batch_sizes.clone()
    }

    pub fn iteration(&self, name: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.inner.lock().unwrap().iterations.get(name).copied()
    }

    pub fn iteration_names(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        let mut names: Vec<String> = inner.iterations.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl TrackingStore for FakeStore {
    async fn create_item(
        &self,
        _project: &str,
        item: &NewWorkItem,
    ) -> Result<WorkItemId, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_creates.contains(&item.title) {
            return Err(ClientError::Server(format!(
                "injected create failure for '{}'",
                item.title
            )));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner.created_titles.push(item.title.clone());
        inner.items.insert(
            id,
            StoredItem {
                id,
                type_name: item.type_name.clone(),
                title: item.title.clone(),
                description: item.description.clone(),
                area_path: item.area_path.clone(),
                state: None,
                iteration_path: None,
                parent: None,
                effort_field: item.effort.as_ref().map(|e| e.field.clone()),
                effort: item.effort.as_ref().map(|e| e.value),
                remaining_work: item.remaining_work,
                recycled: false,
            },
        );
        Ok(WorkItemId(id))
    }

    async fn update_item(
        &self,
        id: WorkItemId,
        updates: &[FieldUpdate],
    ) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        let item = inner
            .items
            .get_mut(&id.0)
            .ok_or_else(|| ClientError::NotFound(format!("work item {}", id.0)))?;

        for update in updates {
            let value = update.value.as_str().unwrap_or_default().to_string();
            match update.reference_name.as_str() {
                field::STATE => item.state = Some(value),
                field::ITERATION_PATH => item.iteration_path = Some(value),
                other => {
                    return Err(ClientError::BadRequest(format!(
                        "unexpected field update: {other}"
                    )))
                }
            }
        }
        Ok(())
    }

    async fn find_by_title_and_area(
        &self,
        _project: &str,
        title: &str,
        area_path: &str,
    ) -> Result<Option<WorkItemId>, ClientError> {
        let inner = self.inner.lock().unwrap();
        let mut matches: Vec<u64> = inner
            .items
            .values()
            .filter(|item| !item.recycled && item.title == title && item.area_path == area_path)
            .map(|item| item.id)
            .collect();
        matches.sort_unstable();
        Ok(matches.first().map(|&id| WorkItemId(id)))
    }

    async fn query_under_areas(
        &self,
        _project: &str,
        area_paths: &[String],
    ) -> Result<Vec<WorkItemId>, ClientError> {
        let inner = self.inner.lock().unwrap();
        let mut ids: Vec<u64> = inner
            .items
            .values()
            .filter(|item| {
                !item.recycled
                    && area_paths.iter().any(|area| {
                        item.area_path == *area
                            || item.area_path.starts_with(&format!("{area}\\"))
                    })
            })
            .map(|item| item.id)
            .collect();
        ids.sort_unstable_by(|a, b| b.cmp(a));
        Ok(ids.into_iter().map(WorkItemId).collect())
    }

    async fn fetch_items(
        &self,
        ids: &[WorkItemId],
    ) -> Result<Vec<WorkItemSummary>, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.batch_sizes.push(ids.len());
        if ids.len() > MAX_BATCH_GET {
            return Err(ClientError::BadRequest(format!(
                "requested {} items, limit is {MAX_BATCH_GET}",
                ids.len()
            )));
        }

        Ok(ids
            .iter()
            .filter_map(|id| inner.items.get(&id.0))
            .map(|item| WorkItemSummary {
                id: WorkItemId(item.id),
                title: item.title.clone(),
                type_name: item.type_name.clone(),
            })
            .collect())
    }

    async fn delete_item(&self, id: WorkItemId, destroy: bool) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.deletions.push(id.0);
        if inner.fail_deletes.contains(&id.0) {
            return Err(ClientError::Server(format!(
                "injected delete failure for {}",
                id.0
            )));
        }

        if destroy {
            inner
                .items
                .remove(&id.0)
                .ok_or_else(|| ClientError::NotFound(format!("work item {}", id.0)))?;
        } else {
            let item = inner
                .items
                .get_mut(&id.0)
                .ok_or_else(|| ClientError::NotFound(format!("work item {}", id.0)))?;
            item.recycled = true;
        }
        Ok(())
    }

    async fn link_parent(
        &self,
        child: WorkItemId,
        parent: WorkItemId,
    ) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.items.contains_key(&parent.0) {
            return Err(ClientError::NotFound(format!("parent {}", parent.0)));
        }
        let item = inner
            .items
            .get_mut(&child.0)
            .ok_or_else(|| ClientError::NotFound(format!("work item {}", child.0)))?;
        item.parent = Some(parent.0);
        Ok(())
    }

    async fn ensure_iteration(
        &self,
        _project: &str,
        name: &str,
        start: DateTime<Utc>,
        finish: DateTime<Utc>,
    ) -> Result<IterationOutcome, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_iterations.contains(name) {
            return Err(ClientError::Server(format!(
                "injected iteration failure for '{name}'"
            )));
        }

        let existed = inner
            .iterations
            .insert(name.to_string(), (start, finish))
            .is_some();
        Ok(if existed {
            IterationOutcome::Updated
        } else {
            IterationOutcome::Created
        })
    }
}
