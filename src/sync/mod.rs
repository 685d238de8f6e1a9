//! Idempotent backlog synchronization.
//!
//! The synchronizer walks teams, epics, features, backlog items, and tasks
//! in order, creating whatever is missing. The identity of a work item is
//! its title plus area path: an item that already exists is skipped, and so
//! is everything that would have been created beneath it. Running twice
//! against the same project produces no duplicates.

pub mod sprints;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use thiserror::Error;
use tracing::info;

use crate::content::ContentProvider;
use crate::models::{
    field, is_completion_state, is_initial_state, EffortValue, FieldUpdate, NewWorkItem,
    TeamConfig, WorkItemId,
};
use crate::remote::{ClientError, TrackingStore};
use crate::sync::sprints::sprint_for_state;

/// A store operation that failed, with the item it failed on.
#[derive(Debug, Error)]
#[error("{action} failed for {type_name} '{title}': {source}")]
pub struct SyncError {
    pub action: &'static str,
    pub type_name: String,
    pub title: String,
    #[source]
    pub source: ClientError,
}

impl SyncError {
    fn new(action: &'static str, item: &NewWorkItem, source: ClientError) -> Self {
        Self {
            action,
            type_name: item.type_name.clone(),
            title: item.title.clone(),
            source,
        }
    }
}

/// What one synchronization run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub epics: usize,
    pub features: usize,
    pub backlog_items: usize,
    pub tasks: usize,
    pub skipped: usize,
}

impl SyncReport {
    /// Work items created across all levels.
    pub fn created(&self) -> usize {
        self.epics + self.features + self.backlog_items + self.tasks
    }
}

/// Creates the demo hierarchy against a tracking store.
pub struct HierarchySynchronizer<'a, S: TrackingStore> {
    store: &'a S,
    content: &'a dyn ContentProvider,
    project: String,
    use_sprint_history: bool,
    rng: StdRng,
}

impl<'a, S: TrackingStore> HierarchySynchronizer<'a, S> {
    /// A fixed `seed` makes random choices (states, task counts, sprint
    /// assignment) reproducible across runs.
    pub fn new(
        store: &'a S,
        content: &'a dyn ContentProvider,
        project: impl Into<String>,
        use_sprint_history: bool,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            store,
            content,
            project: project.into(),
            use_sprint_history,
            rng,
        }
    }

    /// Generate the full backlog for every configured team.
    pub async fn generate(&mut self, teams: &[TeamConfig]) -> Result<SyncReport, SyncError> {
        let template = self.content.template();
        info!("using {} process template", template.name());
        info!("backlog item type: {}", template.backlog_item_type());

        let mut report = SyncReport::default();
        for team in teams {
            info!("generating work items for {} team", team.name);
            let assign_sprints = self.use_sprint_history && !team.iteration_path.is_empty();

            for epic_seed in self.content.epics(&team.name) {
                let epic = NewWorkItem {
                    type_name: "Epic".to_string(),
                    title: epic_seed.title.clone(),
                    description: epic_seed.description.clone(),
                    area_path: team.area_path.clone(),
                    effort: None,
                    remaining_work: None,
                };
                let epic_id = match self
                    .create_node(epic, &epic_seed.state, None, assign_sprints)
                    .await?
                {
                    Some(id) => id,
                    None => {
                        report.skipped += 1;
                        continue;
                    }
                };
                report.epics += 1;

                for feature_seed in self.content.features(&team.name, &epic_seed.title) {
                    let feature = NewWorkItem {
                        type_name: "Feature".to_string(),
                        title: feature_seed.title.clone(),
                        description: feature_seed.description.clone(),
                        area_path: team.area_path.clone(),
                        effort: None,
                        remaining_work: None,
                    };
                    let feature_id = match self
                        .create_node(feature, &feature_seed.state, Some(epic_id), assign_sprints)
                        .await?
                    {
                        Some(id) => id,
                        None => {
                            report.skipped += 1;
                            continue;
                        }
                    };
                    report.features += 1;

                    let item_seeds = self.content.backlog_items(
                        &team.name,
                        &feature_seed.title,
                        &mut self.rng,
                    );
                    for item_seed in item_seeds {
                        let item = NewWorkItem {
                            type_name: template.backlog_item_type().to_string(),
                            title: item_seed.title.clone(),
                            description: item_seed.description.clone(),
                            area_path: team.area_path.clone(),
                            effort: Some(EffortValue {
                                field: template.effort_field().to_string(),
                                value: item_seed.effort,
                            }),
                            remaining_work: None,
                        };
                        let item_id = match self
                            .create_node(item, &item_seed.state, Some(feature_id), assign_sprints)
                            .await?
                        {
                            Some(id) => id,
                            None => {
                                report.skipped += 1;
                                continue;
                            }
                        };
                        report.backlog_items += 1;

                        if !should_create_tasks(&item_seed.state, &mut self.rng) {
                            continue;
                        }

                        let task_seeds = self.content.tasks(&item_seed.title, &mut self.rng);
                        for task_seed in task_seeds {
                            // A finished backlog item only has finished
                            // tasks under it.
                            let (task_state, remaining) = if is_completion_state(&item_seed.state)
                            {
                                ("Done".to_string(), 0)
                            } else {
                                (task_seed.state.clone(), task_seed.remaining_work)
                            };
                            let task = NewWorkItem {
                                type_name: "Task".to_string(),
                                title: format!("{}: {}", item_seed.title, task_seed.title),
                                description: task_seed.description.clone(),
                                area_path: team.area_path.clone(),
                                effort: None,
                                remaining_work: Some(remaining),
                            };
                            match self
                                .create_node(task, &task_state, Some(item_id), assign_sprints)
                                .await?
                            {
                                Some(_) => report.tasks += 1,
                                None => report.skipped += 1,
                            }
                        }
                    }
                }
            }
        }

        info!("backlog generation complete");
        Ok(report)
    }

    /// Create one small fixed hierarchy: an epic, a feature, a backlog item
    /// with an estimate, and two tasks. Useful for checking connectivity
    /// and permissions before a full run.
    pub async fn generate_sample(&mut self, teams: &[TeamConfig]) -> Result<SyncReport, SyncError> {
        let mut report = SyncReport::default();
        let team = match teams.iter().find(|t| t.name == "Frontend").or_else(|| teams.first()) {
            Some(team) => team.clone(),
            None => {
                info!("no teams configured, nothing to create");
                return Ok(report);
            }
        };
        let template = self.content.template();

        let epic = NewWorkItem {
            type_name: "Epic".to_string(),
            title: "E-Commerce Platform Modernization".to_string(),
            description: "Modernize the entire e-commerce platform with a new frontend \
                          architecture using React and improved backend APIs"
                .to_string(),
            area_path: team.area_path.clone(),
            effort: None,
            remaining_work: None,
        };
        let epic_id = match self.create_node(epic, "New", None, false).await? {
            Some(id) => id,
            None => {
                report.skipped += 1;
                return Ok(report);
            }
        };
        report.epics += 1;

        let feature = NewWorkItem {
            type_name: "Feature".to_string(),
            title: "Product Catalog UI Redesign".to_string(),
            description: "Redesign the product catalog interface with improved search, \
                          filtering, and responsive design"
                .to_string(),
            area_path: team.area_path.clone(),
            effort: None,
            remaining_work: None,
        };
        let feature_id = match self.create_node(feature, "New", Some(epic_id), false).await? {
            Some(id) => id,
            None => {
                report.skipped += 1;
                return Ok(report);
            }
        };
        report.features += 1;

        let backlog_item = NewWorkItem {
            type_name: template.backlog_item_type().to_string(),
            title: "Implement Product Card Component".to_string(),
            description: "As a customer, I want to see product information in an attractive \
                          card format so that I can quickly browse products.\n\n\
                          Acceptance Criteria:\n\
                          - Card displays product image, name, price, and rating\n\
                          - Card is responsive and works on mobile devices\n\
                          - Card has hover effects for better UX\n\
                          - Card links to product detail page"
                .to_string(),
            area_path: team.area_path.clone(),
            effort: Some(EffortValue {
                field: template.effort_field().to_string(),
                value: 8,
            }),
            remaining_work: None,
        };
        let item_id = match self
            .create_node(backlog_item, "New", Some(feature_id), false)
            .await?
        {
            Some(id) => id,
            None => {
                report.skipped += 1;
                return Ok(report);
            }
        };
        report.backlog_items += 1;

        let tasks = [
            (
                "Create ProductCard component structure",
                "Set up the basic React component with props interface",
                4,
            ),
            (
                "Implement responsive styling",
                "Add CSS/styled-components for responsive layout",
                3,
            ),
        ];
        for (title, description, remaining) in tasks {
            let task = NewWorkItem {
                type_name: "Task".to_string(),
                title: title.to_string(),
                description: description.to_string(),
                area_path: team.area_path.clone(),
                effort: None,
                remaining_work: Some(remaining),
            };
            match self.create_node(task, "To Do", Some(item_id), false).await? {
                Some(_) => report.tasks += 1,
                None => report.skipped += 1,
            }
        }

        Ok(report)
    }

    /// Create one work item unless it already exists. Returns `None` on a
    /// duplicate hit so the caller can skip the subtree below it.
    async fn create_node(
        &mut self,
        item: NewWorkItem,
        state: &str,
        parent: Option<WorkItemId>,
        assign_sprint: bool,
    ) -> Result<Option<WorkItemId>, SyncError> {
        let existing = self
            .store
            .find_by_title_and_area(&self.project, &item.title, &item.area_path)
            .await
            .map_err(|e| SyncError::new("duplicate check", &item, e))?;
        if existing.is_some() {
            info!("skipping {} '{}': already exists", item.type_name, item.title);
            return Ok(None);
        }

        let id = self
            .store
            .create_item(&self.project, &item)
            .await
            .map_err(|e| SyncError::new("create", &item, e))?;

        // Items are born in the type's default state, anything else takes a
        // follow-up update.
        if !is_initial_state(state) {
            self.store
                .update_item(id, &[FieldUpdate::new(field::STATE, state)])
                .await
                .map_err(|e| SyncError::new("state update", &item, e))?;
        }

        if assign_sprint {
            let iteration = sprint_for_state(&self.project, state, &mut self.rng);
            self.store
                .update_item(id, &[FieldUpdate::new(field::ITERATION_PATH, iteration)])
                .await
                .map_err(|e| SyncError::new("sprint assignment", &item, e))?;
        }

        if let Some(parent) = parent {
            self.store
                .link_parent(id, parent)
                .await
                .map_err(|e| SyncError::new("parent link", &item, e))?;
        }

        info!("created {} {}: {}", item.type_name, id, item.title);
        Ok(Some(id))
    }
}

/// Whether a backlog item in `state` gets tasks: finished items always do,
/// untouched backlog never does, in-between states flip a coin.
fn should_create_tasks(state: &str, rng: &mut dyn RngCore) -> bool {
    is_completion_state(state) || (!is_initial_state(state) && rng.gen_range(0..100) < 50)
}
