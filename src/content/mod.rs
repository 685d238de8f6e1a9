//! Seed content: what the generated backlog should contain.
//!
//! A [`ContentProvider`] supplies ordered seed records for every hierarchy
//! level plus the vocabulary of its process template. The built-in
//! [`TemplateCatalog`] carries the literal demo tables for the four Azure
//! DevOps process templates; tests substitute small synthetic providers so
//! synchronizer logic can be exercised without the big tables.

mod agile;
mod basic;
mod cmmi;
mod scrum;

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::models::{
    is_completion_state, BacklogItemSeed, EpicSeed, FeatureSeed, TaskSeed, WorkItemKind,
};

/// Effort values backlog items are estimated at (a Fibonacci-ish scale).
const EFFORT_SCALE: [u32; 4] = [3, 5, 8, 13];

/// Range remaining work is drawn from for unfinished tasks, in hours.
const REMAINING_WORK_RANGE: Range<u32> = 1..9;

/// The four supported Azure DevOps process templates.
///
/// Each variant carries the template's vocabulary: the backlog-item type
/// name, the effort field, and the valid-state set for every hierarchy
/// level. A single synchronizer works across all four through this surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessTemplate {
    Scrum,
    Agile,
    Basic,
    Cmmi,
}

impl ProcessTemplate {
    pub const ALL: [ProcessTemplate; 4] = [Self::Scrum, Self::Agile, Self::Basic, Self::Cmmi];

    /// Parse the configuration selector, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scrum" => Some(Self::Scrum),
            "agile" => Some(Self::Agile),
            "basic" => Some(Self::Basic),
            "cmmi" => Some(Self::Cmmi),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scrum => "Scrum",
            Self::Agile => "Agile",
            Self::Basic => "Basic",
            Self::Cmmi => "CMMI",
        }
    }

    /// Remote type name of the backlog-item level.
    pub fn backlog_item_type(&self) -> &'static str {
        match self {
            Self::Scrum => "Product Backlog Item",
            Self::Agile => "User Story",
            Self::Basic => "Issue",
            Self::Cmmi => "Requirement",
        }
    }

    /// Field reference name the effort estimate is written to.
    pub fn effort_field(&self) -> &'static str {
        match self {
            Self::Scrum => "Microsoft.VSTS.Scheduling.Effort",
            Self::Agile => "Microsoft.VSTS.Scheduling.StoryPoints",
            Self::Basic | Self::Cmmi => "Microsoft.VSTS.Scheduling.Size",
        }
    }

    /// Valid states for a hierarchy level under this template.
    pub fn valid_states(&self, level: WorkItemKind) -> &'static [&'static str] {
        match self {
            Self::Scrum => match level {
                WorkItemKind::Epic => &["New", "In Progress", "Done", "Removed"],
                WorkItemKind::Feature => &["New", "In Progress", "Removed"],
                WorkItemKind::BacklogItem => &["New", "Approved", "Committed", "Done", "Removed"],
                WorkItemKind::Task => &["To Do", "In Progress", "Done", "Removed"],
            },
            Self::Agile => match level {
                WorkItemKind::Epic | WorkItemKind::Feature => {
                    &["New", "Active", "Resolved", "Closed"]
                }
                WorkItemKind::BacklogItem => &["New", "Active", "Resolved", "Closed", "Removed"],
                WorkItemKind::Task => &["To Do", "In Progress", "Done"],
            },
            Self::Basic => &["To Do", "Doing", "Done"],
            Self::Cmmi => &["Proposed", "Active", "Resolved", "Closed"],
        }
    }
}

/// A source of seed records and template vocabulary.
///
/// Every method that draws randomness takes the caller's source so runs are
/// reproducible under a fixed seed.
pub trait ContentProvider {
    /// The process template whose vocabulary applies to these seeds.
    fn template(&self) -> ProcessTemplate;

    /// Epics for one team, in creation order.
    fn epics(&self, team: &str) -> Vec<EpicSeed>;

    /// Features under one epic.
    fn features(&self, team: &str, epic_title: &str) -> Vec<FeatureSeed>;

    /// Backlog items under one feature.
    fn backlog_items(
        &self,
        team: &str,
        feature_title: &str,
        rng: &mut dyn RngCore,
    ) -> Vec<BacklogItemSeed>;

    /// Tasks for one backlog item. Titles are template text only; the
    /// synchronizer prefixes the parent title.
    fn tasks(&self, backlog_item_title: &str, rng: &mut dyn RngCore) -> Vec<TaskSeed>;
}

/// The built-in literal demo catalog for a process template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateCatalog {
    template: ProcessTemplate,
}

impl TemplateCatalog {
    pub fn new(template: ProcessTemplate) -> Self {
        Self { template }
    }
}

impl ContentProvider for TemplateCatalog {
    fn template(&self) -> ProcessTemplate {
        self.template
    }

    fn epics(&self, team: &str) -> Vec<EpicSeed> {
        match self.template {
            ProcessTemplate::Scrum => scrum::epics(team),
            ProcessTemplate::Agile => agile::epics(team),
            ProcessTemplate::Basic => basic::epics(team),
            ProcessTemplate::Cmmi => cmmi::epics(team),
        }
    }

    fn features(&self, team: &str, epic_title: &str) -> Vec<FeatureSeed> {
        match self.template {
            ProcessTemplate::Scrum => scrum::features(team, epic_title),
            ProcessTemplate::Agile => agile::features(team, epic_title),
            ProcessTemplate::Basic => basic::features(team, epic_title),
            ProcessTemplate::Cmmi => cmmi::features(team, epic_title),
        }
    }

    fn backlog_items(
        &self,
        team: &str,
        feature_title: &str,
        rng: &mut dyn RngCore,
    ) -> Vec<BacklogItemSeed> {
        let curated = match self.template {
            ProcessTemplate::Scrum => scrum::backlog_items(team, feature_title),
            ProcessTemplate::Agile => agile::backlog_items(team, feature_title),
            ProcessTemplate::Basic => basic::backlog_items(team, feature_title),
            ProcessTemplate::Cmmi => cmmi::backlog_items(team, feature_title),
        };
        curated.unwrap_or_else(|| {
            let count = match self.template {
                ProcessTemplate::Basic => 2,
                _ => 3,
            };
            default_backlog_items(self.template, feature_title, count, rng)
        })
    }

    fn tasks(&self, _backlog_item_title: &str, rng: &mut dyn RngCore) -> Vec<TaskSeed> {
        let (templates, count_range) = match self.template {
            ProcessTemplate::Scrum => (scrum::TASK_TEMPLATES, 2..5),
            ProcessTemplate::Agile => (agile::TASK_TEMPLATES, 2..5),
            ProcessTemplate::Basic => (basic::TASK_TEMPLATES, 2..4),
            ProcessTemplate::Cmmi => (cmmi::TASK_TEMPLATES, 3..6),
        };
        synthesize_tasks(self.template, templates, count_range, rng)
    }
}

/// Fallback backlog items for features without a curated table: numbered
/// implementation parts with a random state and effort.
pub fn default_backlog_items(
    template: ProcessTemplate,
    feature_title: &str,
    count: usize,
    rng: &mut dyn RngCore,
) -> Vec<BacklogItemSeed> {
    let states = template.valid_states(WorkItemKind::BacklogItem);
    (1..=count)
        .map(|i| {
            let state = states.choose(rng).copied().unwrap_or("New");
            let effort = EFFORT_SCALE.choose(rng).copied().unwrap_or(EFFORT_SCALE[0]);
            BacklogItemSeed::new(
                &format!("{feature_title} - Implementation Part {i}"),
                &format!("Implement functionality for {feature_title}"),
                effort,
                state,
            )
        })
        .collect()
}

/// Synthesize tasks from a template list: a random count of distinct
/// templates, each with a random valid state. Finished tasks get zero
/// remaining work, everything else a few hours.
fn synthesize_tasks(
    template: ProcessTemplate,
    templates: &[(&str, &str)],
    count_range: Range<usize>,
    rng: &mut dyn RngCore,
) -> Vec<TaskSeed> {
    let states = template.valid_states(WorkItemKind::Task);
    let count = rng.gen_range(count_range).min(templates.len());

    templates
        .choose_multiple(rng, count)
        .map(|(title, description)| {
            let state = states.choose(rng).copied().unwrap_or("To Do");
            let remaining_work = if is_completion_state(state) {
                0
            } else {
                rng.gen_range(REMAINING_WORK_RANGE)
            };
            TaskSeed::new(title, description, remaining_work, state)
        })
        .collect()
}
