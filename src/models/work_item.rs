use std::fmt;

use serde_json::Value;

/// Field reference names understood by the tracking store.
///
/// Creation and update requests address fields by these names; the
/// template-specific effort fields live with their templates in
/// [`crate::content::ProcessTemplate`].
pub mod field {
    pub const TITLE: &str = "System.Title";
    pub const DESCRIPTION: &str = "System.Description";
    pub const AREA_PATH: &str = "System.AreaPath";
    pub const STATE: &str = "System.State";
    pub const ITERATION_PATH: &str = "System.IterationPath";
    pub const WORK_ITEM_TYPE: &str = "System.WorkItemType";
    pub const REMAINING_WORK: &str = "Microsoft.VSTS.Scheduling.RemainingWork";
}

/// States the store assigns on creation. Creating an item in any other state
/// requires a follow-up state update, since create calls cannot set one.
pub const INITIAL_STATES: [&str; 3] = ["New", "To Do", "Proposed"];

/// States that mean a work item is finished, across all process templates.
pub const COMPLETION_STATES: [&str; 3] = ["Done", "Closed", "Resolved"];

/// Whether `state` is one of the store's initial/default states.
pub fn is_initial_state(state: &str) -> bool {
    INITIAL_STATES.contains(&state)
}

/// Whether `state` denotes completion.
pub fn is_completion_state(state: &str) -> bool {
    COMPLETION_STATES.contains(&state)
}

/// Identifier assigned by the remote store when an item is created.
///
/// The generator never invents identifiers; every `WorkItemId` in the system
/// originated in a create response or a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkItemId(pub u64);

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four levels of the generated hierarchy, deepest last.
///
/// Epic, Feature and Task map to fixed remote type names; the backlog-item
/// level's type name varies by process template ("Product Backlog Item",
/// "User Story", "Issue" or "Requirement").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkItemKind {
    Epic,
    Feature,
    BacklogItem,
    Task,
}

impl WorkItemKind {
    /// Position in the hierarchy: Epic shallowest (1), Task deepest (4).
    ///
    /// Cleanup deletes in descending rank so no item is removed before its
    /// descendants.
    pub fn depth_rank(&self) -> u8 {
        match self {
            Self::Epic => 1,
            Self::Feature => 2,
            Self::BacklogItem => 3,
            Self::Task => 4,
        }
    }

    /// Classify a remote type name back into a hierarchy level.
    ///
    /// Recognizes the backlog-item type names of all four process templates,
    /// so cleanup ranks correctly regardless of which template generated the
    /// data. Unknown names return `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Epic" => Some(Self::Epic),
            "Feature" => Some(Self::Feature),
            "Task" => Some(Self::Task),
            "Product Backlog Item" | "User Story" | "Issue" | "Requirement" => {
                Some(Self::BacklogItem)
            }
            _ => None,
        }
    }
}

impl fmt::Display for WorkItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Epic => "Epic",
            Self::Feature => "Feature",
            Self::BacklogItem => "Backlog Item",
            Self::Task => "Task",
        };
        f.write_str(s)
    }
}

/// Deletion rank for an arbitrary remote type name.
///
/// Unrecognized types rank shallowest and are deleted last, matching the
/// epic-level fallthrough of the store's own hierarchy.
pub fn deletion_rank(type_name: &str) -> u8 {
    WorkItemKind::from_type_name(type_name).map_or(1, |kind| kind.depth_rank())
}

/// A creation request for the remote store.
///
/// Carries only the fields the store accepts at creation time; the desired
/// state travels separately because non-default states need a follow-up
/// update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkItem {
    /// Remote type name ("Epic", "Feature", "Task", or a template's
    /// backlog-item type).
    pub type_name: String,
    pub title: String,
    pub description: String,
    pub area_path: String,
    /// Template-specific effort field, backlog-item level only.
    pub effort: Option<EffortValue>,
    /// Remaining work in hours, task level only.
    pub remaining_work: Option<u32>,
}

/// An effort estimate paired with the template-specific field it belongs in.
#[derive(Debug, Clone, PartialEq)]
pub struct EffortValue {
    /// Field reference name, e.g. "Microsoft.VSTS.Scheduling.Effort".
    pub field: String,
    pub value: u32,
}

/// A single field assignment in an update request.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub reference_name: String,
    pub value: Value,
}

impl FieldUpdate {
    pub fn new(reference_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            reference_name: reference_name.into(),
            value: value.into(),
        }
    }
}

/// The slice of a remote work item that cleanup needs: enough to rank it for
/// deletion and to name it in logs and failure reports.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItemSummary {
    pub id: WorkItemId,
    pub title: String,
    pub type_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_rank_orders_task_deepest() {
        assert!(WorkItemKind::Task.depth_rank() > WorkItemKind::BacklogItem.depth_rank());
        assert!(WorkItemKind::BacklogItem.depth_rank() > WorkItemKind::Feature.depth_rank());
        assert!(WorkItemKind::Feature.depth_rank() > WorkItemKind::Epic.depth_rank());
    }

    #[test]
    fn every_template_backlog_type_classifies_as_backlog_item() {
        for name in ["Product Backlog Item", "User Story", "Issue", "Requirement"] {
            assert_eq!(WorkItemKind::from_type_name(name), Some(WorkItemKind::BacklogItem));
        }
    }

    #[test]
    fn unknown_type_names_rank_shallowest() {
        assert_eq!(deletion_rank("Test Case"), 1);
        assert_eq!(deletion_rank("Task"), 4);
    }

    #[test]
    fn state_classification() {
        assert!(is_initial_state("New"));
        assert!(is_initial_state("To Do"));
        assert!(is_initial_state("Proposed"));
        assert!(!is_initial_state("Active"));

        assert!(is_completion_state("Done"));
        assert!(is_completion_state("Closed"));
        assert!(is_completion_state("Resolved"));
        assert!(!is_completion_state("Committed"));
    }

    #[test]
    fn work_item_id_displays_with_hash() {
        assert_eq!(WorkItemId(42).to_string(), "#42");
    }
}
