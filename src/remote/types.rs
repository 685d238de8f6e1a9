//! Wire types for the work item tracking REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One operation of a JSON patch document. Create and update both send
/// arrays of these with content type `application/json-patch+json`.
#[derive(Debug, Clone, Serialize)]
pub struct PatchOp {
    pub op: &'static str,
    pub path: String,
    pub value: Value,
}

impl PatchOp {
    /// Add a field value, e.g. `/fields/System.Title`.
    pub fn add_field(reference_name: &str, value: impl Into<Value>) -> Self {
        Self {
            op: "add",
            path: format!("/fields/{reference_name}"),
            value: value.into(),
        }
    }

    /// Append an entry to the relations array.
    pub fn add_relation(value: Value) -> Self {
        Self {
            op: "add",
            path: "/relations/-".to_string(),
            value,
        }
    }
}

/// Body of a WIQL query request.
#[derive(Debug, Clone, Serialize)]
pub struct WiqlQuery {
    pub query: String,
}

/// WIQL result: id references only, fields come from a follow-up fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct WiqlResult {
    #[serde(default, rename = "workItems")]
    pub work_items: Vec<WorkItemRef>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WorkItemRef {
    pub id: u64,
}

/// Body of a batch get request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchGetRequest {
    pub ids: Vec<u64>,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchGetResult {
    #[serde(default)]
    pub value: Vec<WorkItemDto>,
}

/// A work item as returned by the API: an id plus a field bag.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkItemDto {
    pub id: u64,
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
}

impl WorkItemDto {
    pub fn string_field(&self, reference_name: &str) -> Option<&str> {
        self.fields.get(reference_name).and_then(Value::as_str)
    }
}

/// Classification node payload for creating or re-dating an iteration.
#[derive(Debug, Clone, Serialize)]
pub struct IterationNode {
    pub name: String,
    pub attributes: IterationDates,
}

#[derive(Debug, Clone, Serialize)]
pub struct IterationDates {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "finishDate")]
    pub finish_date: String,
}
