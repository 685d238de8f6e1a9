//! HTTP client for the Azure DevOps work item tracking REST API.
//!
//! Authentication is a personal access token sent as the password half of
//! basic auth. Creates and updates are JSON patch documents; queries are
//! WIQL posted as JSON. The organization URL and token come from
//! configuration, nothing is read from the environment here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{field, FieldUpdate, NewWorkItem, WorkItemId, WorkItemSummary};
use crate::remote::types::{
    BatchGetRequest, BatchGetResult, IterationDates, IterationNode, PatchOp, WiqlQuery,
    WiqlResult, WorkItemDto,
};
use crate::remote::{IterationOutcome, TrackingStore};

/// REST API version all requests pin to.
const API_VERSION: &str = "7.1";

/// Link type that attaches a child to its parent.
const HIERARCHY_REVERSE: &str = "System.LinkTypes.Hierarchy-Reverse";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: personal access token rejected")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client bound to one Azure DevOps organization.
#[derive(Debug, Clone)]
pub struct AzdoClient {
    organization_url: String,
    token: String,
    client: Client,
}

impl AzdoClient {
    /// Create with explicit configuration.
    pub fn new(organization_url: impl Into<String>, token: impl Into<String>) -> Self {
        let organization_url = organization_url.into().trim_end_matches('/').to_string();
        Self {
            organization_url,
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Build a request with token auth and the api-version pinned.
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth("", Some(&self.token))
            .query(&[("api-version", API_VERSION)])
    }

    /// Build a request carrying a JSON patch document body.
    fn patch_request(
        &self,
        method: reqwest::Method,
        url: &str,
        ops: &[PatchOp],
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let body = serde_json::to_string(ops)
            .map_err(|e| ClientError::BadRequest(format!("patch document: {e}")))?;
        Ok(self
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json-patch+json")
            .body(body))
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        // A rejected token gets a 203 with a sign-in page, not a 401.
        if status == StatusCode::NON_AUTHORITATIVE_INFORMATION {
            return Err(ClientError::Unauthorized);
        }
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    /// Handle response where only the status matters.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if status == StatusCode::NON_AUTHORITATIVE_INFORMATION {
            return Err(ClientError::Unauthorized);
        }
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    fn item_url(&self, id: WorkItemId) -> String {
        format!("{}/_apis/wit/workitems/{}", self.organization_url, id.0)
    }
}

/// Escape a string literal for embedding in WIQL.
fn escape_wiql_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// Build the OR'd area scope clause of the cleanup query.
fn area_conditions(area_paths: &[String]) -> String {
    area_paths
        .iter()
        .map(|path| format!("[System.AreaPath] UNDER '{}'", escape_wiql_literal(path)))
        .collect::<Vec<_>>()
        .join(" OR ")
}

#[async_trait]
impl TrackingStore for AzdoClient {
    async fn create_item(
        &self,
        project: &str,
        item: &NewWorkItem,
    ) -> Result<WorkItemId, ClientError> {
        let mut ops = vec![
            PatchOp::add_field(field::TITLE, item.title.as_str()),
            PatchOp::add_field(field::DESCRIPTION, item.description.as_str()),
            PatchOp::add_field(field::AREA_PATH, item.area_path.as_str()),
        ];
        if let Some(ref effort) = item.effort {
            ops.push(PatchOp::add_field(&effort.field, effort.value));
        }
        if let Some(remaining) = item.remaining_work {
            ops.push(PatchOp::add_field(field::REMAINING_WORK, remaining));
        }

        let url = format!(
            "{}/{}/_apis/wit/workitems/${}",
            self.organization_url, project, item.type_name
        );
        let response = self
            .patch_request(reqwest::Method::POST, &url, &ops)?
            .send()
            .await?;
        let created: WorkItemDto = self.handle_response(response).await?;
        Ok(WorkItemId(created.id))
    }

    async fn update_item(
        &self,
        id: WorkItemId,
        updates: &[FieldUpdate],
    ) -> Result<(), ClientError> {
        let ops: Vec<PatchOp> = updates
            .iter()
            .map(|u| PatchOp::add_field(&u.reference_name, u.value.clone()))
            .collect();
        let response = self
            .patch_request(reqwest::Method::PATCH, &self.item_url(id), &ops)?
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    async fn find_by_title_and_area(
        &self,
        project: &str,
        title: &str,
        area_path: &str,
    ) -> Result<Option<WorkItemId>, ClientError> {
        let wiql = WiqlQuery {
            query: format!(
                "SELECT [System.Id] FROM WorkItems \
                 WHERE [System.TeamProject] = '{}' \
                 AND [System.Title] = '{}' \
                 AND [System.AreaPath] = '{}'",
                escape_wiql_literal(project),
                escape_wiql_literal(title),
                escape_wiql_literal(area_path),
            ),
        };
        let url = format!("{}/{}/_apis/wit/wiql", self.organization_url, project);
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(&wiql)
            .send()
            .await?;
        let result: WiqlResult = self.handle_response(response).await?;
        Ok(result.work_items.first().map(|r| WorkItemId(r.id)))
    }

    async fn query_under_areas(
        &self,
        project: &str,
        area_paths: &[String],
    ) -> Result<Vec<WorkItemId>, ClientError> {
        if area_paths.is_empty() {
            return Ok(Vec::new());
        }

        let wiql = WiqlQuery {
            query: format!(
                "SELECT [System.Id], [System.Title], [System.WorkItemType] FROM WorkItems \
                 WHERE [System.TeamProject] = '{}' \
                 AND ({}) \
                 ORDER BY [System.Id] DESC",
                escape_wiql_literal(project),
                area_conditions(area_paths),
            ),
        };
        let url = format!("{}/{}/_apis/wit/wiql", self.organization_url, project);
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(&wiql)
            .send()
            .await?;
        let result: WiqlResult = self.handle_response(response).await?;
        Ok(result.work_items.iter().map(|r| WorkItemId(r.id)).collect())
    }

    async fn fetch_items(
        &self,
        ids: &[WorkItemId],
    ) -> Result<Vec<WorkItemSummary>, ClientError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let request = BatchGetRequest {
            ids: ids.iter().map(|id| id.0).collect(),
            fields: vec![
                field::TITLE.to_string(),
                field::WORK_ITEM_TYPE.to_string(),
            ],
        };
        let url = format!("{}/_apis/wit/workitemsbatch", self.organization_url);
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(&request)
            .send()
            .await?;
        let result: BatchGetResult = self.handle_response(response).await?;

        Ok(result
            .value
            .iter()
            .map(|dto| WorkItemSummary {
                id: WorkItemId(dto.id),
                title: dto.string_field(field::TITLE).unwrap_or_default().to_string(),
                type_name: dto
                    .string_field(field::WORK_ITEM_TYPE)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect())
    }

    async fn delete_item(&self, id: WorkItemId, destroy: bool) -> Result<(), ClientError> {
        let response = self
            .request(reqwest::Method::DELETE, &self.item_url(id))
            .query(&[("destroy", destroy)])
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    async fn link_parent(
        &self,
        child: WorkItemId,
        parent: WorkItemId,
    ) -> Result<(), ClientError> {
        let ops = [PatchOp::add_relation(serde_json::json!({
            "rel": HIERARCHY_REVERSE,
            "url": format!("{}/_apis/wit/workItems/{}", self.organization_url, parent.0),
            "attributes": { "comment": "Linking work items" }
        }))];
        let response = self
            .patch_request(reqwest::Method::PATCH, &self.item_url(child), &ops)?
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    async fn ensure_iteration(
        &self,
        project: &str,
        name: &str,
        start: DateTime<Utc>,
        finish: DateTime<Utc>,
    ) -> Result<IterationOutcome, ClientError> {
        let node = IterationNode {
            name: name.to_string(),
            attributes: IterationDates {
                start_date: start.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                finish_date: finish.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            },
        };
        let group_url = format!(
            "{}/{}/_apis/wit/classificationnodes/iterations",
            self.organization_url, project
        );
        let node_url = format!("{group_url}/{name}");

        let response = self.request(reqwest::Method::GET, &node_url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            let response = self
                .request(reqwest::Method::POST, &group_url)
                .json(&node)
                .send()
                .await?;
            self.handle_empty_response(response).await?;
            // Dates are not reliably applied on create, set them in a
            // follow-up update.
            let response = self
                .request(reqwest::Method::PATCH, &node_url)
                .json(&node)
                .send()
                .await?;
            self.handle_empty_response(response).await?;
            Ok(IterationOutcome::Created)
        } else {
            self.handle_empty_response(response).await?;
            let response = self
                .request(reqwest::Method::PATCH, &node_url)
                .json(&node)
                .send()
                .await?;
            self.handle_empty_response(response).await?;
            Ok(IterationOutcome::Updated)
        }
    }
}
