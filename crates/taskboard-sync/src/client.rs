use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, warn};

use taskboard_core::BoardConfig;
use taskboard_domain::{Task, TaskFields, TaskId};

use crate::error::SyncError;

/// Seam between the board session and the remote task store.
///
/// Implementations handle the transport; callers only see the typed result.
#[async_trait]
pub trait TaskSync: Send + Sync {
    /// Full-list fetch used to populate a board session. `limit`/`offset`
    /// page through large boards; both `None` fetches everything.
    async fn fetch_tasks(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Task>, SyncError>;

    /// Replace one task's mutable fields. The payload is always the full
    /// record, never a diff.
    async fn update_task(&self, id: TaskId, fields: &TaskFields) -> Result<Task, SyncError>;
}

/// `TaskSync` over the REST backend's `/api/v1/tasks` endpoints.
#[derive(Debug, Clone)]
pub struct HttpTaskSync {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTaskSync {
    pub fn new(config: &BoardConfig) -> Result<Self, SyncError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SyncError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/v1/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/api/v1/tasks/{}", self.base_url, id)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, SyncError> {
        let response = request.send().await.map_err(|e| {
            warn!("request failed to send: {}", e);
            SyncError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("server rejected request: {}", status);
            return Err(SyncError::Server(status.as_u16()));
        }
        Ok(response)
    }

    async fn read_body(response: Response) -> Result<String, SyncError> {
        response
            .text()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))
    }
}

#[async_trait]
impl TaskSync for HttpTaskSync {
    async fn fetch_tasks(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Task>, SyncError> {
        let mut request = self.client.get(self.tasks_url());
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }

        let response = self.send(self.authorize(request)).await?;
        let body = Self::read_body(response).await?;
        let tasks: Vec<Task> =
            serde_json::from_str(&body).map_err(|e| SyncError::Decode(e.to_string()))?;

        debug!("fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn update_task(&self, id: TaskId, fields: &TaskFields) -> Result<Task, SyncError> {
        debug!("updating task {} -> {}", id, fields.status);

        let request = self.authorize(self.client.put(self.task_url(id)).json(fields));
        let response = self.send(request).await?;
        let body = Self::read_body(response).await?;

        // Some deployments acknowledge a PUT with an empty body; treat that
        // as the server echoing the request.
        if body.trim().is_empty() {
            return Ok(fields.clone().into_task(id));
        }
        serde_json::from_str(&body).map_err(|e| SyncError::Decode(e.to_string()))
    }
}
