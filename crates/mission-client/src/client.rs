use chrono::NaiveDate;
use mission_domain::views::{
    CalendarGrid, CompletionPolicy, DashboardSummary, GanttChart, GanttScale, ListRow,
};
use mission_domain::{
    Board, BoardId, BoardUpdate, ListSortField, Mission, MissionId, MissionPatch, NewBoard,
    NewMission, ReorderOutcome, SortDirection,
};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};

const API_BASE: &str = "/api/kanban";

/// Query for the list projection. Unset fields use the server defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ListSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// One method per API operation. No retries and no local cache: callers
/// re-fetch after a mutation to reconcile their view.
#[derive(Debug, Clone)]
pub struct KanbanClient {
    http: reqwest::Client,
    base_url: String,
}

impl KanbanClient {
    /// `api_url` is the server root, e.g. `http://127.0.0.1:7118`.
    pub fn new(api_url: &str) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_url)
    }

    pub fn with_http_client(http: reqwest::Client, api_url: &str) -> Self {
        Self {
            http,
            base_url: format!("{}{}", api_url.trim_end_matches('/'), API_BASE),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Boards ────────────────────────────────────────────────────────

    pub async fn get_boards(&self) -> ClientResult<Vec<Board>> {
        self.fetch(self.http.get(self.url("/boards"))).await
    }

    pub async fn get_board(&self, id: BoardId) -> ClientResult<Board> {
        self.fetch(self.http.get(self.url(&format!("/boards/{}", id))))
            .await
    }

    pub async fn add_board(&self, name: &str) -> ClientResult<Board> {
        let name = validate_board_name(name)?;
        self.fetch(self.http.post(self.url("/boards")).json(&NewBoard { name }))
            .await
    }

    pub async fn update_board(&self, id: BoardId, name: &str) -> ClientResult<()> {
        let name = validate_board_name(name)?;
        let body = BoardUpdate { id: Some(id), name };
        self.send(self.http.put(self.url(&format!("/boards/{}", id))).json(&body))
            .await
    }

    pub async fn delete_board(&self, id: BoardId) -> ClientResult<()> {
        self.send(self.http.delete(self.url(&format!("/boards/{}", id))))
            .await
    }

    pub async fn reorder_boards(&self, ids: &[BoardId]) -> ClientResult<ReorderOutcome> {
        self.fetch(self.http.post(self.url("/boards/reorder")).json(ids))
            .await
    }

    // ── Missions ──────────────────────────────────────────────────────

    pub async fn get_missions(&self) -> ClientResult<Vec<Mission>> {
        self.fetch(self.http.get(self.url("/missions"))).await
    }

    pub async fn get_mission(&self, id: MissionId) -> ClientResult<Mission> {
        self.fetch(self.http.get(self.url(&format!("/missions/{}", id))))
            .await
    }

    pub async fn add_mission(&self, board_id: BoardId, mut new: NewMission) -> ClientResult<Mission> {
        new.board_id = board_id;
        self.fetch(self.http.post(self.url("/missions")).json(&new))
            .await
    }

    pub async fn move_mission(&self, id: MissionId, board_id: BoardId) -> ClientResult<()> {
        self.update_mission(id, MissionPatch::move_to(board_id)).await
    }

    pub async fn update_mission(&self, id: MissionId, mut patch: MissionPatch) -> ClientResult<()> {
        patch.id = Some(id);
        self.send(self.http.put(self.url(&format!("/missions/{}", id))).json(&patch))
            .await
    }

    pub async fn delete_mission(&self, id: MissionId) -> ClientResult<()> {
        self.send(self.http.delete(self.url(&format!("/missions/{}", id))))
            .await
    }

    // ── Views ─────────────────────────────────────────────────────────

    pub async fn list_view(&self, params: &ListParams) -> ClientResult<Vec<ListRow>> {
        self.fetch(self.http.get(self.url("/views/list")).query(params))
            .await
    }

    pub async fn calendar_view(
        &self,
        year: Option<i32>,
        month: Option<u32>,
    ) -> ClientResult<CalendarGrid> {
        let mut query = Vec::new();
        if let Some(year) = year {
            query.push(("year", year.to_string()));
        }
        if let Some(month) = month {
            query.push(("month", month.to_string()));
        }
        self.fetch(self.http.get(self.url("/views/calendar")).query(&query))
            .await
    }

    pub async fn gantt_view(
        &self,
        scale: Option<GanttScale>,
        anchor: Option<NaiveDate>,
    ) -> ClientResult<GanttChart> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            scale: Option<GanttScale>,
            #[serde(skip_serializing_if = "Option::is_none")]
            anchor: Option<NaiveDate>,
        }
        let query = Query { scale, anchor };
        self.fetch(self.http.get(self.url("/views/gantt")).query(&query))
            .await
    }

    pub async fn dashboard_view(
        &self,
        policy: Option<CompletionPolicy>,
    ) -> ClientResult<DashboardSummary> {
        let mut request = self.http.get(self.url("/views/dashboard"));
        if let Some(policy) = policy {
            request = request.query(&[("policy", policy)]);
        }
        self.fetch(request).await
    }

    // ── Plumbing ──────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!("{} {}", status, response.url());
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Request failed with {}: {}", status, body);
        Err(ClientError::from_response(status, &body))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        Ok(self.execute(request).await?.json::<T>().await?)
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<()> {
        self.execute(request).await?;
        Ok(())
    }
}

fn validate_board_name(name: &str) -> ClientResult<String> {
    if name.trim().is_empty() {
        return Err(ClientError::Validation(
            "Board name must not be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}
