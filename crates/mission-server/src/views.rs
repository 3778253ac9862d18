//! Read-only projection endpoints.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use mission_domain::views::{
    calendar::build_calendar, dashboard::summarize, gantt::layout, CalendarMonth,
    CompletionPolicy, GanttScale, GanttWindow, ListView,
};
use mission_domain::{ListSortField, SortDirection};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort: Option<ListSortField>,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GanttQuery {
    pub scale: Option<GanttScale>,
    pub anchor: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub policy: Option<CompletionPolicy>,
}

pub fn views_router() -> Router<SharedState> {
    Router::new()
        .route("/views/list", get(list_view))
        .route("/views/calendar", get(calendar_view))
        .route("/views/gantt", get(gantt_view))
        .route("/views/dashboard", get(dashboard_view))
}

async fn list_view(
    State(state): State<SharedState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let view = ListView {
        filter: query.q.unwrap_or_default(),
        sort_field: query.sort.unwrap_or_default(),
        direction: query.direction.unwrap_or_default(),
    };
    let missions = state.service.list_missions()?;
    Ok(Json(view.rows(&missions)))
}

async fn calendar_view(
    State(state): State<SharedState>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let current = CalendarMonth::containing(Utc::now().date_naive());
    let year = query.year.unwrap_or(current.year());
    let month = query.month.unwrap_or(current.month());
    let calendar_month = CalendarMonth::new(year, month)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid month: {}-{}", year, month)))?;

    let missions = state.service.list_missions()?;
    let grid = build_calendar(calendar_month, &missions)
        .ok_or_else(|| ApiError::BadRequest(format!("Month out of range: {}-{}", year, month)))?;
    Ok(Json(grid))
}

async fn gantt_view(
    State(state): State<SharedState>,
    query: Result<Query<GanttQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let scale = query.scale.unwrap_or_default();
    let anchor = query.anchor.unwrap_or_else(|| Utc::now().date_naive());
    let window = GanttWindow::for_scale(scale, anchor)
        .ok_or_else(|| ApiError::BadRequest(format!("Anchor out of range: {}", anchor)))?;

    let missions = state.service.list_missions()?;
    Ok(Json(layout(scale, window, &missions)))
}

async fn dashboard_view(
    State(state): State<SharedState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let missions = state.service.list_missions()?;
    Ok(Json(summarize(
        &missions,
        Utc::now(),
        query.policy.unwrap_or_default(),
    )))
}
