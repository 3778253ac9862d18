use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use mission_domain::{BoardId, BoardUpdate, MissionPatch, NewBoard, NewMission};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::SharedState;

pub const API_BASE: &str = "/api/kanban";

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/boards", get(list_boards).post(create_board))
        .route("/boards/reorder", post(reorder_boards))
        .route(
            "/boards/{id}",
            get(get_board).put(update_board).delete(delete_board),
        )
        .route("/missions", get(list_missions).post(create_mission))
        .route(
            "/missions/{id}",
            get(get_mission).put(update_mission).delete(delete_mission),
        )
        .route("/test", get(connection_test))
}

// ── Helpers ───────────────────────────────────────────────────────────

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid id: {}", raw)))
}

// ── Boards ────────────────────────────────────────────────────────────

async fn list_boards(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_boards()?))
}

async fn get_board(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get_board(id)?))
}

async fn create_board(
    State(state): State<SharedState>,
    body: Result<Json<NewBoard>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new) = body?;
    let board = state.service.create_board(new)?;
    state.persist().await;
    Ok(Json(board))
}

async fn update_board(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<BoardUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(update) = body?;
    state.service.update_board(id, update)?;
    state.persist().await;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_board(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state.service.delete_board(id)?;
    state.persist().await;
    Ok(StatusCode::NO_CONTENT)
}

async fn reorder_boards(
    State(state): State<SharedState>,
    body: Result<Json<Vec<BoardId>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(ids) = body?;
    let outcome = state.service.reorder_boards(&ids)?;
    state.persist().await;
    Ok(Json(outcome))
}

// ── Missions ──────────────────────────────────────────────────────────

async fn list_missions(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.service.list_missions()?))
}

async fn get_mission(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get_mission(id)?))
}

async fn create_mission(
    State(state): State<SharedState>,
    body: Result<Json<NewMission>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new) = body?;
    let mission = state.service.create_mission(new, Utc::now())?;
    state.persist().await;
    Ok(Json(mission))
}

async fn update_mission(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<MissionPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = body?;
    state.service.update_mission(id, patch)?;
    state.persist().await;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_mission(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state.service.delete_mission(id)?;
    state.persist().await;
    Ok(StatusCode::NO_CONTENT)
}

async fn connection_test() -> &'static str {
    "Test successful"
}
