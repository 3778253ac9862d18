use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use chrono::{Datelike, NaiveDate};
use mission_server::{build_router, AppState};
use mission_store::{JsonSnapshotFile, PersistenceStore};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn test_router() -> Router {
    build_router(Arc::new(AppState::in_memory()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn create_board(app: &Router, name: &str) -> Value {
    let (status, board) = send(app, "POST", "/api/kanban/boards", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK);
    board
}

async fn create_mission(app: &Router, board_id: &Value, title: &str) -> Value {
    let (status, mission) = send(
        app,
        "POST",
        "/api/kanban/missions",
        Some(json!({ "title": title, "boardId": board_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    mission
}

#[tokio::test]
async fn test_health_and_connection_test() {
    let app = test_router();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, body) = send(&app, "GET", "/api/kanban/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Test successful");
}

#[tokio::test]
async fn test_board_crud() {
    let app = test_router();
    let board = create_board(&app, "To Do").await;
    let id = board["id"].as_str().unwrap().to_string();
    assert_eq!(board["name"], "To Do");

    let (status, fetched) = send(&app, "GET", &format!("/api/kanban/boards/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, board);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/kanban/boards/{id}"),
        Some(json!({ "id": id, "name": "Doing" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, boards) = send(&app, "GET", "/api/kanban/boards", None).await;
    assert_eq!(boards[0]["name"], "Doing");

    let (status, _) = send(&app, "DELETE", &format!("/api/kanban/boards/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/kanban/boards/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_rejected() {
    let app = test_router();
    let board = create_board(&app, "Backlog").await;
    let id = board["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/kanban/boards/{id}"),
        Some(json!({ "id": Uuid::new_v4(), "name": "Other" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("mismatch"));

    let (_, fetched) = send(&app, "GET", &format!("/api/kanban/boards/{id}"), None).await;
    assert_eq!(fetched["name"], "Backlog");
}

#[tokio::test]
async fn test_missing_and_malformed_ids() {
    let app = test_router();
    let ghost = Uuid::new_v4();

    let (status, _) = send(&app, "GET", &format!("/api/kanban/missions/{ghost}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/api/kanban/boards/{ghost}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/api/kanban/boards/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_mission_lifecycle_and_cascade() {
    let app = test_router();
    let todo = create_board(&app, "Todo").await;
    let done = create_board(&app, "Done").await;

    let mission = create_mission(&app, &todo["id"], "Write docs").await;
    assert_eq!(mission["urgency"], 3);
    assert_eq!(mission["timeNeed"], 1);
    assert_eq!(mission["status"], "todo");
    let id = mission["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/kanban/missions/{id}"),
        Some(json!({ "boardId": done["id"], "urgency": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, moved) = send(&app, "GET", &format!("/api/kanban/missions/{id}"), None).await;
    assert_eq!(moved["boardId"], done["id"]);
    assert_eq!(moved["urgency"], 5);
    assert_eq!(moved["title"], "Write docs");

    let done_id = done["id"].as_str().unwrap();
    let (status, _) = send(&app, "DELETE", &format!("/api/kanban/boards/{done_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, missions) = send(&app, "GET", "/api/kanban/missions", None).await;
    assert_eq!(missions, json!([]));
}

#[tokio::test]
async fn test_mission_on_unknown_board_is_bad_request() {
    let app = test_router();
    let (status, body) = send(
        &app,
        "POST",
        "/api/kanban/missions",
        Some(json!({ "title": "Orphan", "boardId": Uuid::new_v4() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = test_router();
    let (status, body) = send(&app, "POST", "/api/kanban/boards", Some(json!({ "title": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_reorder_boards() {
    let app = test_router();
    let a = create_board(&app, "A").await;
    let b = create_board(&app, "B").await;
    let c = create_board(&app, "C").await;

    let (status, outcome) = send(
        &app,
        "POST",
        "/api/kanban/boards/reorder",
        Some(json!([c["id"], a["id"], b["id"]])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["unknownIds"], json!([]));
    assert_eq!(outcome["removedBoardIds"], json!([]));

    let (_, boards) = send(&app, "GET", "/api/kanban/boards", None).await;
    let names: Vec<_> = boards
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_list_view_sorting() {
    let app = test_router();
    let board = create_board(&app, "Board").await;
    for (title, urgency) in [("low", 1), ("critical", 4), ("medium", 2)] {
        send(
            &app,
            "POST",
            "/api/kanban/missions",
            Some(json!({ "title": title, "boardId": board["id"], "urgency": urgency })),
        )
        .await;
    }

    let (status, rows) = send(&app, "GET", "/api/kanban/views/list?sort=urgency&direction=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    let urgencies: Vec<_> = rows.as_array().unwrap().iter().map(|r| r["urgency"].as_i64().unwrap()).collect();
    assert_eq!(urgencies, vec![4, 2, 1]);
    assert_eq!(rows[0]["urgencyColor"], "red");

    let (_, rows) = send(&app, "GET", "/api/kanban/views/list?q=CRIT", None).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "GET", "/api/kanban/views/list?sort=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calendar_gantt_and_dashboard_views() {
    let app = test_router();
    let board = create_board(&app, "Board").await;
    send(
        &app,
        "POST",
        "/api/kanban/missions",
        Some(json!({ "title": "Due", "boardId": board["id"], "dueDate": "2024-05-10T12:00:00Z" })),
    )
    .await;

    let (status, grid) = send(&app, "GET", "/api/kanban/views/calendar?year=2024&month=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(grid["month"], 5);
    let count: usize = grid["weeks"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|w| w.as_array().unwrap())
        .map(|d| d["missions"].as_array().unwrap().len())
        .sum();
    assert_eq!(count, 1);

    let (status, _) = send(&app, "GET", "/api/kanban/views/calendar?year=2024&month=13", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, chart) = send(&app, "GET", "/api/kanban/views/gantt?scale=day&anchor=2024-05-15", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(chart["days"], 7);
    assert_eq!(chart["window"]["start"], "2024-05-12");
    assert_eq!(chart["bars"].as_array().unwrap().len(), 1);

    let (status, summary) = send(&app, "GET", "/api/kanban/views/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total"], 1);
    assert_eq!(summary["policy"], "explicit");
}

#[tokio::test]
async fn test_time_need_out_of_range_is_bad_request() {
    let app = test_router();
    let board = create_board(&app, "Board").await;

    for time_need in [json!(0), json!(-4), json!(9_000_000_000_000_i64)] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/kanban/missions",
            Some(json!({ "title": "Endless", "boardId": board["id"], "timeNeed": time_need })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "timeNeed {time_need}");
        assert!(body["error"].as_str().unwrap().contains("timeNeed"));
    }

    let mission = create_mission(&app, &board["id"], "Bounded").await;
    let id = mission["id"].as_str().unwrap();
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/kanban/missions/{id}"),
        Some(json!({ "timeNeed": 9_000_000_000_000_i64 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stored) = send(&app, "GET", &format!("/api/kanban/missions/{id}"), None).await;
    assert_eq!(stored["timeNeed"], 1);

    let (status, summary) = send(&app, "GET", "/api/kanban/views/dashboard?policy=inferred", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total"], 1);
    let (status, _) = send(&app, "GET", "/api/kanban/views/gantt", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_preview_carries_due_date() {
    let app = test_router();
    let board = create_board(&app, "Board").await;
    send(
        &app,
        "POST",
        "/api/kanban/missions",
        Some(json!({ "title": "Later", "boardId": board["id"], "dueDate": "2999-01-02T00:00:00Z" })),
    )
    .await;
    let (_, missions) = send(&app, "GET", "/api/kanban/missions", None).await;
    let id = missions[0]["id"].as_str().unwrap();
    send(
        &app,
        "PUT",
        &format!("/api/kanban/missions/{id}"),
        Some(json!({ "createdDate": "2999-01-01T00:00:00Z" })),
    )
    .await;

    let (status, summary) = send(&app, "GET", "/api/kanban/views/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["upcomingPreview"][0]["dueDate"], "2999-01-02T00:00:00Z");
}

#[tokio::test]
async fn test_views_at_calendar_range_edges_are_bad_request() {
    let app = test_router();
    let last_year = NaiveDate::MAX.year();
    let first_year = NaiveDate::MIN.year();

    for query in [format!("year={last_year}&month=12"), format!("year={first_year}&month=1")] {
        let (status, body) = send(&app, "GET", &format!("/api/kanban/views/calendar?{query}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "calendar {query}");
        assert!(body["error"].is_string());
    }

    for anchor in [NaiveDate::MAX, NaiveDate::MIN] {
        // Years past 9999 print with a leading sign.
        let encoded = anchor.to_string().replace('+', "%2B");
        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/kanban/views/gantt?scale=week&anchor={encoded}"),
            None,
        )
        .await;
        assert!(body["error"].as_str().unwrap().contains("out of range"), "{body}");
        assert_eq!(status, StatusCode::BAD_REQUEST, "gantt anchor {anchor}");
    }
}

#[tokio::test]
async fn test_mutations_are_written_to_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missions.json");
    let state = AppState::with_snapshot(JsonSnapshotFile::new(&path)).await.unwrap();
    let app = build_router(Arc::new(state));

    let board = create_board(&app, "Saved").await;
    create_mission(&app, &board["id"], "Persisted").await;

    let snapshot = JsonSnapshotFile::new(&path).load().await.unwrap();
    assert_eq!(snapshot.boards.len(), 1);
    assert_eq!(snapshot.boards[0].name, "Saved");
    assert_eq!(snapshot.missions.len(), 1);

    let reloaded = AppState::with_snapshot(JsonSnapshotFile::new(&path)).await.unwrap();
    assert_eq!(reloaded.service.list_missions().unwrap()[0].title, "Persisted");
}
