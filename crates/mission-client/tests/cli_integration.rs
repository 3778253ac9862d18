use std::net::SocketAddr;
use std::sync::Arc;

use assert_cmd::Command;
use mission_server::{build_router, AppState};
use predicates::prelude::*;
use serde_json::Value;

fn mission() -> Command {
    let mut cmd = Command::cargo_bin("mission").unwrap();
    cmd.env_remove("MISSION_API_URL").env_remove("MISSION_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

/// Start a server on its own runtime; it lives as long as the returned runtime.
fn start_server() -> (tokio::runtime::Runtime, String) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let addr: SocketAddr = rt.block_on(async {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(Arc::new(AppState::in_memory()));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    });
    (rt, format!("http://{}", addr))
}

fn run_ok(api_url: &str, args: &[&str]) -> Value {
    let output = mission()
        .arg("--api-url")
        .arg(api_url)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert_eq!(json["success"], true);
    json
}

#[test]
fn test_help_lists_subcommands() {
    mission()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("board"))
        .stdout(predicate::str::contains("mission"))
        .stdout(predicate::str::contains("view"));
}

#[test]
fn test_unreachable_server_prints_error_envelope() {
    let output = mission()
        .args(["--api-url", "http://127.0.0.1:1", "board", "list"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let json = parse_json_output(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
    assert!(json["apiVersion"].is_string());
}

#[test]
fn test_blank_board_name_fails_without_server() {
    mission()
        .args(["--api-url", "http://127.0.0.1:1", "board", "create", "--name", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_board_and_mission_workflow() {
    let (_rt, api_url) = start_server();

    let todo = run_ok(&api_url, &["board", "create", "--name", "Todo"]);
    let todo_id = todo["data"]["id"].as_str().unwrap().to_string();
    let done = run_ok(&api_url, &["board", "create", "--name", "Done"]);
    let done_id = done["data"]["id"].as_str().unwrap().to_string();

    let created = run_ok(
        &api_url,
        &[
            "mission", "create", "--board-id", &todo_id, "--title", "Write docs", "--urgency", "4",
        ],
    );
    assert_eq!(created["data"]["urgency"], 4);
    let mission_id = created["data"]["id"].as_str().unwrap().to_string();

    let moved = run_ok(
        &api_url,
        &["mission", "move", "--id", &mission_id, "--board-id", &done_id],
    );
    assert_eq!(moved["data"]["boardId"], done_id.as_str());

    let listed = run_ok(&api_url, &["mission", "list", "--board-id", &done_id]);
    assert_eq!(listed["data"]["count"], 1);

    let reordered = run_ok(
        &api_url,
        &["board", "reorder", "--ids", &format!("{},{}", done_id, todo_id)],
    );
    assert_eq!(reordered["data"]["order"][0], done_id.as_str());

    let boards = run_ok(&api_url, &["board", "list"]);
    assert_eq!(boards["data"]["items"][0]["name"], "Done");

    let rows = run_ok(&api_url, &["view", "list", "--sort", "urgency", "--direction", "desc"]);
    assert_eq!(rows["data"]["items"][0]["urgencyColor"], "red");

    let summary = run_ok(&api_url, &["view", "dashboard"]);
    assert_eq!(summary["data"]["total"], 1);
}

#[test]
fn test_not_found_exits_with_error() {
    let (_rt, api_url) = start_server();
    mission()
        .args([
            "--api-url",
            &api_url,
            "mission",
            "get",
            "--id",
            "00000000-0000-0000-0000-000000000001",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"success\":false"));
}

#[test]
fn test_invalid_sort_field_is_rejected() {
    mission()
        .args(["--api-url", "http://127.0.0.1:1", "view", "list", "--sort", "priority"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort field"));
}

#[test]
fn test_shift_and_resize_on_the_timeline() {
    let (_rt, api_url) = start_server();
    let board = run_ok(&api_url, &["board", "create", "--name", "Plan"]);
    let board_id = board["data"]["id"].as_str().unwrap().to_string();
    let created = run_ok(
        &api_url,
        &[
            "mission", "create", "--board-id", &board_id, "--title", "Launch", "--time-need", "3",
        ],
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();
    run_ok(
        &api_url,
        &[
            "mission",
            "update",
            "--id",
            &id,
            "--created-date",
            "2024-05-14T09:00:00Z",
            "--due-date",
            "2024-05-17T09:00:00Z",
        ],
    );

    let shifted = run_ok(&api_url, &["mission", "shift", "--id", &id, "--days", "2"]);
    assert_eq!(shifted["data"]["createdDate"], "2024-05-16T09:00:00Z");
    assert_eq!(shifted["data"]["dueDate"], "2024-05-19T09:00:00Z");
    assert_eq!(shifted["data"]["timeNeed"], 3);

    // 700px track over 7 days: -260px rounds to three days back.
    let dragged = run_ok(
        &api_url,
        &[
            "mission", "shift", "--id", &id, "--pixels=-260", "--track-width", "700",
            "--window-days", "7",
        ],
    );
    assert_eq!(dragged["data"]["createdDate"], "2024-05-13T09:00:00Z");

    let stretched = run_ok(&api_url, &["mission", "resize", "--id", &id, "--days", "4"]);
    assert_eq!(stretched["data"]["timeNeed"], 7);
    assert_eq!(stretched["data"]["dueDate"], "2024-05-20T09:00:00Z");

    let shrunk = run_ok(&api_url, &["mission", "resize", "--id", &id, "--days=-20"]);
    assert_eq!(shrunk["data"]["timeNeed"], 1);
    assert_eq!(shrunk["data"]["dueDate"], "2024-05-14T09:00:00Z");
}

#[test]
fn test_shift_without_offset_is_rejected() {
    mission()
        .args([
            "--api-url",
            "http://127.0.0.1:1",
            "mission",
            "shift",
            "--id",
            "00000000-0000-0000-0000-000000000001",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--days"));
}

#[test]
fn test_gantt_step_moves_the_window() {
    let (_rt, api_url) = start_server();

    let chart = run_ok(
        &api_url,
        &["view", "gantt", "--scale", "day", "--anchor", "2024-05-15", "--step", "1"],
    );
    assert_eq!(chart["data"]["window"]["start"], "2024-05-19");

    let chart = run_ok(
        &api_url,
        &["view", "gantt", "--scale", "day", "--anchor", "2024-05-15", "--step=-2"],
    );
    assert_eq!(chart["data"]["window"]["start"], "2024-04-28");
    assert_eq!(chart["data"]["window"]["end"], "2024-05-04");
}
