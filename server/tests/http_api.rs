use ntex::http::StatusCode;
use ntex::web::{test, App};
use serde_json::{json, Value};
use std::sync::Arc;
use survivor_server::db::Db;

macro_rules! init_app {
    ($db:expr) => {
        test::init_service(App::new().state($db.clone()).configure(survivor_server::configure)).await
    };
}

fn fresh_db() -> Arc<Db> {
    Arc::new(Db::open_in_memory().expect("in-memory db"))
}

fn run(name: &str, score: i64) -> Value {
    json!({ "playerName": name, "score": score, "survivalTime": 120.5 })
}

#[ntex::test]
async fn test_empty_leaderboard_is_success() {
    let db = fresh_db();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body, json!({ "success": true, "data": [] }));
}

#[ntex::test]
async fn test_submit_then_read_back() {
    let db = fresh_db();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/leaderboard")
        .set_json(&run("Desk Jockey", 4200))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["rank"], 1);
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri("/api/leaderboard?limit=100").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    let entry = &body["data"][0];
    assert_eq!(entry["id"], id);
    assert_eq!(entry["playerName"], "Desk Jockey");
    assert_eq!(entry["score"], 4200);
    assert_eq!(entry["survivalTime"], 120.5);
    assert_eq!(entry["character"], "Unknown");
    assert!(entry["createdAt"].as_str().unwrap().parse::<chrono::DateTime<chrono::Utc>>().is_ok());
}

#[ntex::test]
async fn test_invalid_name_is_rejected_and_not_stored() {
    let db = fresh_db();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/leaderboard")
        .set_json(&run("bad@name", 10))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Player name can only contain letters, numbers, spaces, hyphens and underscores"
    );

    let count = survivor_server::services::leaderboard::count_entries(&db).unwrap();
    assert_eq!(count, 0);
}

#[ntex::test]
async fn test_score_and_time_boundaries() {
    let db = fresh_db();
    let app = init_app!(db);

    let cases = [
        (json!({"playerName": "a", "score": 0, "survivalTime": 1}), StatusCode::BAD_REQUEST),
        (json!({"playerName": "a", "score": -5, "survivalTime": 1}), StatusCode::BAD_REQUEST),
        (json!({"playerName": "a", "score": 999999999, "survivalTime": 1}), StatusCode::OK),
        (json!({"playerName": "a", "score": 1000000000, "survivalTime": 1}), StatusCode::BAD_REQUEST),
        (json!({"playerName": "a", "score": 10.5, "survivalTime": 1}), StatusCode::BAD_REQUEST),
        (json!({"playerName": "a", "score": 1, "survivalTime": 7200}), StatusCode::OK),
        (json!({"playerName": "a", "score": 1, "survivalTime": 7200.01}), StatusCode::BAD_REQUEST),
        (json!({"playerName": "a", "score": 1, "survivalTime": 0}), StatusCode::BAD_REQUEST),
    ];

    for (payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/api/leaderboard")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "payload {}", payload);
    }

    let count = survivor_server::services::leaderboard::count_entries(&db).unwrap();
    assert_eq!(count, 2);
}

#[ntex::test]
async fn test_malformed_json_gets_envelope() {
    let db = fresh_db();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/leaderboard")
        .header("content-type", "application/json")
        .set_payload("{\"playerName\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Malformed request body"));
}

#[ntex::test]
async fn test_invalid_limit_is_rejected() {
    let db = fresh_db();
    let app = init_app!(db);

    for uri in ["/api/leaderboard?limit=0", "/api/leaderboard?limit=101", "/api/leaderboard?limit=abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["success"], false);
    }
}

#[ntex::test]
async fn test_undecodable_query_gets_envelope() {
    let db = fresh_db();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/api/leaderboard?limit=1&limit=2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Malformed query string"));
}

#[ntex::test]
async fn test_ties_keep_insertion_order_over_http() {
    let db = fresh_db();
    let app = init_app!(db);

    for (name, score) in [("fifty", 50), ("first", 200), ("seventy", 75), ("second", 200)] {
        let req = test::TestRequest::post()
            .uri("/api/leaderboard")
            .set_json(&run(name, score))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/leaderboard?limit=3").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["playerName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second", "seventy"]);
}

#[ntex::test]
async fn test_rpc_binding_shares_semantics() {
    let db = fresh_db();
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/rpc/leaderboard.submitScore")
        .set_json(&json!({"playerName": "rpc", "score": 9, "survivalTime": 3, "character": "boss"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/rpc/leaderboard.getTop?limit=5").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["data"][0]["character"], "boss");
}

#[ntex::test]
async fn test_store_failures() {
    let db = fresh_db();
    let app = init_app!(db);
    db.with_conn(|conn| conn.execute_batch("DROP TABLE leaderboard")).unwrap();

    let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body, json!({ "success": true, "data": [] }));

    let req = test::TestRequest::post()
        .uri("/api/leaderboard")
        .set_json(&run("unlucky", 10))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body, json!({ "success": false, "error": "Failed to submit score" }));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[ntex::test]
async fn test_health_reports_entries() {
    let db = fresh_db();
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["entries"], 0);
}
