use aql_builder::config::Settings;
use aql_builder::web::{router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(AppState {
        settings: Settings::default(),
    }))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(req).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(req).await
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_event_fields() {
    let (status, body) = get("/api/reference/event-fields").await;
    assert_eq!(status, StatusCode::OK);

    let fields = body.as_array().unwrap();
    assert_eq!(fields.len(), 34);
    assert_eq!(
        fields[0],
        json!({
            "name": "qid",
            "type": "INTEGER",
            "description": "QRadar event ID (use with QIDNAME function)"
        })
    );
}

#[tokio::test]
async fn test_flow_fields() {
    let (status, body) = get("/api/reference/flow-fields").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 27);
}

#[tokio::test]
async fn test_functions_grouped_by_category() {
    let (_, body) = get("/api/reference/functions").await;
    let categories = body.as_object().unwrap();
    assert_eq!(categories.len(), 6);

    let aggregation = categories["Aggregation"].as_array().unwrap();
    assert!(aggregation
        .iter()
        .any(|f| f["name"] == "COUNT" && f["syntax"] == "COUNT(*) or COUNT(field)"));
}

#[tokio::test]
async fn test_operators() {
    let (_, body) = get("/api/reference/operators").await;
    assert_eq!(
        body["logical"][0],
        json!({"op": "AND", "desc": "Both conditions must be true"})
    );
    assert!(body["comparison"].is_array());
    assert!(body["string"].is_array());
}

#[tokio::test]
async fn test_time_clauses() {
    let (_, body) = get("/api/reference/time-clauses").await;
    assert!(body["LAST"].as_array().unwrap().len() >= 5);
    assert!(body["START/STOP"].is_array());
    assert!(body["PARSEDATETIME"].is_array());
}

#[tokio::test]
async fn test_templates() {
    let (status, body) = get("/api/templates").await;
    assert_eq!(status, StatusCode::OK);

    let categories = body.as_object().unwrap();
    assert_eq!(categories.len(), 6);
    let total: usize = categories
        .values()
        .map(|t| t.as_array().unwrap().len())
        .sum();
    assert_eq!(total, 26);

    let first = &categories["Authentication & Access"][0];
    assert_eq!(first["name"], "Failed Login Attempts");
    assert_eq!(first["params"], json!(["time_range"]));
}

#[tokio::test]
async fn test_render_template() {
    let (status, body) = post(
        "/api/templates/render",
        json!({
            "name": "activity by ip address",
            "values": {"IP_ADDRESS": "10.0.0.1"},
            "time": "LAST 24 HOURS"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let query = body["query"].as_str().unwrap();
    assert_eq!(query.matches("'10.0.0.1'").count(), 2);
    assert!(query.ends_with("LAST 24 HOURS"));
}

#[tokio::test]
async fn test_render_unknown_template() {
    let (status, body) = post("/api/templates/render", json!({"name": "nope"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown template 'nope'");
}

#[tokio::test]
async fn test_validate() {
    let (status, body) = post(
        "/api/validate",
        json!({"query": "select sourceip from bogus"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "valid": false,
            "errors": ["Unknown table 'BOGUS'. Use 'events' or 'flows'"],
            "warnings": ["Consider adding a time clause (LAST, START/STOP)"]
        })
    );

    let (_, body) = post(
        "/api/validate",
        json!({"query": "SELECT * FROM events LAST 1 HOURS"}),
    )
    .await;
    assert_eq!(body, json!({"valid": true, "errors": [], "warnings": []}));
}

#[tokio::test]
async fn test_validate_group_by_hint_wording() {
    let (_, body) = post(
        "/api/validate",
        json!({"query": "SELECT sourceip FROM events GROUP BY sourceip LAST 1 HOURS"}),
    )
    .await;
    assert_eq!(
        body,
        json!({
            "valid": true,
            "errors": [],
            "warnings": ["GROUP BY is typically used with aggregate functions"]
        })
    );
}

#[tokio::test]
async fn test_build_defaults() {
    let (status, body) = post("/api/build", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "SELECT *\nFROM events");
}

#[tokio::test]
async fn test_build_full_query() {
    let (status, body) = post(
        "/api/build",
        json!({
            "select": ["sourceip", "COUNT(*) as count"],
            "from": "events",
            "where": ["magnitude >= 5"],
            "groupBy": ["sourceip"],
            "having": ["COUNT(*) > 10"],
            "orderBy": ["count"],
            "orderDir": "asc",
            "limit": 10,
            "time": "LAST 24 HOURS"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["query"],
        "SELECT sourceip, COUNT(*) as count\nFROM events\nWHERE magnitude >= 5\n\
         GROUP BY sourceip\nHAVING COUNT(*) > 10\nORDER BY count ASC\nLIMIT 10\nLAST 24 HOURS"
    );
}

#[tokio::test]
async fn test_build_zero_limit_omitted() {
    let (_, body) = post(
        "/api/build",
        json!({"select": ["*"], "from": "flows", "limit": 0}),
    )
    .await;
    assert_eq!(body["query"], "SELECT *\nFROM flows");
}

#[tokio::test]
async fn test_build_rejects_unknown_table() {
    let (status, body) = post("/api/build", json!({"from": "assets"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown table 'assets'. Use 'events' or 'flows'");
}

#[tokio::test]
async fn test_build_rejects_bad_order_dir() {
    let (status, body) = post(
        "/api/build",
        json!({"orderBy": ["x"], "orderDir": "sideways"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("sideways"));
}

#[tokio::test]
async fn test_cors_headers() {
    let req = Request::builder()
        .uri("/api/templates")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(req).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
