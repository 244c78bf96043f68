use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use stock_alerts::{config::Settings, routes, AppState};
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState::new(Settings::default())
}

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = routes::app(state.clone()).oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

async fn subscribe(state: &AppState, user: &str, symbol: &str, op: &str, threshold: f64) {
    let (status, _) = send(
        state,
        "POST",
        "/subscribe",
        Some(json!({ "userId": user, "stockSymbol": symbol, "condition": op, "threshold": threshold })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

async fn update_price(state: &AppState, symbol: &str, price: f64) -> Value {
    let (status, body) = send(
        state,
        "POST",
        "/updateStockPrice",
        Some(json!({ "stockSymbol": symbol, "currentPrice": price })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn post_subscribe_returns_confirmation() {
    let state = test_state();

    let (status, body) = send(
        &state,
        "POST",
        "/subscribe",
        Some(json!({ "userId": "u1", "stockSymbol": "AAPL", "condition": ">", "threshold": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["message"], "User u1 subscribed to AAPL with condition \"> 100\"");
    assert_eq!(v["subscription"]["armed"], true);
    assert_eq!(v["subscription"]["condition"], ">");
}

#[tokio::test]
async fn post_subscribe_missing_threshold_returns_400_and_adds_nothing() {
    let state = test_state();

    let (status, body) = send(
        &state,
        "POST",
        "/subscribe",
        Some(json!({ "userId": "u1", "stockSymbol": "AAPL", "condition": ">" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Missing required parameters"));
    assert!(body.contains("threshold"));

    let (status, body) = send(&state, "GET", "/listSubscriptions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "No subscriptions found.");
}

#[tokio::test]
async fn post_subscribe_malformed_body_returns_400() {
    let state = test_state();

    let req = Request::builder()
        .method("POST")
        .uri("/subscribe")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = routes::app(state.clone()).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &state,
        "POST",
        "/subscribe",
        Some(json!({ "userId": "u1", "stockSymbol": "AAPL", "condition": ">", "threshold": "high" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.engine.lock().registry().is_empty());
}

#[tokio::test]
async fn post_update_stock_price_missing_price_returns_400() {
    let state = test_state();

    let (status, body) = send(
        &state,
        "POST",
        "/updateStockPrice",
        Some(json!({ "stockSymbol": "AAPL" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("currentPrice"));
}

#[tokio::test]
async fn queue_status_empty_renders_indicator() {
    let state = test_state();

    let (status, body) = send(&state, "GET", "/queueStatus", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "No pending alerts in Priority Queue.");
}

#[tokio::test]
async fn crossing_flow_queues_then_processes_alerts() {
    let state = test_state();
    subscribe(&state, "u1", "AAPL", ">", 100.0).await;
    subscribe(&state, "u2", "AAPL", ">", 90.0).await;

    let res = update_price(&state, "AAPL", 105.0).await;
    assert_eq!(res["message"], "Stock AAPL updated to price $105");
    assert_eq!(res["fired"], 2);
    assert_eq!(res["processed"], json!([]));

    // snapshot twice, nothing consumed
    let (_, first) = send(&state, "GET", "/queueStatus", None).await;
    let (_, second) = send(&state, "GET", "/queueStatus", None).await;
    assert_eq!(first, second);
    let queued: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(queued[0]["userId"], "u2");
    assert_eq!(queued[0]["priority"], 15.0);
    assert_eq!(queued[1]["userId"], "u1");
    assert_eq!(queued[1]["priority"], 5.0);
    assert_eq!(queued[1]["condition"], "> 100");

    // still above threshold: no new alerts
    let res = update_price(&state, "AAPL", 106.0).await;
    assert_eq!(res["fired"], 0);

    let (status, body) = send(&state, "POST", "/processAlerts", None).await;
    assert_eq!(status, StatusCode::OK);
    let processed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(processed.as_array().map(|a| a.len()), Some(2));
    assert_eq!(processed[0]["userId"], "u2");

    let (_, body) = send(&state, "POST", "/processAlerts", None).await;
    assert_eq!(body, "[]");

    let (_, body) = send(&state, "GET", "/queueStatus", None).await;
    assert_eq!(body, "No pending alerts in Priority Queue.");
}

#[tokio::test]
async fn list_subscriptions_groups_by_user() {
    let state = test_state();
    subscribe(&state, "u1", "AAPL", ">", 100.0).await;
    subscribe(&state, "u2", "TSLA", "<", 200.0).await;
    subscribe(&state, "u1", "GOOG", "<", 50.0).await;

    let (status, body) = send(&state, "GET", "/listSubscriptions", None).await;
    assert_eq!(status, StatusCode::OK);

    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v[0]["userId"], "u1");
    assert_eq!(v[0]["subscriptions"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(v[0]["subscriptions"][1]["stockSymbol"], "GOOG");
    assert_eq!(v[1]["userId"], "u2");
}

#[tokio::test]
async fn auto_process_drains_inside_price_update() {
    let state = AppState::new(Settings {
        auto_process_alerts: true,
        ..Settings::default()
    });
    subscribe(&state, "u1", "AAPL", ">", 100.0).await;

    let res = update_price(&state, "AAPL", 110.0).await;
    assert_eq!(res["fired"], 1);
    assert_eq!(res["processed"][0]["priority"], 10.0);

    let (_, body) = send(&state, "GET", "/queueStatus", None).await;
    assert_eq!(body, "No pending alerts in Priority Queue.");
}

#[tokio::test]
async fn processed_alerts_are_broadcast_to_listeners() {
    let state = test_state();
    let mut rx = state.events_tx.subscribe();

    subscribe(&state, "u1", "AAPL", "<", 100.0).await;
    update_price(&state, "AAPL", 90.0).await;
    assert!(rx.try_recv().is_err());

    send(&state, "POST", "/processAlerts", None).await;
    let alert = rx.try_recv().unwrap();
    assert_eq!(alert.user_id, "u1");
    assert_eq!(alert.priority, 10.0);
}

#[tokio::test]
async fn health_and_fallback() {
    let state = test_state();

    let (status, body) = send(&state, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = send(&state, "GET", "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
