use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::StockAlertError,
    models::{PriceUpdateRequest, SubscribeRequest},
    services::alerts_service,
    AppState,
};

const NO_PENDING_ALERTS: &str = "No pending alerts in Priority Queue.";
const NO_SUBSCRIPTIONS: &str = "No subscriptions found.";

// Unparseable bodies and wrongly-typed fields are reported the same way as
// missing ones.
fn body_or_invalid<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, StockAlertError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| StockAlertError::InvalidInput(e.body_text()))
}

// POST /subscribe
pub async fn post_subscribe(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Response {
    let req = match body_or_invalid(payload) {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };

    match alerts_service::subscribe(&state, req) {
        Ok(res) => (StatusCode::OK, Json(res)).into_response(),
        Err(e) => e.into_response(),
    }
}

// POST /updateStockPrice
pub async fn post_update_stock_price(
    State(state): State<AppState>,
    payload: Result<Json<PriceUpdateRequest>, JsonRejection>,
) -> Response {
    let req = match body_or_invalid(payload) {
        Ok(r) => r,
        Err(e) => return e.into_response(),
    };

    match alerts_service::update_stock_price(&state, req) {
        Ok(res) => (StatusCode::OK, Json(res)).into_response(),
        Err(e) => e.into_response(),
    }
}

// GET /queueStatus
pub async fn get_queue_status(State(state): State<AppState>) -> Response {
    let alerts = alerts_service::queue_status(&state);
    if alerts.is_empty() {
        return (StatusCode::OK, NO_PENDING_ALERTS).into_response();
    }
    (StatusCode::OK, Json(alerts)).into_response()
}

// GET /listSubscriptions
pub async fn get_list_subscriptions(State(state): State<AppState>) -> Response {
    let users = alerts_service::list_subscriptions(&state);
    if users.is_empty() {
        return (StatusCode::OK, NO_SUBSCRIPTIONS).into_response();
    }
    (StatusCode::OK, Json(users)).into_response()
}

// POST /processAlerts
pub async fn post_process_alerts(State(state): State<AppState>) -> Response {
    let alerts = alerts_service::process_alerts(&state);
    (StatusCode::OK, Json(alerts)).into_response()
}
