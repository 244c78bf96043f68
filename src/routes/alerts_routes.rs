use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::alerts_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/subscribe", post(alerts_controller::post_subscribe))
        .route("/updateStockPrice", post(alerts_controller::post_update_stock_price))
        .route("/queueStatus", get(alerts_controller::get_queue_status))
        .route("/listSubscriptions", get(alerts_controller::get_list_subscriptions))
        .route("/processAlerts", post(alerts_controller::post_process_alerts))
}
