use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::Subscription;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub user_id: String,
    pub stock_symbol: String,
    pub current_price: f64,

    // "> 100"
    #[serde(rename = "condition")]
    pub condition_description: String,

    /// Distance between the price and the threshold; larger drains first.
    pub priority: f64,
    pub message: String,

    /// Unix millis of the Armed -> Fired transition.
    pub triggered_at: i64,
}

impl Alert {
    pub fn new(subscription: &Subscription, current_price: f64, priority: f64) -> Self {
        let condition_description = subscription.describe();
        let message = format!(
            "Stock {} is at ${}, which satisfies condition \"{}\"",
            subscription.stock_symbol, current_price, condition_description
        );

        Self {
            user_id: subscription.user_id.clone(),
            stock_symbol: subscription.stock_symbol.clone(),
            current_price,
            condition_description,
            priority,
            message,
            triggered_at: Utc::now().timestamp_millis(),
        }
    }
}
