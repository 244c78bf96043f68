use serde::Serialize;

use crate::{
    error::StockAlertError,
    models::{Alert, PriceUpdateRequest, SubscribeRequest, Subscription},
    AppState,
};

use super::{delivery, subscription_registry::UserSubscriptions};

#[derive(Debug, Clone, Serialize)]
pub struct SubscribeResult {
    pub message: String,
    pub subscription: Subscription,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceUpdateResult {
    pub message: String,
    pub fired: usize,
    pub rearmed: usize,
    /// Alerts drained by this update. Only filled when auto-processing is on.
    pub processed: Vec<Alert>,
}

pub fn subscribe(state: &AppState, req: SubscribeRequest) -> Result<SubscribeResult, StockAlertError> {
    let new_sub = req.validate()?;

    if !new_sub.condition.is_recognized() {
        tracing::warn!(
            user_id = %new_sub.user_id,
            symbol = %new_sub.stock_symbol,
            condition = %new_sub.condition,
            "unrecognized condition accepted; this subscription will never fire"
        );
    }

    let (subscription, pending) = {
        let mut engine = state.engine.lock();
        let sub = engine.subscribe(new_sub);
        (sub, engine.pending_count())
    };

    let message = format!(
        "User {} subscribed to {} with condition \"{}\"",
        subscription.user_id,
        subscription.stock_symbol,
        subscription.describe()
    );
    tracing::info!(pending_alerts = pending, "{}", message);

    Ok(SubscribeResult {
        message,
        subscription,
    })
}

pub fn update_stock_price(
    state: &AppState,
    req: PriceUpdateRequest,
) -> Result<PriceUpdateResult, StockAlertError> {
    let update = req.validate()?;
    tracing::info!(
        symbol = %update.stock_symbol,
        price = update.current_price,
        "updating stock price"
    );

    let (outcome, processed) = {
        let mut engine = state.engine.lock();
        let outcome = engine.update_price(&update.stock_symbol, update.current_price);
        let processed = if state.settings.auto_process_alerts {
            engine.process_pending()
        } else {
            Vec::new()
        };
        (outcome, processed)
    };

    delivery::publish(&state.events_tx, &processed);

    Ok(PriceUpdateResult {
        message: format!(
            "Stock {} updated to price ${}",
            update.stock_symbol, update.current_price
        ),
        fired: outcome.fired,
        rearmed: outcome.rearmed,
        processed,
    })
}

/// Pending alerts, highest priority first, without consuming them.
pub fn queue_status(state: &AppState) -> Vec<Alert> {
    state.engine.lock().queue_status()
}

pub fn list_subscriptions(state: &AppState) -> Vec<UserSubscriptions> {
    state.engine.lock().list_subscriptions()
}

/// Drains and delivers every pending alert.
pub fn process_alerts(state: &AppState) -> Vec<Alert> {
    let alerts = state.engine.lock().process_pending();
    delivery::publish(&state.events_tx, &alerts);
    alerts
}
