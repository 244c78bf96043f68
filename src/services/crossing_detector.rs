use serde::Serialize;

use crate::models::{Alert, Transition};

use super::{alert_queue::AlertQueue, subscription_registry::SubscriptionRegistry};

/// Counts of state changes caused by one price update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriceUpdateOutcome {
    pub fired: usize,
    pub rearmed: usize,
}

/// Evaluates every subscription on `stock_symbol` against `current_price`.
///
/// Armed subscriptions whose condition now holds flip to fired and enqueue
/// one alert each. Fired subscriptions whose price is back in range re-arm
/// without an alert. Anything still beyond its threshold is left alone, which
/// is what keeps a crossing to a single alert.
///
/// Callers must hold exclusive access to both `registry` and `queue` for
/// the whole call.
pub fn on_price_update(
    registry: &mut SubscriptionRegistry,
    queue: &mut AlertQueue,
    stock_symbol: &str,
    current_price: f64,
) -> PriceUpdateOutcome {
    let mut outcome = PriceUpdateOutcome::default();

    for sub in registry.for_symbol_mut(stock_symbol) {
        match sub.evaluate(current_price) {
            Transition::Fired { priority } => {
                let alert = Alert::new(sub, current_price, priority);
                tracing::info!(
                    user_id = %alert.user_id,
                    symbol = %alert.stock_symbol,
                    priority = alert.priority,
                    "alert: {}",
                    alert.message
                );
                queue.enqueue(alert);
                outcome.fired += 1;
            }
            Transition::Rearmed => {
                tracing::debug!(
                    user_id = %sub.user_id,
                    symbol = %sub.stock_symbol,
                    condition = %sub.describe(),
                    "price back in range, subscription re-armed"
                );
                outcome.rearmed += 1;
            }
            Transition::Unchanged => {}
        }
    }

    outcome
}
