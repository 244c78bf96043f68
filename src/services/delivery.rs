use tokio::sync::broadcast;

use crate::models::Alert;

use super::alert_queue::AlertQueue;

/// Drains the queue in priority order. The returned alerts count as
/// delivered; a second call with nothing enqueued in between returns an
/// empty list.
pub fn process_pending(queue: &mut AlertQueue) -> Vec<Alert> {
    let alerts = queue.drain_all();
    for alert in &alerts {
        tracing::info!(
            user_id = %alert.user_id,
            symbol = %alert.stock_symbol,
            priority = alert.priority,
            "processing alert: {}",
            alert.message
        );
    }
    alerts
}

/// Fans delivered alerts out to live listeners (the SSE feed).
/// No receivers is normal and not an error.
pub fn publish(events_tx: &broadcast::Sender<Alert>, alerts: &[Alert]) {
    if events_tx.receiver_count() == 0 {
        return;
    }
    for alert in alerts {
        let _ = events_tx.send(alert.clone());
    }
}
