//! The alerting core: one subscription registry plus one pending-alert
//! queue, owned together so a single lock can guard both.

use crate::models::{Alert, NewSubscription, Subscription};

use super::{
    alert_queue::AlertQueue,
    crossing_detector::{self, PriceUpdateOutcome},
    delivery,
    subscription_registry::{SubscriptionRegistry, UserSubscriptions},
};

#[derive(Debug, Default)]
pub struct AlertEngine {
    registry: SubscriptionRegistry,
    queue: AlertQueue,
}

impl AlertEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, req: NewSubscription) -> Subscription {
        self.registry
            .subscribe(&req.user_id, &req.stock_symbol, req.condition, req.threshold)
            .clone()
    }

    pub fn update_price(&mut self, stock_symbol: &str, current_price: f64) -> PriceUpdateOutcome {
        crossing_detector::on_price_update(
            &mut self.registry,
            &mut self.queue,
            stock_symbol,
            current_price,
        )
    }

    pub fn process_pending(&mut self) -> Vec<Alert> {
        delivery::process_pending(&mut self.queue)
    }

    pub fn queue_status(&self) -> Vec<Alert> {
        self.queue.snapshot()
    }

    pub fn list_subscriptions(&self) -> Vec<UserSubscriptions> {
        self.registry.list().cloned().collect()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn registry(&self) -> &SubscriptionRegistry {
        &self.registry
    }
}
