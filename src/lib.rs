//! Library entrypoint for stock-alerts.
//!
//! Integration tests under `tests/` import the app state, routers,
//! controllers and services from here.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub mod controllers;
pub mod routes;

pub use error::StockAlertError;

/// Shared handle to the single alert engine of the process.
///
/// Every core operation goes through `engine.lock()`, so subscribe, price
/// update, drain and snapshot never interleave.
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub engine: Arc<Mutex<services::alert_engine::AlertEngine>>,
    pub events_tx: broadcast::Sender<models::Alert>,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        let (events_tx, _events_rx) = broadcast::channel(settings.events_capacity.max(1));
        Self {
            settings,
            engine: Arc::new(Mutex::new(services::alert_engine::AlertEngine::new())),
            events_tx,
        }
    }
}
