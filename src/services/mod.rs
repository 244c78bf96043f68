pub mod subscription_registry;
pub mod crossing_detector;
pub mod alert_queue;
pub mod delivery;
pub mod alert_engine;

pub mod alerts_service;
