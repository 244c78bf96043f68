pub mod home_controller;
pub mod alerts_controller;
pub mod events_controller;
