use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    /// Drain the alert queue at the end of every price update instead of
    /// waiting for an explicit `/processAlerts`.
    pub auto_process_alerts: bool,

    /// Buffer size of the delivered-alert broadcast channel.
    pub events_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            auto_process_alerts: false,
            events_capacity: 64,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let defaults = Settings::default();

    let host = env::var("HOST").unwrap_or(defaults.host);

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(defaults.port);

    let auto_process_alerts = env::var("AUTO_PROCESS_ALERTS")
        .ok()
        .and_then(|s| parse_flag(&s))
        .unwrap_or(defaults.auto_process_alerts);

    let events_capacity = env::var("EVENTS_CAPACITY")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(defaults.events_capacity);

    Settings {
        host,
        port,
        auto_process_alerts,
        events_capacity,
    }
}
