use std::net::{IpAddr, SocketAddr};

use stock_alerts::{config, routes, AppState, StockAlertError};

#[tokio::main]
async fn main() -> Result<(), StockAlertError> {
    tracing_subscriber::fmt::init();

    let settings = config::load();
    let addr = SocketAddr::from((settings.host.parse::<IpAddr>()?, settings.port));

    tracing::info!(
        auto_process_alerts = settings.auto_process_alerts,
        "starting stock alert service"
    );

    let app = routes::app(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
