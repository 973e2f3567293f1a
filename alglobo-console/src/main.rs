use alglobo_console::{app, AppState};
use alglobo_gateway::{app_config::Config, BatchGateway, HttpTransport};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "alglobo_console=debug,alglobo_gateway=debug,alglobo_core=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Reservation service at {} (timeout {}s)",
        config.gateway.base_url,
        config.gateway.timeout_seconds
    );

    let transport = HttpTransport::new(&config.gateway)?;
    let app_state = AppState {
        gateway: BatchGateway::new(Arc::new(transport)),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Console listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
