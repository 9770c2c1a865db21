mod api;

use tracing_subscriber::EnvFilter;

use pickupwatch_fulfillment::FulfillmentClient;
use pickupwatch_notify::Notifier;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pickupwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let resolver = FulfillmentClient::new(
        &config.fulfillment_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.inter_request_delay_ms,
    )?;
    let notifier = Notifier::new(
        &config.pushover_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let app = build_app(AppState { resolver, notifier });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting pickupwatch server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
