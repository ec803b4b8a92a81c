use std::sync::Arc;
use tracing::info;
use transit_ticketing::config::Config;
use transit_ticketing::supabase::SupabaseClient;
use transit_ticketing::{AppState, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transit_ticketing=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting transit-ticketing backend...");

    // Missing platform credentials abort startup here
    let config = Config::load()?;
    info!("Configuration loaded successfully");

    if config.server.request_timeout_seconds > 0 {
        info!(
            "Platform client timeout set to {} seconds",
            config.server.request_timeout_seconds
        );
    } else {
        info!("Platform client timeout disabled (no timeout)");
    }

    // One platform client shared by every request
    let platform = SupabaseClient::new(
        config.platform.clone(),
        config.server.request_timeout_seconds,
    )?;

    let state = Arc::new(AppState::new(Arc::new(platform)));

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
