use axum::BoxError;
use log::{info, warn};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::broadcast;
use activity_page::client::activity_client::ActivityClient;
use activity_page::rest::http_server::spawn_http_server;
use activity_page::state::app_state::AppState;
use activity_page::util::app_config::AppConfig;

const CONFIG_YAML: &str = "conf/application.yaml";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    env_logger::init();

    let config = AppConfig::load(CONFIG_YAML)?;
    info!("Backend URL: {}", config.backend_url);
    match config.default_user.as_ref() {
        Some(user_id) => info!("Default user: {user_id}"),
        None => info!("No default user, requests need a session cookie")
    }

    let client = ActivityClient::new(&config.backend_url)?;
    let state = AppState::new(client, config.default_user);

    // Channel for distributing the termination signal
    let (tx_term, rx_term) = broadcast::channel(1);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Server listening on http://{addr}");
    let listener = TcpListener::bind(addr).await?;
    let http_server = spawn_http_server(listener, state, rx_term);

    shutdown_signal().await;
    info!("Termination signal received");
    tx_term.send(())?;

    http_server.await?;
    info!("HTTP Server terminated");

    Ok(())
}

/// Completes on Ctrl+C, or on SIGTERM where available
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => { sigterm.recv().await; }
            Err(error) => {
                warn!("Cannot listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
