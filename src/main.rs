//! Enigma Report HTTP server.

use std::time::Duration;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enigma_report::adapters::http::{build_router, AppServices};
use enigma_report::adapters::memory::InMemoryFormStore;
use enigma_report::config::{AppConfig, ConfigError, ValidationError};
use enigma_report::domain::foundation::Timestamp;

const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.features.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Discards form sessions nobody has touched within the idle window.
fn spawn_session_pruner(services: AppServices, store: InMemoryFormStore, idle: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            let cutoff = Timestamp::now().minus_secs(idle.as_secs());
            let pruned = tokio::join!(
                services.quick_repository.prune_idle(cutoff),
                services.wizard_repository.prune_idle(cutoff),
            );
            match pruned {
                (Ok(quick), Ok(wizards)) if quick + wizards > 0 => {
                    let remaining = store.session_count().await;
                    tracing::info!(quick, wizards, remaining, "Pruned idle form sessions");
                }
                (Ok(_), Ok(_)) => {}
                (Err(e), _) | (_, Err(e)) => {
                    tracing::warn!(error = %e, "Session pruning failed");
                }
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;
    if config.is_production() && config.server.cors_origins_list().is_empty() {
        tracing::warn!("No CORS origins configured; any origin is allowed");
    }

    let store = InMemoryFormStore::new();
    let services = AppServices::in_memory(store.clone(), config.generation.delay());
    spawn_session_pruner(services.clone(), store, config.generation.session_idle());

    let app = build_router(&config, services);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        quick_flow = config.features.enable_quick_flow,
        wizard_flow = config.features.enable_wizard_flow,
        analysis_delay_ms = config.generation.delay_ms,
        "Enigma Report server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
