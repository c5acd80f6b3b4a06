use std::sync::Arc;

use anyhow::Context;
use inventory_web::{
    app::inventory::PgItemRepository,
    infrastructure::{
        config::AppConfig,
        database::{ensure_schema, DatabaseManager},
        logger::Logger,
    },
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Logger::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    info!("connecting to database");
    let database = DatabaseManager::new(&config)
        .await
        .context("failed to connect to database")?;
    ensure_schema(database.get_pool())
        .await
        .context("failed to create inventory schema")?;

    let items = Arc::new(PgItemRepository::new(database.get_pool().clone()));
    let app = routes(AppState::new(items));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("inventory server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("server failed")?;

    database.close().await;
    info!("inventory server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
