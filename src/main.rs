use glucotrack::{
    AppState, Notifier, READINGS_FILE, ReadingStore, SETTINGS_FILE, SettingsStore,
    resolve_data_dir, router,
};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;

    let readings = ReadingStore::load(data_dir.join(READINGS_FILE)).await;
    let settings = SettingsStore::load(data_dir.join(SETTINGS_FILE)).await;

    let notifier = Notifier::from_env();
    if !notifier.is_configured() {
        info!("TELEGRAM_BOT_TOKEN is not set; telegram alerts are disabled");
    }

    let state = AppState::new(readings, settings, notifier);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
