#![forbid(unsafe_code)]

use kable_ui_server::{
    build_router, load_templates, validate_startup_config, AppState, StaticFixtures, UiConfig,
    UiError,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_path(name: &str, default: &str) -> PathBuf {
    PathBuf::from(env::var(name).unwrap_or_else(|_| default.to_string()))
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("KABLE_UI_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), UiError> {
    init_tracing();

    let bind_addr = env::var("KABLE_UI_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let ui = UiConfig {
        template_root: env_path("KABLE_UI_TEMPLATE_ROOT", "crates/kable-ui-server/templates"),
        asset_root: env_path("KABLE_UI_ASSET_ROOT", "crates/kable-ui-server/assets"),
        max_body_bytes: env_usize("KABLE_UI_MAX_BODY_BYTES", 16 * 1024),
        shutdown_drain: Duration::from_millis(env_u64("KABLE_UI_SHUTDOWN_DRAIN_MS", 5000)),
    };
    validate_startup_config(&ui).map_err(UiError::Config)?;

    let templates = load_templates(&ui.template_root)?;
    let drain = ui.shutdown_drain;
    let state = AppState::new(templates, Arc::new(StaticFixtures), ui);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| UiError::Startup(format!("bind failed on {bind_addr}: {e}")))?;
    info!("kable-ui listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            tokio::time::sleep(drain).await;
        })
        .await
        .map_err(|e| UiError::Startup(format!("server failed: {e}")))
}
