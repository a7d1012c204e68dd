use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;

use lusso_backend::config::{log_channel_status, EmailConfig, ServerConfig, SheetsConfig};
use lusso_backend::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _guard = std::env::var("SENTRY_DSN")
        .ok()
        .filter(|dsn| !dsn.is_empty())
        .map(|dsn| {
            sentry::init((
                dsn.as_str(),
                sentry::ClientOptions {
                    release: sentry::release_name!(),
                    ..Default::default()
                },
            ))
        });
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lusso_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let server = ServerConfig::from_env();
    let email = EmailConfig::from_env();
    let sheets = SheetsConfig::from_env();
    log_channel_status(email.as_ref(), sheets.as_ref());

    let state = Arc::new(AppState::from_config(&server, email.as_ref(), sheets.as_ref())?);
    let app = build_router(state, &server)?;

    tracing::info!(
        "Starting server on port {} ({}, serving {})",
        server.port,
        server.environment,
        server.static_dir
    );
    let listener = TcpListener::bind(("0.0.0.0", server.port)).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
