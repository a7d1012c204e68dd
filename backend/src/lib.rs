use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod delivery;
pub mod error;
pub mod models {
    pub mod lead_models;
}
pub mod api {
    pub mod email;
    pub mod google_sheets;
}
pub mod handlers {
    pub mod start_vision;
}
pub mod utils {
    pub mod email_utils;
}

use api::email::{EmailSender, ResendSender};
use api::google_sheets::{GoogleSheetsClient, SheetAppender};
use config::{EmailConfig, ServerConfig, SheetsConfig};

/// Email delivery plus the studio inbox that receives new leads.
pub struct EmailChannel {
    pub sender: Arc<dyn EmailSender>,
    pub notify_to: String,
}

/// A channel left as `None` is skipped for every submission.
pub struct AppState {
    pub email: Option<EmailChannel>,
    pub sheets: Option<Arc<dyn SheetAppender>>,
}

impl AppState {
    pub fn from_config(
        server: &ServerConfig,
        email: Option<&EmailConfig>,
        sheets: Option<&SheetsConfig>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(server.outbound_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let email = email.map(|cfg| EmailChannel {
            sender: Arc::new(ResendSender::new(cfg, server.outbound_timeout)) as Arc<dyn EmailSender>,
            notify_to: cfg.notify_to.clone(),
        });

        let sheets = match sheets {
            Some(cfg) => {
                let client = GoogleSheetsClient::new(cfg, http)
                    .context("Failed to set up the Google Sheets channel")?;
                Some(Arc::new(client) as Arc<dyn SheetAppender>)
            }
            None => None,
        };

        Ok(Self { email, sheets })
    }
}

async fn health_check() -> &'static str {
    "OK"
}

/// API routes only, without static files or middleware.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/start-vision", post(handlers::start_vision::start_vision))
        .with_state(state)
}

pub fn build_router(state: Arc<AppState>, server: &ServerConfig) -> anyhow::Result<Router> {
    let origin: HeaderValue = server
        .frontend_url
        .parse()
        .with_context(|| format!("Invalid FRONTEND_URL: {}", server.frontend_url))?;

    // unknown paths fall back to index.html so client-side routes resolve
    let index = Path::new(&server.static_dir).join("index.html");
    let site = ServeDir::new(&server.static_dir).fallback(ServeFile::new(index));

    Ok(api_router(state)
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(origin))
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        ))
}
