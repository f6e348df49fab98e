mod config;
mod db;
mod deed;
mod errors;
mod layout;
mod models;
mod pdf;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::layout::LayoutParams;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgDeedStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting saledeed API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the injected store handle
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgDeedStore::new(pool));

    // Page geometry and typography, fixed for the process lifetime
    let layout = LayoutParams::deed_default();
    info!(
        "Layout: {}x{}pt page, {}pt margin, {}pt Helvetica",
        layout.page_width, layout.page_height, layout.margin, layout.font_size
    );

    // Exactly one browser origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    info!("CORS restricted to origin {}", config.allowed_origin);

    // Build app state
    let state = AppState {
        store,
        config: config.clone(),
        layout,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
