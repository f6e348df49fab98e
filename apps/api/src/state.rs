use std::sync::Arc;

use crate::config::Config;
use crate::layout::LayoutParams;
use crate::store::DeedStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Injected store handle — PostgreSQL in production, in-memory in tests.
    pub store: Arc<dyn DeedStore>,
    pub config: Config,
    /// Page geometry and typography for the pagination engine, fixed at startup.
    pub layout: LayoutParams,
}
