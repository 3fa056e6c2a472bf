use axum::{Router, extract::DefaultBodyLimit};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    auth::CredentialStore,
    config::AppConfig,
    database,
    error::Result,
    repository::{InMemoryProductoRepository, PgProductoRepository, ProductoRepository},
    routes,
    services::ProductoService,
};

#[derive(Clone)]
pub struct AppState {
    pub productos: ProductoService,
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductoRepository>, credentials: CredentialStore) -> Self {
        Self {
            productos: ProductoService::new(repository),
            credentials: Arc::new(credentials),
        }
    }
}

/// Connects the configured store and hashes the fixed accounts.
pub async fn build_state(config: &AppConfig) -> Result<AppState> {
    let repository: Arc<dyn ProductoRepository> = match &config.database {
        Some(db) => {
            let pool = database::create_pool(db).await?;
            Arc::new(PgProductoRepository::new(pool))
        }
        None => {
            tracing::warn!("DB_URL not set, productos are kept in memory only");
            Arc::new(InMemoryProductoRepository::new())
        }
    };

    let credentials = CredentialStore::from_config(&config.security)?;

    Ok(AppState::new(repository, credentials))
}

/// Assembles routes, auth and request tracing around an existing state.
pub fn router(state: AppState, max_body_size: usize) -> Router {
    routes::create_router(state.clone())
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
