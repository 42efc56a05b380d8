//! Storefront Server
//!
//! Product, user and transaction endpoints over in-memory collections. The
//! product listing is served from a cached serialized snapshot.

pub mod config;
pub mod error;
mod handlers;
pub mod middleware;
pub mod services;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use middleware::{require_api_key, AccessGate};
use services::{CatalogService, TransactionLedger};
use storage::{EntityStore, SnapshotCache};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntityStore>,
    pub cache: Arc<SnapshotCache>,
    pub catalog: Arc<CatalogService>,
    pub ledger: Arc<TransactionLedger>,
    pub gate: Arc<AccessGate>,
}

impl AppState {
    pub fn new(store: EntityStore, gate: AccessGate) -> Self {
        let store = Arc::new(store);
        let cache = Arc::new(SnapshotCache::new());
        let catalog = Arc::new(CatalogService::new(store.clone(), cache.clone()));
        let ledger = Arc::new(TransactionLedger::new(store.clone(), cache.clone()));

        Self {
            store,
            cache,
            catalog,
            ledger,
            gate: Arc::new(gate),
        }
    }
}

/// Build the full HTTP router
pub fn router(state: AppState) -> Router {
    let api = api_routes().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        require_api_key,
    ));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/products/:id",
            get(handlers::products::get)
                .put(handlers::products::update)
                .delete(handlers::products::delete),
        )
        .route("/user/", get(handlers::users::missing_username))
        .route("/user/:username", get(handlers::users::get))
        .route("/transaction", post(handlers::transactions::create))
}
