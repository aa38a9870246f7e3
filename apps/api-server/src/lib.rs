//! # Dukaan API Server
//!
//! REST backend for jewelry-shop record keeping.
//!
//! ## Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          REST Resources                                 │
//! │                                                                         │
//! │  /api/shops          /api/customers       /api/items                   │
//! │  /api/transactions   /api/bills           /api/dashboard (read-only)   │
//! │                                                                         │
//! │  Each resource:                                                         │
//! │   GET    /api/<r>        list all                                       │
//! │   POST   /api/<r>        create (201) │ 400 validation                  │
//! │   GET    /api/<r>/{id}   fetch one    │ 404                             │
//! │   PUT    /api/<r>/{id}   partial update (merge) │ 404 │ 400             │
//! │   DELETE /api/<r>/{id}   hard delete  │ 404                             │
//! │                                                                         │
//! │  GET /  →  "API Running" (liveness)                                     │
//! │                                                                         │
//! │  References (customer→shop, transaction→customer/item, bill→customer)  │
//! │  are looked up at read time; a dangling id resolves to null.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP server port (default: 3000)
//! - `DATABASE_PATH` - SQLite file path (default: ./dukaan.db)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS origins

use axum::routing::get;
use axum::Router;

use dukaan_db::Database;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;

// Re-exports
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Builds the application router over the given state.
///
/// CORS is layered on in `main`; tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/shops",
            get(handlers::shops::list).post(handlers::shops::create),
        )
        .route(
            "/api/shops/{id}",
            get(handlers::shops::get_one)
                .put(handlers::shops::update)
                .delete(handlers::shops::delete),
        )
        .route(
            "/api/customers",
            get(handlers::customers::list).post(handlers::customers::create),
        )
        .route(
            "/api/customers/{id}",
            get(handlers::customers::get_one)
                .put(handlers::customers::update)
                .delete(handlers::customers::delete),
        )
        .route(
            "/api/items",
            get(handlers::items::list).post(handlers::items::create),
        )
        .route(
            "/api/items/{id}",
            get(handlers::items::get_one)
                .put(handlers::items::update)
                .delete(handlers::items::delete),
        )
        .route(
            "/api/transactions",
            get(handlers::transactions::list).post(handlers::transactions::create),
        )
        .route(
            "/api/transactions/{id}",
            get(handlers::transactions::get_one)
                .put(handlers::transactions::update)
                .delete(handlers::transactions::delete),
        )
        .route(
            "/api/bills",
            get(handlers::bills::list).post(handlers::bills::create),
        )
        .route(
            "/api/bills/{id}",
            get(handlers::bills::get_one)
                .put(handlers::bills::update)
                .delete(handlers::bills::delete),
        )
        .route("/api/dashboard", get(handlers::dashboard::get))
        .with_state(state)
}
