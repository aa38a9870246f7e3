//! # dukaan-db: Database Layer for Dukaan
//!
//! This crate provides database access for the Dukaan record-keeping
//! system. It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dukaan Data Flow                                 │
//! │                                                                         │
//! │  Request handler (GET /api/bills/:id)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     dukaan-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (shop.rs,    │    │  (embedded)  │  │   │
//! │  │   │               │    │   bill.rs...) │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ five uniform  │    │ 001_init.sql │  │   │
//! │  │   │ WAL mode      │    │ CRUD ops each │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (./dukaan.db)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (one per record store)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dukaan_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./dukaan.db")).await?;
//! let bills = db.bills().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::generate_id;

// Repository re-exports for convenience
pub use repository::bill::BillRepository;
pub use repository::customer::CustomerRepository;
pub use repository::item::ItemRepository;
pub use repository::shop::ShopRepository;
pub use repository::transaction::TransactionRepository;
