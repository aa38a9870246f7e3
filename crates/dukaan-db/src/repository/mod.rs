//! # Repository Module
//!
//! Database repository implementations for Dukaan.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Request handler                                                       │
//! │       │                                                                 │
//! │       │  db.shops().get_by_id(&id)                                     │
//! │       ▼                                                                 │
//! │  ShopRepository                                                        │
//! │  ├── list(&self)                                                       │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, shop)                                               │
//! │  ├── update(&self, shop)                                               │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every repository exposes the same five operations with uniform
//! contracts: list all (no pagination), insert a fully-populated record,
//! fetch optional by id, full-row update (NotFound when the id matches
//! nothing), hard delete (NotFound likewise). Reference resolution is NOT
//! done here - the API layer joins related records after the primary fetch.
//!
//! ## Available Repositories
//!
//! - [`shop::ShopRepository`]
//! - [`customer::CustomerRepository`]
//! - [`item::ItemRepository`]
//! - [`transaction::TransactionRepository`]
//! - [`bill::BillRepository`]

pub mod bill;
pub mod customer;
pub mod item;
pub mod shop;
pub mod transaction;

use uuid::Uuid;

/// Generates a new record identifier (UUID v4 string).
///
/// ## Why UUID v4?
/// Globally unique without coordination, so identifiers can be assigned
/// by the caller before the insert round-trips.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
