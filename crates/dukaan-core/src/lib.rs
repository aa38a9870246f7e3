//! # dukaan-core: Pure Business Logic for Dukaan
//!
//! This crate is the **heart** of the Dukaan record-keeping system. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dukaan Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    REST Clients (browser)                       │   │
//! │  │    Shop forms ──► Bill forms ──► Dashboard views               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    api-server (Axum)                            │   │
//! │  │    /api/shops, /api/customers, /api/items, ...                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dukaan-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  billing  │  │ dashboard │  │   │
//! │  │   │   Shop    │  │   Money   │  │  totals   │  │ summaries │  │   │
//! │  │   │   Bill    │  │  TaxRate  │  │  GST 18%  │  │ groupings │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    dukaan-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Shop, Customer, Item, Transaction, Bill)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`billing`] - Bill/transaction total computation at the fixed GST rate
//! - [`dashboard`] - Read-side summary statistics and chart groupings
//! - [`error`] - Validation error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod dashboard;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::{compute_totals, BillTotals};
pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// GST rate applied to every bill and transaction, in basis points.
///
/// ## Why a single constant?
/// The 18% rate was historically duplicated between the bill and the
/// transaction computation. Both now share this one value. It is fixed,
/// not configurable per bill or per jurisdiction.
pub const GST_RATE_BPS: u32 = 1800;

/// Returns the GST rate as a [`types::TaxRate`].
#[inline]
pub const fn gst_rate() -> types::TaxRate {
    types::TaxRate::from_bps(GST_RATE_BPS)
}
