//! Request handlers, one module per resource.
//!
//! ## Handler Conventions
//! - Path ids are validated as UUIDs before any lookup; a malformed id is
//!   a 400, a well-formed id that matches nothing is a 404.
//! - Create assigns the id server-side and returns the stored record with
//!   references unresolved (id strings), matching the historical create
//!   response shape.
//! - Update is merge-then-replace: supplied fields overwrite, absent
//!   fields keep their stored value. The response carries references
//!   resolved.
//! - Client-computed totals persist verbatim; nothing here recomputes
//!   or cross-checks them.

pub mod bills;
pub mod customers;
pub mod dashboard;
pub mod items;
pub mod shops;
pub mod transactions;

/// Liveness probe.
pub async fn root() -> &'static str {
    "API Running"
}
