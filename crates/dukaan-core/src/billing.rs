//! # Billing Module
//!
//! Derives monetary totals for a bill from its line items.
//!
//! ## The Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bill Total Computation                             │
//! │                                                                         │
//! │  items: [ {Ring, qty 2, ₹500.00}, {Chain, qty 1, ₹1200.00} ]           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = Σ(quantity × price)      = ₹2200.00                        │
//! │  tax      = subtotal × 18% GST       = ₹396.00                         │
//! │  total    = subtotal + tax           = ₹2596.00                        │
//! │                                                                         │
//! │  The same computation covers a Transaction's single-item total.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trust Model
//! Historically these three values are computed by the client and submitted
//! alongside the raw line items; the store persists them verbatim without
//! recomputation or cross-check, so an inconsistent payload persists an
//! inconsistent bill. That behavior is preserved. This module is the
//! canonical reference implementation used by clients and by tests.

use serde::{Deserialize, Serialize};

use crate::gst_rate;
use crate::money::Money;
use crate::types::LineItem;

// =============================================================================
// Bill Totals
// =============================================================================

/// The three derived monetary values of a bill or transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTotals {
    /// Subtotal before GST.
    pub total_amount_without_tax: Money,

    /// GST at the fixed 18% rate.
    pub tax_amount: Money,

    /// Grand total (subtotal + GST).
    pub total_amount: Money,
}

/// Computes bill totals from an ordered list of line items.
///
/// `subtotal = Σ(quantity_i × price_i)`, `tax = subtotal × 18%`,
/// `total = subtotal + tax`. The GST rate is the fixed crate constant,
/// not configurable per bill.
///
/// ## Example
/// ```rust
/// use dukaan_core::billing::compute_totals;
/// use dukaan_core::types::LineItem;
///
/// let items = vec![LineItem {
///     item_name: Some("Ring".to_string()),
///     quantity: 2,
///     price: 50000, // ₹500.00 in paise
///     quality: None,
///     description: None,
/// }];
///
/// let totals = compute_totals(&items);
/// assert_eq!(totals.total_amount_without_tax.paise(), 100000); // ₹1000.00
/// assert_eq!(totals.tax_amount.paise(), 18000);                // ₹180.00
/// assert_eq!(totals.total_amount.paise(), 118000);             // ₹1180.00
/// ```
pub fn compute_totals(items: &[LineItem]) -> BillTotals {
    let subtotal = items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.line_total());

    let tax = subtotal.calculate_tax(gst_rate());

    BillTotals {
        total_amount_without_tax: subtotal,
        tax_amount: tax,
        total_amount: subtotal + tax,
    }
}

/// Computes transaction totals for a single item sale.
///
/// A Transaction records one customer/item event; its totals follow the
/// same arithmetic as a one-line bill at the same GST rate.
pub fn compute_single_item_totals(quantity: i64, price: Money) -> BillTotals {
    let subtotal = price.multiply_quantity(quantity);
    let tax = subtotal.calculate_tax(gst_rate());

    BillTotals {
        total_amount_without_tax: subtotal,
        tax_amount: tax,
        total_amount: subtotal + tax,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
