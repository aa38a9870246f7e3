//! # Domain Types
//!
//! Core domain types used throughout Dukaan.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Shop       │   │    Customer     │   │      Item       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │◄──│  shop_id (ref)  │   │  name           │       │
//! │  │  phone, address │   │  name           │   │  quantity       │       │
//! │  └─────────────────┘   │  phone, address │   │  price (paise)  │       │
//! │                        └─────────────────┘   │  quality        │       │
//! │                                 ▲            └─────────────────┘       │
//! │                                 │                     ▲                 │
//! │  ┌─────────────────┐   ┌───────┴─────────┐            │                │
//! │  │      Bill       │   │   Transaction   │────────────┘                │
//! │  │  ─────────────  │   │  ─────────────  │  (item_id ref)              │
//! │  │  serialNo       │   │  transactionType│                             │
//! │  │  items (embed)  │   │  totals (paise) │                             │
//! │  │  totals (paise) │   │  customer_id    │                             │
//! │  │  customer_id    │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference Semantics
//! References are stored as plain id strings with **no** foreign-key
//! enforcement. Deleting a Shop does not touch Customers that point at it;
//! the dangling reference resolves to `null` at read time. Bill line items
//! are embedded documents, not references.
//!
//! ## Wire Format
//! Field names serialize in camelCase to match the historical JSON surface
//! (`serialNo`, `totalAmountWithoutTax`, `itemName`, ...). All monetary
//! fields carry integer paise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (the GST rate, see [`crate::GST_RATE_BPS`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Transaction Type
// =============================================================================

/// How a sale was paid.
///
/// Serialized as `"Cash"` / `"Banking"` on the wire and in the database,
/// matching the historical enum values. Any other string is a validation
/// error at the API boundary.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Physical cash payment.
    Cash,
    /// Bank transfer / card payment.
    Banking,
}

// =============================================================================
// Shop
// =============================================================================

/// A jewelry shop. Referenced by customers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Shop name. Required, non-empty.
    pub name: String,

    /// Contact phone number.
    pub phone: Option<String>,

    /// Street address.
    pub address: Option<String>,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer, optionally linked to a shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer name. Required, non-empty.
    pub name: String,

    /// Contact phone number.
    pub phone: Option<String>,

    /// Street address.
    pub address: Option<String>,

    /// Reference to the shop this customer belongs to.
    /// May dangle after the shop is deleted; resolved at read time.
    #[serde(rename = "shop")]
    pub shop_id: Option<String>,
}

// =============================================================================
// Item
// =============================================================================

/// An inventory item (ring, chain, bangle, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Item name. Required, non-empty.
    pub name: String,

    /// Free-form description.
    pub description: Option<String>,

    /// Units in stock. Must be non-negative.
    pub quantity: i64,

    /// Unit price in paise. Must be non-negative.
    pub price: i64,

    /// Quality grade (e.g. "22K", "24K").
    pub quality: Option<String>,
}

impl Item {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A single customer/item sale event.
///
/// The three derived totals are computed by the client at the fixed GST
/// rate and persisted verbatim; the store does not recompute or
/// cross-check them (see [`crate::billing`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// How the sale was paid. Required.
    pub transaction_type: TransactionType,

    /// Amount before GST, in paise.
    pub total_amount_without_tax: Option<i64>,

    /// GST amount in paise (client-computed at 18%).
    pub tax_amount: Option<i64>,

    /// Grand total in paise (subtotal + GST).
    pub total_amount: Option<i64>,

    /// When the sale happened. Defaults to creation time.
    pub date: DateTime<Utc>,

    /// Reference to the buying customer. May dangle.
    #[serde(rename = "customer")]
    pub customer_id: Option<String>,

    /// Reference to the sold item. May dangle.
    #[serde(rename = "item")]
    pub item_id: Option<String>,
}

impl Transaction {
    /// Returns the grand total as Money, zero when absent.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_amount.unwrap_or(0))
    }
}

// =============================================================================
// Bill (invoice)
// =============================================================================

/// An embedded line item within a bill.
///
/// Line items are documents owned by their bill, not references into the
/// item store. A bill keeps the name/price/quality as entered even if the
/// inventory item later changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item name as printed on the bill.
    pub item_name: Option<String>,

    /// Units sold. Non-negative.
    #[serde(default)]
    pub quantity: i64,

    /// Unit price in paise. Non-negative.
    #[serde(default)]
    pub price: i64,

    /// Quality grade (e.g. "22K").
    pub quality: Option<String>,

    /// Free-form description.
    pub description: Option<String>,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price)
    }

    /// Returns the line total (quantity × unit price).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

/// An invoice aggregating multiple line items for one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable bill number (e.g. "B001"). Required, non-empty.
    pub serial_no: String,

    /// Bill date. Defaults to creation time.
    pub date: DateTime<Utc>,

    /// Reference to the billed customer. May dangle.
    #[serde(rename = "customer")]
    pub customer_id: Option<String>,

    /// Embedded line items, in entry order.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Grand total in paise (subtotal + GST), client-computed.
    pub total_amount: Option<i64>,

    /// Subtotal before GST in paise, client-computed.
    pub total_amount_without_tax: Option<i64>,

    /// GST amount in paise, client-computed at 18%.
    pub tax_amount: Option<i64>,

    /// How the bill was paid.
    pub transaction_type: Option<TransactionType>,

    /// Signature of the issuing party (free text / data URI).
    pub signature: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_transaction_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Cash).unwrap(),
            "\"Cash\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Banking).unwrap(),
            "\"Banking\""
        );
        assert!(serde_json::from_str::<TransactionType>("\"Cheque\"").is_err());
    }

    #[test]
    fn test_line_item_total() {
        let item = LineItem {
            item_name: Some("Ring".to_string()),
            quantity: 2,
            price: 50000,
            quality: Some("22K".to_string()),
            description: None,
        };
        assert_eq!(item.line_total().paise(), 100000);
    }

    #[test]
    fn test_bill_wire_field_names() {
        let bill = Bill {
            id: "abc".to_string(),
            serial_no: "B001".to_string(),
            date: Utc::now(),
            customer_id: None,
            items: vec![],
            total_amount: Some(118000),
            total_amount_without_tax: Some(100000),
            tax_amount: Some(18000),
            transaction_type: Some(TransactionType::Cash),
            signature: None,
        };
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["serialNo"], "B001");
        assert_eq!(json["totalAmountWithoutTax"], 100000);
        assert_eq!(json["taxAmount"], 18000);
        assert_eq!(json["transactionType"], "Cash");
        assert!(json["customer"].is_null());
    }

    #[test]
    fn test_customer_shop_ref_wire_name() {
        let customer = Customer {
            id: "c1".to_string(),
            name: "A. Kumar".to_string(),
            phone: None,
            address: None,
            shop_id: Some("s1".to_string()),
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["shop"], "s1");
    }
}
