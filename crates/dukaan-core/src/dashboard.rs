//! # Dashboard Module
//!
//! Read-side summary statistics and chart groupings over bills and
//! transactions.
//!
//! ## What Gets Computed
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dashboard Reductions                               │
//! │                                                                         │
//! │  All bills + all transactions (fetched fresh per request)             │
//! │       │                                                                 │
//! │       ├──► Summary cards                                               │
//! │       │      Σ taxAmount, Σ totalAmountWithoutTax, Σ totalAmount       │
//! │       │      over bills; count of transactions                        │
//! │       │                                                                 │
//! │       ├──► Bar chart: sum of line-item price grouped by quantity      │
//! │       │                                                                 │
//! │       └──► Pie chart: count of line items grouped by quality grade    │
//! │                                                                         │
//! │  Pure reduction, no persistence, no caching: every dashboard view     │
//! │  recomputes from scratch.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Bill;

/// Quality grade used when a line item carries none.
const UNKNOWN_QUALITY: &str = "Unknown";

// =============================================================================
// Summary
// =============================================================================

/// Headline figures for the dashboard cards.
///
/// Monetary sums are over bills only (paise); absent totals count as zero,
/// mirroring how the figures have always been derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Σ taxAmount across all bills.
    pub total_tax_amount: i64,

    /// Σ totalAmountWithoutTax across all bills.
    pub total_amount_without_tax: i64,

    /// Σ totalAmount across all bills.
    pub total_amount: i64,

    /// Number of recorded transactions.
    pub total_transactions: usize,
}

/// Computes the headline summary from all bills and the transaction count.
pub fn summarize(bills: &[Bill], transaction_count: usize) -> DashboardSummary {
    DashboardSummary {
        total_tax_amount: bills.iter().map(|b| b.tax_amount.unwrap_or(0)).sum(),
        total_amount_without_tax: bills
            .iter()
            .map(|b| b.total_amount_without_tax.unwrap_or(0))
            .sum(),
        total_amount: bills.iter().map(|b| b.total_amount.unwrap_or(0)).sum(),
        total_transactions: transaction_count,
    }
}

// =============================================================================
// Chart Groupings
// =============================================================================

/// One bar of the price-by-quantity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityBucket {
    /// Line-item quantity this bucket groups.
    pub quantity: i64,

    /// Sum of unit prices (paise) of all line items with that quantity.
    pub price: i64,
}

/// Sums line-item unit price grouped by quantity, across all bill line
/// items, ascending by quantity.
///
/// A line item with no quantity recorded groups under 1, matching the
/// historical chart behavior.
pub fn price_by_quantity(bills: &[Bill]) -> Vec<QuantityBucket> {
    let mut groups: BTreeMap<i64, i64> = BTreeMap::new();

    for bill in bills {
        for item in &bill.items {
            let qty = if item.quantity == 0 { 1 } else { item.quantity };
            *groups.entry(qty).or_insert(0) += item.price;
        }
    }

    groups
        .into_iter()
        .map(|(quantity, price)| QuantityBucket { quantity, price })
        .collect()
}

/// One slice of the quality-distribution pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBucket {
    /// Quality grade ("22K", "24K", "Unknown", ...).
    pub name: String,

    /// Number of line items with that grade.
    pub value: usize,
}

/// Counts bill line items grouped by quality grade.
///
/// Line items without a quality grade group under "Unknown". Buckets are
/// returned in lexicographic grade order for deterministic output.
pub fn count_by_quality(bills: &[Bill]) -> Vec<QualityBucket> {
    let mut groups: BTreeMap<String, usize> = BTreeMap::new();

    for bill in bills {
        for item in &bill.items {
            let quality = item
                .quality
                .clone()
                .filter(|q| !q.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_QUALITY.to_string());
            *groups.entry(quality).or_insert(0) += 1;
        }
    }

    groups
        .into_iter()
        .map(|(name, value)| QualityBucket { name, value })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
