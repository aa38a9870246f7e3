//! # Bill Repository
//!
//! Database operations for bills (invoices).
//!
//! ## Embedded Line Items
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Item Storage                                    │
//! │                                                                         │
//! │  A bill OWNS its line items - they are not references into the item    │
//! │  store. The ordered list is serialized to a JSON TEXT column:          │
//! │                                                                         │
//! │  bills.items = '[{"itemName":"Ring","quantity":2,"price":50000,...}]'  │
//! │                                                                         │
//! │  This keeps the invoice frozen as printed: renaming or re-pricing an   │
//! │  inventory item never rewrites historical bills.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals persist exactly as submitted; an inconsistent payload persists
//! an inconsistent bill by design (see `dukaan_core::billing`).

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use dukaan_core::{Bill, LineItem, TransactionType};

/// Row struct mirroring the `bills` table. Line items stay JSON here.
#[derive(Debug, sqlx::FromRow)]
struct BillRow {
    id: String,
    serial_no: String,
    date: DateTime<Utc>,
    customer_id: Option<String>,
    items: String,
    total_amount: Option<i64>,
    total_amount_without_tax: Option<i64>,
    tax_amount: Option<i64>,
    transaction_type: Option<TransactionType>,
    signature: Option<String>,
}

impl TryFrom<BillRow> for Bill {
    type Error = DbError;

    fn try_from(row: BillRow) -> Result<Self, Self::Error> {
        let items: Vec<LineItem> = serde_json::from_str(&row.items)?;

        Ok(Bill {
            id: row.id,
            serial_no: row.serial_no,
            date: row.date,
            customer_id: row.customer_id,
            items,
            total_amount: row.total_amount,
            total_amount_without_tax: row.total_amount_without_tax,
            tax_amount: row.tax_amount,
            transaction_type: row.transaction_type,
            signature: row.signature,
        })
    }
}

/// Repository for bill database operations.
#[derive(Debug, Clone)]
pub struct BillRepository {
    pool: SqlitePool,
}

impl BillRepository {
    /// Creates a new BillRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BillRepository { pool }
    }

    /// Lists all bills in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Bill>> {
        let rows = sqlx::query_as::<_, BillRow>(
            r#"
            SELECT id, serial_no, date, customer_id, items, total_amount,
                   total_amount_without_tax, tax_amount, transaction_type, signature
            FROM bills
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Bill::try_from).collect()
    }

    /// Gets a bill by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Bill>> {
        let row = sqlx::query_as::<_, BillRow>(
            r#"
            SELECT id, serial_no, date, customer_id, items, total_amount,
                   total_amount_without_tax, tax_amount, transaction_type, signature
            FROM bills
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Bill::try_from).transpose()
    }

    /// Inserts a new bill, serializing its line items to JSON.
    pub async fn insert(&self, bill: &Bill) -> DbResult<()> {
        debug!(id = %bill.id, serial_no = %bill.serial_no, "Inserting bill");

        let items_json = serde_json::to_string(&bill.items)?;

        sqlx::query(
            r#"
            INSERT INTO bills (
                id, serial_no, date, customer_id, items, total_amount,
                total_amount_without_tax, tax_amount, transaction_type, signature
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&bill.id)
        .bind(&bill.serial_no)
        .bind(bill.date)
        .bind(&bill.customer_id)
        .bind(items_json)
        .bind(bill.total_amount)
        .bind(bill.total_amount_without_tax)
        .bind(bill.tax_amount)
        .bind(bill.transaction_type)
        .bind(&bill.signature)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing bill (full-row replace).
    pub async fn update(&self, bill: &Bill) -> DbResult<()> {
        debug!(id = %bill.id, "Updating bill");

        let items_json = serde_json::to_string(&bill.items)?;

        let result = sqlx::query(
            r#"
            UPDATE bills SET
                serial_no = ?2,
                date = ?3,
                customer_id = ?4,
                items = ?5,
                total_amount = ?6,
                total_amount_without_tax = ?7,
                tax_amount = ?8,
                transaction_type = ?9,
                signature = ?10
            WHERE id = ?1
            "#,
        )
        .bind(&bill.id)
        .bind(&bill.serial_no)
        .bind(bill.date)
        .bind(&bill.customer_id)
        .bind(items_json)
        .bind(bill.total_amount)
        .bind(bill.total_amount_without_tax)
        .bind(bill.tax_amount)
        .bind(bill.transaction_type)
        .bind(&bill.signature)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Bill"));
        }

        Ok(())
    }

    /// Hard-deletes a bill by id.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting bill");

        let result = sqlx::query("DELETE FROM bills WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Bill"));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::repository::generate_id;

    fn ring_line() -> LineItem {
        LineItem {
            item_name: Some("Ring".to_string()),
            quantity: 2,
            price: 50000,
            quality: Some("22K".to_string()),
            description: None,
        }
    }

    fn sample_bill() -> Bill {
        Bill {
            id: generate_id(),
            serial_no: "B001".to_string(),
            date: Utc::now(),
            customer_id: None,
            items: vec![ring_line()],
            total_amount: Some(118000),
            total_amount_without_tax: Some(100000),
            tax_amount: Some(18000),
            transaction_type: Some(TransactionType::Cash),
            signature: None,
        }
    }

    #[tokio::test]
    async fn test_bill_roundtrip_preserves_line_items() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.bills();

        let bill = sample_bill();
        repo.insert(&bill).await.unwrap();

        let fetched = repo.get_by_id(&bill.id).await.unwrap().unwrap();
        assert_eq!(fetched.serial_no, "B001");
        assert_eq!(fetched.items.len(), 1);
        assert_eq!(fetched.items[0].item_name.as_deref(), Some("Ring"));
        assert_eq!(fetched.items[0].quantity, 2);
        assert_eq!(fetched.items[0].price, 50000);
    }

    /// The store persists whatever totals are submitted, even when they
    /// disagree with the line items. Consistency is the client's job.
    #[tokio::test]
    async fn test_inconsistent_totals_are_persisted_verbatim() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.bills();

        let mut bill = sample_bill();
        // Items say ₹1000.00 subtotal; the payload claims ₹5.00.
        bill.total_amount_without_tax = Some(500);
        bill.tax_amount = Some(1);
        bill.total_amount = Some(501);
        repo.insert(&bill).await.unwrap();

        let fetched = repo.get_by_id(&bill.id).await.unwrap().unwrap();
        assert_eq!(fetched.total_amount_without_tax, Some(500));
        assert_eq!(fetched.tax_amount, Some(1));
        assert_eq!(fetched.total_amount, Some(501));
    }

    #[tokio::test]
    async fn test_update_replaces_line_items() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.bills();

        let mut bill = sample_bill();
        repo.insert(&bill).await.unwrap();

        bill.items = vec![];
        bill.serial_no = "B002".to_string();
        repo.update(&bill).await.unwrap();

        let fetched = repo.get_by_id(&bill.id).await.unwrap().unwrap();
        assert_eq!(fetched.serial_no, "B002");
        assert!(fetched.items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db.bills().delete(&generate_id()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
