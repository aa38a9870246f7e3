//! # Transaction Repository
//!
//! Database operations for single-item sale transactions.
//!
//! The three monetary columns persist exactly what the client submitted;
//! there is no recomputation or consistency check here (see
//! `dukaan_core::billing` for the trust model).

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use dukaan_core::{Transaction, TransactionType};

/// Row struct mirroring the `transactions` table.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: String,
    transaction_type: TransactionType,
    total_amount_without_tax: Option<i64>,
    tax_amount: Option<i64>,
    total_amount: Option<i64>,
    date: DateTime<Utc>,
    customer_id: Option<String>,
    item_id: Option<String>,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Transaction {
            id: row.id,
            transaction_type: row.transaction_type,
            total_amount_without_tax: row.total_amount_without_tax,
            tax_amount: row.tax_amount,
            total_amount: row.total_amount,
            date: row.date,
            customer_id: row.customer_id,
            item_id: row.item_id,
        }
    }
}

/// Repository for transaction database operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Lists all transactions in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, transaction_type, total_amount_without_tax, tax_amount,
                   total_amount, date, customer_id, item_id
            FROM transactions
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    /// Gets a transaction by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, transaction_type, total_amount_without_tax, tax_amount,
                   total_amount, date, customer_id, item_id
            FROM transactions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Transaction::from))
    }

    /// Inserts a new transaction.
    pub async fn insert(&self, tx: &Transaction) -> DbResult<()> {
        debug!(id = %tx.id, "Inserting transaction");

        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, transaction_type, total_amount_without_tax, tax_amount,
                total_amount, date, customer_id, item_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&tx.id)
        .bind(tx.transaction_type)
        .bind(tx.total_amount_without_tax)
        .bind(tx.tax_amount)
        .bind(tx.total_amount)
        .bind(tx.date)
        .bind(&tx.customer_id)
        .bind(&tx.item_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing transaction (full-row replace).
    pub async fn update(&self, tx: &Transaction) -> DbResult<()> {
        debug!(id = %tx.id, "Updating transaction");

        let result = sqlx::query(
            r#"
            UPDATE transactions SET
                transaction_type = ?2,
                total_amount_without_tax = ?3,
                tax_amount = ?4,
                total_amount = ?5,
                date = ?6,
                customer_id = ?7,
                item_id = ?8
            WHERE id = ?1
            "#,
        )
        .bind(&tx.id)
        .bind(tx.transaction_type)
        .bind(tx.total_amount_without_tax)
        .bind(tx.tax_amount)
        .bind(tx.total_amount)
        .bind(tx.date)
        .bind(&tx.customer_id)
        .bind(&tx.item_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Transaction"));
        }

        Ok(())
    }

    /// Hard-deletes a transaction by id.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting transaction");

        let result = sqlx::query("DELETE FROM transactions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Transaction"));
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

    fn sample_tx() -> Transaction {
        Transaction {
            id: generate_id(),
            transaction_type: TransactionType::Banking,
            total_amount_without_tax: Some(100000),
            tax_amount: Some(18000),
            total_amount: Some(118000),
            date: Utc::now(),
            customer_id: None,
            item_id: None,
        }
    }

    #[tokio::test]
    async fn test_transaction_roundtrip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.transactions();

        let tx = sample_tx();
        repo.insert(&tx).await.unwrap();

        let fetched = repo.get_by_id(&tx.id).await.unwrap().unwrap();
        assert_eq!(fetched.transaction_type, TransactionType::Banking);
        assert_eq!(fetched.total_amount, Some(118000));
        assert_eq!(fetched.tax_amount, Some(18000));
    }

    #[tokio::test]
    async fn test_transaction_without_totals() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.transactions();

        let mut tx = sample_tx();
        tx.total_amount_without_tax = None;
        tx.tax_amount = None;
        tx.total_amount = None;
        repo.insert(&tx).await.unwrap();

        let fetched = repo.get_by_id(&tx.id).await.unwrap().unwrap();
        assert!(fetched.total_amount.is_none());
        assert_eq!(fetched.total().paise(), 0);
    }
}
