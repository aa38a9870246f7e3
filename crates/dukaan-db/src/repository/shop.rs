//! # Shop Repository
//!
//! Database operations for shops.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use dukaan_core::Shop;

/// Row struct mirroring the `shops` table.
///
/// Kept separate from the wire-facing [`Shop`] so column naming and
/// decoding stay a database concern.
#[derive(Debug, sqlx::FromRow)]
struct ShopRow {
    id: String,
    name: String,
    phone: Option<String>,
    address: Option<String>,
}

impl From<ShopRow> for Shop {
    fn from(row: ShopRow) -> Self {
        Shop {
            id: row.id,
            name: row.name,
            phone: row.phone,
            address: row.address,
        }
    }
}

/// Repository for shop database operations.
#[derive(Debug, Clone)]
pub struct ShopRepository {
    pool: SqlitePool,
}

impl ShopRepository {
    /// Creates a new ShopRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ShopRepository { pool }
    }

    /// Lists all shops in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Shop>> {
        let rows = sqlx::query_as::<_, ShopRow>(
            r#"
            SELECT id, name, phone, address
            FROM shops
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Shop::from).collect())
    }

    /// Gets a shop by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Shop))` - Shop found
    /// * `Ok(None)` - Shop not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Shop>> {
        let row = sqlx::query_as::<_, ShopRow>(
            r#"
            SELECT id, name, phone, address
            FROM shops
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Shop::from))
    }

    /// Inserts a new shop.
    ///
    /// The caller assigns the id (see [`super::generate_id`]).
    pub async fn insert(&self, shop: &Shop) -> DbResult<()> {
        debug!(id = %shop.id, name = %shop.name, "Inserting shop");

        sqlx::query(
            r#"
            INSERT INTO shops (id, name, phone, address)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&shop.id)
        .bind(&shop.name)
        .bind(&shop.phone)
        .bind(&shop.address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing shop (full-row replace).
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Shop doesn't exist
    pub async fn update(&self, shop: &Shop) -> DbResult<()> {
        debug!(id = %shop.id, "Updating shop");

        let result = sqlx::query(
            r#"
            UPDATE shops SET name = ?2, phone = ?3, address = ?4
            WHERE id = ?1
            "#,
        )
        .bind(&shop.id)
        .bind(&shop.name)
        .bind(&shop.phone)
        .bind(&shop.address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Shop"));
        }

        Ok(())
    }

    /// Hard-deletes a shop by id.
    ///
    /// Customers referencing this shop are untouched; their reference
    /// dangles and resolves to null at read time.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting shop");

        let result = sqlx::query("DELETE FROM shops WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Shop"));
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

    fn sample_shop() -> Shop {
        Shop {
            id: generate_id(),
            name: "Gold House".to_string(),
            phone: Some("9876543210".to_string()),
            address: Some("MG Road".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.shops();

        let shop = sample_shop();
        repo.insert(&shop).await.unwrap();

        let fetched = repo.get_by_id(&shop.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Gold House");
        assert_eq!(fetched.phone.as_deref(), Some("9876543210"));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let found = db.shops().get_by_id(&generate_id()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.shops();

        let mut first = sample_shop();
        first.name = "First".to_string();
        let mut second = sample_shop();
        second.name = "Second".to_string();

        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let shops = repo.list().await.unwrap();
        assert_eq!(shops.len(), 2);
        assert_eq!(shops[0].name, "First");
        assert_eq!(shops[1].name, "Second");
    }

    #[tokio::test]
    async fn test_update() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.shops();

        let mut shop = sample_shop();
        repo.insert(&shop).await.unwrap();

        shop.name = "Silver House".to_string();
        shop.phone = None;
        repo.update(&shop).await.unwrap();

        let fetched = repo.get_by_id(&shop.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Silver House");
        assert!(fetched.phone.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db.shops().update(&sample_shop()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.shops();

        let shop = sample_shop();
        repo.insert(&shop).await.unwrap();
        repo.delete(&shop.id).await.unwrap();

        assert!(repo.get_by_id(&shop.id).await.unwrap().is_none());

        let err = repo.delete(&shop.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
