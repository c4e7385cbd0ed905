//! PostgreSQL implementation of ProductRepository.

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId, Timestamp};
use crate::ports::ProductRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_err;

/// PostgreSQL implementation of the ProductRepository port.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price_cents: i64,
    stock: i32,
    low_stock_threshold: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            price_cents: row.price_cents,
            stock: row.stock,
            low_stock_threshold: row.low_stock_threshold,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(&self, product: &Product) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, price_cents, stock, low_stock_threshold, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(product.low_stock_threshold)
        .bind(product.created_at.as_datetime())
        .bind(product.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price_cents = $3, stock = $4, low_stock_threshold = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(product.low_stock_threshold)
        .bind(product.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("No product with id {}", product.id),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, name, price_cents, stock, low_stock_threshold, created_at, updated_at \
             FROM products WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(row.map(Product::from))
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, price_cents, stock, low_stock_threshold, created_at, updated_at \
             FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
