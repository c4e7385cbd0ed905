//! PostgreSQL implementation of SaleRepository.
//!
//! A sale spans two tables: the `sales` header and its `sale_lines`.
//! Both are written in one transaction so a sale never appears without
//! its lines.

use crate::domain::foundation::{DomainError, ProductId, SaleId, Timestamp};
use crate::domain::sales::{Sale, SaleLine};
use crate::ports::SaleRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_err;

/// PostgreSQL implementation of the SaleRepository port.
pub struct PostgresSaleRepository {
    pool: PgPool,
}

impl PostgresSaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: Uuid,
    total_cents: i64,
    sold_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct SaleLineRow {
    sale_id: Uuid,
    product_id: Uuid,
    product_name: String,
    unit_price_cents: i64,
    quantity: i32,
}

#[async_trait]
impl SaleRepository for PostgresSaleRepository {
    async fn save(&self, sale: &Sale) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;

        sqlx::query("INSERT INTO sales (id, total_cents, sold_at) VALUES ($1, $2, $3)")
            .bind(sale.id.as_uuid())
            .bind(sale.total_cents)
            .bind(sale.sold_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;

        for line in &sale.lines {
            sqlx::query(
                r#"
                INSERT INTO sale_lines (sale_id, product_id, product_name, unit_price_cents, quantity)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(sale.id.as_uuid())
            .bind(line.product_id.as_uuid())
            .bind(&line.product_name)
            .bind(line.unit_price_cents)
            .bind(line.quantity as i32)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn list_on(&self, date: NaiveDate) -> Result<Vec<Sale>, DomainError> {
        let headers: Vec<SaleRow> = sqlx::query_as(
            "SELECT id, total_cents, sold_at FROM sales \
             WHERE sold_at >= $1 AND sold_at < $1 + INTERVAL '1 day' \
             ORDER BY sold_at DESC",
        )
        .bind(date.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = headers.iter().map(|h| h.id).collect();
        let lines: Vec<SaleLineRow> = sqlx::query_as(
            "SELECT sale_id, product_id, product_name, unit_price_cents, quantity \
             FROM sale_lines WHERE sale_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(headers
            .into_iter()
            .map(|header| {
                let sale_lines = lines
                    .iter()
                    .filter(|l| l.sale_id == header.id)
                    .map(|l| SaleLine {
                        product_id: ProductId::from_uuid(l.product_id),
                        product_name: l.product_name.clone(),
                        unit_price_cents: l.unit_price_cents,
                        quantity: l.quantity.max(0) as u32,
                    })
                    .collect();
                Sale {
                    id: SaleId::from_uuid(header.id),
                    lines: sale_lines,
                    total_cents: header.total_cents,
                    sold_at: Timestamp::from_datetime(header.sold_at),
                }
            })
            .collect())
    }
}
