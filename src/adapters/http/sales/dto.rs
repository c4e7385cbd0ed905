//! HTTP DTOs for point-of-sale endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::sales::DailySales;
use crate::domain::sales::{Sale, SaleLine};

/// One requested line of a sale.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Request to record a sale.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSaleRequest {
    pub items: Vec<SaleItemRequest>,
}

/// One line of a recorded sale.
#[derive(Debug, Clone, Serialize)]
pub struct SaleLineResponse {
    pub product_id: String,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub total_cents: i64,
}

impl From<&SaleLine> for SaleLineResponse {
    fn from(line: &SaleLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            product_name: line.product_name.clone(),
            unit_price_cents: line.unit_price_cents,
            quantity: line.quantity,
            total_cents: line.total_cents(),
        }
    }
}

/// Sale details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SaleResponse {
    pub id: String,
    pub lines: Vec<SaleLineResponse>,
    pub total_cents: i64,
    pub sold_at: String,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id.to_string(),
            lines: sale.lines.iter().map(SaleLineResponse::from).collect(),
            total_cents: sale.total_cents,
            sold_at: sale.sold_at.to_rfc3339(),
        }
    }
}

/// Today's sales with their running total.
#[derive(Debug, Clone, Serialize)]
pub struct DailySalesResponse {
    pub sales: Vec<SaleResponse>,
    pub total_cents: i64,
}

impl From<DailySales> for DailySalesResponse {
    fn from(daily: DailySales) -> Self {
        Self {
            sales: daily.sales.into_iter().map(SaleResponse::from).collect(),
            total_cents: daily.total_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_request_deserializes_items() {
        let json = r#"{"items": [{"product_id": "p", "quantity": 2}]}"#;
        let request: RecordSaleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].quantity, 2);
    }
}
