//! HTTP handlers for point-of-sale endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::sales::{
    ListDailySalesHandler, RecordSaleCommand, RecordSaleHandler, SaleItem,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{Clock, ProductRepository, SaleRepository};

use super::dto::{DailySalesResponse, RecordSaleRequest, SaleResponse};

/// Shared state for point-of-sale endpoints.
#[derive(Clone)]
pub struct SalesAppState {
    pub product_repository: Arc<dyn ProductRepository>,
    pub sale_repository: Arc<dyn SaleRepository>,
    pub clock: Arc<dyn Clock>,
}

impl SalesAppState {
    pub fn record_handler(&self) -> RecordSaleHandler {
        RecordSaleHandler::new(
            self.product_repository.clone(),
            self.sale_repository.clone(),
            self.clock.clone(),
        )
    }

    pub fn daily_handler(&self) -> ListDailySalesHandler {
        ListDailySalesHandler::new(self.sale_repository.clone(), self.clock.clone())
    }
}

/// POST /api/sales - record a sale
pub async fn record_sale(
    State(state): State<SalesAppState>,
    Json(request): Json<RecordSaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut items = Vec::with_capacity(request.items.len());
    for item in request.items {
        let product_id = item.product_id.parse().map_err(|_| {
            ApiError::from(DomainError::new(
                ErrorCode::InvalidFormat,
                format!("'{}' is not a valid product id", item.product_id),
            ))
        })?;
        items.push(SaleItem {
            product_id,
            quantity: item.quantity,
        });
    }

    let sale = state.record_handler().handle(RecordSaleCommand { items }).await?;
    Ok(Json(SaleResponse::from(sale)))
}

/// GET /api/sales/today - today's sales and running total
pub async fn list_today_sales(
    State(state): State<SalesAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let daily = state.daily_handler().handle().await?;
    Ok(Json(DailySalesResponse::from(daily)))
}
