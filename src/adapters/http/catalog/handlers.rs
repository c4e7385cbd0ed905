//! HTTP handlers for inventory endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::catalog::{
    AdjustStockCommand, AdjustStockHandler, CreateProductCommand, CreateProductHandler,
    ListProductsHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ProductRepository;

use super::dto::{AdjustStockRequest, CreateProductRequest, ProductListResponse, ProductResponse};

/// Shared state for inventory endpoints.
#[derive(Clone)]
pub struct CatalogAppState {
    pub product_repository: Arc<dyn ProductRepository>,
}

impl CatalogAppState {
    pub fn create_handler(&self) -> CreateProductHandler {
        CreateProductHandler::new(self.product_repository.clone())
    }

    pub fn adjust_handler(&self) -> AdjustStockHandler {
        AdjustStockHandler::new(self.product_repository.clone())
    }

    pub fn list_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.product_repository.clone())
    }
}

/// POST /api/products - add a product
pub async fn create_product(
    State(state): State<CatalogAppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .create_handler()
        .handle(CreateProductCommand {
            name: request.name,
            price_cents: request.price_cents,
            stock: request.stock,
            low_stock_threshold: request.low_stock_threshold,
        })
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// GET /api/products - list the inventory
pub async fn list_products(
    State(state): State<CatalogAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.list_handler().handle().await?;
    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

/// POST /api/products/:id/stock - adjust stock
pub async fn adjust_stock(
    State(state): State<CatalogAppState>,
    Path(id): Path<String>,
    Json(request): Json<AdjustStockRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = id.parse().map_err(|_| {
        ApiError::from(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("'{}' is not a valid product id", id),
        ))
    })?;

    let product = state
        .adjust_handler()
        .handle(AdjustStockCommand {
            product_id,
            delta: request.delta,
        })
        .await?;

    Ok(Json(ProductResponse::from(product)))
}
