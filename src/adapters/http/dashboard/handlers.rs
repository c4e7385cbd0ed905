//! HTTP handlers for the dashboard endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::dashboard::GetOverviewHandler;
use crate::ports::{Clock, DashboardReader};

use super::dto::OverviewResponse;

/// Shared state for the dashboard endpoint.
#[derive(Clone)]
pub struct DashboardAppState {
    pub dashboard_reader: Arc<dyn DashboardReader>,
    pub clock: Arc<dyn Clock>,
}

impl DashboardAppState {
    pub fn overview_handler(&self) -> GetOverviewHandler {
        GetOverviewHandler::new(self.dashboard_reader.clone(), self.clock.clone())
    }
}

/// GET /api/dashboard - the card counters
pub async fn get_overview(
    State(state): State<DashboardAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let overview = state.overview_handler().handle().await?;
    Ok(Json(OverviewResponse::from(overview)))
}
