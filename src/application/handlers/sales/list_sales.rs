//! ListDailySalesHandler - today's transactions for the sales page.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::sales::Sale;
use crate::ports::{Clock, SaleRepository};

/// Today's sales plus their running total.
#[derive(Debug, Clone)]
pub struct DailySales {
    pub sales: Vec<Sale>,
    pub total_cents: i64,
}

/// Handler listing today's sales.
pub struct ListDailySalesHandler {
    sales: Arc<dyn SaleRepository>,
    clock: Arc<dyn Clock>,
}

impl ListDailySalesHandler {
    pub fn new(sales: Arc<dyn SaleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sales, clock }
    }

    pub async fn handle(&self) -> Result<DailySales, DomainError> {
        let today = self.clock.now().date();
        let sales = self.sales.list_on(today).await?;
        let total_cents = sales.iter().map(|s| s.total_cents).sum();
        Ok(DailySales { sales, total_cents })
    }
}
