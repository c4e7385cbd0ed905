//! Sale repository port.
//!
//! Sales are append-only like entry records: recorded once, read for
//! reporting, never amended.

use crate::domain::foundation::DomainError;
use crate::domain::sales::Sale;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository port for point-of-sale transactions.
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Record one sale with its lines.
    async fn save(&self, sale: &Sale) -> Result<(), DomainError>;

    /// List sales recorded on the given calendar date (UTC), newest
    /// first.
    async fn list_on(&self, date: NaiveDate) -> Result<Vec<Sale>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SaleRepository) {}
    }
}
