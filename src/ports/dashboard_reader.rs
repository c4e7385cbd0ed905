//! Dashboard reader port (read side).

use crate::domain::dashboard::DashboardOverview;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Reader port for the dashboard card counters.
///
/// `today` is passed in rather than read inside the adapter so the
/// counters agree with the caller's notion of the current date.
#[async_trait]
pub trait DashboardReader: Send + Sync {
    /// Compute the overview counters as of the given date.
    async fn overview(&self, today: NaiveDate) -> Result<DashboardOverview, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn DashboardReader) {}
    }
}
