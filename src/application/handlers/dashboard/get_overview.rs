//! GetOverviewHandler - Query handler for the dashboard cards.

use std::sync::Arc;

use crate::domain::dashboard::DashboardOverview;
use crate::domain::foundation::DomainError;
use crate::ports::{Clock, DashboardReader};

/// Handler computing the dashboard overview for today.
pub struct GetOverviewHandler {
    reader: Arc<dyn DashboardReader>,
    clock: Arc<dyn Clock>,
}

impl GetOverviewHandler {
    pub fn new(reader: Arc<dyn DashboardReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(&self) -> Result<DashboardOverview, DomainError> {
        let today = self.clock.local_now().date();
        self.reader.overview(today).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct StubReader {
        asked_for: Mutex<Option<NaiveDate>>,
    }

    #[async_trait]
    impl DashboardReader for StubReader {
        async fn overview(&self, today: NaiveDate) -> Result<DashboardOverview, DomainError> {
            *self.asked_for.lock().unwrap() = Some(today);
            Ok(DashboardOverview {
                active_members: 42,
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn passes_the_clocks_local_date_to_the_reader() {
        let reader = Arc::new(StubReader {
            asked_for: Mutex::new(None),
        });
        let clock = Arc::new(FixedClock::at(
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        ));

        let handler = GetOverviewHandler::new(reader.clone(), clock);
        let overview = handler.handle().await.unwrap();

        assert_eq!(overview.active_members, 42);
        assert_eq!(
            *reader.asked_for.lock().unwrap(),
            Some(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        );
    }
}
