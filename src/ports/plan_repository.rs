//! Plan repository port.

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::subscription::Plan;
use async_trait::async_trait;

/// Repository port for subscription plan persistence.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Save a new plan.
    async fn save(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Find a plan by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// List all plans.
    async fn list(&self) -> Result<Vec<Plan>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PlanRepository) {}
    }
}
