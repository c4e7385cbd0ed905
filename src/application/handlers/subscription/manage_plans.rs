//! CreatePlanHandler / ListPlansHandler - plan catalog operations.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::subscription::Plan;
use crate::ports::PlanRepository;

/// Command to create a plan.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub name: String,
    pub price_cents: i64,
    pub entry_allowance: Option<u32>,
    pub duration_days: u32,
}

/// Handler for plan creation.
pub struct CreatePlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl CreatePlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<Plan, DomainError> {
        let plan = Plan::new(
            PlanId::new(),
            cmd.name,
            cmd.price_cents,
            cmd.entry_allowance,
            cmd.duration_days,
        )?;
        self.plans.save(&plan).await?;
        Ok(plan)
    }
}

/// Handler listing all plans.
pub struct ListPlansHandler {
    plans: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self) -> Result<Vec<Plan>, DomainError> {
        self.plans.list().await
    }
}
