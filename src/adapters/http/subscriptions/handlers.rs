//! HTTP handlers for subscription and plan endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::subscription::{
    CreatePlanCommand, CreatePlanHandler, CreateSubscriptionCommand, CreateSubscriptionHandler,
    GetRosterHandler, ListPlansHandler, RenewSubscriptionCommand, RenewSubscriptionHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{Clock, MemberRepository, PlanRepository, RosterReader, SubscriptionRepository};

use super::dto::{
    CreatePlanRequest, CreateSubscriptionRequest, PlanListResponse, PlanResponse,
    RenewSubscriptionRequest, RosterResponse, RosterRowResponse, SubscriptionResponse,
};

/// Shared state for subscription endpoints.
#[derive(Clone)]
pub struct SubscriptionsAppState {
    pub member_repository: Arc<dyn MemberRepository>,
    pub plan_repository: Arc<dyn PlanRepository>,
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
    pub roster_reader: Arc<dyn RosterReader>,
    pub clock: Arc<dyn Clock>,
}

impl SubscriptionsAppState {
    pub fn create_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(
            self.member_repository.clone(),
            self.plan_repository.clone(),
            self.subscription_repository.clone(),
            self.clock.clone(),
        )
    }

    pub fn renew_handler(&self) -> RenewSubscriptionHandler {
        RenewSubscriptionHandler::new(
            self.plan_repository.clone(),
            self.subscription_repository.clone(),
            self.clock.clone(),
        )
    }

    pub fn roster_handler(&self) -> GetRosterHandler {
        GetRosterHandler::new(self.roster_reader.clone(), self.clock.clone())
    }

    pub fn create_plan_handler(&self) -> CreatePlanHandler {
        CreatePlanHandler::new(self.plan_repository.clone())
    }

    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.plan_repository.clone())
    }
}

fn invalid_id(raw: &str, what: &str) -> ApiError {
    ApiError::from(DomainError::new(
        ErrorCode::InvalidFormat,
        format!("'{}' is not a valid {} id", raw, what),
    ))
}

/// POST /api/subscriptions - start a subscription
pub async fn create_subscription(
    State(state): State<SubscriptionsAppState>,
    Json(request): Json<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = request
        .member_id
        .parse()
        .map_err(|_| invalid_id(&request.member_id, "member"))?;
    let plan_id = request
        .plan_id
        .parse()
        .map_err(|_| invalid_id(&request.plan_id, "plan"))?;

    let subscription = state
        .create_handler()
        .handle(CreateSubscriptionCommand {
            member_id,
            plan_id,
            start_date: request.start_date,
        })
        .await?;

    Ok(Json(SubscriptionResponse::from(subscription)))
}

/// POST /api/subscriptions/:id/renew - renew a subscription
pub async fn renew_subscription(
    State(state): State<SubscriptionsAppState>,
    Path(id): Path<String>,
    Json(request): Json<RenewSubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let subscription_id = id.parse().map_err(|_| invalid_id(&id, "subscription"))?;
    let plan_id = match request.plan_id {
        Some(raw) => Some(raw.parse().map_err(|_| invalid_id(&raw, "plan"))?),
        None => None,
    };

    let subscription = state
        .renew_handler()
        .handle(RenewSubscriptionCommand {
            subscription_id,
            plan_id,
        })
        .await?;

    Ok(Json(SubscriptionResponse::from(subscription)))
}

/// GET /api/subscriptions - the members-with-subscriptions roster
pub async fn get_roster(
    State(state): State<SubscriptionsAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.roster_handler().handle().await?;
    Ok(Json(RosterResponse {
        roster: rows.into_iter().map(RosterRowResponse::from).collect(),
    }))
}

/// POST /api/plans - create a plan
pub async fn create_plan(
    State(state): State<SubscriptionsAppState>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let plan = state
        .create_plan_handler()
        .handle(CreatePlanCommand {
            name: request.name,
            price_cents: request.price_cents,
            entry_allowance: request.entry_allowance,
            duration_days: request.duration_days,
        })
        .await?;

    Ok(Json(PlanResponse::from(plan)))
}

/// GET /api/plans - list plans
pub async fn list_plans(
    State(state): State<SubscriptionsAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let plans = state.list_plans_handler().handle().await?;
    Ok(Json(PlanListResponse {
        plans: plans.into_iter().map(PlanResponse::from).collect(),
    }))
}
