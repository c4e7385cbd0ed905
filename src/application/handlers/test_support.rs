//! Shared in-memory mock ports for handler tests.
//!
//! Kept out of the compiled crate; each mock is a plain Vec behind a
//! Mutex with the same semantics the postgres adapters guarantee.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::catalog::Product;
use crate::domain::exercise::Exercise;
use crate::domain::foundation::{
    DomainError, ErrorCode, ExerciseId, MemberId, PlanId, ProductId, SubscriptionId,
};
use crate::domain::member::{Member, MemberCode};
use crate::domain::sales::Sale;
use crate::domain::subscription::{Plan, Subscription};
use crate::ports::{
    ExerciseRepository, MemberRepository, PlanRepository, ProductRepository, SaleRepository,
    SubscriptionRepository,
};

pub struct MockMemberRepository {
    members: Mutex<Vec<Member>>,
}

impl MockMemberRepository {
    pub fn with(members: Vec<Member>) -> Self {
        Self {
            members: Mutex::new(members),
        }
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), DomainError> {
        self.members.lock().unwrap().push(member.clone());
        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self.members.lock().unwrap();
        match members.iter().position(|m| m.id == member.id) {
            Some(pos) => {
                members[pos] = member.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            )),
        }
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.id == id)
            .cloned())
    }

    async fn find_by_code(&self, code: &MemberCode) -> Result<Option<Member>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.code == code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.members.lock().unwrap().clone())
    }

    async fn delete(&self, id: &MemberId) -> Result<(), DomainError> {
        self.members.lock().unwrap().retain(|m| &m.id != id);
        Ok(())
    }
}

pub struct MockPlanRepository {
    plans: Mutex<Vec<Plan>>,
}

impl MockPlanRepository {
    pub fn with(plans: Vec<Plan>) -> Self {
        Self {
            plans: Mutex::new(plans),
        }
    }
}

#[async_trait]
impl PlanRepository for MockPlanRepository {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        self.plans.lock().unwrap().push(plan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        Ok(self.plans.lock().unwrap().clone())
    }
}

pub struct MockSubscriptionRepository {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    pub fn seed(&self, subscription: Subscription) {
        self.subscriptions.lock().unwrap().push(subscription);
    }

    pub fn stored(&self) -> Vec<Subscription> {
        self.subscriptions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.subscriptions.lock().unwrap().push(subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        match subscriptions.iter().position(|s| s.id == subscription.id) {
            Some(pos) => {
                subscriptions[pos] = subscription.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            )),
        }
    }

    async fn find_by_id(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.id == id)
            .cloned())
    }

    async fn find_current_by_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| &s.member_id == member_id)
            .max_by_key(|s| s.end_date)
            .cloned())
    }

    async fn list_for_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Vec<Subscription>, DomainError> {
        let mut subs: Vec<_> = self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| &s.member_id == member_id)
            .cloned()
            .collect();
        subs.sort_by_key(|s| std::cmp::Reverse(s.start_date));
        Ok(subs)
    }
}

pub struct MockProductRepository {
    products: Mutex<Vec<Product>>,
}

impl MockProductRepository {
    pub fn with(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn save(&self, product: &Product) -> Result<(), DomainError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.products.lock().unwrap();
        match products.iter().position(|p| p.id == product.id) {
            Some(pos) => {
                products[pos] = product.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProductNotFound,
                "Product not found",
            )),
        }
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.get(id))
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.lock().unwrap().clone())
    }
}

pub struct MockSaleRepository {
    sales: Mutex<Vec<Sale>>,
}

impl MockSaleRepository {
    pub fn new() -> Self {
        Self {
            sales: Mutex::new(Vec::new()),
        }
    }

    pub fn seed(&self, sale: Sale) {
        self.sales.lock().unwrap().push(sale);
    }

    pub fn stored(&self) -> Vec<Sale> {
        self.sales.lock().unwrap().clone()
    }
}

#[async_trait]
impl SaleRepository for MockSaleRepository {
    async fn save(&self, sale: &Sale) -> Result<(), DomainError> {
        self.sales.lock().unwrap().push(sale.clone());
        Ok(())
    }

    async fn list_on(&self, date: NaiveDate) -> Result<Vec<Sale>, DomainError> {
        Ok(self
            .sales
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.sold_at.date() == date)
            .cloned()
            .collect())
    }
}

pub struct MockExerciseRepository {
    exercises: Mutex<Vec<Exercise>>,
}

impl MockExerciseRepository {
    pub fn new() -> Self {
        Self {
            exercises: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ExerciseRepository for MockExerciseRepository {
    async fn save(&self, exercise: &Exercise) -> Result<(), DomainError> {
        self.exercises.lock().unwrap().push(exercise.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DomainError> {
        Ok(self
            .exercises
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        Ok(self.exercises.lock().unwrap().clone())
    }

    async fn delete(&self, id: &ExerciseId) -> Result<(), DomainError> {
        let mut exercises = self.exercises.lock().unwrap();
        match exercises.iter().position(|e| &e.id == id) {
            Some(pos) => {
                exercises.remove(pos);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ExerciseNotFound,
                "Exercise not found",
            )),
        }
    }
}
