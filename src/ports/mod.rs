//! Ports - the contracts between the application core and the outside.
//!
//! Repository and reader traits for the Membership Store, plus the
//! injected clock. Adapters implement these; handlers depend only on the
//! trait objects.

mod clock;
mod dashboard_reader;
mod entry_repository;
mod exercise_repository;
mod member_repository;
mod plan_repository;
mod product_repository;
mod roster_reader;
mod sale_repository;
mod subscription_repository;

pub use clock::Clock;
pub use dashboard_reader::DashboardReader;
pub use entry_repository::EntryRepository;
pub use exercise_repository::ExerciseRepository;
pub use member_repository::MemberRepository;
pub use plan_repository::PlanRepository;
pub use product_repository::ProductRepository;
pub use roster_reader::RosterReader;
pub use sale_repository::SaleRepository;
pub use subscription_repository::SubscriptionRepository;
