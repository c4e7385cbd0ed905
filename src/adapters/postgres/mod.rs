//! PostgreSQL adapters - sqlx implementations of the store ports.

mod dashboard_reader;
mod entry_repository;
mod exercise_repository;
mod member_repository;
mod plan_repository;
mod product_repository;
mod roster_reader;
mod sale_repository;
mod subscription_repository;

pub use dashboard_reader::PostgresDashboardReader;
pub use entry_repository::PostgresEntryRepository;
pub use exercise_repository::PostgresExerciseRepository;
pub use member_repository::PostgresMemberRepository;
pub use plan_repository::PostgresPlanRepository;
pub use product_repository::PostgresProductRepository;
pub use roster_reader::PostgresRosterReader;
pub use sale_repository::PostgresSaleRepository;
pub use subscription_repository::PostgresSubscriptionRepository;

use crate::domain::foundation::DomainError;

/// Maps any sqlx failure to a DatabaseError; callers never see driver
/// types.
pub(crate) fn map_sqlx_err(err: sqlx::Error) -> DomainError {
    DomainError::database(err.to_string())
}
