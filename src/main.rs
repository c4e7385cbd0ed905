//! Gymbase server binary.
//!
//! Loads configuration, connects the store, wires every area's state
//! over the shared pool and clock, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gymbase::adapters::clock::SystemClock;
use gymbase::adapters::http::catalog::{catalog_routes, CatalogAppState};
use gymbase::adapters::http::checkin::{checkin_routes, CheckInAppState};
use gymbase::adapters::http::dashboard::{dashboard_routes, DashboardAppState};
use gymbase::adapters::http::exercises::{exercises_routes, ExercisesAppState};
use gymbase::adapters::http::members::{members_routes, MembersAppState};
use gymbase::adapters::http::sales::{sales_routes, SalesAppState};
use gymbase::adapters::http::subscriptions::{
    plans_routes, subscriptions_routes, SubscriptionsAppState,
};
use gymbase::adapters::postgres::{
    PostgresDashboardReader, PostgresEntryRepository, PostgresExerciseRepository,
    PostgresMemberRepository, PostgresPlanRepository, PostgresProductRepository,
    PostgresRosterReader, PostgresSaleRepository, PostgresSubscriptionRepository,
};
use gymbase::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let clock = Arc::new(SystemClock::new());

    let member_repository = Arc::new(PostgresMemberRepository::new(pool.clone()));
    let plan_repository = Arc::new(PostgresPlanRepository::new(pool.clone()));
    let subscription_repository = Arc::new(PostgresSubscriptionRepository::new(pool.clone()));
    let roster_reader = Arc::new(PostgresRosterReader::new(pool.clone()));
    let entry_repository = Arc::new(PostgresEntryRepository::new(pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pool.clone()));
    let sale_repository = Arc::new(PostgresSaleRepository::new(pool.clone()));
    let exercise_repository = Arc::new(PostgresExerciseRepository::new(pool.clone()));
    let dashboard_reader = Arc::new(PostgresDashboardReader::new(pool));

    let checkin_state = CheckInAppState {
        roster_reader: roster_reader.clone(),
        entry_repository,
        clock: clock.clone(),
    };
    let members_state = MembersAppState {
        member_repository: member_repository.clone(),
    };
    let subscriptions_state = SubscriptionsAppState {
        member_repository,
        plan_repository,
        subscription_repository,
        roster_reader,
        clock: clock.clone(),
    };
    let catalog_state = CatalogAppState {
        product_repository: product_repository.clone(),
    };
    let sales_state = SalesAppState {
        product_repository,
        sale_repository,
        clock: clock.clone(),
    };
    let exercises_state = ExercisesAppState {
        exercise_repository,
    };
    let dashboard_state = DashboardAppState {
        dashboard_reader,
        clock,
    };

    let api = Router::new()
        .nest("/checkin", checkin_routes().with_state(checkin_state))
        .nest("/members", members_routes().with_state(members_state))
        .nest(
            "/subscriptions",
            subscriptions_routes().with_state(subscriptions_state.clone()),
        )
        .nest("/plans", plans_routes().with_state(subscriptions_state))
        .nest("/products", catalog_routes().with_state(catalog_state))
        .nest("/sales", sales_routes().with_state(sales_state))
        .nest("/exercises", exercises_routes().with_state(exercises_state))
        .nest("/dashboard", dashboard_routes().with_state(dashboard_state));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    info!(%addr, "gymbase listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins: Vec<axum::http::HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
