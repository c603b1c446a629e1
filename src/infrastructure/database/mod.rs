//! Database Module
//!
//! Data store contract, its PostgreSQL and in-memory implementations, and
//! the unit of work that stages changes between reads and `save`.

pub mod memory;
pub mod postgres;
pub mod unit_of_work;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{DatabaseSettings, StoreBackend};
use crate::domain::{Company, CompanyFilter, Employee, EmployeeFilter};
use crate::shared::error::AppError;

pub use memory::InMemoryDataStore;
pub use postgres::PgDataStore;
pub use unit_of_work::{Change, ChangeSet, UnitOfWork};

/// Storage backend shared by all requests.
///
/// Reads return committed data only, in no particular order. `commit`
/// applies a change set atomically: either every change lands or none does.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn find_companies(&self, filter: &CompanyFilter) -> Result<Vec<Company>, AppError>;

    async fn find_employees(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, AppError>;

    async fn commit(&self, changes: ChangeSet) -> Result<(), AppError>;

    /// Cheap connectivity check used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// Backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Create the data store selected by configuration.
pub async fn create_data_store(settings: &DatabaseSettings) -> anyhow::Result<Arc<dyn DataStore>> {
    match settings.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory data store; data is lost on restart");
            Ok(Arc::new(InMemoryDataStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = create_pool(settings).await?;
            tracing::info!("Database connection pool created");

            if settings.run_migrations {
                run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Ok(Arc::new(PgDataStore::new(pool)))
        }
    }
}
