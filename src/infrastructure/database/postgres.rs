//! PostgreSQL Data Store
//!
//! Maps between the database schema and the domain entities, and applies
//! change sets inside a single transaction.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::{Change, ChangeSet, DataStore};
use crate::domain::{Company, CompanyFilter, Employee, EmployeeFilter};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Database row representation of the companies table.
#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    name: String,
    address: String,
    country: String,
}

impl CompanyRow {
    fn into_company(self) -> Company {
        Company {
            id: self.id,
            name: self.name,
            address: self.address,
            country: self.country,
        }
    }
}

/// Database row representation of the employees table.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    name: String,
    age: i32,
    position: String,
    company_id: Uuid,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            name: self.name,
            age: self.age,
            position: self.position,
            company_id: self.company_id,
        }
    }
}

/// PostgreSQL data store.
#[derive(Clone)]
pub struct PgDataStore {
    pool: PgPool,
}

impl PgDataStore {
    /// Create a new PgDataStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn apply(tx: &mut Transaction<'static, Postgres>, change: Change) -> Result<(), sqlx::Error> {
        match change {
            Change::InsertCompany(company) => {
                sqlx::query(
                    "INSERT INTO companies (id, name, address, country) VALUES ($1, $2, $3, $4)",
                )
                .bind(company.id)
                .bind(&company.name)
                .bind(&company.address)
                .bind(&company.country)
                .execute(&mut **tx)
                .await?;
            }
            Change::InsertEmployee(employee) => {
                sqlx::query(
                    r#"
                    INSERT INTO employees (id, name, age, position, company_id)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(employee.id)
                .bind(&employee.name)
                .bind(employee.age)
                .bind(&employee.position)
                .bind(employee.company_id)
                .execute(&mut **tx)
                .await?;
            }
            Change::DeleteEmployee(id) => {
                sqlx::query("DELETE FROM employees WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;
            }
            // employees.company_id is ON DELETE CASCADE
            Change::DeleteCompany(id) => {
                sqlx::query("DELETE FROM companies WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DataStore for PgDataStore {
    async fn find_companies(&self, filter: &CompanyFilter) -> Result<Vec<Company>, AppError> {
        const SELECT: &str = "SELECT id, name, address, country FROM companies";
        let start = Instant::now();

        let rows = match filter {
            CompanyFilter::All => {
                sqlx::query_as::<_, CompanyRow>(SELECT)
                    .fetch_all(&self.pool)
                    .await?
            }
            CompanyFilter::Id(id) => {
                sqlx::query_as::<_, CompanyRow>(&format!("{SELECT} WHERE id = $1"))
                    .bind(*id)
                    .fetch_all(&self.pool)
                    .await?
            }
            CompanyFilter::Ids(ids) => {
                sqlx::query_as::<_, CompanyRow>(&format!("{SELECT} WHERE id = ANY($1)"))
                    .bind(&ids[..])
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        metrics::record_db_query("select", "companies", start.elapsed().as_secs_f64());
        Ok(rows.into_iter().map(CompanyRow::into_company).collect())
    }

    async fn find_employees(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, AppError> {
        const SELECT: &str = "SELECT id, name, age, position, company_id FROM employees";
        let start = Instant::now();

        let rows = match *filter {
            EmployeeFilter::Company(company_id) => {
                sqlx::query_as::<_, EmployeeRow>(&format!("{SELECT} WHERE company_id = $1"))
                    .bind(company_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            EmployeeFilter::CompanyAndId { company_id, id } => {
                sqlx::query_as::<_, EmployeeRow>(&format!(
                    "{SELECT} WHERE company_id = $1 AND id = $2"
                ))
                .bind(company_id)
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        metrics::record_db_query("select", "employees", start.elapsed().as_secs_f64());
        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }

    async fn commit(&self, changes: ChangeSet) -> Result<(), AppError> {
        let start = Instant::now();
        let count = changes.len();

        let mut tx = self.pool.begin().await?;
        for change in changes {
            // Dropping `tx` on error rolls the transaction back
            Self::apply(&mut tx, change).await?;
        }
        tx.commit().await?;

        metrics::record_db_query("commit", "unit_of_work", start.elapsed().as_secs_f64());
        tracing::debug!(changes = count, "Committed unit of work");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        metrics::update_db_pool_stats(
            self.pool.num_idle() as u32,
            self.pool.size().saturating_sub(self.pool.num_idle() as u32),
            self.pool.options().get_max_connections(),
        );
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
