//! Employee entity and repository trait.
//!
//! Maps to the `employees` table. Employees are only ever looked up in
//! the context of their owning company.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents an employee of a company.
///
/// Maps to the `employees` table:
/// - id: UUID PRIMARY KEY
/// - name: VARCHAR(30) NOT NULL
/// - age: INTEGER NOT NULL
/// - position: VARCHAR(20) NOT NULL
/// - company_id: UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,

    pub name: String,

    pub age: i32,

    pub position: String,

    /// Owning company; set when the employee is staged for insert
    pub company_id: Uuid,
}

impl Employee {
    /// Build an employee that has not been persisted yet.
    pub fn new(name: impl Into<String>, age: i32, position: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            age,
            position: position.into(),
            company_id: Uuid::nil(),
        }
    }
}

/// Condition an employee must satisfy to be returned by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    /// Every employee of a company
    Company(Uuid),
    /// One employee, only if it belongs to the company
    CompanyAndId { company_id: Uuid, id: Uuid },
}

impl EmployeeFilter {
    /// Evaluate the condition against an in-memory employee.
    pub fn matches(&self, employee: &Employee) -> bool {
        match *self {
            EmployeeFilter::Company(company_id) => employee.company_id == company_id,
            EmployeeFilter::CompanyAndId { company_id, id } => {
                employee.company_id == company_id && employee.id == id
            }
        }
    }
}

/// Repository trait for Employee data access operations.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find all employees matching `filter`.
    async fn find_by_condition(
        &self,
        filter: EmployeeFilter,
        track_changes: bool,
    ) -> Result<Vec<Employee>, AppError>;

    /// Stage an employee for insert under `company_id`, assigning its identifier.
    fn create_employee(&self, company_id: Uuid, employee: &mut Employee);

    /// Stage an employee for removal.
    fn delete_employee(&self, employee: &Employee);

    /// Employees of a company ordered by name.
    async fn get_employees(
        &self,
        company_id: Uuid,
        track_changes: bool,
    ) -> Result<Vec<Employee>, AppError> {
        let mut employees = self
            .find_by_condition(EmployeeFilter::Company(company_id), track_changes)
            .await?;
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    /// A single employee of a company.
    async fn get_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Option<Employee>, AppError> {
        let employees = self
            .find_by_condition(EmployeeFilter::CompanyAndId { company_id, id }, track_changes)
            .await?;
        Ok(employees.into_iter().next())
    }
}
