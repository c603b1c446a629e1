//! In-Memory Data Store
//!
//! Process-local implementation of [`DataStore`] for development and tests.
//! Enforces the same foreign-key and cascade rules as the SQL schema.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{Change, ChangeSet, DataStore};
use crate::domain::{Company, CompanyFilter, Employee, EmployeeFilter};
use crate::shared::error::AppError;

#[derive(Debug, Default, Clone)]
struct Tables {
    companies: Vec<Company>,
    employees: Vec<Employee>,
}

impl Tables {
    fn apply(&mut self, change: Change) -> Result<(), AppError> {
        match change {
            Change::InsertCompany(company) => {
                if !company.is_persisted() {
                    return Err(AppError::Internal(format!(
                        "company {:?} was never assigned an identifier",
                        company.name
                    )));
                }
                if self.companies.iter().any(|c| c.id == company.id) {
                    return Err(AppError::Internal(format!(
                        "duplicate key: company {}",
                        company.id
                    )));
                }
                self.companies.push(company);
            }
            Change::InsertEmployee(employee) => {
                if !self.companies.iter().any(|c| c.id == employee.company_id) {
                    return Err(AppError::Internal(format!(
                        "foreign key violation: company {} does not exist",
                        employee.company_id
                    )));
                }
                if self.employees.iter().any(|e| e.id == employee.id) {
                    return Err(AppError::Internal(format!(
                        "duplicate key: employee {}",
                        employee.id
                    )));
                }
                self.employees.push(employee);
            }
            Change::DeleteEmployee(id) => self.employees.retain(|e| e.id != id),
            Change::DeleteCompany(id) => {
                self.companies.retain(|c| c.id != id);
                self.employees.retain(|e| e.company_id != id);
            }
        }
        Ok(())
    }
}

/// Thread-safe in-memory data store.
#[derive(Clone, Default)]
pub struct InMemoryDataStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with companies and their employees.
    pub fn with_data(companies: Vec<Company>, employees: Vec<Employee>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                companies,
                employees,
            })),
        }
    }

    pub fn company_count(&self) -> usize {
        self.tables.read().companies.len()
    }

    pub fn employee_count(&self) -> usize {
        self.tables.read().employees.len()
    }
}

#[async_trait]
impl DataStore for InMemoryDataStore {
    async fn find_companies(&self, filter: &CompanyFilter) -> Result<Vec<Company>, AppError> {
        let tables = self.tables.read();
        Ok(tables
            .companies
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn find_employees(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, AppError> {
        let tables = self.tables.read();
        Ok(tables
            .employees
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn commit(&self, changes: ChangeSet) -> Result<(), AppError> {
        let mut tables = self.tables.write();

        // Apply to a copy so a failing change leaves the store untouched
        let mut staged = tables.clone();
        for change in changes {
            staged.apply(change)?;
        }
        *tables = staged;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
