//! Unit of Work Pattern Implementation
//!
//! Repositories stage inserts and deletes into a shared [`ChangeSet`]; the
//! repository manager hands the whole set to the data store on `save`,
//! which applies it inside a single transaction.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{Company, CompanyFilter, Employee, EmployeeFilter};

/// One staged mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    InsertCompany(Company),
    InsertEmployee(Employee),
    DeleteEmployee(uuid::Uuid),
    /// Cascades to the company's employees
    DeleteCompany(uuid::Uuid),
}

/// Ordered list of staged mutations, applied in staging order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Replay the staged changes over companies read from the store.
    pub fn overlay_companies(&self, mut companies: Vec<Company>, filter: &CompanyFilter) -> Vec<Company> {
        for change in &self.changes {
            match change {
                Change::InsertCompany(company) if filter.matches(company) => {
                    companies.push(company.clone());
                }
                Change::DeleteCompany(id) => companies.retain(|c| c.id != *id),
                _ => {}
            }
        }
        companies
    }

    /// Replay the staged changes over employees read from the store.
    pub fn overlay_employees(&self, mut employees: Vec<Employee>, filter: &EmployeeFilter) -> Vec<Employee> {
        for change in &self.changes {
            match change {
                Change::InsertEmployee(employee) if filter.matches(employee) => {
                    employees.push(employee.clone());
                }
                Change::DeleteEmployee(id) => employees.retain(|e| e.id != *id),
                Change::DeleteCompany(id) => employees.retain(|e| e.company_id != *id),
                _ => {}
            }
        }
        employees
    }
}

impl IntoIterator for ChangeSet {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

/// Change set shared by every repository of one request.
#[derive(Debug, Clone, Default)]
pub struct UnitOfWork {
    pending: Arc<Mutex<ChangeSet>>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a change.
    pub fn stage(&self, change: Change) {
        self.pending.lock().push(change);
    }

    /// Snapshot of the staged changes, for tracked reads.
    pub fn snapshot(&self) -> ChangeSet {
        self.pending.lock().clone()
    }

    /// Remove and return everything staged so far.
    pub fn take(&self) -> ChangeSet {
        std::mem::take(&mut *self.pending.lock())
    }

    pub fn has_changes(&self) -> bool {
        !self.pending.lock().is_empty()
    }
}
