//! Employee Repository Implementation

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeFilter, EmployeeRepository};
use crate::infrastructure::database::{Change, DataStore, UnitOfWork};
use crate::shared::error::AppError;

/// Employee repository bound to one unit of work.
#[derive(Clone)]
pub struct EmployeeRepositoryImpl {
    store: Arc<dyn DataStore>,
    unit_of_work: UnitOfWork,
}

impl EmployeeRepositoryImpl {
    pub fn new(store: Arc<dyn DataStore>, unit_of_work: UnitOfWork) -> Self {
        Self { store, unit_of_work }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeRepositoryImpl {
    async fn find_by_condition(
        &self,
        filter: EmployeeFilter,
        track_changes: bool,
    ) -> Result<Vec<Employee>, AppError> {
        let employees = self.store.find_employees(&filter).await?;

        if track_changes {
            Ok(self.unit_of_work.snapshot().overlay_employees(employees, &filter))
        } else {
            Ok(employees)
        }
    }

    fn create_employee(&self, company_id: Uuid, employee: &mut Employee) {
        employee.id = Uuid::new_v4();
        employee.company_id = company_id;
        self.unit_of_work.stage(Change::InsertEmployee(employee.clone()));
    }

    fn delete_employee(&self, employee: &Employee) {
        self.unit_of_work.stage(Change::DeleteEmployee(employee.id));
    }
}
