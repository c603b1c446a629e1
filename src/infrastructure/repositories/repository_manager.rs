//! Repository Manager
//!
//! One instance per request. Both repositories share the manager's unit
//! of work, so a single `save` commits everything they staged.

use std::sync::Arc;

use async_trait::async_trait;

use super::{CompanyRepositoryImpl, EmployeeRepositoryImpl};
use crate::domain::{CompanyRepository, EmployeeRepository, RepositoryManager};
use crate::infrastructure::database::{DataStore, UnitOfWork};
use crate::shared::error::AppError;

pub struct RepositoryManagerImpl {
    store: Arc<dyn DataStore>,
    unit_of_work: UnitOfWork,
    company: CompanyRepositoryImpl,
    employee: EmployeeRepositoryImpl,
}

impl RepositoryManagerImpl {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        let unit_of_work = UnitOfWork::new();
        Self {
            company: CompanyRepositoryImpl::new(store.clone(), unit_of_work.clone()),
            employee: EmployeeRepositoryImpl::new(store.clone(), unit_of_work.clone()),
            store,
            unit_of_work,
        }
    }
}

#[async_trait]
impl RepositoryManager for RepositoryManagerImpl {
    fn company(&self) -> &dyn CompanyRepository {
        &self.company
    }

    fn employee(&self) -> &dyn EmployeeRepository {
        &self.employee
    }

    async fn save(&self) -> Result<(), AppError> {
        if !self.unit_of_work.has_changes() {
            return Ok(());
        }

        let changes = self.unit_of_work.take();
        let count = changes.len();
        self.store.commit(changes).await?;
        tracing::debug!(backend = self.store.backend(), changes = count, "Saved changes");
        Ok(())
    }
}
