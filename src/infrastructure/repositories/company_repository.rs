//! Company Repository Implementation
//!
//! Reads through the configured data store; stages writes into the
//! request's unit of work.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Company, CompanyFilter, CompanyRepository};
use crate::infrastructure::database::{Change, DataStore, UnitOfWork};
use crate::shared::error::AppError;

/// Company repository bound to one unit of work.
#[derive(Clone)]
pub struct CompanyRepositoryImpl {
    store: Arc<dyn DataStore>,
    unit_of_work: UnitOfWork,
}

impl CompanyRepositoryImpl {
    pub fn new(store: Arc<dyn DataStore>, unit_of_work: UnitOfWork) -> Self {
        Self { store, unit_of_work }
    }
}

#[async_trait]
impl CompanyRepository for CompanyRepositoryImpl {
    async fn find_by_condition(
        &self,
        filter: CompanyFilter,
        track_changes: bool,
    ) -> Result<Vec<Company>, AppError> {
        let companies = self.store.find_companies(&filter).await?;

        if track_changes {
            Ok(self.unit_of_work.snapshot().overlay_companies(companies, &filter))
        } else {
            Ok(companies)
        }
    }

    fn create_company(&self, company: &mut Company) {
        company.id = Uuid::new_v4();
        self.unit_of_work.stage(Change::InsertCompany(company.clone()));
    }

    fn delete_company(&self, company: &Company) {
        self.unit_of_work.stage(Change::DeleteCompany(company.id));
    }
}
