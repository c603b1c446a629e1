//! Repository manager facade.

use async_trait::async_trait;

use super::entities::{CompanyRepository, EmployeeRepository};
use crate::shared::error::AppError;

/// Groups the per-entity repositories of one unit of work.
///
/// Changes staged through either repository are held until `save`
/// commits them together. Callers must call `save` after every mutation.
#[async_trait]
pub trait RepositoryManager: Send + Sync {
    fn company(&self) -> &dyn CompanyRepository;

    fn employee(&self) -> &dyn EmployeeRepository;

    /// Commit every staged change atomically.
    async fn save(&self) -> Result<(), AppError>;
}
