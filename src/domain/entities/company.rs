//! Company entity and repository trait.
//!
//! Maps to the `companies` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a company.
///
/// Maps to the `companies` table:
/// - id: UUID PRIMARY KEY
/// - name: VARCHAR(60) NOT NULL
/// - address: VARCHAR(60) NOT NULL
/// - country: VARCHAR(60) NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Assigned by the repository when the company is staged for insert
    pub id: Uuid,

    pub name: String,

    pub address: String,

    pub country: String,
}

impl Company {
    /// Build a company that has not been persisted yet.
    pub fn new(name: impl Into<String>, address: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            address: address.into(),
            country: country.into(),
        }
    }

    /// Whether the repository has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_nil()
    }
}

/// Condition a company must satisfy to be returned by a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyFilter {
    All,
    Id(Uuid),
    Ids(Vec<Uuid>),
}

impl CompanyFilter {
    /// Evaluate the condition against an in-memory company.
    pub fn matches(&self, company: &Company) -> bool {
        match self {
            CompanyFilter::All => true,
            CompanyFilter::Id(id) => company.id == *id,
            CompanyFilter::Ids(ids) => ids.contains(&company.id),
        }
    }
}

/// Repository trait for Company data access operations.
///
/// Reads go to the data store immediately. `create_company` and
/// `delete_company` only stage the change; nothing reaches the store
/// until `RepositoryManager::save` is called.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find all companies matching `filter`.
    ///
    /// A tracked read also reflects changes staged in the current unit of work.
    async fn find_by_condition(
        &self,
        filter: CompanyFilter,
        track_changes: bool,
    ) -> Result<Vec<Company>, AppError>;

    /// Stage a company for insert, assigning its identifier.
    fn create_company(&self, company: &mut Company);

    /// Stage a company (and, by cascade, its employees) for removal.
    fn delete_company(&self, company: &Company);

    /// Find every company, in store order.
    async fn find_all(&self, track_changes: bool) -> Result<Vec<Company>, AppError> {
        self.find_by_condition(CompanyFilter::All, track_changes).await
    }

    /// All companies ordered by name.
    async fn get_all_companies(&self, track_changes: bool) -> Result<Vec<Company>, AppError> {
        let mut companies = self.find_all(track_changes).await?;
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    /// A single company by identifier.
    async fn get_company(&self, id: Uuid, track_changes: bool) -> Result<Option<Company>, AppError> {
        let companies = self
            .find_by_condition(CompanyFilter::Id(id), track_changes)
            .await?;
        Ok(companies.into_iter().next())
    }

    /// Every company whose identifier is in `ids`. Missing identifiers are skipped.
    async fn get_by_ids(&self, ids: &[Uuid], track_changes: bool) -> Result<Vec<Company>, AppError> {
        self.find_by_condition(CompanyFilter::Ids(ids.to_vec()), track_changes)
            .await
    }
}
