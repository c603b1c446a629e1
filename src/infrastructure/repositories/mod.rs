//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits. Each
//! repository is backend-agnostic: reads go through a [`DataStore`] and
//! writes are staged into a [`UnitOfWork`] until the manager saves.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use company_employees::domain::RepositoryManager;
//! use company_employees::infrastructure::repositories::RepositoryManagerImpl;
//!
//! let repository = RepositoryManagerImpl::new(store.clone());
//! let mut company = Company::new("Acme", "1 Main St", "US");
//! repository.company().create_company(&mut company);
//! repository.save().await?;
//! ```
//!
//! [`DataStore`]: crate::infrastructure::database::DataStore
//! [`UnitOfWork`]: crate::infrastructure::database::UnitOfWork

pub mod company_repository;
pub mod employee_repository;
pub mod repository_manager;

pub use company_repository::CompanyRepositoryImpl;
pub use employee_repository::EmployeeRepositoryImpl;
pub use repository_manager::RepositoryManagerImpl;
