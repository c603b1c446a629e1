//! # Domain Entities
//!
//! - **Company**: a company with a name and postal address
//! - **Employee**: a person employed by exactly one company
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer.

mod company;
mod employee;

pub use company::{Company, CompanyFilter, CompanyRepository};
pub use employee::{Employee, EmployeeFilter, EmployeeRepository};
