//! Data Transfer Objects
//!
//! DTOs for API request/response serialization, and the mapping between
//! them and the domain entities.

pub mod request;
pub mod response;

pub use request::{CreateCompaniesRequest, CreateCompanyRequest, CreateEmployeeRequest};
pub use response::{CompanyResponse, EmployeeResponse};
